//! WebAssembly host for the platformer
//!
//! The page owns the DOM, the animation-frame loop, and the one-second
//! interval; it forwards those callbacks here and reads back positions,
//! HUD text, geometry visibility, and events as JSON.

pub mod input;
pub mod logging;
pub mod simulation;

pub use simulation::{EventView, Hud, LocalGame};

#[cfg(target_arch = "wasm32")]
use game_core::Config;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::KeyboardEvent;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    logging::init();
}

/// Handle held by the page for one game
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub struct Platformer {
    game: LocalGame,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl Platformer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            game: LocalGame::default(),
        }
    }

    /// Build with a JSON config override (missing fields use defaults)
    pub fn with_config(json: &str) -> Result<Platformer, JsValue> {
        let config = Config::from_json(json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;
        Ok(Self {
            game: LocalGame::new(config),
        })
    }

    pub fn on_key_down(&mut self, event: &KeyboardEvent) {
        self.game.key_down(&input::get_code_from_event(event));
    }

    pub fn on_key_up(&mut self, event: &KeyboardEvent) {
        self.game.key_up(&input::get_code_from_event(event));
    }

    /// Level button clicked with its `data-level` value
    pub fn select_level(&mut self, level: &str) -> bool {
        self.game.select_level(level)
    }

    /// Call from requestAnimationFrame
    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.game
            .frame(js_sys::Date::now())
            .map_err(|e| JsValue::from_str(&format!("Frame failed: {}", e)))
    }

    /// Call from a 1000 ms setInterval
    pub fn second_elapsed(&mut self) {
        self.game.second_elapsed();
    }

    #[wasm_bindgen(getter)]
    pub fn player_x(&self) -> f32 {
        self.game.session.player.pos.x
    }

    #[wasm_bindgen(getter)]
    pub fn player_y(&self) -> f32 {
        self.game.session.player.pos.y
    }

    #[wasm_bindgen(getter)]
    pub fn menu_visible(&self) -> bool {
        self.game.session.menu_visible()
    }

    pub fn hud(&self) -> Result<String, JsValue> {
        self.game
            .hud_json()
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize hud: {}", e)))
    }

    pub fn geometry(&self) -> Result<String, JsValue> {
        self.game
            .geometry_json()
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize geometry: {}", e)))
    }

    /// Events since the last call; the page shows each `message` as a notice
    pub fn drain_events(&mut self) -> Result<String, JsValue> {
        self.game
            .drain_events_json()
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize events: {}", e)))
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for Platformer {
    fn default() -> Self {
        Self::new()
    }
}
