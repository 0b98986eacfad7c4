use game_core::systems::{geometry_views, GeometryView};
use game_core::{
    spawn_level_geometry, step, Config, Events, GameEvent, LevelSet, Session, StepError, Time,
};
use hecs::World;
use serde::Serialize;

use crate::input::{handle_key_down, handle_key_up, parse_level};

/// Text and flags the page shows around the playfield
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub player_x: f32,
    pub player_y: f32,
    pub score: String,
    pub time: String,
    pub level: String,
    pub background: Option<String>,
    pub menu_visible: bool,
}

/// An event plus the notice text the page should show for it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventView {
    #[serde(flatten)]
    pub event: GameEvent,
    pub message: Option<&'static str>,
}

impl From<GameEvent> for EventView {
    fn from(event: GameEvent) -> Self {
        Self {
            event,
            message: event.message(),
        }
    }
}

/// One browser-side session: geometry, player state, and pending events
pub struct LocalGame {
    pub world: World,
    pub session: Session,
    pub config: Config,
    pub levels: LevelSet,
    pub events: Events,
}

impl LocalGame {
    pub fn new(config: Config) -> Self {
        Self::with_levels(config, LevelSet::standard())
    }

    pub fn with_levels(config: Config, levels: LevelSet) -> Self {
        let mut world = World::new();
        spawn_level_geometry(&mut world, &levels);

        // Start on the menu with level 1 shown
        let mut session = Session::new(&config);
        session.reset(&mut world, &config);

        Self {
            world,
            session,
            config,
            levels,
            events: Events::new(),
        }
    }

    pub fn key_down(&mut self, code: &str) {
        handle_key_down(&mut self.session, code);
    }

    pub fn key_up(&mut self, code: &str) {
        handle_key_up(&mut self.session, code);
    }

    /// Level button pressed; malformed or unknown ids leave the game untouched
    pub fn select_level(&mut self, raw: &str) -> bool {
        let Some(level) = parse_level(raw) else {
            tracing::warn!(raw, "ignoring non-numeric level selection");
            return false;
        };

        match self
            .session
            .select_level(&mut self.world, &self.levels, &self.config, level)
        {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(%err, "ignoring level selection");
                false
            }
        }
    }

    /// Animation-frame callback
    pub fn frame(&mut self, now_ms: f64) -> Result<(), StepError> {
        let result = step(
            &mut self.world,
            &mut self.session,
            &self.levels,
            &self.config,
            &Time::new(now_ms),
            &mut self.events,
        );
        if let Err(err) = &result {
            tracing::error!(%err, "frame aborted");
        }
        result
    }

    /// One-second interval callback
    pub fn second_elapsed(&mut self) {
        self.session.tick_timer();
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    pub fn hud(&self) -> Hud {
        Hud {
            player_x: self.session.player.pos.x,
            player_y: self.session.player.pos.y,
            score: self.session.score.text(),
            time: self.session.timer.text(),
            level: self.session.level_text(&self.levels),
            background: self
                .levels
                .background(self.session.level)
                .map(str::to_string),
            menu_visible: self.session.menu_visible(),
        }
    }

    pub fn geometry(&self) -> Vec<GeometryView> {
        geometry_views(&self.world)
    }

    pub fn drain_events_json(&mut self) -> serde_json::Result<String> {
        let views: Vec<EventView> = self
            .drain_events()
            .into_iter()
            .map(EventView::from)
            .collect();
        serde_json::to_string(&views)
    }

    pub fn hud_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.hud())
    }

    pub fn geometry_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.geometry())
    }
}

impl Default for LocalGame {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
