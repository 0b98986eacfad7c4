//! Keyboard and level-select input handling

use game_core::{Key, Session};

/// Handle key down event; returns false for keys the game ignores
pub fn handle_key_down(session: &mut Session, code: &str) -> bool {
    match Key::from_code(code) {
        Some(key) => {
            session.key_down(key);
            true
        }
        None => false,
    }
}

/// Handle key up event
pub fn handle_key_up(session: &mut Session, code: &str) -> bool {
    match Key::from_code(code) {
        Some(key) => {
            session.key_up(key);
            true
        }
        None => false,
    }
}

/// Parse a level button's `data-level` value
pub fn parse_level(raw: &str) -> Option<u8> {
    raw.trim().parse().ok()
}

/// Extract the physical key code from a keyboard event
#[cfg(target_arch = "wasm32")]
pub fn get_code_from_event(event: &web_sys::KeyboardEvent) -> String {
    event.code()
}
