use serde::{Deserialize, Serialize};

use crate::map::LevelId;

/// Wall-clock time handed in by the host for this frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Time {
    pub now_ms: f64, // absolute milliseconds, not game time
}

impl Time {
    pub fn new(now_ms: f64) -> Self {
        Self { now_ms }
    }
}

/// Player score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub points: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }

    pub fn reset(&mut self) {
        self.points = 0;
    }

    pub fn text(&self) -> String {
        format!("Score: {}", self.points)
    }
}

/// Elapsed whole seconds, advanced by the host's one-second interval
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    pub seconds: u32,
    pub running: bool,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.seconds = 0;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and zero
    pub fn reset(&mut self) {
        self.stop();
        self.seconds = 0;
    }

    /// One interval elapsed; ignored while stopped
    pub fn tick(&mut self) {
        if self.running {
            self.seconds = self.seconds.saturating_add(1);
        }
    }

    pub fn text(&self) -> String {
        format!("Time: {}", self.seconds)
    }
}

/// Physical keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    KeyA,
    KeyD,
    KeyW,
}

impl Key {
    /// Map a DOM `KeyboardEvent.code`; untracked codes return None
    pub fn from_code(code: &str) -> Option<Key> {
        match code {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowUp" => Some(Key::ArrowUp),
            "KeyA" => Some(Key::KeyA),
            "KeyD" => Some(Key::KeyD),
            "KeyW" => Some(Key::KeyW),
            _ => None,
        }
    }
}

/// Held-key snapshot, updated by discrete key events and read once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub arrow_left: bool,
    pub arrow_right: bool,
    pub arrow_up: bool,
    pub key_a: bool,
    pub key_d: bool,
    pub key_w: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: Key, held: bool) {
        let slot = match key {
            Key::ArrowLeft => &mut self.arrow_left,
            Key::ArrowRight => &mut self.arrow_right,
            Key::ArrowUp => &mut self.arrow_up,
            Key::KeyA => &mut self.key_a,
            Key::KeyD => &mut self.key_d,
            Key::KeyW => &mut self.key_w,
        };
        *slot = held;
    }

    pub fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.set(key, false);
    }

    pub fn left(&self) -> bool {
        self.arrow_left || self.key_a
    }

    pub fn right(&self) -> bool {
        self.arrow_right || self.key_d
    }

    pub fn jump(&self) -> bool {
        self.arrow_up || self.key_w
    }
}

/// Notification raised by a tick for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    CollectiblePicked { level: LevelId, score: u32 },
    HazardHit { level: LevelId },
    LevelComplete { level: LevelId },
    GameComplete,
}

impl GameEvent {
    /// Text shown to the player, if this event warrants a notice
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GameEvent::CollectiblePicked { .. } => None,
            GameEvent::HazardHit { .. } => Some("You hit a hazard! Restarting level..."),
            GameEvent::LevelComplete { .. } => Some("Level Completed!"),
            GameEvent::GameComplete => Some("Congratulations! You finished the game!"),
        }
    }
}

/// Events that occurred since the host last drained them
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub list: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.list.push(event);
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.list)
    }

    pub fn contains(&self, event: &GameEvent) -> bool {
        self.list.contains(event)
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_add_and_text() {
        let mut score = Score::new();
        score.add(10);
        score.add(10);
        assert_eq!(score.points, 20);
        assert_eq!(score.text(), "Score: 20");
        score.reset();
        assert_eq!(score.text(), "Score: 0");
    }

    #[test]
    fn test_timer_only_counts_while_running() {
        let mut timer = Timer::new();
        timer.tick();
        assert_eq!(timer.seconds, 0, "stopped timer ignores ticks");

        timer.start();
        timer.tick();
        timer.tick();
        assert_eq!(timer.seconds, 2);
        assert_eq!(timer.text(), "Time: 2");

        timer.reset();
        timer.tick();
        assert_eq!(timer.seconds, 0);
        assert!(!timer.running);
    }

    #[test]
    fn test_key_codes() {
        assert_eq!(Key::from_code("ArrowLeft"), Some(Key::ArrowLeft));
        assert_eq!(Key::from_code("KeyW"), Some(Key::KeyW));
        assert_eq!(Key::from_code("Space"), None);
        assert_eq!(Key::from_code("keyw"), None, "codes are case sensitive");
    }

    #[test]
    fn test_aliases_are_not_additive() {
        let mut input = InputState::new();
        input.press(Key::ArrowLeft);
        input.press(Key::KeyA);
        assert!(input.left());
        input.release(Key::ArrowLeft);
        assert!(input.left(), "KeyA still held");
        input.release(Key::KeyA);
        assert!(!input.left());
    }

    #[test]
    fn test_release_only_affects_that_key() {
        let mut input = InputState::new();
        input.press(Key::ArrowUp);
        input.press(Key::KeyD);
        input.release(Key::ArrowUp);
        assert!(!input.jump());
        assert!(input.right());
    }

    #[test]
    fn test_event_messages_are_distinct() {
        let hazard = GameEvent::HazardHit { level: LevelId(1) }.message();
        let level = GameEvent::LevelComplete { level: LevelId(1) }.message();
        let game = GameEvent::GameComplete.message();
        assert_eq!(hazard, Some("You hit a hazard! Restarting level..."));
        assert_eq!(level, Some("Level Completed!"));
        assert_eq!(game, Some("Congratulations! You finished the game!"));
        assert_eq!(
            GameEvent::CollectiblePicked { level: LevelId(1), score: 10 }.message(),
            None
        );
    }

    #[test]
    fn test_events_drain_empties_queue() {
        let mut events = Events::new();
        events.push(GameEvent::GameComplete);
        assert!(events.contains(&GameEvent::GameComplete));
        assert_eq!(events.drain(), vec![GameEvent::GameComplete]);
        assert!(events.is_empty());
    }
}
