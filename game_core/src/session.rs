use hecs::World;

use crate::components::Player;
use crate::config::Config;
use crate::error::SessionError;
use crate::fsm::{FsmState, GameAction, GameFsm};
use crate::map::{LevelId, LevelSet};
use crate::resources::{Events, GameEvent, InputState, Key, Score, Timer};
use crate::systems::activate_level;

/// Everything mutable about one play session apart from the geometry world
#[derive(Debug, Clone)]
pub struct Session {
    pub player: Player,
    pub level: LevelId,
    pub score: Score,
    pub timer: Timer,
    pub input: InputState,
    fsm: GameFsm,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            player: Player::new(config.player_spawn),
            level: LevelId::FIRST,
            score: Score::new(),
            timer: Timer::new(),
            input: InputState::new(),
            fsm: GameFsm::new(),
        }
    }

    pub fn state(&self) -> FsmState {
        self.fsm.state()
    }

    /// True while the player loop runs
    pub fn running(&self) -> bool {
        self.fsm.is_playing()
    }

    pub fn menu_visible(&self) -> bool {
        self.fsm.is_menu()
    }

    pub fn key_down(&mut self, key: Key) {
        self.input.press(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.input.release(key);
    }

    /// One-second interval callback
    pub fn tick_timer(&mut self) {
        self.timer.tick();
    }

    /// Back to the menu on level 1 with score and timer zeroed
    pub fn reset(&mut self, world: &mut World, config: &Config) {
        self.level = LevelId::FIRST;
        activate_level(world, self.level);
        self.player.reset(config.player_spawn);
        self.timer.reset();
        self.score.reset();
        self.fsm.transition(GameAction::Reset);
    }

    /// Start (or restart) play on `level`, from the menu or mid-play
    pub fn select_level(
        &mut self,
        world: &mut World,
        levels: &LevelSet,
        config: &Config,
        level: u8,
    ) -> Result<(), SessionError> {
        let id = LevelId(level);
        if !levels.contains(id) {
            return Err(SessionError::UnknownLevel(level));
        }

        self.reset(world, config);
        self.level = id;
        activate_level(world, id);
        self.fsm.transition(GameAction::SelectLevel);
        self.timer.start();
        tracing::info!(level = id.0, name = levels.name(id), "level started");
        Ok(())
    }

    /// Hazard contact: notify, then full reset
    pub(crate) fn hit_hazard(&mut self, world: &mut World, config: &Config, events: &mut Events) {
        tracing::info!(level = self.level.0, "hazard hit, restarting");
        events.push(GameEvent::HazardHit { level: self.level });
        self.fsm.transition(GameAction::HazardHit);
        self.reset(world, config);
    }

    /// Goal contact: advance, or finish the game when no next level exists
    ///
    /// The player keeps position and velocity across the advance.
    pub(crate) fn complete_level(
        &mut self,
        world: &mut World,
        levels: &LevelSet,
        config: &Config,
        events: &mut Events,
    ) {
        let finished = self.level;
        events.push(GameEvent::LevelComplete { level: finished });
        self.fsm.transition(GameAction::GoalReached);

        let next = finished.next();
        if !levels.contains(next) {
            self.fsm.transition(GameAction::LastLevelCleared);
            events.push(GameEvent::GameComplete);
            tracing::info!(
                score = self.score.points,
                seconds = self.timer.seconds,
                "game complete"
            );
            self.reset(world, config);
        } else {
            self.level = next;
            activate_level(world, self.level);
            self.fsm.transition(GameAction::NextLevelLoaded);
            tracing::info!(from = finished.0, to = self.level.0, "level complete");
        }
    }

    /// Indicator text, e.g. "Level 1: The Dawn"
    pub fn level_text(&self, levels: &LevelSet) -> String {
        format!("Level {}: {}", self.level, levels.name(self.level))
    }
}
