//! Session State Machine
//!
//! Menu, play, and the momentary level-transition / game-complete states.

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FsmState {
    #[default]
    MenuIdle,
    Playing,
    LevelTransition,
    GameComplete,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    SelectLevel,
    GoalReached,
    NextLevelLoaded,
    LastLevelCleared,
    HazardHit,
    Reset,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: FsmState,
    pub to_state: FsmState,
    pub action: GameAction,
}

/// Session Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::MenuIdle,
        }
    }

    /// Get current state
    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            tracing::debug!(?from_state, ?next_state, ?action, "fsm transition");
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            tracing::debug!(?from_state, ?action, "fsm transition rejected");
            TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            }
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            // Reset is accepted everywhere
            (_, GameAction::Reset) => Some(FsmState::MenuIdle),

            // From MenuIdle
            (FsmState::MenuIdle, GameAction::SelectLevel) => Some(FsmState::Playing),

            // From Playing
            (FsmState::Playing, GameAction::SelectLevel) => Some(FsmState::Playing),
            (FsmState::Playing, GameAction::GoalReached) => Some(FsmState::LevelTransition),
            (FsmState::Playing, GameAction::HazardHit) => Some(FsmState::MenuIdle),

            // From LevelTransition
            (FsmState::LevelTransition, GameAction::NextLevelLoaded) => Some(FsmState::Playing),
            (FsmState::LevelTransition, GameAction::LastLevelCleared) => {
                Some(FsmState::GameComplete)
            }

            // Invalid transition
            _ => None,
        }
    }

    /// Check if the player loop should run
    pub fn is_playing(&self) -> bool {
        self.state == FsmState::Playing
    }

    /// Check if the level menu should be shown
    pub fn is_menu(&self) -> bool {
        self.state == FsmState::MenuIdle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), FsmState::MenuIdle);
        assert!(fsm.is_menu());
        assert!(!fsm.is_playing());
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::SelectLevel);
        assert!(result.success);
        assert_eq!(result.from_state, FsmState::MenuIdle);
        assert_eq!(fsm.state(), FsmState::Playing);
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::GoalReached);
        assert!(!result.success);
        assert_eq!(fsm.state(), FsmState::MenuIdle);
        assert!(!fsm.can_transition(GameAction::HazardHit));
    }

    #[test]
    fn test_level_advance_flow() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::SelectLevel);
        fsm.transition(GameAction::GoalReached);
        assert_eq!(fsm.state(), FsmState::LevelTransition);
        fsm.transition(GameAction::NextLevelLoaded);
        assert_eq!(fsm.state(), FsmState::Playing);
    }

    #[test]
    fn test_game_complete_flow() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::SelectLevel);
        fsm.transition(GameAction::GoalReached);
        fsm.transition(GameAction::LastLevelCleared);
        assert_eq!(fsm.state(), FsmState::GameComplete);
        assert!(!fsm.can_transition(GameAction::SelectLevel));
        fsm.transition(GameAction::Reset);
        assert_eq!(fsm.state(), FsmState::MenuIdle);
    }

    #[test]
    fn test_hazard_returns_to_menu() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::SelectLevel);
        let result = fsm.transition(GameAction::HazardHit);
        assert!(result.success);
        assert_eq!(fsm.state(), FsmState::MenuIdle);
    }

    #[test]
    fn test_select_level_mid_play() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::SelectLevel);
        assert!(fsm.transition(GameAction::SelectLevel).success);
        assert!(fsm.is_playing());
    }
}
