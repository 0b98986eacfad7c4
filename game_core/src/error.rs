use thiserror::Error;

use crate::map::LevelId;

/// Failure that aborts a single tick
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepError {
    #[error("no goal found for level {level}")]
    MissingGoal { level: LevelId },
}

/// Rejected session operation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown level {0}")]
    UnknownLevel(u8),
}
