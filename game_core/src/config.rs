use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player_spawn: Vec2,
    pub player_size: Vec2,
    pub move_speed: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub gravity_zone_lift: f32,
    pub collectible_value: u32,
    pub oscillation_period_ms: f64,
    pub oscillation_amplitude: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_spawn: Vec2::new(Params::PLAYER_SPAWN_X, Params::PLAYER_SPAWN_Y),
            player_size: Vec2::new(Params::PLAYER_WIDTH, Params::PLAYER_HEIGHT),
            move_speed: Params::MOVE_SPEED,
            jump_velocity: Params::JUMP_VELOCITY,
            gravity: Params::GRAVITY,
            gravity_zone_lift: Params::GRAVITY_ZONE_LIFT,
            collectible_value: Params::COLLECTIBLE_VALUE,
            oscillation_period_ms: Params::OSCILLATION_PERIOD_MS,
            oscillation_amplitude: Params::OSCILLATION_AMPLITUDE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Vertical offset applied to a moving platform at wall-clock `now_ms`
    pub fn oscillation_offset(&self, now_ms: f64) -> f32 {
        (now_ms / self.oscillation_period_ms).sin() as f32 * self.oscillation_amplitude
    }
}
