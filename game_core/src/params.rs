/// Game tuning parameters for the platformer
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Player
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 400.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const MOVE_SPEED: f32 = 5.0; // px per tick per held direction
    pub const JUMP_VELOCITY: f32 = -10.0; // negative = up

    // Physics (per tick, no dt scaling)
    pub const GRAVITY: f32 = 0.5;
    pub const GRAVITY_ZONE_LIFT: f32 = 0.5; // subtracted per overlapping zone

    // Scoring
    pub const COLLECTIBLE_VALUE: u32 = 10;

    // Moving platforms: y = base + sin(now_ms / PERIOD) * AMPLITUDE
    pub const OSCILLATION_PERIOD_MS: f64 = 500.0;
    pub const OSCILLATION_AMPLITUDE: f32 = 2.0;

    // Levels
    pub const FIRST_LEVEL: u8 = 1;
}
