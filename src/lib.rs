//! Lane Runner - A three-lane endless runner simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, spawning, collisions, game state)
//! - `tuning`: Data-driven game balance

pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Number of lanes the player can occupy
    pub const LANE_COUNT: usize = 3;
    /// Lateral offset of each lane (left, center, right)
    pub const LANE_OFFSETS: [f32; LANE_COUNT] = [-2.0, 0.0, 2.0];
    /// Lane the player starts a run in
    pub const START_LANE: usize = 1;

    /// Forward speed at run start (units/s)
    pub const START_SPEED: f32 = 10.0;
    /// Speed gained per second of play
    pub const SPEED_RAMP: f32 = 0.1;
    /// Score gained per second of play
    pub const SCORE_PER_SECOND: f32 = 10.0;
    /// Bonus for collecting a coin
    pub const COIN_BONUS: f32 = 100.0;

    /// Player physics
    pub const JUMP_VELOCITY: f32 = 8.0;
    pub const GRAVITY: f32 = -20.0;
    pub const GROUND_Y: f32 = 0.0;
    /// Exponential smoothing rate toward the target lane (1/s)
    pub const LATERAL_SMOOTHING: f32 = 10.0;
    /// Leg swing frequency multiplier while running
    pub const RUN_ANIM_RATE: f32 = 10.0;
    /// Leg swing amplitude (radians)
    pub const LEG_SWING: f32 = 0.5;

    /// Spawning
    pub const SPAWN_INTERVAL_START: f32 = 2.0;
    pub const SPAWN_INTERVAL_FLOOR: f32 = 0.5;
    pub const SPAWN_INTERVAL_STEP: f32 = 0.01;
    /// Travel-axis position where new entities appear (far ahead)
    pub const SPAWN_Z: f32 = -50.0;
    /// Entities past this travel-axis position are culled (behind the player)
    pub const DESPAWN_Z: f32 = 10.0;
    /// Spawn probabilities; obstacles take the remainder
    pub const TRAIN_WEIGHT: f32 = 0.2;
    pub const COIN_WEIGHT: f32 = 0.5;

    /// Coin spin rate (radians/s)
    pub const COIN_SPIN_RATE: f32 = 5.0;
}
