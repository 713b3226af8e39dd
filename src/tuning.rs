//! Data-driven game balance
//!
//! Every gameplay constant a run depends on, loadable from JSON so balance can
//! be tweaked without a rebuild. Missing fields fall back to [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    /// The values parsed but break a simulation invariant
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Gameplay balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Pacing ===
    /// Forward speed at run start
    pub start_speed: f32,
    /// Speed gained per second (linear ramp, uncapped)
    pub speed_ramp: f32,
    /// Score gained per second survived
    pub score_per_second: f32,
    /// Score for each coin collected
    pub coin_bonus: f32,

    // === Player ===
    /// Lateral offset of each lane
    pub lane_offsets: [f32; LANE_COUNT],
    pub jump_velocity: f32,
    /// Vertical acceleration (negative is down)
    pub gravity: f32,
    /// Lateral smoothing rate toward the target lane
    pub lateral_smoothing: f32,

    // === Spawning ===
    pub spawn_interval_start: f32,
    pub spawn_interval_floor: f32,
    pub spawn_interval_step: f32,
    pub spawn_z: f32,
    pub despawn_z: f32,
    /// Probability a spawn is a train
    pub train_weight: f32,
    /// Probability a spawn is a coin (obstacles take the rest)
    pub coin_weight: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            start_speed: START_SPEED,
            speed_ramp: SPEED_RAMP,
            score_per_second: SCORE_PER_SECOND,
            coin_bonus: COIN_BONUS,

            lane_offsets: LANE_OFFSETS,
            jump_velocity: JUMP_VELOCITY,
            gravity: GRAVITY,
            lateral_smoothing: LATERAL_SMOOTHING,

            spawn_interval_start: SPAWN_INTERVAL_START,
            spawn_interval_floor: SPAWN_INTERVAL_FLOOR,
            spawn_interval_step: SPAWN_INTERVAL_STEP,
            spawn_z: SPAWN_Z,
            despawn_z: DESPAWN_Z,
            train_weight: TRAIN_WEIGHT,
            coin_weight: COIN_WEIGHT,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON string
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check the values keep the simulation invariants intact
    pub fn validate(&self) -> Result<(), TuningError> {
        let fields = [
            ("start_speed", self.start_speed),
            ("speed_ramp", self.speed_ramp),
            ("score_per_second", self.score_per_second),
            ("coin_bonus", self.coin_bonus),
            ("jump_velocity", self.jump_velocity),
            ("gravity", self.gravity),
            ("lateral_smoothing", self.lateral_smoothing),
            ("spawn_interval_start", self.spawn_interval_start),
            ("spawn_interval_floor", self.spawn_interval_floor),
            ("spawn_interval_step", self.spawn_interval_step),
            ("spawn_z", self.spawn_z),
            ("despawn_z", self.despawn_z),
            ("train_weight", self.train_weight),
            ("coin_weight", self.coin_weight),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{} must be finite (got {})", name, value)));
        }
        if self.lane_offsets.iter().any(|x| !x.is_finite()) {
            return Err(invalid("lane_offsets must be finite"));
        }

        // Entities only reach the despawn line if the track moves forward
        if self.start_speed <= 0.0 || self.speed_ramp < 0.0 {
            return Err(invalid(
                "start_speed must be positive and speed_ramp not negative",
            ));
        }
        if self.score_per_second < 0.0 || self.coin_bonus < 0.0 {
            return Err(invalid(
                "score_per_second and coin_bonus must not be negative",
            ));
        }
        if self.gravity >= 0.0 {
            return Err(invalid(format!(
                "gravity must pull down (negative), got {}",
                self.gravity
            )));
        }
        if self.jump_velocity < 0.0 {
            return Err(invalid("jump_velocity must not be negative"));
        }
        if self.lateral_smoothing <= 0.0 {
            return Err(invalid("lateral_smoothing must be positive"));
        }
        if self.spawn_interval_floor <= 0.0 {
            return Err(invalid("spawn_interval_floor must be positive"));
        }
        if self.spawn_interval_start < self.spawn_interval_floor {
            return Err(invalid(format!(
                "spawn_interval_start ({}) is below the floor ({})",
                self.spawn_interval_start, self.spawn_interval_floor
            )));
        }
        if self.spawn_interval_step < 0.0 {
            return Err(invalid("spawn_interval_step must not be negative"));
        }
        if self.train_weight < 0.0
            || self.coin_weight < 0.0
            || self.train_weight + self.coin_weight > 1.0
        {
            return Err(invalid(format!(
                "spawn weights must be non-negative and sum to at most 1 (train={}, coin={})",
                self.train_weight, self.coin_weight
            )));
        }
        if self.despawn_z <= self.spawn_z {
            return Err(invalid("despawn_z must lie past spawn_z"));
        }
        Ok(())
    }

    /// Lateral offset for a lane index, clamped to the outermost lanes
    #[inline]
    pub fn lane_offset(&self, lane: usize) -> f32 {
        self.lane_offsets[lane.min(LANE_COUNT - 1)]
    }
}

fn invalid(msg: impl Into<String>) -> TuningError {
    TuningError::Invalid(msg.into())
}
