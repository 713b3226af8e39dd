//! Player kinematics
//!
//! The player never moves along the travel axis. It slides between lanes with
//! exponential smoothing and jumps under constant gravity.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;
use crate::tuning::Tuning;

/// Player collision half width
const PLAYER_HALF_WIDTH: f32 = 0.3;
/// Feet to top of cap
const PLAYER_HEIGHT: f32 = 1.45;
/// Travel-axis extent (cap peak sticks out forward)
const PLAYER_Z_MIN: f32 = -0.2;
const PLAYER_Z_MAX: f32 = 0.3;

/// Discrete input events consumed by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Begin a run (from Idle or GameOver)
    Start,
    MoveLeft,
    MoveRight,
    Jump,
}

/// The runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Lane index, always in 0..LANE_COUNT
    pub lane: usize,
    /// Current lateral position
    pub x: f32,
    /// Lateral position of the current lane
    pub target_x: f32,
    /// Height of the feet above ground
    pub y: f32,
    pub vertical_vel: f32,
    pub jumping: bool,
    /// Running animation phase; frozen while airborne
    pub run_time: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            lane: START_LANE,
            x: 0.0,
            target_x: 0.0,
            y: GROUND_Y,
            vertical_vel: 0.0,
            jumping: false,
            run_time: 0.0,
        }
    }
}

impl Player {
    /// Back to the center lane, standing still
    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::default();
        self.target_x = tuning.lane_offset(self.lane);
        self.x = self.target_x;
    }

    /// Apply a movement intent. `Start` is not a player intent and is ignored.
    pub fn on_intent(&mut self, intent: Intent, tuning: &Tuning) {
        match intent {
            Intent::MoveLeft => self.lane = self.lane.saturating_sub(1),
            Intent::MoveRight => self.lane = (self.lane + 1).min(LANE_COUNT - 1),
            Intent::Jump => {
                // No mid-air re-jump
                if !self.jumping {
                    self.vertical_vel = tuning.jump_velocity;
                    self.jumping = true;
                }
            }
            Intent::Start => {}
        }
        self.target_x = tuning.lane_offset(self.lane);
    }

    /// Integrate lateral and vertical motion
    pub fn update(&mut self, dt: f32, tuning: &Tuning) {
        // Capped so a stalled frame lands on the lane instead of overshooting
        let blend = (tuning.lateral_smoothing * dt).min(1.0);
        self.x += (self.target_x - self.x) * blend;

        self.y += self.vertical_vel * dt;
        self.vertical_vel += tuning.gravity * dt;

        if self.y <= GROUND_Y {
            self.y = GROUND_Y;
            self.vertical_vel = 0.0;
            self.jumping = false;
        }

        if !self.jumping {
            self.run_time += dt * RUN_ANIM_RATE;
        }
    }

    /// Leg swing angles (left, right) in radians
    pub fn leg_angles(&self) -> (f32, f32) {
        if self.jumping {
            (LEG_SWING, -LEG_SWING)
        } else {
            (
                self.run_time.sin() * LEG_SWING,
                (self.run_time + std::f32::consts::PI).sin() * LEG_SWING,
            )
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(
            Vec3::new(self.x - PLAYER_HALF_WIDTH, self.y, PLAYER_Z_MIN),
            Vec3::new(self.x + PLAYER_HALF_WIDTH, self.y + PLAYER_HEIGHT, PLAYER_Z_MAX),
        )
    }
}
