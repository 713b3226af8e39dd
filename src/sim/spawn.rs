//! Timer-driven procedural spawning
//!
//! One entity per elapsed interval; the interval shrinks a little with every
//! spawn until it reaches its floor.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{EntityKind, WorldEntity};
use crate::consts::LANE_COUNT;
use crate::tuning::Tuning;

/// Spawn timer state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnScheduler {
    /// Seconds since the last spawn
    pub timer: f32,
    /// Seconds between spawns (non-increasing, floored)
    pub interval: f32,
}

impl SpawnScheduler {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            timer: 0.0,
            interval: tuning.spawn_interval_start,
        }
    }

    /// Advance the timer and spawn at most one entity
    ///
    /// `id` is only consumed when something spawns.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        rng: &mut R,
        tuning: &Tuning,
        id: impl FnOnce() -> u32,
    ) -> Option<WorldEntity> {
        self.timer += dt;
        if self.timer <= self.interval {
            return None;
        }

        self.timer = 0.0;
        self.interval = (self.interval - tuning.spawn_interval_step).max(tuning.spawn_interval_floor);
        Some(spawn(rng, tuning, id()))
    }
}

/// Map a uniform roll in [0, 1) to an entity kind
pub fn kind_for_roll(r: f32, tuning: &Tuning) -> EntityKind {
    if r < tuning.train_weight {
        EntityKind::Train
    } else if r < tuning.train_weight + tuning.coin_weight {
        EntityKind::Coin
    } else {
        EntityKind::Obstacle
    }
}

/// Roll a new entity far down the track
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning, id: u32) -> WorldEntity {
    let kind = kind_for_roll(rng.random::<f32>(), tuning);
    let lane = rng.random_range(0..LANE_COUNT);

    let mut entity = WorldEntity::new(id, kind, lane, tuning.lane_offset(lane));
    entity.z = tuning.spawn_z;
    log::trace!("Spawned {:?} #{} in lane {}", kind, id, lane);
    entity
}
