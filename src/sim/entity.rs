//! World entities and their per-tick lifecycle
//!
//! Entities approach along the travel axis (+z toward the player, who sits at
//! z = 0) and are culled once they pass behind the despawn line.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::COIN_SPIN_RATE;

/// Entity types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Long, tall hazard; cannot be jumped
    Train,
    /// Low hazard; clear it by jumping
    Obstacle,
    /// Collectible worth a score bonus
    Coin,
}

impl EntityKind {
    /// Collision half extents (train largest, obstacle medium, coin small)
    pub fn half_extents(self) -> Vec3 {
        match self {
            EntityKind::Train => Vec3::new(1.0, 1.5, 5.0),
            EntityKind::Obstacle => Vec3::new(0.5, 0.5, 0.5),
            EntityKind::Coin => Vec3::new(0.5, 0.5, 0.05),
        }
    }

    /// Height of the box center above the ground
    pub fn center_y(self) -> f32 {
        match self {
            EntityKind::Train => 1.5,
            EntityKind::Obstacle => 0.5,
            EntityKind::Coin => 1.0,
        }
    }

    pub fn is_hazard(self) -> bool {
        !matches!(self, EntityKind::Coin)
    }
}

/// A spawned world object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldEntity {
    /// Spawn id, increasing in spawn order
    pub id: u32,
    pub kind: EntityKind,
    /// Lane index (0..3)
    pub lane: usize,
    /// Lateral position
    pub x: f32,
    /// Travel-axis position
    pub z: f32,
    /// Spin phase in radians (coins only)
    pub spin: f32,
}

impl WorldEntity {
    pub fn new(id: u32, kind: EntityKind, lane: usize, x: f32) -> Self {
        Self {
            id,
            kind,
            lane,
            x,
            z: 0.0,
            spin: 0.0,
        }
    }

    pub fn center(&self) -> Vec3 {
        Vec3::new(self.x, self.kind.center_y(), self.z)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.center(), self.kind.half_extents())
    }
}

/// Move every entity toward the player and drop the ones that passed
///
/// Returns how many entities were culled.
pub fn advance_entities(
    entities: &mut Vec<WorldEntity>,
    dt: f32,
    speed: f32,
    despawn_z: f32,
) -> usize {
    let before = entities.len();
    entities.retain_mut(|e| {
        e.z += speed * dt;
        if e.kind == EntityKind::Coin {
            e.spin = (e.spin + dt * COIN_SPIN_RATE) % std::f32::consts::TAU;
        }
        e.z <= despawn_z
    });
    before - entities.len()
}
