//! Collision detection between the player and world entities
//!
//! Everything is an axis-aligned box. The scan order is the one rule that
//! matters: entities are tested most-recently-spawned first, and the first
//! overlap decides the outcome for the whole tick.

use glam::Vec3;

use super::entity::{EntityKind, WorldEntity};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centered on `center` extending `half_extents` along each axis
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Closed-interval overlap test (touching faces count as a hit)
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.cmple(other.max).all() && other.min.cmple(self.max).all()
    }
}

/// What a collision scan decided for this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionOutcome {
    #[default]
    None,
    /// A coin was collected (and removed)
    Coin,
    /// The player ran into a train or obstacle
    Hit,
}

/// Resolve the player box against all active entities
///
/// Scans newest to oldest. A collected coin is removed before returning, so
/// it can never also count as a hit. A hazard is left in place.
pub fn resolve(player: &Aabb, entities: &mut Vec<WorldEntity>) -> CollisionOutcome {
    let hit = entities
        .iter()
        .enumerate()
        .rev()
        .find(|(_, e)| player.intersects(&e.bounds()))
        .map(|(i, e)| (i, e.kind));

    match hit {
        Some((i, EntityKind::Coin)) => {
            entities.remove(i);
            CollisionOutcome::Coin
        }
        Some((_, EntityKind::Train | EntityKind::Obstacle)) => CollisionOutcome::Hit,
        None => CollisionOutcome::None,
    }
}
