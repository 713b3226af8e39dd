//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Injected RNG only (seeded `Pcg32` by default)
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod observe;
pub mod player;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Aabb, CollisionOutcome, resolve};
pub use entity::{EntityKind, WorldEntity, advance_entities};
pub use observe::{EntitySnapshot, Observation, PlayerSnapshot};
pub use player::{Intent, Player};
pub use spawn::SpawnScheduler;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
