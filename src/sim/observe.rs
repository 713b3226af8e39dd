//! Per-tick snapshot handed to rendering and UI collaborators
//!
//! Read-only copies; nothing here can reach back into the simulation.

use serde::{Deserialize, Serialize};

use super::entity::EntityKind;
use super::state::{GameEvent, GameState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub lane: usize,
    /// Lateral offset
    pub x: f32,
    /// Vertical offset
    pub y: f32,
    /// Leg rotation about the lateral axis (radians)
    pub left_leg: f32,
    pub right_leg: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub id: u32,
    pub kind: EntityKind,
    pub lane: usize,
    pub x: f32,
    /// Travel-axis position
    pub z: f32,
    /// Spin phase (coins only, radians)
    pub rotation: f32,
}

/// Everything an outside observer may see after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub player: PlayerSnapshot,
    /// In spawn order (oldest first)
    pub entities: Vec<EntitySnapshot>,
    pub score: f32,
    /// Score as shown on the HUD
    pub display_score: u64,
    pub speed: f32,
    pub is_playing: bool,
    pub is_game_over: bool,
    pub events: Vec<GameEvent>,
}

impl Observation {
    pub fn capture<R: rand::Rng>(state: &GameState<R>) -> Self {
        let (left_leg, right_leg) = state.player.leg_angles();
        Self {
            player: PlayerSnapshot {
                lane: state.player.lane,
                x: state.player.x,
                y: state.player.y,
                left_leg,
                right_leg,
            },
            entities: state
                .entities
                .iter()
                .map(|e| EntitySnapshot {
                    id: e.id,
                    kind: e.kind,
                    lane: e.lane,
                    x: e.x,
                    z: e.z,
                    rotation: e.spin,
                })
                .collect(),
            score: state.score,
            display_score: state.score.max(0.0).floor() as u64,
            speed: state.speed,
            is_playing: state.is_playing(),
            is_game_over: state.is_game_over(),
            events: state.events.clone(),
        }
    }
}
