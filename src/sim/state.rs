//! Game state and run lifecycle
//!
//! All mutable simulation state lives in one `GameState` value. Nothing is
//! global, so independent runs can coexist (tests run many side by side).

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{EntityKind, WorldEntity, advance_entities};
use super::player::Player;
use super::spawn::SpawnScheduler;
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start intent
    #[default]
    Idle,
    /// Active gameplay
    Playing,
    /// Run ended by a collision; waiting for a start intent
    GameOver,
}

/// Things that happened during a tick, for audio/UI collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RunStarted,
    Spawned { id: u32, kind: EntityKind },
    CoinCollected,
    Crashed { score: f32 },
}

/// Complete simulation state
///
/// Generic over the random source so tests can inject their own; the default
/// is a seeded `Pcg32`.
#[derive(Debug, Clone)]
pub struct GameState<R = Pcg32> {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub score: f32,
    /// Forward speed; only ever increases during a run
    pub speed: f32,
    pub spawner: SpawnScheduler,
    pub player: Player,
    /// Active entities in spawn order (oldest first)
    pub entities: Vec<WorldEntity>,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
    pub rng: R,
    /// Next entity ID
    next_id: u32,
}

impl GameState<Pcg32> {
    /// Create an idle game with default tuning and the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// The tuning is used as given; call [`Tuning::validate`] first for
    /// values that did not come from [`Tuning::load`] or [`Tuning::from_json`].
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed), tuning)
    }
}

impl<R: Rng> GameState<R> {
    /// Create an idle game drawing spawns from `rng`
    pub fn with_rng(rng: R, tuning: Tuning) -> Self {
        let mut player = Player::default();
        player.reset(&tuning);
        Self {
            phase: GamePhase::Idle,
            score: 0.0,
            speed: tuning.start_speed,
            spawner: SpawnScheduler::new(&tuning),
            player,
            entities: Vec::new(),
            events: Vec::new(),
            rng,
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        take_id(&mut self.next_id)
    }

    /// Restore run values: player, score, speed, spawn timer, entities
    ///
    /// The spawn interval carries over between runs; it only ever shrinks.
    pub fn reset(&mut self) {
        self.player.reset(&self.tuning);
        self.score = 0.0;
        self.speed = self.tuning.start_speed;
        self.spawner.timer = 0.0;
        self.entities.clear();
    }

    /// Reset and begin playing
    pub fn start_run(&mut self) {
        self.reset();
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::RunStarted);
        log::info!(
            "Run started (spawn interval {:.2}s)",
            self.spawner.interval
        );
    }

    /// Spawn (at most one) and move/cull entities
    pub fn advance_world(&mut self, dt: f32) {
        let next_id = &mut self.next_id;
        let spawned = self.spawner.tick(dt, &mut self.rng, &self.tuning, || take_id(next_id));
        if let Some(entity) = spawned {
            self.events.push(GameEvent::Spawned {
                id: entity.id,
                kind: entity.kind,
            });
            self.entities.push(entity);
        }

        let culled = advance_entities(&mut self.entities, dt, self.speed, self.tuning.despawn_z);
        if culled > 0 {
            log::trace!("Culled {} entities", culled);
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

fn take_id(next_id: &mut u32) -> u32 {
    let id = *next_id;
    *next_id += 1;
    id
}
