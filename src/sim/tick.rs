//! Variable timestep simulation tick
//!
//! Core game loop: intents in, one synchronous advance, state out.

use rand::Rng;

use super::collision::{CollisionOutcome, resolve};
use super::player::Intent;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Intents in the order they arrived this frame
    pub intents: Vec<Intent>,
}

impl TickInput {
    pub fn new(intents: impl IntoIterator<Item = Intent>) -> Self {
        Self {
            intents: intents.into_iter().collect(),
        }
    }

    pub fn start() -> Self {
        Self::new([Intent::Start])
    }

    fn wants_start(&self) -> bool {
        self.intents.contains(&Intent::Start)
    }
}

/// Advance the game state by `dt` seconds
///
/// Negative or NaN `dt` is treated as zero. While Idle or GameOver only a
/// start intent is processed; the tick that starts a run does nothing else.
pub fn tick<R: Rng>(state: &mut GameState<R>, input: &TickInput, dt: f32) {
    state.events.clear();
    let dt = dt.max(0.0);

    match state.phase {
        GamePhase::Idle | GamePhase::GameOver => {
            if input.wants_start() {
                state.start_run();
            }
            return;
        }
        GamePhase::Playing => {}
    }

    for &intent in &input.intents {
        state.player.on_intent(intent, &state.tuning);
    }

    // Time score is banked before the collision check, so a crash frame keeps it
    state.speed += dt * state.tuning.speed_ramp;
    state.score += dt * state.tuning.score_per_second;

    state.player.update(dt, &state.tuning);
    state.advance_world(dt);

    match resolve(&state.player.bounds(), &mut state.entities) {
        CollisionOutcome::None => {}
        CollisionOutcome::Coin => {
            state.score += state.tuning.coin_bonus;
            state.events.push(GameEvent::CoinCollected);
            log::debug!("Coin collected, score {}", state.score.floor());
        }
        CollisionOutcome::Hit => {
            state.phase = GamePhase::GameOver;
            state.events.push(GameEvent::Crashed { score: state.score });
            log::info!(
                "Game over: score {} at speed {:.1}",
                state.score.floor(),
                state.speed
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{EntityKind, WorldEntity};
    use proptest::prelude::*;

    fn playing(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        tick(&mut state, &TickInput::start(), 0.0);
        assert_eq!(state.phase, GamePhase::Playing);
        state
    }

    fn place(state: &mut GameState, kind: EntityKind, lane: usize, z: f32) {
        let id = state.next_entity_id();
        let mut e = WorldEntity::new(id, kind, lane, state.tuning.lane_offset(lane));
        e.z = z;
        state.entities.push(e);
    }

    #[test]
    fn test_idle_to_playing() {
        let mut state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Idle);

        // Tick without start - stays idle, nothing moves
        tick(&mut state, &TickInput::new([Intent::MoveLeft, Intent::Jump]), 0.5);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.player.lane, 1);
        assert!(!state.player.jumping);

        tick(&mut state, &TickInput::start(), 0.5);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.events, vec![GameEvent::RunStarted]);
    }

    #[test]
    fn test_start_while_playing_ignored() {
        let mut state = playing(1);
        tick(&mut state, &TickInput::default(), 0.5);
        let score = state.score;

        tick(&mut state, &TickInput::start(), 0.1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.score > score);
    }

    #[test]
    fn test_one_second_no_intents() {
        let mut state = playing(7);
        assert_eq!(state.speed, 10.0);
        assert_eq!(state.score, 0.0);

        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), 0.1);
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert!((state.score - 10.0).abs() < 1e-3, "score {}", state.score);
        assert!((state.speed - 10.1).abs() < 1e-4, "speed {}", state.speed);
    }

    #[test]
    fn test_coin_pickup() {
        let mut state = playing(2);
        place(&mut state, EntityKind::Coin, 1, 0.0);
        let count = state.entities.len();

        let dt = 0.01;
        tick(&mut state, &TickInput::default(), dt);

        assert_eq!(state.phase, GamePhase::Playing);
        assert!((state.score - (100.0 + dt * 10.0)).abs() < 1e-4);
        assert_eq!(state.entities.len(), count - 1);
        assert!(state.events.contains(&GameEvent::CoinCollected));
    }

    #[test]
    fn test_obstacle_hit_ends_run() {
        let mut state = playing(3);
        place(&mut state, EntityKind::Obstacle, 1, 0.0);

        tick(&mut state, &TickInput::default(), 0.01);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.is_game_over());
        assert_eq!(state.entities.len(), 1);
        // The crash frame still banks its time score
        assert!((state.score - 0.1).abs() < 1e-5);

        let (score, speed) = (state.score, state.speed);
        for _ in 0..20 {
            tick(
                &mut state,
                &TickInput::new([Intent::MoveLeft, Intent::Jump]),
                0.1,
            );
        }
        assert_eq!(state.score, score);
        assert_eq!(state.speed, speed);
        assert_eq!(state.entities.len(), 1);
        assert_eq!(state.player.lane, 1);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = playing(4);
        place(&mut state, EntityKind::Train, 1, 0.0);
        tick(&mut state, &TickInput::default(), 0.01);
        assert_eq!(state.phase, GamePhase::GameOver);

        tick(&mut state, &TickInput::start(), 0.01);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.speed, 10.0);
        assert!(state.entities.is_empty());
    }

    #[test]
    fn test_jump_clears_obstacle() {
        let mut state = playing(5);
        // Reaches the player after ~0.35 s, well inside the jump window
        place(&mut state, EntityKind::Obstacle, 1, -3.5);

        tick(&mut state, &TickInput::new([Intent::Jump]), 1.0 / 60.0);
        for _ in 0..90 {
            tick(&mut state, &TickInput::default(), 1.0 / 60.0);
        }
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_lane_change_dodges_train() {
        let mut state = playing(6);
        place(&mut state, EntityKind::Train, 1, -12.0);

        tick(&mut state, &TickInput::new([Intent::MoveLeft]), 1.0 / 60.0);
        for _ in 0..120 {
            tick(&mut state, &TickInput::default(), 1.0 / 60.0);
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.lane, 0);
    }

    #[test]
    fn test_passed_entity_culled_next_tick() {
        for kind in [EntityKind::Train, EntityKind::Obstacle, EntityKind::Coin] {
            let mut state = playing(8);
            // Other lane so it can't collide
            place(&mut state, kind, 0, 10.5);
            tick(&mut state, &TickInput::default(), 0.016);
            assert!(state.entities.is_empty(), "{:?} not culled", kind);
        }
    }

    #[test]
    fn test_huge_dt_stays_sane() {
        let mut state = playing(9);
        for _ in 0..50 {
            tick(&mut state, &TickInput::new([Intent::Jump]), 120.0);
            assert!(state.player.y >= 0.0);
            assert!(state.player.x.is_finite());
            assert!(state.entities.iter().all(|e| e.z.is_finite()));
            if state.is_game_over() {
                break;
            }
        }
    }

    #[test]
    fn test_negative_dt_is_zero() {
        let mut state = playing(10);
        tick(&mut state, &TickInput::default(), -1.0);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.speed, 10.0);
        tick(&mut state, &TickInput::default(), f32::NAN);
        assert_eq!(state.score, 0.0);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = playing(99999);
        let mut state2 = playing(99999);

        let inputs = [
            TickInput::new([Intent::MoveLeft]),
            TickInput::default(),
            TickInput::new([Intent::Jump]),
            TickInput::new([Intent::MoveRight, Intent::MoveRight]),
        ];

        for i in 0..2000 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input, 1.0 / 30.0);
            tick(&mut state2, input, 1.0 / 30.0);
        }

        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.entities, state2.entities);
        assert_eq!(state1.player, state2.player);
    }

    fn any_intent() -> impl Strategy<Value = Intent> {
        prop_oneof![
            1 => Just(Intent::Start),
            3 => Just(Intent::MoveLeft),
            3 => Just(Intent::MoveRight),
            3 => Just(Intent::Jump),
        ]
    }

    proptest! {
        #[test]
        fn prop_run_invariants(
            seed in any::<u64>(),
            frames in prop::collection::vec(
                (prop::collection::vec(any_intent(), 0..3), 0.0f32..0.25),
                1..300,
            )
        ) {
            let mut state = GameState::new(seed);
            let mut last_speed = state.speed;
            let mut last_interval = state.spawner.interval;

            for (intents, dt) in frames {
                let was_playing = state.is_playing();
                tick(&mut state, &TickInput::new(intents), dt);

                prop_assert!(state.player.lane < 3);
                prop_assert!(state.player.y >= 0.0);
                prop_assert!(state.spawner.interval <= last_interval);
                prop_assert!(state.spawner.interval >= 0.5);
                if was_playing && state.is_playing() {
                    prop_assert!(state.speed >= last_speed);
                }
                let outcomes = state
                    .events
                    .iter()
                    .filter(|e| matches!(e, GameEvent::CoinCollected | GameEvent::Crashed { .. }))
                    .count();
                prop_assert!(outcomes <= 1, "{} collision outcomes in one tick", outcomes);

                last_speed = state.speed;
                last_interval = state.spawner.interval;
            }
        }
    }
}
