//! Lane Runner headless entry point
//!
//! Runs the simulation with a simple autopilot at a fixed frame rate and
//! prints the final observation as JSON.
//!
//! Usage: `lane-runner [--seed N] [--seconds S] [--tuning PATH]`

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use lane_runner::Tuning;
use lane_runner::consts::LANE_COUNT;
use lane_runner::sim::{EntityKind, GameState, Intent, Observation, TickInput, tick};

/// Frame time the autopilot drives the simulation at (60 Hz)
const FRAME_DT: f32 = 1.0 / 60.0;
/// How far ahead the autopilot looks for hazards
const LOOKAHEAD: f32 = 8.0;

#[derive(Parser, Debug)]
#[command(about = "Run the lane runner simulation headless with an autopilot", version)]
struct Args {
    /// Seed for the spawn RNG
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Simulated seconds to run before stopping
    #[arg(long, default_value_t = 120.0)]
    seconds: f32,
    /// JSON tuning file overriding the default balance
    #[arg(long)]
    tuning: Option<PathBuf>,
}

/// Pick this frame's intents from what is coming down the track
fn autopilot(state: &GameState) -> Vec<Intent> {
    let hazard_in = |lane: usize, kind: Option<EntityKind>| {
        state.entities.iter().any(|e| {
            e.lane == lane
                && e.kind.is_hazard()
                && kind.is_none_or(|k| k == e.kind)
                && e.z > -LOOKAHEAD
                && e.z < 1.0
        })
    };

    let lane = state.player.lane;
    if !hazard_in(lane, None) {
        return Vec::new();
    }

    // Sidestep into a clear neighbouring lane if there is one
    let neighbours = [lane.checked_sub(1), (lane + 1 < LANE_COUNT).then_some(lane + 1)];
    for next in neighbours.into_iter().flatten() {
        if !hazard_in(next, None) {
            return vec![if next < lane {
                Intent::MoveLeft
            } else {
                Intent::MoveRight
            }];
        }
    }

    // Boxed in: low obstacles can be jumped, trains can't
    if !hazard_in(lane, Some(EntityKind::Train)) {
        return vec![Intent::Jump];
    }
    Vec::new()
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };

    log::info!("Lane Runner starting (seed {})", args.seed);
    let mut state = GameState::with_tuning(args.seed, tuning);
    tick(&mut state, &TickInput::start(), 0.0);

    let frames = (args.seconds / FRAME_DT).ceil() as u64;
    let mut elapsed = 0.0f32;
    for _ in 0..frames {
        let input = TickInput::new(autopilot(&state));
        tick(&mut state, &input, FRAME_DT);
        elapsed += FRAME_DT;
        if state.is_game_over() {
            break;
        }
    }

    let observation = Observation::capture(&state);
    log::info!(
        "Finished after {:.1}s: score {} ({})",
        elapsed,
        observation.display_score,
        if observation.is_game_over { "crashed" } else { "survived" }
    );
    println!("{}", serde_json::to_string_pretty(&observation)?);
    Ok(())
}
