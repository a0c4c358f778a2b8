//! Multiball Pong headless driver
//!
//! Runs a match without a display: one tick per loop iteration, no
//! player input, final state printed as JSON.
//!
//! Usage: `multiball-pong [ticks] [seed] [config.json]`

use std::process::ExitCode;

use multiball_pong::MatchConfig;
use multiball_pong::sim::{MatchState, TickInput, seeded, tick};

const DEFAULT_TICKS: u64 = 3600;
const DEFAULT_SEED: u64 = 42;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let ticks = parse_arg(args.next(), DEFAULT_TICKS, "ticks");
    let seed = parse_arg(args.next(), DEFAULT_SEED, "seed");

    let config = match args.next() {
        Some(path) => match MatchConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => MatchConfig::default(),
    };

    let mut rng = seeded(seed);
    let mut state = match MatchState::new(&config, &mut rng) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid match layout: {e}");
            return ExitCode::FAILURE;
        }
    };

    log::info!("Multiball Pong (headless) running {ticks} ticks, seed {seed}");
    let input = TickInput::default();
    for _ in 0..ticks {
        tick(&mut state, &input, &mut rng);
    }
    log::info!(
        "Final score after {} ticks: player {} - opponent {}",
        state.ticks,
        state.score.player,
        state.score.opponent
    );

    match serde_json::to_string_pretty(&state) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize match state: {e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_arg(arg: Option<String>, default: u64, name: &str) -> u64 {
    match arg.map(|a| a.parse::<u64>()) {
        Some(Ok(v)) => v,
        Some(Err(e)) => {
            log::warn!("Ignoring bad {name} argument ({e}), using {default}");
            default
        }
        None => default,
    }
}
