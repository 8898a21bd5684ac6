//! Statue Run entry point
//!
//! Runs the sim headless with a demo pilot standing in for the player. The
//! pilot runs whenever the gaze flag says unobserved but halts the moment
//! the doll starts turning back, which is exactly the margin the delayed
//! flag flip leaves for the stop coast.

use std::time::{Duration, Instant};

use serde::Serialize;

use statue_run::consts::{MAX_SUBSTEPS, SIM_DT};
use statue_run::sim::{CycleStep, GameState, Gaze, RoundState, TickInput, tick};
use statue_run::view;

/// JSON summary logged when the round ends
#[derive(Serialize)]
struct RoundSummary {
    seed: u64,
    outcome: &'static str,
    ticks: u64,
    position: f32,
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(rand::random::<u64>);
    log::info!("starting round with seed {seed}");

    let mut state = GameState::new(seed);
    match serde_json::to_string(&state.tuning) {
        Ok(json) => log::debug!("tuning: {json}"),
        Err(err) => log::warn!("tuning serialization failed: {err}"),
    }

    let mut input = TickInput::default();
    let mut accumulator = 0.0f32;
    let mut last = Instant::now();

    while state.round != RoundState::Over {
        let now = Instant::now();
        let dt = (now - last).as_secs_f32().min(0.1);
        last = now;
        accumulator += dt;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            pilot(&state, &mut input);
            tick(&mut state, &input, SIM_DT);
            accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            input.halt = false;
        }

        // Text sink
        for event in state.drain_events() {
            println!("{}", event.message());
        }

        let scene = view::snapshot(&state);
        log::trace!(
            "player {:.2} | doll yaw {:.2} | bar {:.2}",
            scene.player_x,
            scene.doll_yaw,
            scene.limit_fraction
        );

        std::thread::sleep(Duration::from_millis(4));
    }

    if let Some(outcome) = state.outcome {
        let summary = RoundSummary {
            seed,
            outcome: outcome.message(),
            ticks: state.time_ticks,
            position: state.player.position,
        };
        match serde_json::to_string(&summary) {
            Ok(json) => log::info!("round summary: {json}"),
            Err(err) => log::warn!("summary serialization failed: {err}"),
        }
    }
}

/// Demo pilot. Runs while the flag says unobserved, but keys the halt off
/// the visible turn-back: the 150 ms turn outlasts the 100 ms stop ease, so
/// halting at the turn's first frame always survives.
fn pilot(state: &GameState, input: &mut TickInput) {
    if state.round != RoundState::Started {
        input.run = false;
        return;
    }

    let safe = state.doll.gaze == Gaze::NotWatching
        && !matches!(state.doll.step, CycleStep::TurningBack { .. });
    if safe {
        input.run = true;
    } else {
        if input.run {
            input.halt = true;
        }
        input.run = false;
    }
}
