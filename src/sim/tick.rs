//! Per-tick update
//!
//! The atomic per-frame unit: input application, round script, doll cycle,
//! stop ease, outcome evaluation, movement. Input is sampled into a
//! [`TickInput`] before the tick runs, so an event arriving mid-update is
//! only observed on the next frame.

use super::director;
use super::state::{GameState, Gaze, Outcome, RoundState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Forward key held; only honored while the round is active
    pub run: bool,
    /// Stop key released; honored unconditionally
    pub halt: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // The shell stops the loop on a terminal round; this makes a stray
    // extra tick a no-op.
    if state.round == RoundState::Over {
        return;
    }

    state.time_ticks += 1;

    if input.run && state.round == RoundState::Started {
        state.player.run(state.tuning.run_velocity);
    }
    if input.halt {
        state.player.stop(state.tuning.stop_ease_secs);
    }
    state.player.advance_ease(dt);

    director::advance(state, dt);

    if state.round == RoundState::Started {
        {
            let GameState {
                doll, rng, tuning, ..
            } = &mut *state;
            doll.advance(dt, rng, tuning);
        }
        // Outcomes are judged against the pre-movement position; the
        // movement still lands on the declaring tick, the frame being one
        // unit.
        evaluate_outcome(state);
        state.player.update();
    }
}

/// Game outcome evaluator: loss first, then win, both through the latch
fn evaluate_outcome(state: &mut GameState) {
    if state.player.velocity > 0.0 && state.doll.gaze == Gaze::Watching {
        if state.declare(Outcome::Loss) {
            log::debug!(
                "caught moving at position {:.2} (tick {})",
                state.player.position,
                state.time_ticks
            );
        }
        return;
    }
    if state.player.position < state.tuning.win_threshold()
        && state.declare(Outcome::Win)
    {
        log::debug!("finish line crossed at tick {}", state.time_ticks);
    }
}
