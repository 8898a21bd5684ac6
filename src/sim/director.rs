//! Round director
//!
//! Scripts the pre-round sequence (boot delay, rules, countdown), flips the
//! round to started, and enforces the time limit. The limit expiry races the
//! outcome evaluator; both write through the same latch, so whichever fires
//! first is final and the loser stays silent.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState, Outcome, RoundState};
use crate::tuning::Tuning;

/// Where the director is in the round script
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Script {
    /// Settle delay before the rules appear
    Boot { remaining: f32 },
    /// Rules on screen
    Rules { remaining: f32 },
    /// Countdown; `step` is the number currently displayed
    Countdown { step: u8, remaining: f32 },
    /// Round underway; counting down the time limit
    Running { limit_remaining: f32 },
    /// Time limit expired
    Done,
}

/// Orchestrates one round from rules display to terminal outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Director {
    pub script: Script,
}

impl Director {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            script: Script::Boot {
                remaining: tuning.boot_secs,
            },
        }
    }

    /// Fraction of the time limit remaining; drives the shrinking bar
    pub fn limit_fraction(&self, tuning: &Tuning) -> f32 {
        match self.script {
            Script::Running { limit_remaining } => {
                (limit_remaining / tuning.time_limit_secs).clamp(0.0, 1.0)
            }
            Script::Done => 0.0,
            _ => 1.0,
        }
    }
}

/// Advance the round script by one tick
pub fn advance(state: &mut GameState, dt: f32) {
    state.director.script = match state.director.script {
        Script::Boot { remaining } => {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                state.events.push(GameEvent::RulesShown);
                Script::Rules {
                    remaining: state.tuning.rules_secs,
                }
            } else {
                Script::Boot { remaining }
            }
        }

        Script::Rules { remaining } => {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                let step = state.tuning.countdown_steps;
                state.events.push(GameEvent::CountdownStep(step));
                Script::Countdown {
                    step,
                    remaining: state.tuning.countdown_step_secs,
                }
            } else {
                Script::Rules { remaining }
            }
        }

        Script::Countdown { step, remaining } => {
            let remaining = remaining - dt;
            if remaining > 0.0 {
                Script::Countdown { step, remaining }
            } else if step > 1 {
                let step = step - 1;
                state.events.push(GameEvent::CountdownStep(step));
                Script::Countdown {
                    step,
                    remaining: state.tuning.countdown_step_secs,
                }
            } else {
                start_round(state);
                Script::Running {
                    limit_remaining: state.tuning.time_limit_secs,
                }
            }
        }

        Script::Running { limit_remaining } => {
            let limit_remaining = limit_remaining - dt;
            if limit_remaining <= 0.0 {
                // Races the outcome evaluator; the latch keeps the loser
                // from overwriting the winner's message.
                state.declare(Outcome::Timeout);
                Script::Done
            } else {
                Script::Running { limit_remaining }
            }
        }

        Script::Done => Script::Done,
    };
}

fn start_round(state: &mut GameState) {
    state.round = RoundState::Started;
    state.events.push(GameEvent::RoundStarted);
    let GameState {
        doll, rng, tuning, ..
    } = &mut *state;
    doll.start(rng, tuning);
    log::info!("round started (seed {})", state.seed);
}
