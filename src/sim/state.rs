//! Round state and core simulation types
//!
//! The outcome latch lives here: every terminal write goes through
//! [`GameState::declare`], and the first writer wins.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::director::Director;
use super::doll::Doll;
use super::player::Player;
use crate::tuning::Tuning;

/// Lifecycle of a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Pre-round script (rules, countdown) is playing
    Loading,
    /// Active play
    Started,
    /// A terminal outcome has latched; no further transitions
    Over,
}

/// Terminal result of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Moved while the doll was watching
    Loss,
    /// Crossed the finish line
    Win,
    /// Time limit expired with no other outcome
    Timeout,
}

impl Outcome {
    /// User-facing outcome message
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Loss => "You moved! Better luck next time.",
            Outcome::Win => "You made it! Congratulations!",
            Outcome::Timeout => "You ran out of time!",
        }
    }
}

/// The doll's gaze. Gates legal player movement; the flag (not the turn
/// animation) is authoritative for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gaze {
    Watching,
    NotWatching,
}

/// Events for the hosting shell's text sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    RulesShown,
    CountdownStep(u8),
    RoundStarted,
    OutcomeDeclared(Outcome),
}

impl GameEvent {
    /// Literal display text for the shell
    pub fn message(&self) -> &'static str {
        match self {
            GameEvent::RulesShown => {
                "Game rules:\n\
                 1. Move only while the doll looks away\n\
                 2. Hold the forward key to run\n\
                 3. Release the stop key to halt\n\n\
                 Good luck!"
            }
            GameEvent::CountdownStep(3) => "Starting in 3",
            GameEvent::CountdownStep(2) => "Starting in 2",
            GameEvent::CountdownStep(1) => "Starting in 1",
            GameEvent::CountdownStep(_) => "Starting soon",
            GameEvent::RoundStarted => "Go!",
            GameEvent::OutcomeDeclared(outcome) => outcome.message(),
        }
    }
}

fn zero_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete game state (deterministic, serializable)
///
/// The RNG is skipped on serialization; a deserialized state is for debug
/// inspection, not for resuming play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Round seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving the doll's dwell times
    #[serde(skip, default = "zero_rng")]
    pub rng: Pcg32,
    /// Timing and track constants
    pub tuning: Tuning,
    /// Current round lifecycle state
    pub round: RoundState,
    /// Latched terminal outcome, if any
    pub outcome: Option<Outcome>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Antagonist
    pub doll: Doll,
    /// Player marker
    pub player: Player,
    /// Round script and time limit
    pub director: Director,
    /// Pending text-sink events, drained by the shell each frame
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh round with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a fresh round with explicit tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            round: RoundState::Loading,
            outcome: None,
            time_ticks: 0,
            doll: Doll::new(),
            player: Player::new(tuning.start_position),
            director: Director::new(&tuning),
            tuning,
            events: Vec::new(),
        }
    }

    /// Declare a terminal outcome. First write wins: later calls are no-ops
    /// and must never overwrite the latched outcome or its message.
    ///
    /// Returns whether this call latched the round.
    pub fn declare(&mut self, outcome: Outcome) -> bool {
        if self.round == RoundState::Over {
            return false;
        }
        self.round = RoundState::Over;
        self.outcome = Some(outcome);
        self.events.push(GameEvent::OutcomeDeclared(outcome));
        true
    }

    /// Take all pending text-sink events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
