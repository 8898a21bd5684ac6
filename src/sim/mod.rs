//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod director;
pub mod doll;
pub mod player;
pub mod state;
pub mod tick;

pub use director::{Director, Script};
pub use doll::{CycleStep, Doll};
pub use player::Player;
pub use state::{GameEvent, GameState, Gaze, Outcome, RoundState};
pub use tick::{TickInput, tick};
