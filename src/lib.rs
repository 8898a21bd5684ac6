//! Statue Run - a red light, green light reaction game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (round state machine, doll gaze cycle,
//!   player movement, outcome latch)
//! - `tuning`: Data-driven timing and track constants
//! - `view`: Scene snapshot handed to an external renderer

pub mod sim;
pub mod tuning;
pub mod view;

pub use tuning::Tuning;

/// Game loop constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Quadratic ease-out over `u` in [0, 1]: fast start, smooth settle
#[inline]
pub fn ease_out_quad(u: f32) -> f32 {
    let u = u.clamp(0.0, 1.0);
    1.0 - (1.0 - u) * (1.0 - u)
}
