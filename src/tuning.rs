//! Data-driven game balance
//!
//! Every timing and track constant lives here as explicit configuration.
//! The turn durations and the gaze flip delay are not incidental: their
//! offset from each other is the game's difficulty curve.

use serde::{Deserialize, Serialize};

/// Timing and track constants for one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    // === Track ===
    /// Player start position; the finish line mirrors it at the negative
    pub start_position: f32,
    /// Crossing `finish_position() + finish_margin` wins
    pub finish_margin: f32,

    // === Player ===
    /// Run speed in track units per tick
    pub run_velocity: f32,
    /// Stop ease window; velocity stays positive until it elapses
    pub stop_ease_secs: f32,

    // === Doll ===
    /// Watching hold, sampled uniformly from [min, max) seconds
    pub watch_dwell_secs: (f32, f32),
    /// Looking-away hold, sampled uniformly from [min, max) seconds
    pub away_dwell_secs: (f32, f32),
    /// Duration of the turn away from the player
    pub turn_away_secs: f32,
    /// Duration of the turn back toward the player
    pub turn_back_secs: f32,
    /// How far into the away turn the gaze flag flips to not-watching
    pub gaze_flip_delay_secs: f32,
    /// Model yaw when fully turned away (radians; 0 faces the player)
    pub away_yaw: f32,

    // === Round script ===
    /// Settle delay before the rules appear
    pub boot_secs: f32,
    /// How long the rules stay up
    pub rules_secs: f32,
    /// Countdown steps displayed before "go"
    pub countdown_steps: u8,
    /// Gap between countdown steps
    pub countdown_step_secs: f32,
    /// Round time limit
    pub time_limit_secs: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            start_position: 5.0,
            finish_margin: 0.4,

            run_velocity: 0.03,
            stop_ease_secs: 0.1,

            watch_dwell_secs: (1.0, 2.0),
            away_dwell_secs: (0.75, 1.5),
            turn_away_secs: 0.45,
            turn_back_secs: 0.15,
            gaze_flip_delay_secs: 0.15,
            away_yaw: -3.15,

            boot_secs: 0.5,
            rules_secs: 7.0,
            countdown_steps: 3,
            countdown_step_secs: 0.5,
            time_limit_secs: 12.0,
        }
    }
}

impl Tuning {
    /// Finish line position (mirror of the start)
    #[inline]
    pub fn finish_position(&self) -> f32 {
        -self.start_position
    }

    /// Position below which the round is won
    #[inline]
    pub fn win_threshold(&self) -> f32 {
        self.finish_position() + self.finish_margin
    }
}
