//! Antagonist gaze cycle
//!
//! Once started the doll alternates between watching and looking away on
//! randomized dwell times, forever; there is no stop operation. Each flip is
//! two independently timed effects: the yaw animation the renderer shows,
//! and the gaze flag scoring reads. The flag flips on its own delay, not
//! when the turn ends:
//! - turning away takes `turn_away_secs`; not-watching flips
//!   `gaze_flip_delay_secs` into it
//! - turning back takes `turn_back_secs`; watching flips only when the turn
//!   completes

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::Gaze;
use crate::tuning::Tuning;
use crate::{ease_out_quad, lerp};

/// Where the doll is in its alternation cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CycleStep {
    /// Not started yet
    Idle,
    /// Facing the player, holding
    WatchHold { remaining: f32 },
    /// Turning away; gaze flips to not-watching mid-turn
    TurningAway { elapsed: f32 },
    /// Facing away, holding
    AwayHold { remaining: f32 },
    /// Turning back; gaze flips to watching when the turn completes
    TurningBack { elapsed: f32 },
}

/// The antagonist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doll {
    /// Authoritative scoring flag
    pub gaze: Gaze,
    /// Model yaw for the renderer (radians; 0 faces the player)
    pub yaw: f32,
    /// Current position in the alternation cycle
    pub step: CycleStep,
}

impl Default for Doll {
    fn default() -> Self {
        Self::new()
    }
}

impl Doll {
    pub fn new() -> Self {
        Self {
            gaze: Gaze::Watching,
            yaw: 0.0,
            step: CycleStep::Idle,
        }
    }

    /// Begin the unbounded alternation. The cycle opens watching, with the
    /// doll already facing the player; the first visible flip is the turn
    /// away.
    pub fn start(&mut self, rng: &mut Pcg32, tuning: &Tuning) {
        self.gaze = Gaze::Watching;
        self.yaw = 0.0;
        self.step = CycleStep::WatchHold {
            remaining: sample_dwell(rng, tuning.watch_dwell_secs),
        };
    }

    /// Advance the cycle by one tick
    pub fn advance(&mut self, dt: f32, rng: &mut Pcg32, tuning: &Tuning) {
        self.step = match self.step {
            CycleStep::Idle => CycleStep::Idle,

            CycleStep::WatchHold { remaining } => {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    CycleStep::TurningAway { elapsed: 0.0 }
                } else {
                    CycleStep::WatchHold { remaining }
                }
            }

            CycleStep::TurningAway { elapsed } => {
                let elapsed = elapsed + dt;
                self.yaw = lerp(
                    0.0,
                    tuning.away_yaw,
                    ease_out_quad(elapsed / tuning.turn_away_secs),
                );
                if elapsed >= tuning.gaze_flip_delay_secs && self.gaze != Gaze::NotWatching {
                    self.gaze = Gaze::NotWatching;
                    log::trace!("gaze -> not watching ({elapsed:.3}s into turn)");
                }
                if elapsed >= tuning.turn_away_secs {
                    self.yaw = tuning.away_yaw;
                    CycleStep::AwayHold {
                        remaining: sample_dwell(rng, tuning.away_dwell_secs),
                    }
                } else {
                    CycleStep::TurningAway { elapsed }
                }
            }

            CycleStep::AwayHold { remaining } => {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    CycleStep::TurningBack { elapsed: 0.0 }
                } else {
                    CycleStep::AwayHold { remaining }
                }
            }

            CycleStep::TurningBack { elapsed } => {
                let elapsed = elapsed + dt;
                self.yaw = lerp(
                    tuning.away_yaw,
                    0.0,
                    ease_out_quad(elapsed / tuning.turn_back_secs),
                );
                if elapsed >= tuning.turn_back_secs {
                    self.yaw = 0.0;
                    self.gaze = Gaze::Watching;
                    log::trace!("gaze -> watching");
                    CycleStep::WatchHold {
                        remaining: sample_dwell(rng, tuning.watch_dwell_secs),
                    }
                } else {
                    CycleStep::TurningBack { elapsed }
                }
            }
        };
    }
}

fn sample_dwell(rng: &mut Pcg32, (min, max): (f32, f32)) -> f32 {
    rng.random_range(min..max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const DT: f32 = 0.01;

    fn pinned_tuning() -> Tuning {
        Tuning {
            watch_dwell_secs: (0.3, 0.3001),
            away_dwell_secs: (0.2, 0.2001),
            ..Tuning::default()
        }
    }

    /// Step until `pred` holds, returning the simulated time it took
    fn advance_until(
        doll: &mut Doll,
        rng: &mut Pcg32,
        tuning: &Tuning,
        pred: impl Fn(&Doll) -> bool,
    ) -> f32 {
        let mut elapsed = 0.0;
        while !pred(doll) {
            doll.advance(DT, rng, tuning);
            elapsed += DT;
            assert!(elapsed < 10.0, "condition never reached");
        }
        elapsed
    }

    #[test]
    fn test_cycle_opens_watching() {
        let mut rng = Pcg32::seed_from_u64(1);
        let tuning = pinned_tuning();
        let mut doll = Doll::new();
        assert_eq!(doll.step, CycleStep::Idle);

        doll.start(&mut rng, &tuning);
        assert_eq!(doll.gaze, Gaze::Watching);
        assert_eq!(doll.yaw, 0.0);
        assert!(matches!(doll.step, CycleStep::WatchHold { .. }));
    }

    #[test]
    fn test_idle_doll_never_moves() {
        let mut rng = Pcg32::seed_from_u64(1);
        let tuning = pinned_tuning();
        let mut doll = Doll::new();
        for _ in 0..100 {
            doll.advance(DT, &mut rng, &tuning);
        }
        assert_eq!(doll.step, CycleStep::Idle);
        assert_eq!(doll.yaw, 0.0);
    }

    #[test]
    fn test_not_watching_flips_mid_turn() {
        let mut rng = Pcg32::seed_from_u64(1);
        let tuning = pinned_tuning();
        let mut doll = Doll::new();
        doll.start(&mut rng, &tuning);

        advance_until(&mut doll, &mut rng, &tuning, |d| {
            matches!(d.step, CycleStep::TurningAway { .. })
        });
        // Turn has begun but the flag holds until the flip delay
        assert_eq!(doll.gaze, Gaze::Watching);

        let to_flip = advance_until(&mut doll, &mut rng, &tuning, |d| {
            d.gaze == Gaze::NotWatching
        });
        assert!(
            (to_flip - tuning.gaze_flip_delay_secs).abs() <= 2.0 * DT,
            "flag flipped {to_flip}s into the turn"
        );
        // Still mid-turn when the flag flips
        assert!(matches!(doll.step, CycleStep::TurningAway { .. }));
    }

    #[test]
    fn test_watching_flips_at_turn_back_completion() {
        let mut rng = Pcg32::seed_from_u64(1);
        let tuning = pinned_tuning();
        let mut doll = Doll::new();
        doll.start(&mut rng, &tuning);

        advance_until(&mut doll, &mut rng, &tuning, |d| {
            matches!(d.step, CycleStep::TurningBack { .. })
        });
        assert_eq!(doll.gaze, Gaze::NotWatching);

        let to_watch = advance_until(&mut doll, &mut rng, &tuning, |d| {
            d.gaze == Gaze::Watching
        });
        assert!(
            (to_watch - tuning.turn_back_secs).abs() <= 2.0 * DT,
            "watching flipped {to_watch}s into the turn back"
        );
        assert_eq!(doll.yaw, 0.0);
    }

    #[test]
    fn test_dwells_within_configured_ranges() {
        let mut rng = Pcg32::seed_from_u64(99);
        let tuning = Tuning::default();
        let mut doll = Doll::new();
        doll.start(&mut rng, &tuning);

        let watch_hold = advance_until(&mut doll, &mut rng, &tuning, |d| {
            matches!(d.step, CycleStep::TurningAway { .. })
        });
        let (watch_min, watch_max) = tuning.watch_dwell_secs;
        assert!(watch_hold >= watch_min - DT && watch_hold <= watch_max + DT);

        advance_until(&mut doll, &mut rng, &tuning, |d| {
            matches!(d.step, CycleStep::AwayHold { .. })
        });
        let away_hold = advance_until(&mut doll, &mut rng, &tuning, |d| {
            matches!(d.step, CycleStep::TurningBack { .. })
        });
        let (away_min, away_max) = tuning.away_dwell_secs;
        assert!(away_hold >= away_min - DT && away_hold <= away_max + DT);
    }

    #[test]
    fn test_alternation_runs_forever() {
        let mut rng = Pcg32::seed_from_u64(5);
        let tuning = Tuning::default();
        let mut doll = Doll::new();
        doll.start(&mut rng, &tuning);

        let mut flips = 0;
        let mut last = doll.gaze;
        // 30 simulated seconds; the longest possible cycle is ~4.1s
        for _ in 0..3000 {
            doll.advance(DT, &mut rng, &tuning);
            if doll.gaze != last {
                flips += 1;
                last = doll.gaze;
            }
        }
        assert!(flips >= 12, "only {flips} gaze flips in 30s");
    }
}
