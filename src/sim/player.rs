//! Player marker
//!
//! A single position and velocity on a one-dimensional track. Velocity is
//! either zero or the fixed run speed; stopping eases the velocity down over
//! a short window instead of cutting it, so a released key still coasts.
//! The coast can lose the round if the doll turns back during it.

use serde::{Deserialize, Serialize};

use crate::ease_out_quad;

/// In-flight stop ease
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct StopEase {
    from: f32,
    elapsed: f32,
    duration: f32,
}

/// The player marker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Track position; decreases toward the finish line
    pub position: f32,
    /// Track units per tick; > 0 means moving
    pub velocity: f32,
    ease: Option<StopEase>,
}

impl Player {
    pub fn new(start_position: f32) -> Self {
        Self {
            position: start_position,
            velocity: 0.0,
            ease: None,
        }
    }

    /// Start running at full speed immediately (no ramp-up); cancels any
    /// stop ease in flight
    pub fn run(&mut self, run_velocity: f32) {
        self.velocity = run_velocity;
        self.ease = None;
    }

    /// Ease the velocity to zero over `ease_secs`. Velocity stays strictly
    /// positive until the window elapses. No-op when already stopped.
    pub fn stop(&mut self, ease_secs: f32) {
        if self.velocity > 0.0 {
            self.ease = Some(StopEase {
                from: self.velocity,
                elapsed: 0.0,
                duration: ease_secs,
            });
        }
    }

    /// Advance an in-flight stop ease by one tick
    pub fn advance_ease(&mut self, dt: f32) {
        if let Some(ease) = &mut self.ease {
            ease.elapsed += dt;
            if ease.elapsed >= ease.duration {
                self.velocity = 0.0;
                self.ease = None;
            } else {
                let u = ease.elapsed / ease.duration;
                self.velocity = ease.from * (1.0 - ease_out_quad(u));
            }
        }
    }

    /// Apply one tick of movement. Callers only invoke this while the round
    /// is active; the tick stops entirely once the round is over.
    pub fn update(&mut self) {
        self.position -= self.velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_run_is_immediate() {
        let mut player = Player::new(5.0);
        player.run(0.03);
        assert_eq!(player.velocity, 0.03);
    }

    #[test]
    fn test_update_moves_toward_finish() {
        let mut player = Player::new(5.0);
        player.run(0.03);
        for _ in 0..10 {
            player.update();
        }
        assert!((player.position - 4.7).abs() < 1e-5);
    }

    #[test]
    fn test_stop_coasts_through_the_ease() {
        let mut player = Player::new(5.0);
        player.run(0.03);
        player.stop(0.1);

        // Mid-ease (0.05s in): decayed but still strictly positive
        for _ in 0..3 {
            player.advance_ease(DT);
        }
        assert!(player.velocity > 0.0);
        assert!(player.velocity < 0.03);

        // Past the ease window: exactly zero
        for _ in 0..4 {
            player.advance_ease(DT);
        }
        assert_eq!(player.velocity, 0.0);
    }

    #[test]
    fn test_run_cancels_stop_ease() {
        let mut player = Player::new(5.0);
        player.run(0.03);
        player.stop(0.1);
        player.advance_ease(DT);
        player.run(0.03);
        assert_eq!(player.velocity, 0.03);

        // No ease left to decay it
        for _ in 0..20 {
            player.advance_ease(DT);
        }
        assert_eq!(player.velocity, 0.03);
    }

    #[test]
    fn test_stop_while_stopped_is_noop() {
        let mut player = Player::new(5.0);
        player.stop(0.1);
        for _ in 0..20 {
            player.advance_ease(DT);
            player.update();
        }
        assert_eq!(player.velocity, 0.0);
        assert_eq!(player.position, 5.0);
    }

    #[test]
    fn test_position_monotonic_while_running() {
        let mut player = Player::new(5.0);
        player.run(0.03);
        let mut last = player.position;
        for _ in 0..100 {
            player.update();
            assert!(player.position < last);
            last = player.position;
        }
    }
}
