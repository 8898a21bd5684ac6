//! Scene snapshot for the external renderer
//!
//! The core owns no rendering: it only positions and rotates the entities
//! the renderer hands it. A snapshot carries exactly the per-frame values;
//! track geometry is static and fetched once.

use serde::Serialize;

use crate::sim::GameState;

/// Per-frame values the renderer needs
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SceneSnapshot {
    /// Player marker position along the track axis
    pub player_x: f32,
    /// Doll model yaw (radians; 0 faces the player)
    pub doll_yaw: f32,
    /// Fraction of the time limit remaining (scales the progress bar)
    pub limit_fraction: f32,
}

/// Static track geometry
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrackGeometry {
    /// Start pillar position
    pub start_x: f32,
    /// Finish pillar position
    pub finish_x: f32,
}

/// Capture the current frame's scene values
pub fn snapshot(state: &GameState) -> SceneSnapshot {
    SceneSnapshot {
        player_x: state.player.position,
        doll_yaw: state.doll.yaw,
        limit_fraction: state.director.limit_fraction(&state.tuning),
    }
}

/// Track geometry for scene setup
pub fn track_geometry(state: &GameState) -> TrackGeometry {
    TrackGeometry {
        start_x: state.tuning.start_position,
        finish_x: state.tuning.finish_position(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_reflects_state() {
        let state = GameState::new(1);
        let scene = snapshot(&state);
        assert_eq!(scene.player_x, 5.0);
        assert_eq!(scene.doll_yaw, 0.0);
        assert_eq!(scene.limit_fraction, 1.0);

        let track = track_geometry(&state);
        assert_eq!(track.start_x, 5.0);
        assert_eq!(track.finish_x, -5.0);
    }
}
