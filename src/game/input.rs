//! Host-delivered event payloads
//!
//! The host samples its physics world and input devices once per frame
//! and hands the result over as a `FrameInput`. Positions and velocities
//! are in play-area pixels, y growing downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::EntityId;
use crate::consts::PLAY_WIDTH;
use crate::play_area_center;

/// Player body as simulated by the host this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    /// Standing on a platform (host collision result)
    pub grounded: bool,
}

/// Cursor key levels sampled this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeySample {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

/// A star or red coin as seen by the host this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollectibleView {
    pub id: EntityId,
    /// Resting on a platform; gravity is only applied while airborne
    pub resting: bool,
}

/// An obstacle as seen by the host this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: EntityId,
    pub pos: Vec2,
    pub vel_x: f32,
    /// Half the sprite height, for the bottom-edge test
    pub half_height: f32,
}

/// World snapshot delivered once per frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameInput {
    pub player: PlayerView,
    pub keys: KeySample,
    pub collectibles: Vec<CollectibleView>,
    pub obstacles: Vec<ObstacleView>,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            player: PlayerView {
                pos: play_area_center(),
                grounded: false,
            },
            keys: KeySample::default(),
            collectibles: Vec::new(),
            obstacles: Vec::new(),
        }
    }
}

/// Horizontal thirds of the play area used for pointer steering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlZone {
    Left,
    Middle,
    Right,
}

impl ControlZone {
    /// Zone containing a pointer x position
    pub fn at(x: f32) -> Self {
        if x < PLAY_WIDTH / 3.0 {
            ControlZone::Left
        } else if x > PLAY_WIDTH * 2.0 / 3.0 {
            ControlZone::Right
        } else {
            ControlZone::Middle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_thirds() {
        assert_eq!(ControlZone::at(0.0), ControlZone::Left);
        assert_eq!(ControlZone::at(100.0), ControlZone::Left);
        assert_eq!(ControlZone::at(400.0), ControlZone::Middle);
        assert_eq!(ControlZone::at(700.0), ControlZone::Right);
        assert_eq!(ControlZone::at(PLAY_WIDTH), ControlZone::Right);
    }

    #[test]
    fn test_zone_boundaries_fall_to_middle() {
        assert_eq!(ControlZone::at(PLAY_WIDTH / 3.0), ControlZone::Middle);
        assert_eq!(ControlZone::at(PLAY_WIDTH * 2.0 / 3.0), ControlZone::Middle);
    }

    #[test]
    fn test_frame_json_fills_missing_fields() {
        let frame: FrameInput = serde_json::from_str(
            r#"{"player": {"pos": [100.0, 200.0], "grounded": true}}"#,
        )
        .unwrap();
        assert_eq!(frame.player.pos, Vec2::new(100.0, 200.0));
        assert!(frame.player.grounded);
        assert!(!frame.keys.left);
        assert!(frame.collectibles.is_empty());
        assert!(frame.obstacles.is_empty());
    }
}
