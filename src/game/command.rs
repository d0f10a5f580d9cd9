//! Commands issued back to the host engine
//!
//! The controller never touches the scene directly: every effect of an
//! event is described by one of these, applied by the host in batch
//! order. Velocities use screen coordinates, positive y downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{EntityId, EntityKind};
use super::session::{BackgroundTier, SessionSummary};

/// Who a velocity or gravity assignment applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    Player,
    Entity(EntityId),
    /// Every platform in the scene
    Platforms,
    /// Every star and red coin in the scene
    Collectibles,
    /// Every obstacle in the scene
    Obstacles,
}

/// Player-facing notices the host renders as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    NameRequired,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::NameRequired => "Please enter your name to play!",
        }
    }
}

/// Run animation selection for the player sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAnim {
    Left,
    Idle,
    Right,
}

/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sound {
    Movement,
    Jump,
}

/// One instruction for the host engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Ask the page for the player's name; the answer comes back through
    /// the name-entered handler
    RequestName,
    ShowNotice(Notice),
    /// Create an entity; the id is how the controller refers to it later
    Spawn {
        id: EntityId,
        kind: EntityKind,
        pos: Vec2,
    },
    SpawnPlayer {
        pos: Vec2,
    },
    Despawn(EntityId),
    SetVelocityX {
        target: Target,
        vx: f32,
    },
    SetVelocityY {
        target: Target,
        vy: f32,
    },
    SetGravityY {
        target: Target,
        gravity: f32,
    },
    PlayAnimation(PlayerAnim),
    SetBackground(BackgroundTier),
    SetScoreText(u32),
    /// Schedule a repeating timer driving the spawn-tick handler.
    /// The host cancels it when it tears the scene down.
    StartSpawnTimer {
        period_ms: u32,
    },
    ShowTouchControls,
    PlaySound(Sound),
    /// Start the looping gameplay music
    StartMusic,
    StopAllAudio,
    ShowSummary(SessionSummary),
    /// Tear the scene down ahead of a fresh session-start batch
    ClearScene,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_text() {
        assert_eq!(
            Notice::NameRequired.message(),
            "Please enter your name to play!"
        );
    }

    #[test]
    fn test_command_json_shape() {
        let cmd = Command::Spawn {
            id: EntityId(7),
            kind: EntityKind::Star,
            pos: Vec2::new(120.0, 0.0),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(json, r#"{"Spawn":{"id":7,"kind":"Star","pos":[120.0,0.0]}}"#);

        let back: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);
    }
}
