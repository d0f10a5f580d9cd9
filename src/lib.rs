//! Star Hopper - a single-scene platform-hopper arcade game
//!
//! Core modules:
//! - `game`: Gameplay rules (state machine, spawning, scoring, input mapping)
//! - `records`: Per-player best scores for the page session
//! - `tuning`: Data-driven game balance
//! - `audio`: Procedural Web Audio sound effects (wasm32 only)
//! - `bridge`: JS host adapter wrapping the controller (wasm32 only)
//!
//! The host engine owns rendering, physics integration and collision
//! detection. It reports what happened through the `GameplayController`
//! handlers and applies the `Command` batches they return.

pub mod game;
pub mod records;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod bridge;

pub use game::GameplayController;
pub use records::PlayerRecords;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (pixels, origin top-left, y grows downward)
    pub const PLAY_WIDTH: f32 = 800.0;
    pub const PLAY_HEIGHT: f32 = 1000.0;

    /// Score that ends the session in victory
    pub const WIN_SCORE: u32 = 50;
    /// Points for collecting a star
    pub const STAR_POINTS: u32 = 1;
    /// Points for collecting a red coin
    pub const RED_COIN_POINTS: u32 = 2;

    /// Platforms scattered over the field when a session starts
    pub const INITIAL_PLATFORM_COUNT: usize = 20;
    /// Horizontal drift speed for obstacles and the platform group (pixels/s)
    pub const DRIFT_SPEED: f32 = 50.0;
}

/// True while the position is inside the play area (edges inclusive)
#[inline]
pub fn in_play_area(pos: Vec2) -> bool {
    pos.x >= 0.0 && pos.x <= consts::PLAY_WIDTH && pos.y >= 0.0 && pos.y <= consts::PLAY_HEIGHT
}

/// Center of the play area, where the player spawns
#[inline]
pub fn play_area_center() -> Vec2 {
    Vec2::new(consts::PLAY_WIDTH / 2.0, consts::PLAY_HEIGHT / 2.0)
}
