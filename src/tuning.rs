//! Data-driven game balance
//!
//! The host page can override these through the bridge constructor;
//! everything else derives from them.

use serde::{Deserialize, Serialize};

/// Tunable balance values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration on the player and airborne pickups (pixels/s²)
    pub gravity: f32,
    /// Horizontal speed from the cursor keys (pixels/s)
    pub run_speed: f32,
    /// Period of the repeating spawn timer (milliseconds)
    pub spawn_period_ms: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 800.0,
            run_speed: 300.0,
            spawn_period_ms: 500,
        }
    }
}

impl Tuning {
    /// Upward takeoff speed of a jump
    pub fn jump_speed(&self) -> f32 {
        self.gravity / 1.6
    }

    /// Downward scroll speed of the platform group
    pub fn scroll_speed(&self) -> f32 {
        self.run_speed / 6.0
    }

    /// Downward speed given to pickups and obstacles when they spawn
    pub fn fall_speed(&self) -> f32 {
        self.run_speed
    }

    /// Horizontal speed while steering with the pointer
    pub fn pointer_speed(&self) -> f32 {
        self.run_speed * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let tuning = Tuning::default();
        assert_eq!(tuning.gravity, 800.0);
        assert_eq!(tuning.run_speed, 300.0);
        assert_eq!(tuning.spawn_period_ms, 500);
    }

    #[test]
    fn test_derived_speeds() {
        let tuning = Tuning::default();
        assert_eq!(tuning.jump_speed(), 500.0);
        assert_eq!(tuning.scroll_speed(), 50.0);
        assert_eq!(tuning.fall_speed(), 300.0);
        assert_eq!(tuning.pointer_speed(), 600.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"gravity": 640.0}"#).unwrap();
        assert_eq!(tuning.gravity, 640.0);
        assert_eq!(tuning.run_speed, 300.0);
        assert_eq!(tuning.jump_speed(), 400.0);
    }
}
