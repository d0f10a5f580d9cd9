//! Session state and the phase machine

use serde::{Deserialize, Serialize};

use crate::consts::WIN_SCORE;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the player to enter a name
    AwaitingName,
    /// Active gameplay
    Playing,
    /// Session ended below the winning score
    GameOver,
    /// Session ended at the winning score
    Victory,
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    GameOver,
    Victory,
}

/// Background color tier, stepped by score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BackgroundTier {
    #[default]
    Default,
    Tier1,
    Tier2,
}

impl BackgroundTier {
    /// Tier for a score. The two mid bands recolor the scene; everything
    /// outside them keeps the default.
    pub fn for_score(score: u32) -> Self {
        if (15..=29).contains(&score) {
            BackgroundTier::Tier1
        } else if (30..=50).contains(&score) {
            BackgroundTier::Tier2
        } else {
            BackgroundTier::Default
        }
    }

    /// CSS color the host paints for this tier
    pub fn css_color(&self) -> &'static str {
        match self {
            BackgroundTier::Default => "#112211",
            BackgroundTier::Tier1 => "#324ca8",
            BackgroundTier::Tier2 => "#eb03fc",
        }
    }
}

/// Live state for one play session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub player_name: String,
    pub score: u32,
    pub alive: bool,
    /// Tier last pushed to the host, so recolors only go out on change
    pub tier: BackgroundTier,
}

impl Session {
    pub fn new(player_name: &str) -> Self {
        Self {
            player_name: player_name.to_string(),
            score: 0,
            alive: true,
            tier: BackgroundTier::Default,
        }
    }

    /// Outcome if the session ended right now
    pub fn outcome(&self) -> Outcome {
        if self.score >= WIN_SCORE {
            Outcome::Victory
        } else {
            Outcome::GameOver
        }
    }
}

/// End-of-session report the host renders, restart control included
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub outcome: Outcome,
    pub player_name: String,
    pub score: u32,
    pub best_score: u32,
}
