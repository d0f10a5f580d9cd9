//! Per-player best score tracking
//!
//! Held in memory by the application context for the page session;
//! nothing outlives the page.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Best result on file for one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub highest_score: u32,
}

/// All player records for this page session, keyed by name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerRecords {
    players: HashMap<String, PlayerRecord>,
}

impl PlayerRecords {
    pub fn new() -> Self {
        Self {
            players: HashMap::new(),
        }
    }

    /// Make sure a record exists for the player (zero score when new)
    pub fn ensure(&mut self, name: &str) {
        self.players.entry(name.to_string()).or_insert_with(|| {
            log::info!("First session for {}", name);
            PlayerRecord {
                name: name.to_string(),
                highest_score: 0,
            }
        });
    }

    /// Fold a finished session's score into the player's record.
    /// Returns the best score on file after the merge.
    pub fn record(&mut self, name: &str, score: u32) -> u32 {
        let entry = self
            .players
            .entry(name.to_string())
            .or_insert_with(|| PlayerRecord {
                name: name.to_string(),
                highest_score: 0,
            });
        if score > entry.highest_score {
            entry.highest_score = score;
            log::info!("New best for {}: {}", name, score);
        }
        entry.highest_score
    }

    /// Best score on file for the player
    pub fn highest(&self, name: &str) -> Option<u32> {
        self.players.get(name).map(|r| r.highest_score)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
