//! Entity identity ledger
//!
//! The controller names every entity it asks the host to spawn, so
//! later overlap notifications can be classified without the host
//! knowing anything about gameplay kinds.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Handle for a spawned entity
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(pub u32);

/// Gameplay classification of a spawned entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Platform,
    Star,
    RedCoin,
    Obstacle,
}

/// Allocates ids and remembers the kind behind each one.
/// Ids are never reused, even across `clear`.
#[derive(Debug, Clone, Default)]
pub struct EntityLedger {
    kinds: HashMap<EntityId, EntityKind>,
    next_id: u32,
}

impl EntityLedger {
    /// Allocate an id for a new entity of the given kind
    pub fn spawn(&mut self, kind: EntityKind) -> EntityId {
        self.next_id += 1;
        let id = EntityId(self.next_id);
        self.kinds.insert(id, kind);
        id
    }

    /// Kind of a live entity, if the id is known
    pub fn kind_of(&self, id: EntityId) -> Option<EntityKind> {
        self.kinds.get(&id).copied()
    }

    /// Forget a despawned entity
    pub fn remove(&mut self, id: EntityId) -> Option<EntityKind> {
        self.kinds.remove(&id)
    }

    /// Forget every entity (for scene teardown)
    pub fn clear(&mut self) {
        self.kinds.clear();
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_classify_remove() {
        let mut ledger = EntityLedger::default();
        let star = ledger.spawn(EntityKind::Star);
        let platform = ledger.spawn(EntityKind::Platform);
        assert_ne!(star, platform);
        assert_eq!(ledger.kind_of(star), Some(EntityKind::Star));
        assert_eq!(ledger.kind_of(platform), Some(EntityKind::Platform));

        assert_eq!(ledger.remove(star), Some(EntityKind::Star));
        assert_eq!(ledger.kind_of(star), None);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let mut ledger = EntityLedger::default();
        let before = ledger.spawn(EntityKind::Obstacle);
        ledger.clear();
        assert!(ledger.is_empty());
        let after = ledger.spawn(EntityKind::Obstacle);
        assert_ne!(before, after);
        // A handle from before the clear stays dead
        assert_eq!(ledger.kind_of(before), None);
    }
}
