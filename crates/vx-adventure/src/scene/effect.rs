//! Effects applied to the session when a choice is taken.

use serde::{Deserialize, Serialize};

use crate::state::AdventureState;

/// A deterministic mutation applied when a choice is made.
///
/// Effects only ever append. Taking the same choice twice records the
/// entry twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// Append a line to the player's journal.
    AddJournal {
        /// Journal text.
        entry: String,
    },
    /// Append an item to the player's inventory.
    AddItem {
        /// Item name.
        item: String,
    },
}

impl Effect {
    /// Journal effect shorthand.
    pub fn journal(entry: impl Into<String>) -> Self {
        Self::AddJournal {
            entry: entry.into(),
        }
    }

    /// Inventory effect shorthand.
    pub fn item(item: impl Into<String>) -> Self {
        Self::AddItem { item: item.into() }
    }

    /// Apply this effect to a session.
    pub fn apply(&self, state: &mut AdventureState) {
        match self {
            Effect::AddJournal { entry } => state.journal.push(entry.clone()),
            Effect::AddItem { item } => state.inventory.push(item.clone()),
        }
    }
}
