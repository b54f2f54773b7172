//! Per-session adventure state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded move through the scene graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Scene the player left.
    pub from: String,
    /// Key of the choice taken.
    pub action: String,
    /// Scene the player arrived at.
    pub to: String,
    /// When the move happened.
    pub timestamp: DateTime<Utc>,
}

/// Mutable state of one live conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdventureState {
    /// Opaque session identifier.
    pub session_id: String,
    /// When the session (or the last restart) began.
    pub started_at: DateTime<Utc>,
    /// Name the player gave, if any.
    pub player_name: Option<String>,
    /// Key of the scene the player is in.
    pub current_scene: String,
    /// Transitions taken, oldest first.
    pub history: Vec<Transition>,
    /// Journal lines gathered from effects.
    pub journal: Vec<String>,
    /// Items gathered from effects.
    pub inventory: Vec<String>,
}

impl AdventureState {
    /// Start a fresh session in the given scene.
    pub fn new(initial_scene: impl Into<String>) -> Self {
        Self {
            session_id: new_session_id(),
            started_at: Utc::now(),
            player_name: None,
            current_scene: initial_scene.into(),
            history: Vec::new(),
            journal: Vec::new(),
            inventory: Vec::new(),
        }
    }

    /// Set the player's name.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = Some(name.into());
        self
    }

    /// Record a transition and move to its destination.
    pub fn advance(&mut self, action: impl Into<String>, to: impl Into<String>) {
        let to = to.into();
        let from = std::mem::replace(&mut self.current_scene, to.clone());
        self.history.push(Transition {
            from,
            action: action.into(),
            to,
            timestamp: Utc::now(),
        });
    }

    /// Reset to the initial scene with a new identity.
    ///
    /// The player's name survives a restart.
    pub fn reset(&mut self, initial_scene: impl Into<String>) {
        self.session_id = new_session_id();
        self.started_at = Utc::now();
        self.current_scene = initial_scene.into();
        self.history.clear();
        self.journal.clear();
        self.inventory.clear();
    }

    /// The most recent transition.
    pub fn last_transition(&self) -> Option<&Transition> {
        self.history.last()
    }
}

fn new_session_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state() {
        let state = AdventureState::new("intro");
        assert_eq!(state.current_scene, "intro");
        assert_eq!(state.session_id.len(), 8);
        assert!(state.history.is_empty());
        assert!(state.player_name.is_none());
    }

    #[test]
    fn advance_records_transition() {
        let mut state = AdventureState::new("intro");
        state.advance("enter_temple", "inner_hall");

        assert_eq!(state.current_scene, "inner_hall");
        let last = state.last_transition().unwrap();
        assert_eq!(last.from, "intro");
        assert_eq!(last.action, "enter_temple");
        assert_eq!(last.to, "inner_hall");
    }

    #[test]
    fn reset_clears_progress_and_rotates_id() {
        let mut state = AdventureState::new("intro").with_player_name("Mira");
        state.advance("go", "hall");
        state.journal.push("note".to_string());
        state.inventory.push("key".to_string());
        let old_id = state.session_id.clone();

        state.reset("intro");

        assert_eq!(state.current_scene, "intro");
        assert!(state.history.is_empty());
        assert!(state.journal.is_empty());
        assert!(state.inventory.is_empty());
        assert_ne!(state.session_id, old_id);
        assert_eq!(state.player_name.as_deref(), Some("Mira"));
    }
}
