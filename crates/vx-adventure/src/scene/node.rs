//! Scene and choice structures.

use serde::{Deserialize, Serialize};

use super::effect::Effect;

/// A node of the narrative graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Unique key of this scene.
    pub key: String,
    /// Short title read before the description.
    pub title: String,
    /// Narrative text.
    pub description: String,
    /// Outgoing choices, in presentation order.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl Scene {
    /// Create a scene with no choices.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            description: description.into(),
            choices: Vec::new(),
        }
    }

    /// Add a choice.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Look up a choice by key.
    pub fn choice(&self, key: &str) -> Option<&Choice> {
        self.choices.iter().find(|c| c.key == key)
    }
}

/// A labelled edge from one scene to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Key, unique within the owning scene. Players can say it verbatim.
    pub key: String,
    /// Human-readable description.
    pub description: String,
    /// Destination scene key.
    pub target: String,
    /// Effects applied when the choice is taken.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
}

impl Choice {
    /// Create a choice leading to `target`.
    pub fn new(
        key: impl Into<String>,
        description: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
            target: target.into(),
            effects: Vec::new(),
        }
    }

    /// Add an effect.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}
