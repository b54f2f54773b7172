//! Error types for the adventure engine.

use thiserror::Error;

/// Result type for adventure operations.
pub type AdventureResult<T> = Result<T, AdventureError>;

/// Errors that can occur while loading or playing an adventure.
#[derive(Debug, Error)]
pub enum AdventureError {
    /// The utterance did not match any choice of the current scene.
    #[error("could not match \"{0}\" to any choice")]
    Unresolved(String),

    /// Scene key not present in the world.
    #[error("scene not found: {0}")]
    UnknownScene(String),

    /// The world has no scene under its initial key.
    #[error("initial scene \"{0}\" is missing")]
    MissingInitialScene(String),

    /// A choice points at a scene that does not exist.
    #[error("choice \"{choice}\" in scene \"{scene}\" leads to unknown scene \"{target}\"")]
    DanglingChoice {
        /// Scene owning the choice.
        scene: String,
        /// The choice key.
        choice: String,
        /// The missing destination.
        target: String,
    },

    /// Two scenes share a key.
    #[error("duplicate scene: {0}")]
    DuplicateScene(String),

    /// Two choices in one scene share a key.
    #[error("duplicate choice \"{choice}\" in scene \"{scene}\"")]
    DuplicateChoice {
        /// Scene owning the choices.
        scene: String,
        /// The repeated key.
        choice: String,
    },

    /// World file could not be read.
    #[error("failed to read world: {0}")]
    Io(#[from] std::io::Error),

    /// World JSON could not be parsed.
    #[error("invalid world data: {0}")]
    Parse(#[from] serde_json::Error),
}
