//! Branching scene engine for the Voxtale game-master agents.
//!
//! A game master narrates a static graph of scenes. Each turn the player's
//! free-form utterance is resolved against the current scene's choices, the
//! chosen edge's effects are applied to the session journal and inventory,
//! and the destination scene is rendered back as plain text for the speech
//! pipeline to read aloud.

/// Command parsing for game-master turns.
pub mod command;
/// Adventure configuration.
pub mod config;
/// The scene/transition engine.
pub mod engine;
/// Error types for the adventure engine.
pub mod error;
/// Spoken text templates.
pub mod narrator;
/// Persona system prompts.
pub mod prompt;
/// Utterance-to-choice resolution.
pub mod resolver;
/// Scenes, choices and effects.
pub mod scene;
/// Per-session adventure state.
pub mod state;
/// The scene graph.
pub mod world;
/// Bundled adventure worlds.
pub mod worlds;

pub use command::{AdventureCommand, parse_command};
pub use config::{AdventureConfig, WorldName};
pub use engine::GameMaster;
pub use error::{AdventureError, AdventureResult};
pub use resolver::resolve_choice;
pub use scene::{Choice, Effect, Scene};
pub use state::{AdventureState, Transition};
pub use world::World;
