//! Configuration for a game-master session.

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::AdventureResult;
use crate::world::World;
use crate::worlds;

/// The bundled adventures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorldName {
    /// The ruins of Aetherwyn.
    #[default]
    Aetherwyn,
    /// The inner realm of the Gita.
    Gita,
}

impl WorldName {
    /// Parse a world name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "aetherwyn" | "ruins" => Some(Self::Aetherwyn),
            "gita" | "inner-realm" | "inner_realm" => Some(Self::Gita),
            _ => None,
        }
    }

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Aetherwyn => "aetherwyn",
            Self::Gita => "gita",
        }
    }

    /// Build the bundled world.
    pub fn build(&self) -> World {
        match self {
            Self::Aetherwyn => worlds::aetherwyn(),
            Self::Gita => worlds::gita(),
        }
    }
}

/// Configuration for a game-master session.
#[derive(Debug, Clone, Default)]
pub struct AdventureConfig {
    /// Bundled world to play when no file is given.
    pub world: WorldName,
    /// World JSON file that overrides the bundled world.
    pub world_file: Option<PathBuf>,
    /// Name to address the player by.
    pub player_name: Option<String>,
}

impl AdventureConfig {
    /// Select a bundled world.
    pub fn with_world(mut self, world: WorldName) -> Self {
        self.world = world;
        self
    }

    /// Load the world from a JSON file instead.
    pub fn with_world_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.world_file = Some(path.into());
        self
    }

    /// Set the player name.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = Some(name.into());
        self
    }

    /// Load the configured world once, for sharing across sessions.
    pub fn load_world(&self) -> AdventureResult<Arc<World>> {
        let world = match &self.world_file {
            Some(path) => World::load(path)?,
            None => self.world.build(),
        };
        tracing::debug!(title = world.title(), scenes = world.len(), "loaded world");
        Ok(Arc::new(world))
    }
}
