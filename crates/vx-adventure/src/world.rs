//! The scene graph an adventure is played on.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AdventureError, AdventureResult};
use crate::scene::Scene;

/// Key of the scene every adventure starts in.
pub const DEFAULT_INITIAL_SCENE: &str = "intro";

const DEFAULT_RESTART_LINE: &str = "The tale begins anew.";

/// An immutable graph of scenes.
///
/// Scenes may reference each other in cycles; the only structural rule is
/// that every choice leads to a scene that exists.
#[derive(Debug, Clone)]
pub struct World {
    title: String,
    initial: String,
    restart_line: String,
    scenes: Vec<Scene>,
    index: HashMap<String, usize>,
}

/// On-disk shape of a world.
#[derive(Debug, Serialize, Deserialize)]
struct WorldFile {
    title: String,
    #[serde(default = "default_initial")]
    initial: String,
    #[serde(default = "default_restart_line")]
    restart_line: String,
    scenes: Vec<Scene>,
}

fn default_initial() -> String {
    DEFAULT_INITIAL_SCENE.to_string()
}

fn default_restart_line() -> String {
    DEFAULT_RESTART_LINE.to_string()
}

impl World {
    /// Create an empty world starting at `intro`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            initial: default_initial(),
            restart_line: default_restart_line(),
            scenes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Set the initial scene key.
    pub fn with_initial(mut self, key: impl Into<String>) -> Self {
        self.initial = key.into();
        self
    }

    /// Set the framing line spoken when the adventure restarts.
    pub fn with_restart_line(mut self, line: impl Into<String>) -> Self {
        self.restart_line = line.into();
        self
    }

    /// Add a scene. The first scene registered under a key wins lookups.
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.index
            .entry(scene.key.clone())
            .or_insert(self.scenes.len());
        self.scenes.push(scene);
        self
    }

    /// Parse and validate a world from JSON.
    pub fn from_json(json: &str) -> AdventureResult<Self> {
        let file: WorldFile = serde_json::from_str(json)?;
        let world = file
            .scenes
            .into_iter()
            .fold(Self::new(file.title), |w, scene| w.with_scene(scene))
            .with_initial(file.initial)
            .with_restart_line(file.restart_line);
        world.validate()?;
        Ok(world)
    }

    /// Read, parse and validate a world file.
    pub fn load(path: &Path) -> AdventureResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the world to pretty JSON.
    pub fn to_json(&self) -> AdventureResult<String> {
        let file = WorldFile {
            title: self.title.clone(),
            initial: self.initial.clone(),
            restart_line: self.restart_line.clone(),
            scenes: self.scenes.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// World title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Key of the initial scene.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Line spoken before the intro on restart.
    pub fn restart_line(&self) -> &str {
        &self.restart_line
    }

    /// Look up a scene by key.
    pub fn scene(&self, key: &str) -> Option<&Scene> {
        self.index.get(key).map(|&i| &self.scenes[i])
    }

    /// Whether a scene key exists.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// All scenes in declaration order.
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Number of scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the world has no scenes.
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Check the structural invariants of the graph.
    pub fn validate(&self) -> AdventureResult<()> {
        if !self.contains(&self.initial) {
            return Err(AdventureError::MissingInitialScene(self.initial.clone()));
        }

        let mut seen = HashSet::new();
        for scene in &self.scenes {
            if !seen.insert(scene.key.as_str()) {
                return Err(AdventureError::DuplicateScene(scene.key.clone()));
            }

            let mut choice_keys = HashSet::new();
            for choice in &scene.choices {
                if !choice_keys.insert(choice.key.as_str()) {
                    return Err(AdventureError::DuplicateChoice {
                        scene: scene.key.clone(),
                        choice: choice.key.clone(),
                    });
                }
                if !self.contains(&choice.target) {
                    return Err(AdventureError::DanglingChoice {
                        scene: scene.key.clone(),
                        choice: choice.key.clone(),
                        target: choice.target.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Choice;

    fn small_world() -> World {
        World::new("Test")
            .with_scene(
                Scene::new("intro", "Gate", "A gate.")
                    .with_choice(Choice::new("enter", "Enter", "hall")),
            )
            .with_scene(
                Scene::new("hall", "Hall", "A hall.")
                    .with_choice(Choice::new("back", "Go back", "intro")),
            )
    }

    #[test]
    fn lookup() {
        let world = small_world();
        assert_eq!(world.len(), 2);
        assert_eq!(world.initial(), "intro");
        assert_eq!(world.scene("hall").map(|s| s.title.as_str()), Some("Hall"));
        assert!(world.scene("cellar").is_none());
    }

    #[test]
    fn valid_cyclic_world() {
        assert!(small_world().validate().is_ok());
    }

    #[test]
    fn dangling_choice_rejected() {
        let world = small_world().with_scene(
            Scene::new("cellar", "Cellar", "Dark.")
                .with_choice(Choice::new("dig", "Dig", "nowhere")),
        );
        let err = world.validate().unwrap_err();
        assert!(matches!(
            err,
            AdventureError::DanglingChoice { ref target, .. } if target == "nowhere"
        ));
    }

    #[test]
    fn missing_initial_rejected() {
        let world = small_world().with_initial("start");
        assert!(matches!(
            world.validate(),
            Err(AdventureError::MissingInitialScene(_))
        ));
    }

    #[test]
    fn duplicate_keys_rejected() {
        let world = small_world().with_scene(Scene::new("hall", "Hall 2", ""));
        assert!(matches!(
            world.validate(),
            Err(AdventureError::DuplicateScene(_))
        ));

        let world = World::new("Dup").with_scene(
            Scene::new("intro", "Gate", "")
                .with_choice(Choice::new("wait", "Wait", "intro"))
                .with_choice(Choice::new("wait", "Wait more", "intro")),
        );
        assert!(matches!(
            world.validate(),
            Err(AdventureError::DuplicateChoice { .. })
        ));
    }

    #[test]
    fn json_round_trip_keeps_order() {
        let world = small_world().with_restart_line("Again!");
        let json = world.to_json().unwrap();
        let loaded = World::from_json(&json).unwrap();

        assert_eq!(loaded.title(), "Test");
        assert_eq!(loaded.restart_line(), "Again!");
        let keys: Vec<_> = loaded.scenes().iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["intro", "hall"]);
    }

    #[test]
    fn json_with_dangling_target_fails() {
        let json = r#"{
            "title": "Broken",
            "scenes": [
                {"key": "intro", "title": "Start", "description": "",
                 "choices": [{"key": "go", "description": "Go", "target": "gone"}]}
            ]
        }"#;
        assert!(World::from_json(json).is_err());
    }
}
