//! Bundled adventure worlds.

mod aetherwyn;
mod gita;

pub use aetherwyn::aetherwyn;
pub use gita::gita;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrator::CLOSING_PROMPT;
    use crate::world::World;

    fn bundled() -> Vec<World> {
        vec![aetherwyn(), gita()]
    }

    #[test]
    fn every_destination_resolves() {
        for world in bundled() {
            for scene in world.scenes() {
                for choice in &scene.choices {
                    assert!(
                        world.contains(&choice.target),
                        "{}: {}.{} -> {}",
                        world.title(),
                        scene.key,
                        choice.key,
                        choice.target
                    );
                }
            }
            assert!(world.validate().is_ok(), "{} failed validation", world.title());
        }
    }

    #[test]
    fn every_scene_renders_with_closing_prompt() {
        for world in bundled() {
            for scene in world.scenes() {
                let text = crate::narrator::render_scene(Some(scene));
                assert!(text.ends_with(CLOSING_PROMPT), "{}", scene.key);
                assert!(!scene.choices.is_empty(), "{} is a dead end", scene.key);
            }
        }
    }

    #[test]
    fn every_scene_is_reachable_from_intro() {
        for world in bundled() {
            let mut seen = std::collections::HashSet::new();
            let mut stack = vec![world.initial().to_string()];
            while let Some(key) = stack.pop() {
                if !seen.insert(key.clone()) {
                    continue;
                }
                if let Some(scene) = world.scene(&key) {
                    stack.extend(scene.choices.iter().map(|c| c.target.clone()));
                }
            }
            assert_eq!(seen.len(), world.len(), "{}", world.title());
        }
    }

    #[test]
    fn choice_keys_resolve_to_themselves_everywhere() {
        for world in bundled() {
            for scene in world.scenes() {
                for choice in &scene.choices {
                    let resolved = crate::resolver::resolve_choice(scene, &choice.key);
                    assert_eq!(resolved.map(|c| &c.key), Some(&choice.key));
                }
            }
        }
    }
}
