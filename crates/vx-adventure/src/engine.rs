//! The scene/transition engine.

use std::sync::Arc;

use crate::command::{AdventureCommand, parse_command};
use crate::error::{AdventureError, AdventureResult};
use crate::narrator;
use crate::resolver::resolve_choice;
use crate::scene::Choice;
use crate::state::AdventureState;
use crate::world::World;

const HELP_TEXT: &str = "Say what you want to do, or repeat one of the option keys exactly.\n\
    look - hear the current scene again\n\
    journal (or inventory) - recap what you have found\n\
    restart - begin the adventure from the start\n\
    quit - end the session";

/// Drives sessions through a shared, immutable world.
///
/// One game master can serve any number of sessions; all per-player data
/// lives in [`AdventureState`].
#[derive(Debug, Clone)]
pub struct GameMaster {
    world: Arc<World>,
}

impl GameMaster {
    /// Create a game master over a loaded world.
    pub fn new(world: Arc<World>) -> Self {
        Self { world }
    }

    /// The world being narrated.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// A fresh session positioned at the initial scene.
    pub fn start(&self) -> AdventureState {
        AdventureState::new(self.world.initial())
    }

    /// Render a scene by key. Unknown keys render the empty void.
    pub fn render(&self, scene_key: &str) -> String {
        narrator::render_scene(self.world.scene(scene_key))
    }

    /// Resolve and take a choice, returning the choice taken.
    ///
    /// On error the state is untouched: [`AdventureError::Unresolved`] when
    /// nothing matches, [`AdventureError::UnknownScene`] when the session
    /// points at a scene the world does not have.
    pub fn take_action(
        &self,
        state: &mut AdventureState,
        utterance: &str,
    ) -> AdventureResult<&Choice> {
        let scene = self
            .world
            .scene(&state.current_scene)
            .ok_or_else(|| AdventureError::UnknownScene(state.current_scene.clone()))?;
        let choice = resolve_choice(scene, utterance)
            .ok_or_else(|| AdventureError::Unresolved(utterance.trim().to_string()))?;

        for effect in &choice.effects {
            effect.apply(state);
        }
        tracing::debug!(
            session = %state.session_id,
            from = %state.current_scene,
            action = %choice.key,
            to = %choice.target,
            "transition"
        );
        state.advance(choice.key.clone(), choice.target.clone());

        Ok(choice)
    }

    /// Take a turn and describe the outcome.
    ///
    /// An utterance that matches nothing re-renders the current scene with a
    /// clarification and records nothing.
    pub fn apply_action(&self, state: &mut AdventureState, utterance: &str) -> String {
        match self.take_action(state, utterance) {
            Ok(choice) => format!(
                "{}\n\n{}",
                narrator::acknowledge(choice),
                self.render(&choice.target)
            ),
            Err(err) => {
                tracing::warn!(session = %state.session_id, scene = %state.current_scene, "{err}");
                format!(
                    "{}\n\n{}",
                    narrator::clarify(utterance),
                    self.render(&state.current_scene)
                )
            }
        }
    }

    /// Reset the session to the intro and render it.
    pub fn restart(&self, state: &mut AdventureState) -> String {
        state.reset(self.world.initial());
        tracing::debug!(session = %state.session_id, "restarted");
        format!(
            "{}\n\n{}",
            self.world.restart_line(),
            self.render(self.world.initial())
        )
    }

    /// Recap the session so far.
    pub fn progress(&self, state: &AdventureState) -> String {
        narrator::recap(state, self.world.scene(&state.current_scene))
    }

    /// Execute a parsed command.
    pub fn execute(&self, state: &mut AdventureState, command: AdventureCommand) -> String {
        match command {
            AdventureCommand::Act { utterance } => self.apply_action(state, &utterance),
            AdventureCommand::Look => self.render(&state.current_scene),
            AdventureCommand::Restart => self.restart(state),
            AdventureCommand::Progress => self.progress(state),
            AdventureCommand::Help => HELP_TEXT.to_string(),
            AdventureCommand::Quit => "Farewell, traveler. Your tale pauses here.".to_string(),
        }
    }

    /// Parse and execute one player turn.
    ///
    /// A choice key of the current scene always wins over a meta phrase.
    pub fn process(&self, state: &mut AdventureState, input: &str) -> String {
        let is_choice_key = self
            .world
            .scene(&state.current_scene)
            .is_some_and(|s| s.choice(input.trim()).is_some());

        let command = if is_choice_key {
            AdventureCommand::Act {
                utterance: input.trim().to_string(),
            }
        } else {
            parse_command(input)
        };
        self.execute(state, command)
    }
}
