//! Spoken text for scenes and turns.
//!
//! Everything here produces plain text meant to be read aloud by a speech
//! synthesizer, so choices carry a literal "say exactly" cue that the player
//! can repeat to hit the exact-key match.

use crate::scene::{Choice, Scene};
use crate::state::AdventureState;

/// Sentence every rendered scene ends with.
pub const CLOSING_PROMPT: &str = "What do you do next?";

const VOID_TITLE: &str = "The Void";
const VOID_DESCRIPTION: &str =
    "You drift through an empty void. There is nothing here to hold on to.";

/// Render a scene with its numbered choices.
///
/// `None` renders the empty void, which still ends with the closing prompt.
pub fn render_scene(scene: Option<&Scene>) -> String {
    let Some(scene) = scene else {
        return format!("{VOID_TITLE}\n\n{VOID_DESCRIPTION}\n\n{CLOSING_PROMPT}");
    };

    let mut out = format!("{}\n\n{}\n", scene.title, scene.description);

    if !scene.choices.is_empty() {
        out.push_str("\nYour options:\n");
        for (i, choice) in scene.choices.iter().enumerate() {
            out.push_str(&render_choice(i + 1, choice));
            out.push('\n');
        }
    }

    out.push('\n');
    out.push_str(CLOSING_PROMPT);
    out
}

fn render_choice(number: usize, choice: &Choice) -> String {
    format!(
        "{number}. {} (say exactly: {})",
        choice.description, choice.key
    )
}

/// Short acknowledgement of a taken choice.
pub fn acknowledge(choice: &Choice) -> String {
    format!("You chose: {}.", choice.description.trim_end_matches('.'))
}

/// Preamble for an utterance that matched nothing.
pub fn clarify(utterance: &str) -> String {
    let utterance = utterance.trim();
    if utterance.is_empty() {
        "I didn't catch that. Here is where you stand.".to_string()
    } else {
        format!("I'm not sure what \"{utterance}\" means here. Here is where you stand.")
    }
}

/// Spoken recap of the session: where the player is, what they wrote down
/// and what they carry.
pub fn recap(state: &AdventureState, scene: Option<&Scene>) -> String {
    let place = scene.map_or(VOID_TITLE, |s| s.title.as_str());
    let mut out = match &state.player_name {
        Some(name) => format!("{name}, you are at {place}."),
        None => format!("You are at {place}."),
    };

    out.push_str(&format!(
        "\nSteps taken: {}.",
        state.history.len()
    ));

    if state.journal.is_empty() {
        out.push_str("\nYour journal is empty.");
    } else {
        out.push_str("\nJournal:");
        for entry in &state.journal {
            out.push_str(&format!("\n- {entry}"));
        }
    }

    if state.inventory.is_empty() {
        out.push_str("\nYou carry nothing.");
    } else {
        out.push_str(&format!("\nYou carry: {}.", state.inventory.join(", ")));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> Scene {
        Scene::new("intro", "The Gate", "An iron gate blocks the road.")
            .with_choice(Choice::new("open_gate", "Push the gate open", "yard"))
            .with_choice(Choice::new("climb_wall", "Climb the wall", "wall"))
    }

    #[test]
    fn scene_lists_numbered_choices_with_cues() {
        let text = render_scene(Some(&gate()));
        assert!(text.starts_with("The Gate\n\nAn iron gate blocks the road."));
        assert!(text.contains("1. Push the gate open (say exactly: open_gate)"));
        assert!(text.contains("2. Climb the wall (say exactly: climb_wall)"));
        assert!(text.ends_with(CLOSING_PROMPT));
    }

    #[test]
    fn choice_order_is_declaration_order() {
        let text = render_scene(Some(&gate()));
        let first = text.find("open_gate").unwrap();
        let second = text.find("climb_wall").unwrap();
        assert!(first < second);
    }

    #[test]
    fn scene_without_choices_still_closes() {
        let scene = Scene::new("end", "The End", "It is over.");
        let text = render_scene(Some(&scene));
        assert!(!text.contains("Your options"));
        assert!(text.ends_with(CLOSING_PROMPT));
    }

    #[test]
    fn missing_scene_is_the_void() {
        let text = render_scene(None);
        assert!(text.contains("empty void"));
        assert!(text.ends_with(CLOSING_PROMPT));
    }

    #[test]
    fn acknowledgement_strips_trailing_period() {
        let choice = Choice::new("wait", "Wait for dawn.", "intro");
        assert_eq!(acknowledge(&choice), "You chose: Wait for dawn.");
    }

    #[test]
    fn recap_lists_journal_and_inventory() {
        let mut state = AdventureState::new("intro").with_player_name("Mira");
        state.journal.push("Saw a light".to_string());
        state.inventory.push("rope".to_string());
        state.inventory.push("lamp".to_string());

        let text = recap(&state, Some(&gate()));
        assert!(text.starts_with("Mira, you are at The Gate."));
        assert!(text.contains("- Saw a light"));
        assert!(text.contains("You carry: rope, lamp."));
    }

    #[test]
    fn recap_of_empty_session() {
        let state = AdventureState::new("intro");
        let text = recap(&state, None);
        assert!(text.contains("journal is empty"));
        assert!(text.contains("carry nothing"));
    }
}
