//! Command parsing for game-master turns.
//!
//! Most turns are free-form actions handed to the choice resolver. A handful
//! of meta phrases map onto the game master's other tools.

/// A parsed player turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdventureCommand {
    /// Attempt an in-story action.
    Act {
        /// The raw utterance.
        utterance: String,
    },
    /// Repeat the current scene.
    Look,
    /// Start over from the intro.
    Restart,
    /// Recap journal and inventory.
    Progress,
    /// Show help.
    Help,
    /// Leave the game.
    Quit,
}

const LOOK_PHRASES: &[&str] = &["look", "l", "where am i", "repeat", "say that again"];
const RESTART_PHRASES: &[&str] = &["restart", "start over", "new game", "reset"];
const PROGRESS_PHRASES: &[&str] = &[
    "journal",
    "inventory",
    "inv",
    "i",
    "status",
    "what do i have",
];
const HELP_PHRASES: &[&str] = &["help", "h", "?", "commands"];
const QUIT_PHRASES: &[&str] = &["quit", "q", "exit", "bye", "goodbye"];

/// Parse a player utterance into a command.
pub fn parse_command(input: &str) -> AdventureCommand {
    let trimmed = input.trim();
    let lower = trimmed
        .trim_end_matches(['.', '!', '?'])
        .to_lowercase();

    let is = |phrases: &[&str]| phrases.contains(&lower.as_str());

    if trimmed == "?" || is(HELP_PHRASES) {
        AdventureCommand::Help
    } else if is(LOOK_PHRASES) {
        AdventureCommand::Look
    } else if is(RESTART_PHRASES) {
        AdventureCommand::Restart
    } else if is(PROGRESS_PHRASES) {
        AdventureCommand::Progress
    } else if is(QUIT_PHRASES) {
        AdventureCommand::Quit
    } else {
        AdventureCommand::Act {
            utterance: trimmed.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_phrases() {
        assert_eq!(parse_command("look"), AdventureCommand::Look);
        assert_eq!(parse_command("Where am I?"), AdventureCommand::Look);
        assert_eq!(parse_command("Start over."), AdventureCommand::Restart);
        assert_eq!(parse_command("inventory"), AdventureCommand::Progress);
        assert_eq!(parse_command("?"), AdventureCommand::Help);
        assert_eq!(parse_command("help"), AdventureCommand::Help);
        assert_eq!(parse_command("bye"), AdventureCommand::Quit);
    }

    #[test]
    fn everything_else_is_an_action() {
        assert_eq!(
            parse_command("  I open the door "),
            AdventureCommand::Act {
                utterance: "I open the door".to_string()
            }
        );
    }

    #[test]
    fn empty_input_is_an_empty_action() {
        assert_eq!(
            parse_command("   "),
            AdventureCommand::Act {
                utterance: String::new()
            }
        );
    }
}
