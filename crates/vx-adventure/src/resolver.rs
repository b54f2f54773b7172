//! Resolution of free-form utterances to scene choices.
//!
//! Matching runs as an ordered cascade of stages. Each stage scans the
//! choices in declaration order and the first stage that finds a match wins,
//! so an exact key always beats a keyword hit further up the list.

use std::collections::HashSet;

use crate::scene::{Choice, Scene};

/// A single matching strategy: returns the index of the first accepted choice.
pub type ChoiceStage = fn(&Utterance, &[Choice]) -> Option<usize>;

/// The cascade, in the order the stages are tried.
pub const CHOICE_STAGES: &[(&str, ChoiceStage)] = &[
    ("exact", exact_key),
    ("keyword", leading_keyword),
    ("scan", any_keyword),
];

/// How many leading description words the keyword stage looks at.
const LEADING_WORDS: usize = 5;

/// Words too common to identify a choice on their own.
const FILLER_WORDS: &[&str] = &[
    "the", "and", "you", "your", "yours", "into", "with", "for", "from", "that", "this", "are",
    "was", "its", "his", "her", "their", "through", "onto", "upon", "but", "not", "all", "any",
    "can", "out", "off", "over", "then", "them", "they", "what", "will", "want", "just", "let",
    "lets", "now", "here", "there", "some", "one", "toward", "towards", "about",
];

/// A normalised player utterance.
#[derive(Debug, Clone)]
pub struct Utterance {
    text: String,
    words: HashSet<String>,
}

impl Utterance {
    /// Normalise raw input: lower-case, trimmed, split into words.
    pub fn new(raw: &str) -> Self {
        let text = raw.trim().to_lowercase();
        let words = words(&text).map(str::to_string).collect();
        Self { text, words }
    }

    /// The lower-cased, trimmed text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether `word` occurs as a whole word.
    pub fn has_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

/// Resolve an utterance against a scene's choices.
pub fn resolve_choice<'s>(scene: &'s Scene, input: &str) -> Option<&'s Choice> {
    resolve_with_stage(scene, input).map(|(_, choice)| choice)
}

/// Resolve an utterance and report which stage matched.
pub fn resolve_with_stage<'s>(scene: &'s Scene, input: &str) -> Option<(&'static str, &'s Choice)> {
    let utterance = Utterance::new(input);
    if utterance.text().is_empty() {
        return None;
    }

    CHOICE_STAGES.iter().find_map(|(name, stage)| {
        stage(&utterance, &scene.choices).map(|i| {
            let choice = &scene.choices[i];
            tracing::debug!(stage = *name, choice = %choice.key, "resolved choice");
            (*name, choice)
        })
    })
}

/// Stage 1: the utterance is exactly a choice key.
pub fn exact_key(utterance: &Utterance, choices: &[Choice]) -> Option<usize> {
    choices
        .iter()
        .position(|c| c.key.to_lowercase() == utterance.text())
}

/// Stage 2: the key is quoted inside the utterance, or one of the leading
/// words of the description is spoken.
pub fn leading_keyword(utterance: &Utterance, choices: &[Choice]) -> Option<usize> {
    choices.iter().position(|c| {
        let key = c.key.to_lowercase();
        utterance.text().contains(&key)
            || utterance.text().contains(&key.replace('_', " "))
            || words(&c.description.to_lowercase())
                .take(LEADING_WORDS)
                .filter(|w| is_significant(w))
                .any(|w| utterance.has_word(w))
    })
}

/// Stage 3: any significant description word is spoken.
pub fn any_keyword(utterance: &Utterance, choices: &[Choice]) -> Option<usize> {
    choices.iter().position(|c| {
        words(&c.description.to_lowercase())
            .filter(|w| is_significant(w))
            .any(|w| utterance.has_word(w))
    })
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|ch: char| !ch.is_alphanumeric())
        .filter(|w| !w.is_empty())
}

fn is_significant(word: &str) -> bool {
    word.chars().count() >= 3 && !FILLER_WORDS.contains(&word)
}
