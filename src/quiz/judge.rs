//! Answer judging
//!
//! Turns one recognized utterance into a verdict for the current question.
//! Judging is a pure function: the caller owns the mistake counter and the
//! lock, and passes the number of misses so far.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::constants::judge::{MAX_MISTAKES, NEGATION_KEYWORDS, SHORT_ALIAS_MAX_CHARS};

use super::question::{Category, Question};

/// Result of judging a single utterance
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The utterance names the picture
    Correct {
        /// Easter-egg line to speak instead of the usual praise
        special: Option<String>,
    },
    /// Wrong, but the player gets another try
    Retry {
        /// Misses so far, including this one
        mistakes: u8,
    },
    /// Wrong for the last time; the answer is revealed
    GiveUp {
        /// Misses so far, including this one
        mistakes: u8,
        /// Label to read out when revealing the answer
        answer: String,
    },
}

impl Verdict {
    /// Whether no further input should be judged for this question
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Retry { .. })
    }
}

/// Normalizes a recognized utterance before judging
///
/// # Arguments
/// * `utterance` - Raw transcript from the recognizer
///
/// # Returns
/// * Trimmed, lowercased transcript
pub fn clean_utterance(utterance: &str) -> String {
    utterance.trim().to_lowercase()
}

/// Whether the utterance says "it is not (an animal)"
pub fn is_negation(utterance: &str) -> bool {
    NEGATION_KEYWORDS.iter().any(|word| utterance.contains(word))
}

/// Whether the utterance matches a single alias
///
/// Short aliases only match the whole utterance or its beginning, since
/// recognizer filler would otherwise hit them mid-sentence. Longer aliases
/// match anywhere.
pub fn matches_alias(alias: &str, utterance: &str) -> bool {
    let alias = clean_utterance(alias);
    if alias.chars().count() <= SHORT_ALIAS_MAX_CHARS {
        utterance.starts_with(&alias)
    } else {
        utterance.contains(&alias)
    }
}

/// Whether the utterance answers the question correctly
pub fn is_correct(question: &Question, utterance: &str) -> bool {
    (question.category() == Category::NotAnimal && is_negation(utterance))
        || question
            .aliases()
            .iter()
            .any(|alias| matches_alias(alias, utterance))
}

/// First special reaction triggered by the utterance, in list order
pub fn special_reaction<'a>(question: &'a Question, utterance: &str) -> Option<&'a str> {
    question
        .special_reactions()
        .iter()
        .find(|reaction| reaction.triggered_by(utterance))
        .map(|reaction| reaction.message())
}

/// Judges an utterance against a question
///
/// # Arguments
/// * `question` - The question currently shown
/// * `utterance` - Cleaned, non-empty transcript
/// * `mistakes` - Misses already made on this question
///
/// # Returns
/// * [`Verdict::Correct`] with an optional special message, otherwise
///   [`Verdict::Retry`] until [`MAX_MISTAKES`] is reached, then
///   [`Verdict::GiveUp`]
pub fn judge(question: &Question, utterance: &str, mistakes: u8) -> Verdict {
    if is_correct(question, utterance) {
        return Verdict::Correct {
            special: special_reaction(question, utterance).map(str::to_owned),
        };
    }

    let mistakes = mistakes.saturating_add(1);
    if mistakes >= MAX_MISTAKES {
        Verdict::GiveUp {
            mistakes,
            answer: question.label().to_owned(),
        }
    } else {
        Verdict::Retry { mistakes }
    }
}
