//! Question records shown to the player
//!
//! A question is a picture plus the spoken forms that count as naming it.
//! Questions are immutable once loaded; the engine only ever reads them.

use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::constants::question::*;

use super::judge::clean_utterance;

/// What kind of thing the picture shows
///
/// The category decides the judging strategy: a not-animal picture is also
/// answered correctly by saying that it is not an animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// The picture shows an animal
    Animal,
    /// The picture shows something that is not an animal
    NotAnimal,
}

/// An Easter-egg line spoken instead of the usual praise
///
/// Only considered once the utterance has already been judged correct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SpecialReaction {
    /// Any of these inside the utterance triggers the reaction
    #[garde(length(min = 1), inner(length(chars, min = 1, max = MAX_ALIAS_LENGTH)))]
    keywords: Vec<String>,
    /// What gets spoken
    #[garde(length(chars, min = 1, max = MAX_REACTION_LENGTH))]
    message: String,
}

impl SpecialReaction {
    /// Creates a reaction from its trigger keywords and message
    pub fn new<I, K>(keywords: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }

    /// Trigger keywords
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Message spoken when triggered
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether any keyword occurs in the utterance
    pub fn triggered_by(&self, utterance: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| utterance.contains(clean_utterance(k).as_str()))
    }
}

/// A single picture question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Question {
    /// Stable identifier, unique within a bank
    #[garde(length(chars, min = 1, max = MAX_ID_LENGTH))]
    id: String,
    /// Child-facing display name, also used when revealing the answer
    #[garde(length(chars, min = 1, max = MAX_LABEL_LENGTH))]
    label: String,
    /// Judging strategy selector
    #[garde(skip)]
    category: Category,
    /// Opaque asset reference resolved by the presentation layer
    #[garde(length(max = MAX_IMAGE_LENGTH))]
    image: String,
    /// Spoken forms accepted as the answer
    #[garde(
        length(min = 1, max = MAX_ALIAS_COUNT),
        inner(length(chars, min = 1, max = MAX_ALIAS_LENGTH))
    )]
    aliases: Vec<String>,
    /// Read aloud on the result screen
    #[garde(length(chars, max = MAX_EXPLANATION_LENGTH))]
    explanation: String,
    /// Easter eggs, first match wins
    #[garde(dive)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    special_reactions: Vec<SpecialReaction>,
}

impl Question {
    /// Creates a question without special reactions
    pub fn new<I, A>(
        id: impl Into<String>,
        label: impl Into<String>,
        category: Category,
        image: impl Into<String>,
        aliases: I,
        explanation: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            id: id.into(),
            label: label.into(),
            category,
            image: image.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
            explanation: explanation.into(),
            special_reactions: Vec::new(),
        }
    }

    /// Appends a special reaction
    #[must_use]
    pub fn with_special_reaction(mut self, reaction: SpecialReaction) -> Self {
        self.special_reactions.push(reaction);
        self
    }

    /// Stable identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Judging strategy selector
    pub fn category(&self) -> Category {
        self.category
    }

    /// Asset reference
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Accepted spoken forms
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Result screen explanation
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Easter eggs in priority order
    pub fn special_reactions(&self) -> &[SpecialReaction] {
        &self.special_reactions
    }
}
