//! Question catalog and session selection
//!
//! The bank is a validated, read-only list of questions. Each play-through
//! draws its questions from the bank with an unbiased Fisher–Yates shuffle.

use std::collections::{HashMap, HashSet};

use garde::Validate;
use itertools::Itertools;
use serde::Serialize;
use thiserror::Error;

use super::question::Question;

/// Catalog bundled with the crate
const BUILTIN_QUESTIONS: &str = include_str!("questions.json");

/// Errors that can occur while loading a question bank
#[derive(Error, Debug)]
pub enum Error {
    /// The catalog is not valid JSON for a list of questions
    #[error("malformed question catalog: {0}")]
    Json(#[from] serde_json::Error),
    /// A question breaks a content limit
    #[error("invalid question: {0}")]
    Invalid(#[from] garde::Report),
    /// Two questions share the same id
    #[error("duplicate question id `{0}`")]
    DuplicateId(String),
    /// The catalog contains no questions
    #[error("question catalog is empty")]
    Empty,
}

/// A validated collection of questions
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Builds a bank from already constructed questions
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, a question fails validation,
    /// or two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, Error> {
        if questions.is_empty() {
            return Err(Error::Empty);
        }

        let mut ids = HashSet::new();
        for question in &questions {
            question.validate()?;
            if !ids.insert(question.id()) {
                return Err(Error::DuplicateId(question.id().to_owned()));
            }
        }

        let bank = Self { questions };

        for (alias, ids) in bank.shared_aliases() {
            tracing::warn!(%alias, ?ids, "alias accepted by more than one question");
        }

        Ok(bank)
    }

    /// Parses and validates a JSON array of questions
    ///
    /// # Errors
    ///
    /// See [`QuestionBank::new`]; malformed JSON yields [`Error::Json`].
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Self::new(serde_json::from_str(json)?)
    }

    /// The catalog shipped with the crate
    ///
    /// # Errors
    ///
    /// Only fails if the bundled catalog itself is broken.
    pub fn builtin() -> Result<Self, Error> {
        Self::from_json(BUILTIN_QUESTIONS)
    }

    /// Number of questions in the bank
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the bank holds no questions (never true for a constructed bank)
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// All questions in catalog order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Looks a question up by id
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    /// Aliases accepted by more than one question, with the ids using them
    ///
    /// Judging only ever looks at the current question, so shared aliases
    /// are not rejected, only reported.
    pub fn shared_aliases(&self) -> Vec<(String, Vec<String>)> {
        let mut owners: HashMap<&str, Vec<&str>> = HashMap::new();
        for question in &self.questions {
            for alias in question.aliases().iter().unique() {
                owners.entry(alias.as_str()).or_default().push(question.id());
            }
        }

        owners
            .into_iter()
            .filter(|(_, ids)| ids.len() > 1)
            .map(|(alias, ids)| {
                (
                    alias.to_owned(),
                    ids.into_iter().map(str::to_owned).collect_vec(),
                )
            })
            .sorted()
            .collect_vec()
    }

    /// Draws `count` distinct questions in random order
    ///
    /// Returns `None` when the bank has fewer than `count` questions.
    pub fn select_session(&self, count: usize, rng: &mut fastrand::Rng) -> Option<Vec<Question>> {
        if self.questions.len() < count {
            return None;
        }

        let mut questions = self.questions.clone();
        shuffle(&mut questions, rng);
        questions.truncate(count);
        Some(questions)
    }
}

/// Shuffles in place with the Fisher–Yates algorithm
pub fn shuffle<T>(items: &mut [T], rng: &mut fastrand::Rng) {
    for i in (1..items.len()).rev() {
        let j = rng.usize(0..=i);
        items.swap(i, j);
    }
}
