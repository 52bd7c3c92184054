//! # Dobutsu Quiz Library
//!
//! This library provides the core logic for a voice-driven picture quiz for
//! young children. It judges recognized speech against the current question,
//! tracks the session from title screen to results, and sequences the
//! narration around each listening window.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::wildcard_imports)]
#![allow(clippy::module_name_repetitions)]
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

pub mod constants;

pub mod game;
pub mod host;
pub mod quiz;
pub mod script;
pub mod turn;

use quiz::engine::{Ending, Outcome};
use turn::Turn;

/// Overlay text shown in large letters during narration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Banner {
    /// "スタート！" before the first question
    Start,
    /// "せーの！" countdown before listening
    Seino,
}

/// One tile on the result screen
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEntry {
    /// Question id, used to ask for its explanation
    pub id: String,
    /// Display name
    pub label: String,
    /// Asset reference
    pub image: String,
    /// How the question ended, absent if it was skipped
    pub ending: Option<Ending>,
    /// Misses made on the question
    pub mistakes: u8,
}

/// Messages sent to the screen to update what it shows
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum UpdateMessage {
    /// Title screen with the countdown toggle
    Title {
        /// Whether the countdown toggle is on
        seino_mode: bool,
    },
    /// Question screen
    Question {
        /// Index of the question (0-indexing)
        index: usize,
        /// Total count of questions
        count: usize,
        /// Asset reference, hidden until `visible`
        image: String,
        /// Display name for accessibility text
        label: String,
        /// Whether the picture is shown or still a placeholder
        visible: bool,
    },
    /// Shows overlay text
    ShowBanner(Banner),
    /// Hides the overlay text
    HideBanner,
    /// What the recognizer heard, shown as feedback
    Heard(String),
    /// How the last utterance was judged
    Judged(Outcome),
    /// Result screen with every question of the session
    Result(Vec<ResultEntry>),
    /// Detail view for a single question on the result screen
    Explain {
        /// Question id
        id: String,
        /// Display name
        label: String,
        /// Asset reference
        image: String,
        /// Text being read aloud
        explanation: String,
    },
}

impl UpdateMessage {
    /// Converts the update message to a JSON string for transmission
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// Steps of the narration sequence that run after a pause or after speech
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// The quiz title has been spoken
    IntroSpoken,
    /// "スタート！" has been spoken
    StartSpoken,
    /// The pause before the countdown is over
    SeinoPause,
    /// "せーの！" has been spoken
    SeinoSpoken,
    /// The retry prompt has been spoken
    RetrySpoken,
    /// "せいかい！" for a not-animal picture has been spoken
    CorrectSpoken,
    /// The drumroll pause of a not-animal answer is over
    Drumroll,
    /// The outcome narration of a finished question has been spoken
    OutcomeSpoken,
    /// Time to move to the next question
    Advance,
    /// Time to reveal the next picture
    Reveal,
}

/// A continuation scheduled by the game
///
/// Handed to the host either with a speech request or through the
/// scheduler, and fed back through [`game::Game::receive_alarm`]. Alarms for
/// a turn that is no longer current are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alarm {
    /// Question the continuation belongs to
    pub turn: Turn,
    /// What to do next
    pub step: Step,
}
