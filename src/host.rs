//! Capabilities the embedding application provides
//!
//! The game never talks to a speech engine, a microphone or the screen
//! directly. It drives them through these traits, so the same game runs on
//! any platform that can implement them.

use super::{Alarm, UpdateMessage};

/// Speech synthesis
pub trait SpeechOutput {
    /// Speaks a message, cancelling whatever is being spoken
    ///
    /// When `done` is given, the implementation must hand it back to
    /// [`crate::game::Game::receive_alarm`] once playback has ended, or right
    /// away if the message is empty.
    ///
    /// # Arguments
    ///
    /// * `message` - Text to speak in the quiz locale
    /// * `done` - Continuation to deliver after playback
    fn speak(&self, message: &str, done: Option<Alarm>);

    /// Stops any speech in progress without delivering its continuation
    fn cancel_speech(&self);
}

/// Speech recognition
///
/// Each activation yields at most one utterance, delivered through
/// [`crate::game::Game::hear`]. Recognition errors are simply no utterance.
pub trait SpeechInput {
    /// Opens the microphone for a single utterance
    fn start_listening(&self);

    /// Aborts listening, discarding anything partially recognized
    fn stop_listening(&self);
}

/// Screens and effects
pub trait Presenter {
    /// Sends a view update to the screen
    ///
    /// # Arguments
    ///
    /// * `message` - The update to render
    fn update(&self, message: &UpdateMessage);

    /// Fires the celebration effect; fire and forget
    fn celebrate(&self);

    /// Removes any celebration still on screen
    fn clear_celebration(&self);
}

/// Everything the game drives
pub trait Host: SpeechOutput + SpeechInput + Presenter {}

impl<T: SpeechOutput + SpeechInput + Presenter> Host for T {}
