//! Session and turn identifiers
//!
//! Every play-through gets a fresh [`SessionId`]. Scheduled continuations
//! carry a [`Turn`] so that anything queued for an abandoned session or an
//! already finished question can be recognized as stale and dropped.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use uuid::Uuid;

/// Tags everything scheduled during one play-through
///
/// Shown in logs and carried in alarms as its hyphenated uuid text.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, DeserializeFromStr, SerializeDisplay, derive_more::Display,
)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Draws an id for a session that is just starting
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    /// Reads back an id from an alarm the host serialized
    ///
    /// # Errors
    ///
    /// Fails when the text is not a uuid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::from_str(s).map(Self)
    }
}

/// The question a continuation belongs to
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    /// Session that scheduled the continuation
    pub session: SessionId,
    /// Index of the question within that session
    pub index: usize,
}
