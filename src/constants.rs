//! Configuration constants for the quiz engine
//!
//! This module contains the limits, judging thresholds and narration timings
//! used throughout the crate, grouped the same way the rest of the crate is.

/// Session configuration constants
pub mod session {
    /// Number of questions drawn for one play-through unless overridden
    pub const DEFAULT_QUESTION_COUNT: usize = 10;
    /// Upper bound for [`crate::quiz::engine::Options::questions_per_session`]
    pub const MAX_QUESTIONS_PER_SESSION: usize = 50;
}

/// Answer judging constants
pub mod judge {
    /// Consecutive misses after which the answer is revealed
    pub const MAX_MISTAKES: u8 = 2;
    /// Aliases up to this many characters only match by equality or prefix.
    ///
    /// Tuned for Japanese kana where two-character words collide with filler
    /// such as "あー" or "そう". Other scripts need their own value.
    pub const SHORT_ALIAS_MAX_CHARS: usize = 2;
    /// Phrases meaning "is not" / "wrong" that answer a not-animal question
    pub const NEGATION_KEYWORDS: [&str; 6] = ["じゃない", "ちがう", "ありませ", "違い", "×", "バツ"];
}

/// Question catalog validation constants
pub mod question {
    /// Maximum length of a question id
    pub const MAX_ID_LENGTH: usize = 64;
    /// Maximum length of the child-facing label
    pub const MAX_LABEL_LENGTH: usize = 32;
    /// Maximum number of aliases per question
    pub const MAX_ALIAS_COUNT: usize = 32;
    /// Maximum length of a single alias
    pub const MAX_ALIAS_LENGTH: usize = 32;
    /// Maximum length of the explanation read on the result screen
    pub const MAX_EXPLANATION_LENGTH: usize = 200;
    /// Maximum length of an image reference
    pub const MAX_IMAGE_LENGTH: usize = 256;
    /// Maximum length of a special reaction message
    pub const MAX_REACTION_LENGTH: usize = 200;
}

/// Narration pacing, in milliseconds
pub mod timing {
    /// Pause before the "せーの！" countdown
    pub const SEINO_DELAY_MS: u64 = 400;
    /// Pause between "せいかい！" and the not-animal punchline
    pub const DRUMROLL_DELAY_MS: u64 = 400;
    /// Pause before the next question picture is revealed
    pub const REVEAL_DELAY_MS: u64 = 600;
    /// Pause after a terminal judgment before advancing
    pub const NEXT_QUESTION_DELAY_MS: u64 = 1200;
}
