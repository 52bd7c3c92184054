//! Session state machine
//!
//! The engine owns everything that changes during play: which questions were
//! drawn, where the player is, how many misses they made on the current
//! question and whether input is currently locked. All changes go through the
//! methods below; nothing here speaks, listens or draws.

use garde::Validate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;

use crate::{
    constants::session::{DEFAULT_QUESTION_COUNT, MAX_QUESTIONS_PER_SESSION},
    turn::{SessionId, Turn},
};

use super::{
    bank::QuestionBank,
    judge::{Verdict, clean_utterance, judge},
    question::Question,
};

/// Top-level phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Phase {
    /// Title screen, no session
    Title,
    /// A session is being played
    Playing,
    /// All questions done, result screen shows the session
    Result,
}

/// Player preferences that outlive a single session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Options {
    /// Speak a "せーの！" countdown before every listening window
    #[garde(skip)]
    pub seino_mode: bool,
    /// Number of questions drawn per session
    #[garde(range(min = 1, max = MAX_QUESTIONS_PER_SESSION))]
    pub questions_per_session: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            seino_mode: false,
            questions_per_session: DEFAULT_QUESTION_COUNT,
        }
    }
}

/// Errors from calling the engine in the wrong state or with bad setup
#[derive(Error, Debug)]
pub enum Error {
    /// The transition is not available in the current phase
    #[error("expected phase {expected}, found {actual}")]
    WrongPhase {
        /// Phase the transition requires
        expected: Phase,
        /// Phase the engine is in
        actual: Phase,
    },
    /// The bank cannot fill a session
    #[error("question bank has {available} questions, a session needs {required}")]
    NotEnoughQuestions {
        /// Questions in the bank
        available: usize,
        /// Questions per session
        required: usize,
    },
    /// The options break a limit
    #[error("invalid options: {0}")]
    InvalidOptions(#[from] garde::Report),
}

/// What happened to a submitted utterance
///
/// Mirrors [`Verdict`] with an extra [`Outcome::Ignore`] for input that was
/// never judged.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Input arrived while locked, before the picture was shown, or empty
    Ignore,
    /// The utterance names the picture
    Correct {
        /// Easter-egg line to speak instead of the usual praise
        special: Option<String>,
    },
    /// Wrong, another try is allowed
    Retry {
        /// Misses so far on this question
        mistakes: u8,
    },
    /// Wrong again, the answer is revealed
    GiveUp {
        /// Misses so far on this question
        mistakes: u8,
        /// Label to read out
        answer: String,
    },
}

impl From<Verdict> for Outcome {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Correct { special } => Self::Correct { special },
            Verdict::Retry { mistakes } => Self::Retry { mistakes },
            Verdict::GiveUp { mistakes, answer } => Self::GiveUp { mistakes, answer },
        }
    }
}

/// Result of moving past the current question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Another question follows, at this index
    Next(usize),
    /// That was the last question; the engine is now in [`Phase::Result`]
    Finished,
}

/// How a question ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ending {
    /// Answered correctly
    Correct,
    /// Answer was revealed after too many misses
    GaveUp,
}

/// Per-question record kept for the result screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// How the question ended
    pub ending: Ending,
    /// Misses before it ended
    pub mistakes: u8,
}

/// State of one play-through
#[derive(Debug, Clone)]
struct Session {
    id: SessionId,
    questions: Vec<Question>,
    index: usize,
    mistakes: u8,
    judged: bool,
    finished: bool,
    visible: bool,
    records: Vec<Option<Record>>,
}

impl Session {
    fn new(questions: Vec<Question>) -> Self {
        let count = questions.len();
        Self {
            id: SessionId::new(),
            questions,
            index: 0,
            mistakes: 0,
            judged: false,
            finished: false,
            visible: false,
            records: vec![None; count],
        }
    }

    fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    fn record(&mut self, ending: Ending) {
        if let Some(slot) = self.records.get_mut(self.index) {
            *slot = Some(Record {
                ending,
                mistakes: self.mistakes,
            });
        }
    }
}

#[derive(Debug, Clone)]
enum State {
    Title,
    Playing(Session),
    Result(Session),
}

/// The quiz engine
#[derive(Debug, Clone)]
pub struct Engine {
    bank: QuestionBank,
    options: Options,
    state: State,
    rng: fastrand::Rng,
}

impl Engine {
    /// Creates an engine on the title screen
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] if the options fail validation.
    pub fn new(bank: QuestionBank, options: Options) -> Result<Self, Error> {
        options.validate()?;
        Ok(Self {
            bank,
            options,
            state: State::Title,
            rng: fastrand::Rng::new(),
        })
    }

    /// Replaces the random source, for reproducible question order
    #[must_use]
    pub fn with_rng(mut self, rng: fastrand::Rng) -> Self {
        self.rng = rng;
        self
    }

    /// The catalog questions are drawn from
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Current preferences
    pub fn options(&self) -> Options {
        self.options
    }

    /// Whether the countdown narration is enabled
    pub fn seino_mode(&self) -> bool {
        self.options.seino_mode
    }

    /// Enables or disables the countdown narration
    pub fn set_seino_mode(&mut self, enabled: bool) {
        self.options.seino_mode = enabled;
    }

    /// Flips the countdown narration and returns the new value
    pub fn toggle_seino_mode(&mut self) -> bool {
        self.options.seino_mode = !self.options.seino_mode;
        self.options.seino_mode
    }

    /// Top-level phase
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Title => Phase::Title,
            State::Playing(_) => Phase::Playing,
            State::Result(_) => Phase::Result,
        }
    }

    fn session(&self) -> Option<&Session> {
        match &self.state {
            State::Title => None,
            State::Playing(session) | State::Result(session) => Some(session),
        }
    }

    fn playing_mut(&mut self) -> Option<&mut Session> {
        match &mut self.state {
            State::Playing(session) => Some(session),
            _ => None,
        }
    }

    /// Identifier of the current or just finished session
    pub fn session_id(&self) -> Option<SessionId> {
        self.session().map(|s| s.id)
    }

    /// Token for continuations scheduled for the current question
    pub fn turn(&self) -> Option<Turn> {
        match &self.state {
            State::Playing(session) => Some(Turn {
                session: session.id,
                index: session.index,
            }),
            _ => None,
        }
    }

    /// Whether a continuation scheduled for `turn` may still run
    pub fn is_current(&self, turn: Turn) -> bool {
        self.turn() == Some(turn)
    }

    /// Questions of the current or just finished session
    pub fn questions(&self) -> &[Question] {
        self.session()
            .map(|s| s.questions.as_slice())
            .unwrap_or_default()
    }

    /// How each question of the session ended, `None` where unanswered
    pub fn records(&self) -> &[Option<Record>] {
        self.session()
            .map(|s| s.records.as_slice())
            .unwrap_or_default()
    }

    /// Question being asked, while playing
    pub fn current_question(&self) -> Option<&Question> {
        match &self.state {
            State::Playing(session) => session.current(),
            _ => None,
        }
    }

    /// Index of the question being asked, while playing
    pub fn current_index(&self) -> Option<usize> {
        self.turn().map(|t| t.index)
    }

    /// Number of questions in the session
    pub fn question_count(&self) -> usize {
        self.questions().len()
    }

    /// Misses on the current question
    pub fn mistake_count(&self) -> u8 {
        match &self.state {
            State::Playing(session) => session.mistakes,
            _ => 0,
        }
    }

    /// Whether input is currently locked
    pub fn is_judged(&self) -> bool {
        match &self.state {
            State::Playing(session) => session.judged,
            _ => false,
        }
    }

    /// Whether the current picture has been revealed
    pub fn is_question_visible(&self) -> bool {
        match &self.state {
            State::Playing(session) => session.visible,
            _ => false,
        }
    }

    /// Finds a question of the session, or the bank, for the detail view
    pub fn explain(&self, id: &str) -> Option<&Question> {
        self.questions()
            .iter()
            .find(|q| q.id() == id)
            .or_else(|| self.bank.get(id))
    }

    /// Draws a fresh set of questions and starts playing
    ///
    /// Allowed from every phase; a running session is superseded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotEnoughQuestions`] if the bank is smaller than
    /// the session size. The engine is left unchanged in that case.
    pub fn start_session(&mut self) -> Result<SessionId, Error> {
        let required = self.options.questions_per_session;
        let questions =
            self.bank
                .select_session(required, &mut self.rng)
                .ok_or(Error::NotEnoughQuestions {
                    available: self.bank.len(),
                    required,
                })?;

        let session = Session::new(questions);
        let id = session.id;
        tracing::info!(session = %id, count = required, "session started");

        self.state = State::Playing(session);
        Ok(id)
    }

    /// Shows the current picture; input is ignored until this is called
    ///
    /// Returns `false` outside [`Phase::Playing`].
    pub fn reveal_question(&mut self) -> bool {
        match self.playing_mut() {
            Some(session) => {
                session.visible = true;
                true
            }
            None => {
                tracing::warn!("reveal_question outside of play");
                false
            }
        }
    }

    /// Locks input, e.g. while narration is playing
    pub fn lock(&mut self) {
        if let Some(session) = self.playing_mut() {
            session.judged = true;
        }
    }

    /// Reopens input for the current question
    ///
    /// Has no effect once the question ended in a correct answer or a
    /// give-up; only [`Engine::advance`] clears that.
    pub fn unlock(&mut self) {
        if let Some(session) = self.playing_mut() {
            session.judged = session.finished;
        }
    }

    /// Judges a recognized utterance for the current question
    ///
    /// Returns [`Outcome::Ignore`] without touching any state when not
    /// playing, while locked, before the picture is revealed, or when the
    /// utterance is empty. Correct and give-up outcomes lock input until
    /// [`Engine::advance`], so duplicate deliveries are ignored.
    pub fn submit_answer(&mut self, utterance: &str) -> Outcome {
        let Some(session) = self.playing_mut() else {
            tracing::warn!("answer submitted outside of play");
            return Outcome::Ignore;
        };

        if session.judged || !session.visible {
            return Outcome::Ignore;
        }

        let utterance = clean_utterance(utterance);
        if utterance.is_empty() {
            return Outcome::Ignore;
        }

        let Some(question) = session.current() else {
            return Outcome::Ignore;
        };

        let verdict = judge(question, &utterance, session.mistakes);
        tracing::debug!(
            session = %session.id,
            index = session.index,
            question = question.id(),
            %utterance,
            ?verdict,
            "answer judged"
        );

        match &verdict {
            Verdict::Correct { .. } => {
                session.judged = true;
                session.finished = true;
                session.record(Ending::Correct);
            }
            Verdict::Retry { mistakes } => {
                session.mistakes = *mistakes;
            }
            Verdict::GiveUp { mistakes, .. } => {
                session.mistakes = *mistakes;
                session.judged = true;
                session.finished = true;
                session.record(Ending::GaveUp);
            }
        }

        verdict.into()
    }

    /// Moves past the current question
    ///
    /// Resets the lock, the miss counter and visibility. After the last
    /// question the engine enters [`Phase::Result`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::WrongPhase`] outside [`Phase::Playing`]; nothing
    /// changes in that case.
    pub fn advance(&mut self) -> Result<Advance, Error> {
        let actual = self.phase();
        let Some(session) = self.playing_mut() else {
            tracing::warn!(%actual, "advance outside of play");
            return Err(Error::WrongPhase {
                expected: Phase::Playing,
                actual,
            });
        };

        session.judged = false;
        session.finished = false;
        session.visible = false;
        session.mistakes = 0;

        if session.index + 1 < session.questions.len() {
            session.index += 1;
            tracing::debug!(session = %session.id, index = session.index, "next question");
            return Ok(Advance::Next(session.index));
        }

        if let State::Playing(session) = std::mem::replace(&mut self.state, State::Title) {
            tracing::info!(session = %session.id, "session finished");
            self.state = State::Result(session);
        }
        Ok(Advance::Finished)
    }

    /// Abandons or closes the session and returns to the title screen
    ///
    /// Always allowed. Any continuation scheduled for the session becomes
    /// stale, since [`Engine::turn`] no longer matches it.
    pub fn back_to_title(&mut self) {
        if let Some(id) = self.session_id() {
            tracing::info!(session = %id, phase = %self.phase(), "back to title");
        }
        self.state = State::Title;
    }
}
