//! Narration sequencing around the quiz engine
//!
//! This module contains the [`Game`] struct, which connects the engine to
//! the host's speech and screen capabilities. Every pause and every "when
//! this line has been spoken" is expressed as an [`Alarm`] tagged with the
//! current [`crate::turn::Turn`]; the host hands alarms back through
//! [`Game::receive_alarm`], and alarms for an abandoned session or a
//! finished question are dropped there.

use itertools::Itertools;
use web_time::Duration;

use crate::{
    Alarm, Banner, ResultEntry, Step, UpdateMessage,
    constants::timing::{
        DRUMROLL_DELAY_MS, NEXT_QUESTION_DELAY_MS, REVEAL_DELAY_MS, SEINO_DELAY_MS,
    },
    host::{Host, Presenter, SpeechInput, SpeechOutput},
    quiz::{
        engine::{Advance, Engine, Error, Outcome, Phase},
        question::Category,
    },
    script,
    turn::SessionId,
};

/// A quiz game wired to its narration
#[derive(Debug, Clone)]
pub struct Game {
    engine: Engine,
}

impl Game {
    /// Wraps an engine sitting on the title screen
    pub fn new(engine: Engine) -> Self {
        Self { engine }
    }

    /// Read access to the engine state
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Sends the title screen
    pub fn show_title<P: Presenter>(&self, presenter: &P) {
        presenter.update(&UpdateMessage::Title {
            seino_mode: self.engine.seino_mode(),
        });
    }

    /// Flips the countdown preference from the title screen
    pub fn toggle_seino_mode<P: Presenter>(&mut self, presenter: &P) -> bool {
        let enabled = self.engine.toggle_seino_mode();
        self.show_title(presenter);
        enabled
    }

    /// Speaks a test line so the player can check the volume
    pub fn sound_test<O: SpeechOutput>(&self, output: &O) {
        output.speak(script::SOUND_TEST, None);
    }

    /// Starts a new session and begins the intro narration
    ///
    /// Input stays locked until the first listening window opens.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::NotEnoughQuestions`] from the engine; nothing is
    /// spoken in that case.
    pub fn start<H: Host>(&mut self, host: &H) -> Result<SessionId, Error> {
        host.stop_listening();
        let id = self.engine.start_session()?;
        self.engine.lock();

        self.announce_question(host);
        self.speak_then(host, script::TITLE, Step::IntroSpoken);

        Ok(id)
    }

    /// Abandons whatever is going on and shows the title screen
    ///
    /// Pending alarms for the session become stale.
    pub fn back_to_title<H: Host>(&mut self, host: &H) {
        host.cancel_speech();
        host.stop_listening();
        host.clear_celebration();
        self.engine.back_to_title();
        self.show_title(host);
    }

    /// Handles the microphone button
    ///
    /// Returns `true` if a listening window was opened.
    pub fn mic_pressed<I: SpeechInput>(&self, input: &I) -> bool {
        if self.engine.phase() == Phase::Playing
            && !self.engine.is_judged()
            && self.engine.is_question_visible()
        {
            input.start_listening();
            true
        } else {
            false
        }
    }

    /// Reads a question's explanation on the result screen
    ///
    /// Returns `false` if no question has that id.
    pub fn explain<H: Host>(&self, id: &str, host: &H) -> bool {
        let Some(question) = self.engine.explain(id) else {
            return false;
        };

        host.update(&UpdateMessage::Explain {
            id: question.id().to_owned(),
            label: question.label().to_owned(),
            image: question.image().to_owned(),
            explanation: question.explanation().to_owned(),
        });
        host.speak(question.explanation(), None);
        true
    }

    /// Judges an utterance delivered by the recognizer
    ///
    /// Ignored utterances leave the screen untouched. Otherwise input is
    /// locked before any narration starts, then the heard text and the
    /// outcome are shown and spoken.
    ///
    /// # Arguments
    ///
    /// * `utterance` - Final transcript of one listening activation
    /// * `host` - Speech and screen capabilities
    pub fn hear<H: Host>(&mut self, utterance: &str, host: &H) -> Outcome {
        let (Some(turn), Some(question)) = (self.engine.turn(), self.engine.current_question())
        else {
            return Outcome::Ignore;
        };
        let question = question.clone();

        let outcome = self.engine.submit_answer(utterance);
        if outcome == Outcome::Ignore {
            return outcome;
        }

        self.engine.lock();
        host.update(&UpdateMessage::Heard(utterance.to_owned()));
        host.update(&UpdateMessage::Judged(outcome.clone()));

        match &outcome {
            Outcome::Ignore => {}
            Outcome::Correct { special } => {
                host.celebrate();
                match (special, question.category()) {
                    (Some(message), _) => {
                        host.speak(message, Some(Alarm { turn, step: Step::OutcomeSpoken }));
                    }
                    (None, Category::NotAnimal) => {
                        host.speak(script::CORRECT, Some(Alarm { turn, step: Step::CorrectSpoken }));
                    }
                    (None, Category::Animal) => {
                        host.speak(
                            &script::correct_animal(&question),
                            Some(Alarm { turn, step: Step::OutcomeSpoken }),
                        );
                    }
                }
            }
            Outcome::Retry { .. } => {
                host.speak(script::RETRY, Some(Alarm { turn, step: Step::RetrySpoken }));
            }
            Outcome::GiveUp { answer, .. } => {
                host.speak(
                    &script::give_up(answer),
                    Some(Alarm { turn, step: Step::OutcomeSpoken }),
                );
            }
        }

        outcome
    }

    /// Runs a continuation handed back by the host
    ///
    /// Alarms whose turn is not the current one are ignored, so nothing
    /// fires for an abandoned session or a question already left behind.
    ///
    /// # Arguments
    ///
    /// * `alarm` - The continuation to run
    /// * `host` - Speech and screen capabilities
    /// * `schedule_message` - Function to schedule delayed alarms
    pub fn receive_alarm<H: Host, S: FnMut(Alarm, Duration)>(
        &mut self,
        alarm: Alarm,
        host: &H,
        mut schedule_message: S,
    ) {
        if !self.engine.is_current(alarm.turn) {
            tracing::trace!(?alarm, "stale alarm dropped");
            return;
        }
        let turn = alarm.turn;

        match alarm.step {
            Step::IntroSpoken => {
                host.update(&UpdateMessage::ShowBanner(Banner::Start));
                self.speak_then(host, script::START, Step::StartSpoken);
            }
            Step::StartSpoken => {
                host.update(&UpdateMessage::HideBanner);
                self.reveal(host, &mut schedule_message);
            }
            Step::SeinoPause => {
                host.update(&UpdateMessage::ShowBanner(Banner::Seino));
                self.speak_then(host, script::SEINO, Step::SeinoSpoken);
            }
            Step::SeinoSpoken => {
                host.update(&UpdateMessage::HideBanner);
                self.listen(host);
            }
            Step::RetrySpoken => {
                self.open_listening_window(host, &mut schedule_message);
            }
            Step::CorrectSpoken => {
                schedule_message(
                    Alarm {
                        turn,
                        step: Step::Drumroll,
                    },
                    Duration::from_millis(DRUMROLL_DELAY_MS),
                );
            }
            Step::Drumroll => {
                self.speak_then(host, script::NOT_ANIMAL_PUNCHLINE, Step::OutcomeSpoken);
            }
            Step::OutcomeSpoken => {
                schedule_message(
                    Alarm {
                        turn,
                        step: Step::Advance,
                    },
                    Duration::from_millis(NEXT_QUESTION_DELAY_MS),
                );
            }
            Step::Advance => self.advance(host, &mut schedule_message),
            Step::Reveal => self.reveal(host, &mut schedule_message),
        }
    }

    /// Speaks `message` and continues with `step` for the current turn
    fn speak_then<O: SpeechOutput>(&self, output: &O, message: &str, step: Step) {
        if let Some(turn) = self.engine.turn() {
            output.speak(message, Some(Alarm { turn, step }));
        }
    }

    /// Sends the question screen for the current question
    fn announce_question<P: Presenter>(&self, presenter: &P) {
        let (Some(index), Some(question)) =
            (self.engine.current_index(), self.engine.current_question())
        else {
            return;
        };

        presenter.update(&UpdateMessage::Question {
            index,
            count: self.engine.question_count(),
            image: question.image().to_owned(),
            label: question.label().to_owned(),
            visible: self.engine.is_question_visible(),
        });
    }

    /// Shows the current picture and opens the first listening window
    fn reveal<H: Host, S: FnMut(Alarm, Duration)>(&mut self, host: &H, schedule_message: &mut S) {
        self.engine.reveal_question();
        self.announce_question(host);
        self.open_listening_window(host, schedule_message);
    }

    /// Starts listening, after the countdown if it is enabled
    fn open_listening_window<H: Host, S: FnMut(Alarm, Duration)>(
        &mut self,
        host: &H,
        schedule_message: &mut S,
    ) {
        let Some(turn) = self.engine.turn() else {
            return;
        };

        if self.engine.seino_mode() {
            self.engine.lock();
            schedule_message(
                Alarm {
                    turn,
                    step: Step::SeinoPause,
                },
                Duration::from_millis(SEINO_DELAY_MS),
            );
        } else {
            self.listen(host);
        }
    }

    /// Unlocks input and opens the microphone
    fn listen<I: SpeechInput>(&mut self, input: &I) {
        self.engine.unlock();
        input.start_listening();
    }

    /// Moves on after a finished question
    fn advance<H: Host, S: FnMut(Alarm, Duration)>(&mut self, host: &H, schedule_message: &mut S) {
        host.clear_celebration();

        match self.engine.advance() {
            Ok(Advance::Next(_)) => {
                self.engine.lock();
                self.announce_question(host);
                if let Some(turn) = self.engine.turn() {
                    schedule_message(
                        Alarm {
                            turn,
                            step: Step::Reveal,
                        },
                        Duration::from_millis(REVEAL_DELAY_MS),
                    );
                }
            }
            Ok(Advance::Finished) => {
                host.update(&UpdateMessage::Result(self.result_entries()));
                host.speak(script::FINISHED, None);
            }
            Err(e) => {
                tracing::warn!(error = %e, "advance alarm outside of play");
            }
        }
    }

    /// Tiles for the result screen
    pub fn result_entries(&self) -> Vec<ResultEntry> {
        self.engine
            .questions()
            .iter()
            .zip(self.engine.records())
            .map(|(question, record)| ResultEntry {
                id: question.id().to_owned(),
                label: question.label().to_owned(),
                image: question.image().to_owned(),
                ending: record.map(|r| r.ending),
                mistakes: record.map_or(0, |r| r.mistakes),
            })
            .collect_vec()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::quiz::{
        bank::QuestionBank,
        engine::Options,
        question::{Question, SpecialReaction},
    };

    mod mocks {
        use std::cell::RefCell;

        use crate::{
            Alarm, UpdateMessage,
            host::{Presenter, SpeechInput, SpeechOutput},
        };

        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum Call {
            Speak(String, Option<Alarm>),
            CancelSpeech,
            StartListening,
            StopListening,
            Update(UpdateMessage),
            Celebrate,
            ClearCelebration,
        }

        #[derive(Debug, Default)]
        pub struct MockHost {
            pub calls: RefCell<Vec<Call>>,
        }

        impl MockHost {
            pub fn take(&self) -> Vec<Call> {
                self.calls.take()
            }

            pub fn spoken(calls: &[Call]) -> Vec<String> {
                calls
                    .iter()
                    .filter_map(|c| match c {
                        Call::Speak(message, _) => Some(message.clone()),
                        _ => None,
                    })
                    .collect()
            }

            pub fn last_done(calls: &[Call]) -> Option<Alarm> {
                calls.iter().rev().find_map(|c| match c {
                    Call::Speak(_, done) => *done,
                    _ => None,
                })
            }
        }

        impl SpeechOutput for MockHost {
            fn speak(&self, message: &str, done: Option<Alarm>) {
                self.calls
                    .borrow_mut()
                    .push(Call::Speak(message.to_owned(), done));
            }

            fn cancel_speech(&self) {
                self.calls.borrow_mut().push(Call::CancelSpeech);
            }
        }

        impl SpeechInput for MockHost {
            fn start_listening(&self) {
                self.calls.borrow_mut().push(Call::StartListening);
            }

            fn stop_listening(&self) {
                self.calls.borrow_mut().push(Call::StopListening);
            }
        }

        impl Presenter for MockHost {
            fn update(&self, message: &UpdateMessage) {
                self.calls.borrow_mut().push(Call::Update(message.clone()));
            }

            fn celebrate(&self) {
                self.calls.borrow_mut().push(Call::Celebrate);
            }

            fn clear_celebration(&self) {
                self.calls.borrow_mut().push(Call::ClearCelebration);
            }
        }
    }

    use mocks::{Call, MockHost};

    /// Scheduler that records alarms instead of waiting
    #[derive(Default)]
    struct Schedule {
        queue: RefCell<Vec<(Alarm, Duration)>>,
    }

    impl Schedule {
        fn push(&self) -> impl FnMut(Alarm, Duration) + '_ {
            move |alarm, delay| self.queue.borrow_mut().push((alarm, delay))
        }

        fn pop(&self) -> Option<(Alarm, Duration)> {
            let mut queue = self.queue.borrow_mut();
            if queue.is_empty() {
                None
            } else {
                Some(queue.remove(0))
            }
        }
    }

    fn dog() -> Question {
        Question::new("dog", "いぬ", Category::Animal, "/images/inu.png", ["いぬ"], "わんわん")
    }

    fn mushroom() -> Question {
        Question::new(
            "mushroom",
            "きのこ",
            Category::NotAnimal,
            "/images/kinoko.png",
            ["きのこ"],
            "どうぶつじゃないよ",
        )
    }

    fn game_with(questions: Vec<Question>, seino_mode: bool) -> Game {
        let count = questions.len();
        let engine = Engine::new(
            QuestionBank::new(questions).unwrap(),
            Options {
                seino_mode,
                questions_per_session: count,
            },
        )
        .unwrap();
        Game::new(engine)
    }

    /// Starts a game and runs the intro until the first listening window
    fn started(game: &mut Game, host: &MockHost, schedule: &Schedule) {
        game.start(host).unwrap();
        let intro = MockHost::last_done(&host.take()).unwrap();
        game.receive_alarm(intro, host, schedule.push());
        let start = MockHost::last_done(&host.take()).unwrap();
        game.receive_alarm(start, host, schedule.push());
        host.take();
    }

    #[test]
    fn test_start_speaks_intro_with_input_locked() {
        let mut game = game_with(vec![dog()], false);
        let host = MockHost::default();

        game.start(&host).unwrap();
        let calls = host.take();

        assert_eq!(calls.first(), Some(&Call::StopListening));
        assert_eq!(MockHost::spoken(&calls), vec![script::TITLE.to_string()]);
        assert_eq!(
            MockHost::last_done(&calls).unwrap().step,
            Step::IntroSpoken
        );
        assert!(game.engine().is_judged());
        assert!(!game.engine().is_question_visible());
        assert_eq!(game.hear("いぬ", &host), Outcome::Ignore);
        assert!(host.take().is_empty());
    }

    #[test]
    fn test_start_with_small_bank_fails() {
        let engine = Engine::new(QuestionBank::new(vec![dog()]).unwrap(), Options::default())
            .unwrap();
        let mut game = Game::new(engine);
        let host = MockHost::default();

        assert!(matches!(
            game.start(&host),
            Err(Error::NotEnoughQuestions { .. })
        ));
        assert!(MockHost::spoken(&host.take()).is_empty());
    }

    #[test]
    fn test_intro_sequence_opens_listening() {
        let mut game = game_with(vec![dog()], false);
        let host = MockHost::default();
        let schedule = Schedule::default();

        game.start(&host).unwrap();
        let intro = MockHost::last_done(&host.take()).unwrap();

        game.receive_alarm(intro, &host, schedule.push());
        let calls = host.take();
        assert!(calls.contains(&Call::Update(UpdateMessage::ShowBanner(Banner::Start))));
        assert_eq!(MockHost::spoken(&calls), vec![script::START.to_string()]);

        let start = MockHost::last_done(&calls).unwrap();
        game.receive_alarm(start, &host, schedule.push());
        let calls = host.take();

        assert!(calls.contains(&Call::Update(UpdateMessage::HideBanner)));
        assert!(calls.contains(&Call::Update(UpdateMessage::Question {
            index: 0,
            count: 1,
            image: "/images/inu.png".to_string(),
            label: "いぬ".to_string(),
            visible: true,
        })));
        assert_eq!(calls.last(), Some(&Call::StartListening));
        assert!(!game.engine().is_judged());
        assert!(game.engine().is_question_visible());
    }

    #[test]
    fn test_seino_mode_counts_down_before_listening() {
        let mut game = game_with(vec![dog()], true);
        let host = MockHost::default();
        let schedule = Schedule::default();

        game.start(&host).unwrap();
        let intro = MockHost::last_done(&host.take()).unwrap();
        game.receive_alarm(intro, &host, schedule.push());
        let start = MockHost::last_done(&host.take()).unwrap();
        game.receive_alarm(start, &host, schedule.push());

        assert!(!host.take().contains(&Call::StartListening));
        assert!(game.engine().is_judged());

        let (pause, delay) = schedule.pop().unwrap();
        assert_eq!(pause.step, Step::SeinoPause);
        assert_eq!(delay, Duration::from_millis(SEINO_DELAY_MS));

        game.receive_alarm(pause, &host, schedule.push());
        let calls = host.take();
        assert!(calls.contains(&Call::Update(UpdateMessage::ShowBanner(Banner::Seino))));
        assert_eq!(MockHost::spoken(&calls), vec![script::SEINO.to_string()]);

        game.receive_alarm(MockHost::last_done(&calls).unwrap(), &host, schedule.push());
        let calls = host.take();
        assert!(calls.contains(&Call::Update(UpdateMessage::HideBanner)));
        assert_eq!(calls.last(), Some(&Call::StartListening));
        assert!(!game.engine().is_judged());
    }

    #[test]
    fn test_correct_animal_celebrates_and_advances() {
        let mut game = game_with(vec![dog()], false);
        let host = MockHost::default();
        let schedule = Schedule::default();
        started(&mut game, &host, &schedule);

        let outcome = game.hear("いぬだよ", &host);
        assert_eq!(outcome, Outcome::Correct { special: None });

        let calls = host.take();
        assert!(calls.contains(&Call::Update(UpdateMessage::Heard("いぬだよ".to_string()))));
        assert!(calls.contains(&Call::Celebrate));
        assert_eq!(
            MockHost::spoken(&calls),
            vec!["せいかい！いぬだね！".to_string()]
        );

        assert_eq!(game.hear("いぬ", &host), Outcome::Ignore);
        assert!(host.take().is_empty());

        let spoken = MockHost::last_done(&calls).unwrap();
        game.receive_alarm(spoken, &host, schedule.push());
        let (advance, delay) = schedule.pop().unwrap();
        assert_eq!(advance.step, Step::Advance);
        assert_eq!(delay, Duration::from_millis(NEXT_QUESTION_DELAY_MS));

        game.receive_alarm(advance, &host, schedule.push());
        let calls = host.take();
        assert_eq!(game.engine().phase(), Phase::Result);
        assert_eq!(MockHost::spoken(&calls), vec![script::FINISHED.to_string()]);
        assert!(calls.iter().any(|c| matches!(c, Call::Update(UpdateMessage::Result(entries)) if entries.len() == 1)));
    }

    #[test]
    fn test_special_reaction_is_spoken() {
        let deer = Question::new("deer", "しか", Category::Animal, "", ["しか", "ばんび"], "")
            .with_special_reaction(SpecialReaction::new(["ばんび"], "バンビだね！"));
        let mut game = game_with(vec![deer], false);
        let host = MockHost::default();
        let schedule = Schedule::default();
        started(&mut game, &host, &schedule);

        game.hear("ばんびだ", &host);

        assert_eq!(
            MockHost::spoken(&host.take()),
            vec!["バンビだね！".to_string()]
        );
    }

    #[test]
    fn test_not_animal_drumroll() {
        let mut game = game_with(vec![mushroom()], false);
        let host = MockHost::default();
        let schedule = Schedule::default();
        started(&mut game, &host, &schedule);

        game.hear("どうぶつじゃない", &host);
        let calls = host.take();
        assert_eq!(MockHost::spoken(&calls), vec![script::CORRECT.to_string()]);

        let first = MockHost::last_done(&calls).unwrap();
        assert_eq!(first.step, Step::CorrectSpoken);
        game.receive_alarm(first, &host, schedule.push());
        assert!(host.take().is_empty());

        let (drumroll, delay) = schedule.pop().unwrap();
        assert_eq!(drumroll.step, Step::Drumroll);
        assert_eq!(delay, Duration::from_millis(DRUMROLL_DELAY_MS));
        game.receive_alarm(drumroll, &host, schedule.push());

        let calls = host.take();
        assert_eq!(
            MockHost::spoken(&calls),
            vec![script::NOT_ANIMAL_PUNCHLINE.to_string()]
        );
        assert_eq!(MockHost::last_done(&calls).unwrap().step, Step::OutcomeSpoken);
    }

    #[test]
    fn test_retry_then_give_up() {
        let mut game = game_with(vec![dog()], false);
        let host = MockHost::default();
        let schedule = Schedule::default();
        started(&mut game, &host, &schedule);

        assert_eq!(
            game.hear("ねこ", &host),
            Outcome::Retry { mistakes: 1 }
        );
        let calls = host.take();
        assert_eq!(MockHost::spoken(&calls), vec![script::RETRY.to_string()]);
        assert!(game.engine().is_judged());
        assert_eq!(game.hear("いぬ", &host), Outcome::Ignore);

        game.receive_alarm(MockHost::last_done(&calls).unwrap(), &host, schedule.push());
        assert_eq!(host.take().last(), Some(&Call::StartListening));
        assert!(!game.engine().is_judged());

        assert_eq!(
            game.hear("ねこ", &host),
            Outcome::GiveUp {
                mistakes: 2,
                answer: "いぬ".to_string()
            }
        );
        assert_eq!(
            MockHost::spoken(&host.take()),
            vec![script::give_up("いぬ")]
        );
    }

    #[test]
    fn test_advance_reveals_next_question_after_delay() {
        let cat = Question::new("cat", "ねこ", Category::Animal, "", ["ねこ"], "");
        let mut game = game_with(vec![dog(), cat], false);
        let host = MockHost::default();
        let schedule = Schedule::default();
        started(&mut game, &host, &schedule);

        let answer = game.engine().current_question().unwrap().label().to_owned();
        game.hear(&answer, &host);
        let done = MockHost::last_done(&host.take()).unwrap();
        game.receive_alarm(done, &host, schedule.push());

        let (advance, _) = schedule.pop().unwrap();
        game.receive_alarm(advance, &host, schedule.push());
        let calls = host.take();

        assert!(calls.contains(&Call::ClearCelebration));
        assert_eq!(game.engine().current_index(), Some(1));
        assert!(!game.engine().is_question_visible());
        assert!(game.engine().is_judged());

        let (reveal, delay) = schedule.pop().unwrap();
        assert_eq!(reveal.step, Step::Reveal);
        assert_eq!(reveal.turn.index, 1);
        assert_eq!(delay, Duration::from_millis(REVEAL_DELAY_MS));

        game.receive_alarm(reveal, &host, schedule.push());
        assert_eq!(host.take().last(), Some(&Call::StartListening));
        assert!(game.engine().is_question_visible());
    }

    #[test]
    fn test_back_to_title_cancels_pending_alarms() {
        let mut game = game_with(vec![dog()], false);
        let host = MockHost::default();
        let schedule = Schedule::default();

        game.start(&host).unwrap();
        let intro = MockHost::last_done(&host.take()).unwrap();

        game.back_to_title(&host);
        let calls = host.take();
        assert!(calls.contains(&Call::CancelSpeech));
        assert!(calls.contains(&Call::StopListening));
        assert!(calls.contains(&Call::Update(UpdateMessage::Title { seino_mode: false })));
        assert_eq!(game.engine().phase(), Phase::Title);

        game.receive_alarm(intro, &host, schedule.push());
        assert!(host.take().is_empty());
        assert!(schedule.pop().is_none());
    }

    #[test]
    fn test_alarm_from_previous_session_is_dropped() {
        let mut game = game_with(vec![dog()], false);
        let host = MockHost::default();
        let schedule = Schedule::default();

        game.start(&host).unwrap();
        let old = MockHost::last_done(&host.take()).unwrap();
        game.start(&host).unwrap();
        host.take();

        game.receive_alarm(old, &host, schedule.push());
        assert!(host.take().is_empty());
    }

    #[test]
    fn test_mic_pressed_only_when_accepting_input() {
        let mut game = game_with(vec![dog()], false);
        let host = MockHost::default();
        let schedule = Schedule::default();

        assert!(!game.mic_pressed(&host));

        started(&mut game, &host, &schedule);
        assert!(game.mic_pressed(&host));
        assert_eq!(host.take(), vec![Call::StartListening]);

        game.hear("いぬ", &host);
        host.take();
        assert!(!game.mic_pressed(&host));
        assert!(host.take().is_empty());
    }

    #[test]
    fn test_toggle_seino_mode_updates_title() {
        let mut game = game_with(vec![dog()], false);
        let host = MockHost::default();

        assert!(game.toggle_seino_mode(&host));
        assert_eq!(
            host.take(),
            vec![Call::Update(UpdateMessage::Title { seino_mode: true })]
        );
    }

    #[test]
    fn test_sound_test_and_explain() {
        let game = game_with(vec![dog()], false);
        let host = MockHost::default();

        game.sound_test(&host);
        assert_eq!(
            host.take(),
            vec![Call::Speak(script::SOUND_TEST.to_string(), None)]
        );

        assert!(game.explain("dog", &host));
        let calls = host.take();
        assert_eq!(MockHost::spoken(&calls), vec!["わんわん".to_string()]);
        assert!(!game.explain("unknown", &host));
    }
}
