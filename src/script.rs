//! Lines the game speaks
//!
//! Kept in one place so the narration reads consistently and can be
//! checked in tests without a speech engine.

use crate::quiz::question::Question;

/// Title of the quiz, spoken when a session starts
pub const TITLE: &str = "どうぶつクイズ！";
/// Spoken right before the first picture appears
pub const START: &str = "スタート！";
/// Countdown before listening in seino mode
pub const SEINO: &str = "せーの！";
/// First half of the not-animal celebration
pub const CORRECT: &str = "せいかい！";
/// Punchline after the drumroll pause for not-animal pictures
pub const NOT_ANIMAL_PUNCHLINE: &str = "これは... どうぶつじゃ... ありませーーーん！";
/// Asks the player to try again
pub const RETRY: &str = "あれ？ もういちど いってみてね";
/// Spoken when the last question is done
pub const FINISHED: &str = "ぜんぶ おしまい！ よくがんばったね！";
/// Sound check on the title screen
pub const SOUND_TEST: &str = "こんにちわ！おとが きこえたら じゅんび オッケーだよ！";

/// Praise for naming an animal
pub fn correct_animal(question: &Question) -> String {
    format!("{CORRECT}{}だね！", question.label())
}

/// Reveals the answer after too many misses
pub fn give_up(answer: &str) -> String {
    format!("むずかしいかな？ せいかいは、{answer} でした！")
}
