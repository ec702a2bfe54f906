//! Presenter: turns a [`GameState`] into text and drawing. No rules live here;
//! every function is a total projection of the state it is given.

use crate::game::{GameState, LetterSet, MAX_WRONG_GUESSES, Status, Word};

mod gallows;

pub use gallows::{
    GallowsStage, LOGICAL_SIZE, Pen, Stroke, Surface, draw_gallows, visible_stages,
};

pub const BLANK: char = '_';
pub const WON_MESSAGE: &str = "Congratulations! You Won! :)";
pub const LOST_MESSAGE: &str = "Unfortunately, you lost. :(";

/// Uppercase letter where guessed, `_` otherwise, separated by single spaces.
pub fn word_mask(word: &Word, guessed: LetterSet) -> String {
    let mut out = String::with_capacity(word.as_str().len() * 2);
    for (i, letter) in word.letters().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(if guessed.contains(letter) {
            letter.to_ascii_uppercase()
        } else {
            BLANK
        });
    }
    out
}

pub fn guesses_remaining(wrong_guesses: u8) -> u8 {
    MAX_WRONG_GUESSES.saturating_sub(wrong_guesses)
}

/// Text for the end-of-round popup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopupContent {
    pub message: &'static str,
    /// Only set on a loss.
    pub reveal: Option<String>,
}

/// Popup for a finished round, `None` while the round is still running.
pub fn terminal_popup(status: Status, word: &Word) -> Option<PopupContent> {
    match status {
        Status::InProgress => None,
        Status::Won => Some(PopupContent {
            message: WON_MESSAGE,
            reveal: None,
        }),
        Status::Lost => Some(PopupContent {
            message: LOST_MESSAGE,
            reveal: Some(format!("The word was: {word}")),
        }),
    }
}

/// Everything the page shows for one state, computed in one go.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Frame {
    pub mask: String,
    pub guesses_remaining: u8,
    pub wrong_guesses: u8,
    pub status: Status,
    pub guessed: String,
}

impl Frame {
    pub fn of(game: &GameState) -> Self {
        Self {
            mask: word_mask(game.word(), game.guessed()),
            guesses_remaining: guesses_remaining(game.wrong_guesses()),
            wrong_guesses: game.wrong_guesses(),
            status: game.status(),
            guessed: game.guessed().iter().map(|l| l.as_char()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Letter;

    fn set(s: &str) -> LetterSet {
        s.chars().map(|c| Letter::try_from(c).unwrap()).collect()
    }

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn mask_hides_unguessed() {
        assert_eq!(word_mask(&word("hangman"), set("")), "_ _ _ _ _ _ _");
        assert_eq!(word_mask(&word("hangman"), set("nh")), "H _ N _ _ _ N");
        assert_eq!(word_mask(&word("hangman"), set("hangmxz")), "H A N G M A N");
    }

    #[test]
    fn mask_single_letter_has_no_separator() {
        assert_eq!(word_mask(&word("a"), set("a")), "A");
    }

    #[test]
    fn remaining_counts_down() {
        assert_eq!(guesses_remaining(0), 6);
        assert_eq!(guesses_remaining(6), 0);
        assert_eq!(guesses_remaining(9), 0);
    }

    #[test]
    fn popup_only_reveals_on_loss() {
        let w = word("butcher");
        assert_eq!(terminal_popup(Status::InProgress, &w), None);
        let won = terminal_popup(Status::Won, &w).unwrap();
        assert_eq!(won.message, WON_MESSAGE);
        assert_eq!(won.reveal, None);
        let lost = terminal_popup(Status::Lost, &w).unwrap();
        assert_eq!(lost.message, "Unfortunately, you lost. :(");
        assert_eq!(lost.reveal.as_deref(), Some("The word was: butcher"));
    }

    #[test]
    fn frame_reflects_state() {
        let mut g = GameState::with_word(word("butcher"));
        g.submit_guess(Letter::try_from('u').unwrap());
        g.submit_guess(Letter::try_from('z').unwrap());
        let f = Frame::of(&g);
        assert_eq!(f.mask, "_ U _ _ _ _ _");
        assert_eq!(f.guesses_remaining, 5);
        assert_eq!(f.wrong_guesses, 1);
        assert_eq!(f.status, Status::InProgress);
        assert_eq!(f.guessed, "uz");
    }
}
