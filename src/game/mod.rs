//! Hangman rules: the secret word, guessed letters, wrong-guess counter and the
//! `InProgress -> {Won, Lost}` state machine.
//!
//! A [`GameState`] is one round. It is never reset in place; starting a new game
//! builds a fresh value and the old one is dropped.

use std::fmt;

use crate::error::HangmanError;

mod words;

pub use words::{EntropyPicker, FixedPicker, WORDS, WordPicker, pick_word};

/// Loss threshold.
pub const MAX_WRONG_GUESSES: u8 = 6;

// --- Letters ----------------------------------------------------------------

/// A single lowercase ASCII letter `a`..=`z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    pub const ALL: [Letter; 26] = {
        let mut out = [Letter(b'a'); 26];
        let mut i = 0;
        while i < 26 {
            out[i] = Letter(b'a' + i as u8);
            i += 1;
        }
        out
    };

    pub fn as_char(self) -> char {
        self.0 as char
    }

    pub fn to_ascii_uppercase(self) -> char {
        self.0.to_ascii_uppercase() as char
    }

    fn bit(self) -> u32 {
        1 << (self.0 - b'a')
    }
}

impl TryFrom<char> for Letter {
    type Error = HangmanError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_lowercase() {
            Ok(Letter(c as u8))
        } else {
            Err(HangmanError::InvalidLetter(c))
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Set of guessed letters, one bit per letter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn contains(&self, letter: Letter) -> bool {
        self.0 & letter.bit() != 0
    }

    /// Returns false if the letter was already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        let fresh = !self.contains(letter);
        self.0 |= letter.bit();
        fresh
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::ALL.into_iter().filter(|l| self.contains(*l))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = LetterSet::default();
        for l in iter {
            set.insert(l);
        }
        set
    }
}

// --- Word -------------------------------------------------------------------

/// The secret word for one round: non-empty, lowercase a-z only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word(String);

impl Word {
    pub fn new(s: &str) -> Result<Self, HangmanError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(HangmanError::InvalidWord(s.to_string()));
        }
        Ok(Word(s.to_string()))
    }

    pub(crate) fn from_static(s: &'static str) -> Self {
        debug_assert!(!s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase()));
        Word(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.0.bytes().map(Letter)
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.0.as_bytes().contains(&letter.0)
    }

    /// Distinct letters of the word.
    pub fn letter_set(&self) -> LetterSet {
        self.letters().collect()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// --- Game state -------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// What a submitted guess did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessResult {
    /// Already guessed, or the round is over. Nothing changed.
    Ignored,
    Correct,
    Wrong,
}

impl GuessResult {
    pub fn changed_state(self) -> bool {
        !matches!(self, GuessResult::Ignored)
    }
}

#[derive(Clone, Debug)]
pub struct GameState {
    word: Word,
    guessed: LetterSet,
    wrong_guesses: u8,
    status: Status,
}

impl GameState {
    /// StartNewGame: a fresh round with a word drawn from [`WORDS`].
    pub fn start(picker: &mut impl WordPicker) -> Self {
        let game = Self::with_word(pick_word(picker));
        tracing::info!(len = game.word.as_str().len(), "new game");
        game
    }

    pub fn with_word(word: Word) -> Self {
        Self {
            word,
            guessed: LetterSet::default(),
            wrong_guesses: 0,
            status: Status::InProgress,
        }
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn guessed(&self) -> LetterSet {
        self.guessed
    }

    pub fn wrong_guesses(&self) -> u8 {
        self.wrong_guesses
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn in_progress(&self) -> bool {
        self.status == Status::InProgress
    }

    pub fn submit_guess(&mut self, letter: Letter) -> GuessResult {
        if !self.in_progress() || self.guessed.contains(letter) {
            tracing::trace!(%letter, status = ?self.status, "guess ignored");
            return GuessResult::Ignored;
        }
        self.guessed.insert(letter);

        let result = if self.word.contains(letter) {
            GuessResult::Correct
        } else {
            self.wrong_guesses += 1;
            GuessResult::Wrong
        };
        debug_assert!(self.wrong_guesses <= MAX_WRONG_GUESSES);
        tracing::debug!(%letter, ?result, wrong = self.wrong_guesses, "guess");

        self.evaluate_terminal();
        result
    }

    // Win is checked first; a correct guess never bumps the wrong count, so both
    // can't become true on the same guess anyway.
    fn evaluate_terminal(&mut self) {
        let won = self.word.letters().all(|l| self.guessed.contains(l));
        self.status = if won {
            Status::Won
        } else if self.wrong_guesses >= MAX_WRONG_GUESSES {
            Status::Lost
        } else {
            Status::InProgress
        };
        if self.status.is_terminal() {
            tracing::info!(status = ?self.status, wrong = self.wrong_guesses, "game over");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l(c: char) -> Letter {
        Letter::try_from(c).unwrap()
    }

    fn game(word: &str) -> GameState {
        GameState::with_word(Word::new(word).unwrap())
    }

    #[test]
    fn letter_rejects_non_lowercase() {
        assert!(Letter::try_from('a').is_ok());
        assert!(Letter::try_from('z').is_ok());
        assert_eq!(Letter::try_from('A'), Err(HangmanError::InvalidLetter('A')));
        assert!(Letter::try_from('1').is_err());
        assert!(Letter::try_from('é').is_err());
    }

    #[test]
    fn letter_all_is_alphabet() {
        let s: String = Letter::ALL.iter().map(|l| l.as_char()).collect();
        assert_eq!(s, "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn letter_set_semantics() {
        let mut set = LetterSet::default();
        assert!(set.is_empty());
        assert!(set.insert(l('q')));
        assert!(!set.insert(l('q')));
        assert!(set.insert(l('b')));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![l('b'), l('q')]);
    }

    #[test]
    fn word_validation() {
        assert!(Word::new("hangman").is_ok());
        assert!(Word::new("").is_err());
        assert!(Word::new("Hangman").is_err());
        assert!(Word::new("hang man").is_err());
    }

    #[test]
    fn start_resets_everything() {
        let g = GameState::start(&mut FixedPicker(2));
        assert_eq!(g.word().as_str(), "butcher");
        assert!(g.in_progress());
        assert_eq!(g.wrong_guesses(), 0);
        assert!(g.guessed().is_empty());
    }

    #[test]
    fn correct_guess_does_not_count() {
        let mut g = game("hangman");
        assert_eq!(g.submit_guess(l('a')), GuessResult::Correct);
        assert_eq!(g.wrong_guesses(), 0);
        assert!(g.guessed().contains(l('a')));
    }

    #[test]
    fn wrong_guess_counts_once() {
        let mut g = game("hangman");
        assert_eq!(g.submit_guess(l('x')), GuessResult::Wrong);
        assert_eq!(g.submit_guess(l('x')), GuessResult::Ignored);
        assert_eq!(g.wrong_guesses(), 1);
        assert_eq!(g.guessed().len(), 1);
    }

    #[test]
    fn win_on_last_distinct_letter() {
        let mut g = game("assassin");
        for c in ['a', 's', 'i'] {
            g.submit_guess(l(c));
            assert!(g.in_progress());
        }
        g.submit_guess(l('n'));
        assert_eq!(g.status(), Status::Won);
    }

    #[test]
    fn loss_on_sixth_miss_then_frozen() {
        let mut g = game("butcher");
        for c in ['q', 'w', 'x', 'y', 'z'] {
            g.submit_guess(l(c));
        }
        assert!(g.in_progress());
        assert_eq!(g.submit_guess(l('j')), GuessResult::Wrong);
        assert_eq!(g.status(), Status::Lost);

        assert_eq!(g.submit_guess(l('b')), GuessResult::Ignored);
        assert_eq!(g.submit_guess(l('k')), GuessResult::Ignored);
        assert_eq!(g.wrong_guesses(), MAX_WRONG_GUESSES);
        assert!(!g.guessed().contains(l('b')));
    }

    #[test]
    fn win_at_five_misses() {
        let mut g = game("headsman");
        for c in ['q', 'w', 'x', 'y', 'z'] {
            g.submit_guess(l(c));
        }
        for c in ['h', 'e', 'a', 'd', 's', 'm', 'n'] {
            g.submit_guess(l(c));
        }
        assert_eq!(g.status(), Status::Won);
        assert_eq!(g.wrong_guesses(), 5);
    }
}
