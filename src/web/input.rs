// Input adapters. Every way of guessing ends up as a `Letter` fed to the same
// `App::handle_guess`.
use crate::game::Letter;

/// Anything that can yield a guess.
pub trait GuessSource {
    /// `None` when the input is not a guess at all.
    fn letter(&self) -> Option<Letter>;
}

/// A physical `keydown`. Only bare single-character `a`..=`z` keys count.
///
/// Ctrl/Alt/Meta + letter is deliberately not a guess (Ctrl+R, Cmd+W and the
/// like stay browser shortcuts), unlike a plain `a`..=`z` range check on the key.
#[derive(Clone, Copy, Debug)]
pub struct KeyPress<'a> {
    pub key: &'a str,
    pub modified: bool,
}

impl<'a> KeyPress<'a> {
    pub fn bare(key: &'a str) -> Self {
        Self {
            key,
            modified: false,
        }
    }

    pub fn from_event(evt: &web_sys::KeyboardEvent, key: &'a str) -> Self {
        Self {
            key,
            modified: evt.ctrl_key() || evt.alt_key() || evt.meta_key(),
        }
    }
}

impl GuessSource for KeyPress<'_> {
    fn letter(&self) -> Option<Letter> {
        if self.modified {
            return None;
        }
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Letter::try_from(c).ok(),
            _ => None,
        }
    }
}

/// A click on one of the on-screen letter buttons.
#[derive(Clone, Copy, Debug)]
pub struct ButtonClick(pub Letter);

impl GuessSource for ButtonClick {
    fn letter(&self) -> Option<Letter> {
        Some(self.0)
    }
}
