// Word list invariants.

use std::collections::HashSet;

use hangman_wasm::{WORDS, Word};

#[test]
fn word_list_nonempty() {
    assert!(!WORDS.is_empty());
}

#[test]
fn words_are_unique_and_valid() {
    let mut seen = HashSet::new();
    for w in WORDS {
        assert!(seen.insert(*w), "duplicate word '{}' in WORDS", w);
        assert!(Word::new(w).is_ok(), "word '{}' is not lowercase a-z", w);
    }
}

#[test]
fn every_word_can_be_lost() {
    // Needs at least six letters absent from the word to reach the loss threshold.
    for w in WORDS {
        let absent = ('a'..='z').filter(|c| !w.contains(*c)).count();
        assert!(absent >= 6, "word '{}' leaves only {} losing letters", w, absent);
    }
}
