// Word list and word selection.
use super::Word;

/// Candidate secret words. Every entry is non-empty lowercase a-z.
pub const WORDS: &[&str] = &["executioner", "hangman", "butcher", "assassin", "headsman"];

/// Source of the index used to pick a word at the start of each round.
pub trait WordPicker {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Picks uniformly using browser entropy (`getrandom`, feature `rng`), falling
/// back to a clock-seeded index when entropy is unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct EntropyPicker;

impl WordPicker for EntropyPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        #[cfg(feature = "rng")]
        {
            if let Some(idx) = entropy_index(len) {
                return idx;
            }
            tracing::warn!("entropy unavailable, falling back to clock-seeded pick");
        }
        clock_index(len)
    }
}

/// Always returns the same index; handy for replaying a known word.
#[derive(Clone, Copy, Debug)]
pub struct FixedPicker(pub usize);

impl WordPicker for FixedPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

pub fn pick_word(picker: &mut impl WordPicker) -> Word {
    let idx = picker.pick_index(WORDS.len());
    debug_assert!(idx < WORDS.len());
    Word::from_static(WORDS[idx.min(WORDS.len() - 1)])
}

// Rejection sampling keeps the distribution uniform for any len.
#[cfg(feature = "rng")]
fn entropy_index(len: usize) -> Option<usize> {
    let len = u32::try_from(len).ok()?;
    let zone = u32::MAX - (u32::MAX % len);
    loop {
        let mut buf = [0u8; 4];
        getrandom::getrandom(&mut buf).ok()?;
        let v = u32::from_le_bytes(buf);
        if v < zone {
            return Some((v % len) as usize);
        }
    }
}

fn clock_index(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let now = if cfg!(target_arch = "wasm32") {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    } else {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    };
    // Simple linear transform and modulus (not crypto secure)
    (now as u64 as usize)
        .wrapping_mul(1664525)
        .wrapping_add(1013904223)
        % len
}
