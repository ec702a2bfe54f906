//! Hangman core crate.
//!
//! `game` holds the rules, `render` projects a game into text and gallows
//! strokes, and `web` is the browser shell that wires the DOM to both. The pure
//! modules build and test natively; only `web` and `logging` touch browser APIs
//! at runtime.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod game;
mod logging;
pub mod render;
mod web;

pub use config::GameConfig;
pub use error::HangmanError;
pub use game::{GameState, GuessResult, Letter, MAX_WRONG_GUESSES, Status, WORDS, Word};
pub use render::{Frame, PopupContent};
pub use web::input::{ButtonClick, GuessSource, KeyPress};
pub use web::{guess, new_game};

#[cfg(feature = "serde_json")]
pub use web::snapshot;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// Attaches to the page (creating any missing elements) and starts the first
/// round with default settings.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start(GameConfig::default())?;
    Ok(())
}

/// Like [`start_game`], with settings given as JSON. Missing fields keep their
/// defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json)?;
    web::start(config)?;
    Ok(())
}
