//! Browser shell: owns the single [`App`], wires keyboard / button / play-again
//! input into it, and pushes presenter output to the DOM after every change.
//!
//! There is one `App` per page, kept in a thread-local slot. `None` means the
//! game has not been started yet; a new round replaces `App::game` wholesale.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::config::GameConfig;
use crate::error::HangmanError;
use crate::game::{EntropyPicker, GameState};
use crate::render::{Frame, LOGICAL_SIZE, draw_gallows, terminal_popup};

mod dom;
pub mod input;
mod popup;

use dom::Dom;
use input::{ButtonClick, GuessSource, KeyPress};
use popup::PopupTimer;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// A scheduled `setTimeout` for the end-of-round popup. Must be cancelled
/// before being dropped unfired.
struct PendingPopup {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl PendingPopup {
    fn cancel(self) {
        if let Some(win) = window() {
            win.clear_timeout_with_handle(self.handle);
        }
        tracing::trace!(handle = self.handle, "popup timer cancelled");
    }
}

struct App {
    config: GameConfig,
    dom: Dom,
    picker: EntropyPicker,
    game: GameState,
    popup: PopupTimer<PendingPopup>,
}

impl App {
    /// StartNewGame plus a full re-render: mask, count, blank gallows, popup
    /// hidden, every key enabled.
    fn new_game(&mut self) {
        if let Some(pending) = self.popup.next_round() {
            pending.cancel();
        }
        self.game = GameState::start(&mut self.picker);
        self.dom.hide_popup();
        self.dom.enable_all_keys();
        self.render();
    }

    fn render(&mut self) {
        let frame = Frame::of(&self.game);
        self.dom.apply_frame(&frame);
        draw_gallows(
            &mut self.dom.ctx,
            LOGICAL_SIZE,
            &self.config.pen(),
            frame.wrong_guesses,
        );
    }

    /// Single entry point for every input adapter. Returns whether the guess
    /// changed anything.
    fn handle_guess(&mut self, source: &impl GuessSource) -> bool {
        let Some(letter) = source.letter() else {
            return false;
        };
        if !self.game.submit_guess(letter).changed_state() {
            return false;
        }
        self.dom.disable_key(letter);
        self.render();
        if self.game.status().is_terminal() {
            self.schedule_popup();
        }
        true
    }

    fn schedule_popup(&mut self) {
        let Some(content) = terminal_popup(self.game.status(), self.game.word()) else {
            return;
        };
        let delay = self.config.popup_delay_ms;
        if delay == 0 {
            self.dom.show_popup(&content);
            return;
        }
        let Some(win) = window() else {
            self.dom.show_popup(&content);
            return;
        };

        let round = self.popup.round();
        let callback = Closure::once(move || {
            with_app(|app| app.fire_popup(round));
        });
        match win.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay.min(i32::MAX as u32) as i32,
        ) {
            Ok(handle) => {
                if let Some(old) = self.popup.arm(PendingPopup {
                    handle,
                    _callback: callback,
                }) {
                    old.cancel();
                }
            }
            Err(err) => {
                tracing::warn!(?err, "setTimeout failed, showing popup now");
                self.dom.show_popup(&content);
            }
        }
    }

    // The pending entry stays in place here: it owns the closure that is
    // currently running. The next round drops it.
    fn fire_popup(&mut self, round: u64) {
        if !self.popup.should_fire(round) {
            tracing::trace!(round, current = self.popup.round(), "stale popup timer");
            return;
        }
        if let Some(content) = terminal_popup(self.game.status(), self.game.word()) {
            self.dom.show_popup(&content);
        }
    }
}

/// Runs `f` against the app if it exists and is not already borrowed.
fn with_app<R>(f: impl FnOnce(&mut App) -> R) -> Option<R> {
    APP.with(|cell| match cell.try_borrow_mut() {
        Ok(mut slot) => slot.as_mut().map(f),
        Err(_) => {
            tracing::warn!("app busy, event dropped");
            None
        }
    })
}

pub(crate) fn start(config: GameConfig) -> Result<(), HangmanError> {
    crate::logging::init(config.max_level());

    if APP.with(|cell| cell.borrow().is_some()) {
        tracing::warn!("start called twice; starting a new round instead");
        with_app(App::new_game);
        return Ok(());
    }

    let win = window().ok_or(HangmanError::NoWindow)?;
    let doc = win.document().ok_or(HangmanError::NoDocument)?;

    let mut dom = Dom::attach(&doc, &config)?;
    dom.build_keyboard(&doc)?;
    wire_inputs(&doc, &dom)?;

    let mut picker = EntropyPicker;
    let game = GameState::start(&mut picker);
    let mut app = App {
        config,
        dom,
        picker,
        game,
        popup: PopupTimer::new(),
    };
    app.dom.hide_popup();
    app.render();

    APP.with(|cell| cell.replace(Some(app)));
    tracing::info!("hangman started");
    Ok(())
}

fn wire_inputs(doc: &web_sys::Document, dom: &Dom) -> Result<(), HangmanError> {
    // Physical keyboard
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            let key = evt.key();
            let press = KeyPress::from_event(&evt, &key);
            with_app(|app| app.handle_guess(&press));
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // On-screen keys
    for (letter, button) in &dom.keys {
        let click = ButtonClick(*letter);
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            with_app(|app| app.handle_guess(&click));
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Play again
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            with_app(App::new_game);
        }) as Box<dyn FnMut(_)>);
        dom.play_again
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

// --- JS-facing controls -----------------------------------------------------

/// Starts a fresh round (same as clicking "play again").
#[wasm_bindgen]
pub fn new_game() -> Result<(), JsValue> {
    with_app(App::new_game).ok_or_else(|| JsValue::from_str("game not started"))
}

/// Submits `key` as a guess, exactly as a physical key press would.
#[wasm_bindgen]
pub fn guess(key: &str) -> bool {
    with_app(|app| app.handle_guess(&KeyPress::bare(key))).unwrap_or(false)
}

/// JSON of the current frame, or `None` before the game starts.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn snapshot() -> Option<String> {
    with_app(|app| serde_json::to_string(&Frame::of(&app.game)))
        .and_then(|res| match res {
            Ok(json) => Some(json),
            Err(err) => {
                tracing::error!(%err, "snapshot serialization failed");
                None
            }
        })
}
