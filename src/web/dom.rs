// DOM handles the game writes to. Elements the page didn't provide are created
// and appended to <body>.
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlButtonElement, HtmlCanvasElement,
    HtmlElement,
};

use crate::config::GameConfig;
use crate::error::HangmanError;
use crate::game::Letter;
use crate::render::{Frame, LOGICAL_SIZE, PopupContent};

pub(crate) const WORD_DISPLAY_ID: &str = "word-display";
pub(crate) const GUESSES_LEFT_ID: &str = "guesses-left";
pub(crate) const KEYBOARD_ID: &str = "keyboard";
pub(crate) const CANVAS_ID: &str = "hangman-canvas";
pub(crate) const POPUP_ID: &str = "popup-container";
pub(crate) const FINAL_MESSAGE_ID: &str = "final-message";
pub(crate) const CORRECT_WORD_ID: &str = "correct-word";
pub(crate) const PLAY_AGAIN_ID: &str = "play-again-button";

pub(crate) struct Dom {
    word_display: Element,
    guesses_left: Element,
    keyboard: Element,
    pub(crate) ctx: CanvasRenderingContext2d,
    popup: HtmlElement,
    final_message: Element,
    correct_word: Element,
    pub(crate) play_again: HtmlButtonElement,
    pub(crate) keys: Vec<(Letter, HtmlButtonElement)>,
}

impl Dom {
    pub(crate) fn attach(doc: &Document, config: &GameConfig) -> Result<Self, HangmanError> {
        let body: Element = doc.body().ok_or(HangmanError::NoBody)?.into();

        let word_display = ensure_element(doc, &body, "div", WORD_DISPLAY_ID)?;
        let guesses_left = ensure_element(doc, &body, "span", GUESSES_LEFT_ID)?;
        let keyboard = ensure_element(doc, &body, "div", KEYBOARD_ID)?;

        let canvas: HtmlCanvasElement = ensure_element(doc, &body, "canvas", CANVAS_ID)?
            .dyn_into()
            .map_err(|_| HangmanError::Dom(format!("#{CANVAS_ID} is not a canvas")))?;
        canvas.set_width(config.canvas_width);
        canvas.set_height(config.canvas_height);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or(HangmanError::NoCanvasContext)?
            .dyn_into()
            .map_err(|_| HangmanError::NoCanvasContext)?;
        // Resizing resets the transform, so scale after sizing.
        ctx.set_transform(
            config.canvas_width as f64 / LOGICAL_SIZE.0,
            0.0,
            0.0,
            config.canvas_height as f64 / LOGICAL_SIZE.1,
            0.0,
            0.0,
        )?;

        let popup: HtmlElement = ensure_element(doc, &body, "div", POPUP_ID)?
            .dyn_into()
            .map_err(|_| HangmanError::Dom(format!("#{POPUP_ID} is not an html element")))?;
        let final_message = ensure_element(doc, &popup, "h2", FINAL_MESSAGE_ID)?;
        let correct_word = ensure_element(doc, &popup, "p", CORRECT_WORD_ID)?;
        let play_again: HtmlButtonElement = ensure_element(doc, &popup, "button", PLAY_AGAIN_ID)?
            .dyn_into()
            .map_err(|_| HangmanError::Dom(format!("#{PLAY_AGAIN_ID} is not a button")))?;
        if play_again.text_content().unwrap_or_default().is_empty() {
            play_again.set_text_content(Some("Play Again"));
        }

        Ok(Self {
            word_display,
            guesses_left,
            keyboard,
            ctx,
            popup,
            final_message,
            correct_word,
            play_again,
            keys: Vec::new(),
        })
    }

    /// Replaces the keyboard container's contents with one button per letter.
    pub(crate) fn build_keyboard(&mut self, doc: &Document) -> Result<(), HangmanError> {
        self.keyboard.set_inner_html("");
        self.keys.clear();
        for letter in Letter::ALL {
            let button: HtmlButtonElement = doc
                .create_element("button")?
                .dyn_into()
                .map_err(|_| HangmanError::Dom("button element".into()))?;
            button.set_class_name("key");
            button.set_text_content(Some(&letter.to_string()));
            self.keyboard.append_child(&button)?;
            self.keys.push((letter, button));
        }
        Ok(())
    }

    pub(crate) fn apply_frame(&self, frame: &Frame) {
        self.word_display.set_text_content(Some(&frame.mask));
        self.guesses_left
            .set_text_content(Some(&frame.guesses_remaining.to_string()));
    }

    pub(crate) fn disable_key(&self, letter: Letter) {
        if let Some((_, button)) = self.keys.iter().find(|(l, _)| *l == letter) {
            button.set_disabled(true);
        }
    }

    pub(crate) fn enable_all_keys(&self) {
        for (_, button) in &self.keys {
            button.set_disabled(false);
        }
    }

    pub(crate) fn show_popup(&self, content: &PopupContent) {
        self.final_message.set_text_content(Some(content.message));
        self.correct_word
            .set_text_content(Some(content.reveal.as_deref().unwrap_or("")));
        self.set_popup_display("flex");
    }

    pub(crate) fn hide_popup(&self) {
        self.set_popup_display("none");
    }

    fn set_popup_display(&self, value: &str) {
        if let Err(err) = self.popup.style().set_property("display", value) {
            tracing::warn!(?err, "could not set popup display");
        }
    }
}

fn ensure_element(
    doc: &Document,
    parent: &Element,
    tag: &str,
    id: &str,
) -> Result<Element, HangmanError> {
    if let Some(el) = doc.get_element_by_id(id) {
        return Ok(el);
    }
    tracing::debug!(id, tag, "creating missing element");
    let el = doc.create_element(tag)?;
    el.set_id(id);
    parent.append_child(&el)?;
    Ok(el)
}
