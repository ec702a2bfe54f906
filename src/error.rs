//! Boundary errors. Game rules never fail (bad guesses are silent no-ops), so
//! everything here comes from validating raw input or talking to the browser.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HangmanError {
    #[error("invalid word {0:?}: expected non-empty lowercase a-z")]
    InvalidWord(String),
    #[error("invalid letter {0:?}: expected a single lowercase a-z")]
    InvalidLetter(char),
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("no body")]
    NoBody,
    #[error("canvas has no 2d context")]
    NoCanvasContext,
    #[error("dom error: {0}")]
    Dom(String),
    #[error("config error: {0}")]
    Config(String),
}

impl From<JsValue> for HangmanError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        HangmanError::Dom(msg)
    }
}

impl From<HangmanError> for JsValue {
    fn from(err: HangmanError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(feature = "serde_json")]
impl From<serde_json::Error> for HangmanError {
    fn from(err: serde_json::Error) -> Self {
        HangmanError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            HangmanError::InvalidLetter('Q').to_string(),
            "invalid letter 'Q': expected a single lowercase a-z"
        );
        assert!(HangmanError::InvalidWord("Bad1".into())
            .to_string()
            .contains("\"Bad1\""));
    }
}
