//! Runtime settings for the browser shell. Everything has a default, so the
//! page can call `start_game()` without passing anything.

use tracing::Level;

use crate::render::Pen;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Delay before the end-of-round popup appears; 0 shows it immediately.
    pub popup_delay_ms: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub stroke_color: String,
    pub line_width: f64,
    /// One of trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            popup_delay_ms: 500,
            canvas_width: 250,
            canvas_height: 250,
            stroke_color: "#fff".to_string(),
            line_width: 3.0,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, crate::HangmanError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn pen(&self) -> Pen {
        Pen {
            color: self.stroke_color.clone(),
            width: self.line_width,
        }
    }

    /// Unknown names fall back to `INFO`.
    pub fn max_level(&self) -> Level {
        self.log_level.trim().parse().unwrap_or(Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = GameConfig::default();
        assert_eq!(c.popup_delay_ms, 500);
        assert_eq!((c.canvas_width, c.canvas_height), (250, 250));
        assert_eq!(c.pen().color, "#fff");
        assert_eq!(c.max_level(), Level::INFO);
    }

    #[test]
    fn log_level_parsing() {
        let mut c = GameConfig::default();
        c.log_level = "DEBUG".into();
        assert_eq!(c.max_level(), Level::DEBUG);
        c.log_level = "loud".into();
        assert_eq!(c.max_level(), Level::INFO);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_json_keeps_defaults() {
        let c = GameConfig::from_json(r##"{"popup_delay_ms": 0, "stroke_color": "#f00"}"##).unwrap();
        assert_eq!(c.popup_delay_ms, 0);
        assert_eq!(c.stroke_color, "#f00");
        assert_eq!(c.canvas_width, 250);
        assert!(matches!(
            GameConfig::from_json("{\"popup_delay_ms\": -1}"),
            Err(crate::HangmanError::Config(_))
        ));
    }
}
