//! Error types. Gameplay itself never fails; these cover level validation and
//! browser shell setup, both of which surface before the first frame.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// A level descriptor that cannot be turned into a playable level.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LevelError {
    #[error("level '{level}': {what} has a non-finite position or size")]
    NonFinite { level: &'static str, what: &'static str },
    #[error("level '{0}': level_end_x must be positive")]
    BadBoundary(&'static str),
    #[error("level '{level}' must contain exactly one boss, found {found}")]
    BossCount { level: &'static str, found: usize },
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Level(#[from] LevelError),
    #[error("no {0} available")]
    Missing(&'static str),
    #[error("dom: {0}")]
    Dom(String),
    #[error("invalid config: {0}")]
    Config(String),
}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        GameError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
