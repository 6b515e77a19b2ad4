use serde::{Deserialize, Serialize};
use serde_json::Value;

use wd_core_types::WdError;

/// Session capability view resolved once when the actions are built.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct SessionView {
    /// Mobile sessions click through the touch primitive.
    #[serde(default)]
    pub mobile: bool,
}

/// Interaction primitive derived from the session capabilities. Fixed for
/// the whole call; never re-evaluated per retry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InteractionMode {
    Standard,
    Touch,
}

impl InteractionMode {
    pub fn for_session(session: &SessionView) -> Self {
        if session.mobile {
            InteractionMode::Touch
        } else {
            InteractionMode::Standard
        }
    }
}

/// Parameters for the click action.
#[derive(Clone, Debug)]
pub struct ClickParams {
    /// Element to click on. When it matches more than one element the first
    /// match in document order is used.
    pub selector: String,
}

impl ClickParams {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }
}

/// Parameters for the select-by-visible-text action.
#[derive(Clone, Debug)]
pub struct SelectParams {
    /// Select element that contains the options.
    pub selector: String,
    /// Visible text of the option to select.
    pub text: String,
}

impl SelectParams {
    pub fn new(selector: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            text: text.into(),
        }
    }

    /// Build params from an untyped args payload.
    ///
    /// Both `selector` and `text` must be JSON strings; anything else fails
    /// with [`WdError::InvalidArgument`] before any lookup happens.
    pub fn from_json(args: &Value) -> Result<Self, WdError> {
        let selector = args.get("selector").and_then(Value::as_str);
        let text = args.get("text").and_then(Value::as_str);
        match (selector, text) {
            (Some(selector), Some(text)) => Ok(Self::new(selector, text)),
            _ => Err(WdError::InvalidArgument(
                "selectByVisibleText expects a string selector and a string text".into(),
            )),
        }
    }
}
