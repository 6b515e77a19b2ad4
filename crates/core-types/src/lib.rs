use thiserror::Error;
use uuid::Uuid;

/// Protocol response body delivered on a successful interaction.
pub type ResponseBody = serde_json::Value;

/// Shared error taxonomy for the element action crates.
///
/// `Stale` and `NotClickable` are the transient kinds: the remote endpoint
/// rejected the interaction because the DOM changed between resolve and act,
/// and the same resolve+act sequence is expected to succeed when repeated
/// shortly after. Every other kind is terminal.
#[derive(Debug, Error, Clone)]
pub enum WdError {
    /// Parameter type or shape violation, detected before any attempt.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// No element matched the lookup.
    #[error("no such element: {0}")]
    NotFound(String),
    /// The element handle was invalidated by the browser.
    #[error("{0}")]
    Stale(String),
    /// The element could not receive the click at its current position.
    #[error("{0}")]
    NotClickable(String),
    /// Any other lookup, interaction, or transport failure.
    #[error("{0}")]
    Protocol(String),
}

impl WdError {
    /// Classify a raw collaborator error message into an error kind.
    ///
    /// Remote endpoints signal DOM-state races through message text; the two
    /// substrings below are the signals the retry policy reacts to. Adapters
    /// should run every protocol-level failure through this before handing
    /// it to the action crates.
    pub fn from_protocol_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains("stale element reference") {
            WdError::Stale(message)
        } else if message.contains("not clickable at point") {
            WdError::NotClickable(message)
        } else {
            WdError::Protocol(message)
        }
    }

    /// Whether re-running the full resolve+act sequence may clear the failure.
    pub fn is_transient(&self) -> bool {
        matches!(self, WdError::Stale(_) | WdError::NotClickable(_))
    }
}

/// Opaque remote reference to a DOM node, valid until the browser
/// invalidates it. Borrowed for one resolve-and-act attempt only.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

/// Correlation id minted per action invocation, carried in tracing spans.
#[cfg_attr(feature = "serde-full", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ActionId(pub String);

impl ActionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for ActionId {
    fn default() -> Self {
        Self::new()
    }
}
