use async_trait::async_trait;

use wd_core_types::{ElementId, ResponseBody, WdError};

/// Low-level element-interaction protocol, supplied by the driver layer.
///
/// Each call settles exactly once with a value or a [`WdError`]. The click
/// calls report DOM-state races through the transient kinds
/// ([`WdError::Stale`], [`WdError::NotClickable`]); adapters classify raw
/// protocol failures with [`WdError::from_protocol_message`].
#[async_trait]
pub trait ElementPort: Send + Sync {
    /// First element matching `selector` in document order, or
    /// [`WdError::NotFound`].
    async fn find_element(&self, selector: &str) -> Result<ElementId, WdError>;

    /// First element matching the relative `expression`, scoped to the
    /// subtree of `parent`.
    async fn find_child_element(
        &self,
        parent: &ElementId,
        expression: &str,
    ) -> Result<ElementId, WdError>;

    async fn click_element(&self, element: &ElementId) -> Result<ResponseBody, WdError>;

    /// Touch-oriented click used when the session is in mobile mode.
    async fn touch_click_element(&self, element: &ElementId) -> Result<ResponseBody, WdError>;
}
