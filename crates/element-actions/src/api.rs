use std::sync::Arc;

use async_trait::async_trait;

use wd_core_types::{ActionId, ResponseBody, WdError};

use crate::click::execute_click;
use crate::model::{ClickParams, InteractionMode, SelectParams, SessionView};
use crate::ports::ElementPort;
use crate::select::execute_select;

/// Public contract of the element action core.
///
/// Every call settles exactly once: with the protocol response body of the
/// final click, or with the [`WdError`] that ended the attempt sequence.
#[async_trait]
pub trait ElementActions: Send + Sync {
    /// Click the first element matching `params.selector`.
    async fn click(&self, params: ClickParams) -> Result<ResponseBody, WdError>;

    /// Select the option whose visible text matches `params.text` inside
    /// the select element matching `params.selector`.
    async fn select_by_visible_text(&self, params: SelectParams)
        -> Result<ResponseBody, WdError>;
}

pub struct ElementActionsBuilder {
    session: SessionView,
    port: Option<Arc<dyn ElementPort>>,
}

impl ElementActionsBuilder {
    pub fn new(session: SessionView) -> Self {
        Self {
            session,
            port: None,
        }
    }

    pub fn with_port(mut self, port: Arc<dyn ElementPort>) -> Self {
        self.port = Some(port);
        self
    }

    pub fn build(self) -> Arc<dyn ElementActions> {
        Arc::new(ElementActionsImpl {
            session: self.session,
            port: self.port.expect("element port is required"),
        })
    }
}

pub struct ElementActionsImpl {
    session: SessionView,
    port: Arc<dyn ElementPort>,
}

#[async_trait]
impl ElementActions for ElementActionsImpl {
    async fn click(&self, params: ClickParams) -> Result<ResponseBody, WdError> {
        let action = ActionId::new();
        // Mode derives from session-level state; resolved once per call.
        let mode = InteractionMode::for_session(&self.session);
        execute_click(&action, self.port.as_ref(), mode, &params.selector).await
    }

    async fn select_by_visible_text(
        &self,
        params: SelectParams,
    ) -> Result<ResponseBody, WdError> {
        let action = ActionId::new();
        execute_select(&action, self.port.as_ref(), &params).await
    }
}
