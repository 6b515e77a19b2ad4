use tracing::instrument;

use wd_core_types::{ActionId, ResponseBody, WdError};

use crate::model::InteractionMode;
use crate::ports::ElementPort;
use crate::retry::retry_interaction;

/// Resolve the first element matching `selector` and click it, re-running
/// the whole resolve+click sequence on transient DOM-state failures.
#[instrument(skip_all, fields(action = %action.0, selector = %selector, mode = ?mode))]
pub(crate) async fn execute_click(
    action: &ActionId,
    port: &dyn ElementPort,
    mode: InteractionMode,
    selector: &str,
) -> Result<ResponseBody, WdError> {
    retry_interaction(action, "click", || click_once(port, mode, selector)).await
}

async fn click_once(
    port: &dyn ElementPort,
    mode: InteractionMode,
    selector: &str,
) -> Result<ResponseBody, WdError> {
    let element = port.find_element(selector).await?;
    match mode {
        InteractionMode::Standard => port.click_element(&element).await,
        InteractionMode::Touch => port.touch_click_element(&element).await,
    }
}
