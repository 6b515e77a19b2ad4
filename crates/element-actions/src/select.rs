use tracing::instrument;

use wd_core_types::{ActionId, ResponseBody, WdError};

use crate::model::SelectParams;
use crate::ports::ElementPort;
use crate::retry::retry_interaction;

/// Relative lookup for an option whose whitespace-normalized text equals the
/// supplied text (leading/trailing whitespace trimmed). Options may sit
/// directly under the select or inside an optgroup; the union keeps document
/// order, so a direct child wins when both match.
pub(crate) fn option_locator(text: &str) -> String {
    let predicate = format!("[normalize-space(.) = \"{}\"]", text.trim());
    format!("./option{predicate}|./optgroup/option{predicate}")
}

/// Resolve the select element, then the option matching the visible text,
/// and click the option. Both lookups are re-run on transient failures.
#[instrument(skip_all, fields(action = %action.0, selector = %params.selector))]
pub(crate) async fn execute_select(
    action: &ActionId,
    port: &dyn ElementPort,
    params: &SelectParams,
) -> Result<ResponseBody, WdError> {
    // The locator only depends on the supplied text, so it is built once.
    let locator = option_locator(&params.text);
    retry_interaction(action, "selectByVisibleText", || {
        select_once(port, &params.selector, &locator)
    })
    .await
}

async fn select_once(
    port: &dyn ElementPort,
    selector: &str,
    locator: &str,
) -> Result<ResponseBody, WdError> {
    let select = port.find_element(selector).await?;
    let option = port.find_child_element(&select, locator).await?;
    port.click_element(&option).await
}
