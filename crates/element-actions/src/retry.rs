use std::future::Future;

use tracing::{debug, warn};

use wd_core_types::{ActionId, WdError};

/// Retry ceiling shared by every action: 5 retries, 6 attempts in total.
pub(crate) const MAX_RETRIES: u32 = 5;

/// Run `attempt` (a full resolve+act sequence) until it settles.
///
/// A transient failure re-runs the whole attempt — resolve included, so a
/// stale handle is never reused — up to [`MAX_RETRIES`] times. Any other
/// failure, or exhaustion of the ceiling, is the terminal outcome. The loop
/// produces exactly one outcome per invocation.
pub(crate) async fn retry_interaction<T, F, Fut>(
    action: &ActionId,
    name: &'static str,
    mut attempt: F,
) -> Result<T, WdError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, WdError>>,
{
    let mut retries = 0u32;
    loop {
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_transient() && retries < MAX_RETRIES => {
                retries += 1;
                debug!(
                    action = %action.0,
                    name,
                    retries,
                    error = %err,
                    "transient interaction failure; re-running resolve+act"
                );
            }
            Err(err) => {
                if err.is_transient() {
                    warn!(action = %action.0, name, retries, "retry ceiling exhausted");
                }
                return Err(err);
            }
        }
    }
}
