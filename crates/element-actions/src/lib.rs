//! High-level element interaction actions on top of a remote
//! element-interaction protocol.
//!
//! Element handles go stale whenever the page re-renders between "find
//! element" and "act on element"; the runners here mask that class of races
//! by re-running the whole resolve+act sequence a bounded number of times.

pub mod api;
pub mod model;
pub mod ports;

mod click;
mod retry;
mod select;

pub use api::{ElementActions, ElementActionsBuilder};
pub use model::{ClickParams, InteractionMode, SelectParams, SessionView};
pub use ports::ElementPort;
pub use wd_core_types::{ActionId, ElementId, ResponseBody, WdError};
