//! The calculation service: one actor task that prices routes in arrival order
//! and keeps the call history.

pub mod actor;
pub mod clock;
pub mod history;
pub mod logging;

pub use actor::{ActorError, CalculatorHandle, spawn, spawn_with_clock};
pub use clock::{Clock, SystemClock};
pub use history::{CallInput, CallRecord, CallerId, HistoryStore};
