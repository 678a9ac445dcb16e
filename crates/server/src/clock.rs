//! Timestamp source for call records.

use chrono::Utc;

/// Supplies "now" as whole seconds since the Unix epoch.
pub trait Clock: Send + 'static {
    fn now_seconds(&self) -> i64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_seconds(&self) -> i64 {
        Utc::now().timestamp()
    }
}

impl<F> Clock for F
where
    F: Fn() -> i64 + Send + 'static,
{
    fn now_seconds(&self) -> i64 {
        self()
    }
}
