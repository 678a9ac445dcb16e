//! Append-only call history.

use std::fmt;

use fuel_propulsion::Route;
use serde::{Deserialize, Serialize};

/// Opaque identity of a requester, assigned by whatever transport fronts the actor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallerId(String);

impl CallerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CallerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CallerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The validated request a record was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallInput {
    pub mass: i64,
    pub route: Route,
}

/// One successful computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    pub caller: CallerId,
    /// Seconds since the Unix epoch at which the actor handled the call.
    pub timestamp: i64,
    pub input: CallInput,
    pub output: u64,
}

/// Ordered log of call records; insertion order is the actor's acceptance order.
#[derive(Debug, Default)]
pub struct HistoryStore {
    records: Vec<CallRecord>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: CallRecord) {
        self.records.push(record);
    }

    /// Copy of every record, oldest first.
    pub fn snapshot(&self) -> Vec<CallRecord> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
