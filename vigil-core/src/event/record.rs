use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event importance. Closed set: the aggregation invariant
/// `high + medium + low == total` relies on there being exactly
/// three variants, so unknown values are rejected at deserialization
/// rather than tolerated here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// One logged security occurrence. Immutable once created.
///
/// `event_type` and `source_ip` are opaque text as far as the core is
/// concerned: the set of event types is open, and the source address is
/// an identifier, not a parsed network address.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub event_type: String,
    pub source_ip: String,
}
