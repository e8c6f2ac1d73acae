use crate::event::Severity;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The render-ready output of one aggregation pass. Recomputed in full
/// on every range change and never updated in place; callers own it
/// outright.
///
/// Distributions list only observed values. `event_type_distribution`
/// is most-frequent-first with ties broken lexically, so repeated runs
/// over identical input produce identical output.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub total: u64,
    pub high: u64,
    pub medium: u64,
    pub low: u64,

    /// (bucket start, events in bucket), ascending by bucket start.
    pub timeline: Vec<(DateTime<Utc>, u64)>,

    pub severity_distribution: Vec<(Severity, u64)>,
    pub event_type_distribution: Vec<(String, u64)>,
}
