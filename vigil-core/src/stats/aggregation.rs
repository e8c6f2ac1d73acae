use crate::event::{EventRecord, Severity};
use crate::stats::bucket::BucketWidth;
use crate::stats::types::DashboardSnapshot;
use std::collections::{BTreeMap, HashMap};

/// Compute the dashboard view-model for a filtered set of records.
///
/// Pure function of its input: no global state, no side effects. An
/// empty slice yields a well-formed all-zero snapshot. Severity is a
/// closed three-value enum, so `high + medium + low == total` holds
/// unconditionally.
pub fn aggregate(records: &[EventRecord], bucket: BucketWidth) -> DashboardSnapshot {
    let mut high = 0u64;
    let mut medium = 0u64;
    let mut low = 0u64;

    // BTreeMap keeps the timeline ascending by bucket start for free.
    let mut timeline: BTreeMap<_, u64> = BTreeMap::new();
    let mut event_types: HashMap<&str, u64> = HashMap::new();

    for record in records {
        match record.severity {
            Severity::High => high += 1,
            Severity::Medium => medium += 1,
            Severity::Low => low += 1,
        }

        *timeline.entry(bucket.truncate(record.timestamp)).or_insert(0) += 1;
        *event_types.entry(record.event_type.as_str()).or_insert(0) += 1;
    }

    let severity_distribution = [
        (Severity::High, high),
        (Severity::Medium, medium),
        (Severity::Low, low),
    ]
    .into_iter()
    .filter(|(_, count)| *count > 0)
    .collect();

    // Most-frequent-first; lexical tiebreak keeps the ordering stable
    // across runs.
    let mut event_type_distribution: Vec<(String, u64)> = event_types
        .into_iter()
        .map(|(ty, count)| (ty.to_string(), count))
        .collect();
    event_type_distribution.sort_by(|(a_ty, a_n), (b_ty, b_n)| {
        b_n.cmp(a_n).then_with(|| a_ty.cmp(b_ty))
    });

    DashboardSnapshot {
        total: records.len() as u64,
        high,
        medium,
        low,
        timeline: timeline.into_iter().collect(),
        severity_distribution,
        event_type_distribution,
    }
}
