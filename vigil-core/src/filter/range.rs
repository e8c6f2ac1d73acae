use crate::event::EventRecord;
use chrono::{DateTime, Utc};

/// User-selected time window, inclusive on both ends. All instants are
/// UTC; boundary layers normalize before constructing one of these.
///
/// `start <= end` is deliberately not enforced: a reversed range is a
/// defined degenerate case that selects nothing, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// True when the range can never match a record (`start > end`).
    pub fn is_degenerate(&self) -> bool {
        self.start > self.end
    }
}

/// Select the records whose timestamp `t` satisfies
/// `range.start <= t <= range.end`.
///
/// Input must be sorted ascending by timestamp, which both `EventLog`
/// and any output of this function guarantee, so calls compose:
/// re-filtering a filtered view by the same or a wider range returns
/// the same view. Returns a subslice, preserving order, never an
/// error; an empty selection is an empty slice.
pub fn by_range(records: &[EventRecord], range: DateRange) -> &[EventRecord] {
    let lo = records.partition_point(|r| r.timestamp < range.start);
    let hi = records.partition_point(|r| r.timestamp <= range.end);

    if lo >= hi {
        // Degenerate or no-overlap ranges land here.
        return &[];
    }

    &records[lo..hi]
}
