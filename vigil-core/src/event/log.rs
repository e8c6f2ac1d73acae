use crate::event::EventRecord;
use crate::filter::DateRange;

/// Immutable, time-ordered event table. Built once at startup, shared
/// read-only afterwards (typically behind an `Arc`); there is no
/// mutation API, so concurrent reads need no lock.
#[derive(Debug, Default)]
pub struct EventLog {
    records: Vec<EventRecord>,
}

impl EventLog {
    /// Build a log from records in any order. Sorting is stable, so
    /// records sharing a timestamp keep their supplied order
    /// (duplicate timestamps are valid and common).
    pub fn from_records(mut records: Vec<EventRecord>) -> Self {
        records.sort_by_key(|r| r.timestamp);
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The full ordered view. Filtering and aggregation operate on
    /// slices so they compose with already-filtered views.
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// `[earliest, latest]` timestamps, or `None` for an empty log.
    /// This is the default dashboard selection.
    pub fn span(&self) -> Option<DateRange> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some(DateRange::new(first.timestamp, last.timestamp))
    }
}
