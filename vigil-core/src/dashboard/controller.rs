use crate::event::EventLog;
use crate::filter::{self, DateRange};
use crate::stats::{self, BucketWidth, DashboardSnapshot};
use std::sync::Arc;

/// Reactive entry point for the rendering layer: one call per range
/// change, one full recompute per call.
///
/// The only state carried between calls is the last selected range,
/// kept for redisplay. Every snapshot is recomputed from the injected
/// log, never patched incrementally; at the reference scale of a few
/// thousand records per year, full recompute is sub-millisecond and
/// trivially correct.
pub struct Dashboard {
    log: Arc<EventLog>,
    bucket: BucketWidth,
    last_range: Option<DateRange>,
}

impl Dashboard {
    pub fn new(log: Arc<EventLog>, bucket: BucketWidth) -> Self {
        Self {
            log,
            bucket,
            last_range: None,
        }
    }

    /// The initial selection: the log's full span. `None` when the log
    /// is empty.
    pub fn default_range(&self) -> Option<DateRange> {
        self.log.span()
    }

    pub fn last_range(&self) -> Option<DateRange> {
        self.last_range
    }

    /// Handle a date-range selection from the rendering layer.
    ///
    /// Degenerate or non-overlapping ranges produce a zero-valued
    /// snapshot, never an error; the rendering layer always gets
    /// something well-formed to draw.
    pub fn on_range_changed(&mut self, range: DateRange) -> DashboardSnapshot {
        self.last_range = Some(range);

        let view = filter::by_range(self.log.records(), range);
        let snapshot = stats::aggregate(view, self.bucket);

        tracing::debug!(
            start = %range.start,
            end = %range.end,
            total = snapshot.total,
            "range changed"
        );

        snapshot
    }

    /// Recompute over the last selected range, or the full span when
    /// nothing has been selected yet.
    pub fn refresh(&mut self) -> DashboardSnapshot {
        match self.last_range.or_else(|| self.default_range()) {
            Some(range) => self.on_range_changed(range),
            None => stats::aggregate(&[], self.bucket),
        }
    }
}
