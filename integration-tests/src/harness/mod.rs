use chrono::{DateTime, TimeZone, Utc};
use std::sync::Arc;
use vigil_core::dashboard::Dashboard;
use vigil_core::event::{EventLog, synth};
use vigil_core::stats::BucketWidth;

pub const REFERENCE_SEED: u64 = 42;

/// Start of the reference dataset's year.
pub fn reference_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
}

/// The reference deployment's log: one synthetic event per hour for a
/// full year, fixed seed.
pub fn reference_log() -> Arc<EventLog> {
    Arc::new(synth::generate(
        reference_start(),
        synth::HOURS_PER_YEAR,
        REFERENCE_SEED,
    ))
}

pub fn reference_dashboard() -> Dashboard {
    Dashboard::new(reference_log(), BucketWidth::default())
}

pub fn dashboard_with_bucket(bucket: &str) -> Dashboard {
    Dashboard::new(reference_log(), bucket.parse().expect("valid bucket width"))
}
