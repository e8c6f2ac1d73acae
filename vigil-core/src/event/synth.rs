use crate::event::{EventLog, EventRecord, Severity};
use chrono::{DateTime, TimeDelta, Utc};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Severity mix for generated data: mostly Low, a fifth High.
const SEVERITY_WEIGHTS: &[(Severity, u32)] = &[
    (Severity::High, 2),
    (Severity::Medium, 3),
    (Severity::Low, 5),
];

const EVENT_TYPES: &[&str] = &["Malware", "Intrusion", "Authentication Failure", "DDoS"];

/// Synthetic event source for the reference deployment: one record per
/// hour starting at `start`, severities weighted, event types uniform,
/// source addresses in the 192.168.0.0/16 range. Seeded so tests and
/// repeated runs can reproduce the exact same log.
pub fn generate(start: DateTime<Utc>, hours: u64, seed: u64) -> EventLog {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::new();

    for h in 0..hours {
        // Stop at the edge of representable time instead of wrapping;
        // a pathological `hours` yields a truncated log, not a panic.
        let Ok(offset) = i64::try_from(h) else { break };
        let Some(delta) = TimeDelta::try_hours(offset) else {
            break;
        };
        let Some(timestamp) = start.checked_add_signed(delta) else {
            break;
        };

        // choose_weighted only fails on empty/zero weights; the tables
        // above are constant.
        let (severity, _) = SEVERITY_WEIGHTS
            .choose_weighted(&mut rng, |(_, w)| *w)
            .unwrap_or(&SEVERITY_WEIGHTS[0]);

        let event_type = EVENT_TYPES
            .choose(&mut rng)
            .copied()
            .unwrap_or(EVENT_TYPES[0]);

        let source_ip = format!(
            "192.168.{}.{}",
            rng.random_range(1..255u8),
            rng.random_range(1..255u8)
        );

        records.push(EventRecord {
            timestamp,
            severity: *severity,
            event_type: event_type.to_string(),
            source_ip,
        });
    }

    tracing::debug!(count = records.len(), seed, "generated synthetic event log");
    EventLog::from_records(records)
}

/// Hours in the reference deployment's span: one non-leap year.
pub const HOURS_PER_YEAR: u64 = 365 * 24;
