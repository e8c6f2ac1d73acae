use crate::event::{EventLog, EventRecord, Severity};
use chrono::{DateTime, TimeZone, Utc};

fn ts(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, hour, 0, 0).unwrap()
}

fn record(hour: u32, severity: Severity, event_type: &str) -> EventRecord {
    EventRecord {
        timestamp: ts(hour),
        severity,
        event_type: event_type.to_string(),
        source_ip: "192.168.1.1".to_string(),
    }
}

#[test]
fn from_records_sorts_by_timestamp() {
    let log = EventLog::from_records(vec![
        record(5, Severity::Low, "DDoS"),
        record(1, Severity::High, "Malware"),
        record(3, Severity::Medium, "Intrusion"),
    ]);

    let times: Vec<_> = log.records().iter().map(|r| r.timestamp).collect();
    assert_eq!(times, vec![ts(1), ts(3), ts(5)]);
}

#[test]
fn duplicate_timestamps_keep_supplied_order() {
    let log = EventLog::from_records(vec![
        record(2, Severity::High, "first"),
        record(2, Severity::High, "second"),
        record(1, Severity::Low, "earlier"),
    ]);

    let types: Vec<_> = log
        .records()
        .iter()
        .map(|r| r.event_type.as_str())
        .collect();
    assert_eq!(types, vec!["earlier", "first", "second"]);
}

#[test]
fn span_covers_first_and_last_timestamps() {
    let log = EventLog::from_records(vec![
        record(4, Severity::Low, "DDoS"),
        record(1, Severity::High, "Malware"),
        record(9, Severity::Medium, "Intrusion"),
    ]);

    let span = log.span().unwrap();
    assert_eq!(span.start, ts(1));
    assert_eq!(span.end, ts(9));
}

#[test]
fn empty_log_has_no_span() {
    let log = EventLog::from_records(Vec::new());

    assert!(log.is_empty());
    assert_eq!(log.len(), 0);
    assert!(log.span().is_none());
}
