use crate::event::{IngestError, Severity, ingest};
use std::fs;
use tempfile::tempdir;

fn event_line(ts: &str, severity: &str, event_type: &str) -> String {
    format!(
        r#"{{"timestamp":"{ts}","severity":"{severity}","event_type":"{event_type}","source_ip":"192.168.1.1"}}"#
    )
}

#[test]
fn loads_json_lines_sorted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("events.jsonl");

    let lines = [
        event_line("2023-01-01T02:00:00Z", "Low", "DDoS"),
        event_line("2023-01-01T00:00:00Z", "High", "Malware"),
        String::new(),
        event_line("2023-01-01T01:00:00Z", "Medium", "Intrusion"),
    ];
    fs::write(&path, lines.join("\n")).unwrap();

    let log = ingest::load_events(&path).unwrap();

    assert_eq!(log.len(), 3);
    assert_eq!(log.records()[0].severity, Severity::High);
    assert_eq!(log.records()[2].event_type, "DDoS");
}

#[test]
fn unknown_severity_rejects_the_file_with_line_number() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("events.jsonl");

    let lines = [
        event_line("2023-01-01T00:00:00Z", "High", "Malware"),
        event_line("2023-01-01T01:00:00Z", "Critical", "Malware"),
    ];
    fs::write(&path, lines.join("\n")).unwrap();

    let err = ingest::load_events(&path).unwrap_err();

    match err {
        IngestError::Parse { line, .. } => assert_eq!(line, 2),
        other => panic!("expected parse error, got {other}"),
    }
}

#[test]
fn arbitrary_event_types_are_accepted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("events.jsonl");

    fs::write(
        &path,
        event_line("2023-01-01T00:00:00Z", "Low", "Suspicious Cron Entry"),
    )
    .unwrap();

    let log = ingest::load_events(&path).unwrap();

    assert_eq!(log.records()[0].event_type, "Suspicious Cron Entry");
}

#[test]
fn missing_file_reports_the_path() {
    let err = ingest::load_events(std::path::Path::new("/nonexistent/events.jsonl")).unwrap_err();

    assert!(matches!(err, IngestError::ReadFile { .. }));
}
