use crate::event::synth;
use chrono::{DateTime, TimeZone, Utc};

#[test]
fn generates_one_record_per_hour() {
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();

    let log = synth::generate(start, 48, 7);

    assert_eq!(log.len(), 48);
    let span = log.span().unwrap();
    assert_eq!(span.start, start);
    assert_eq!(span.end, start + chrono::TimeDelta::hours(47));
}

#[test]
fn timestamps_are_hourly_and_ascending() {
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();

    let log = synth::generate(start, 24, 7);

    for (i, record) in log.records().iter().enumerate() {
        assert_eq!(record.timestamp, start + chrono::TimeDelta::hours(i as i64));
    }
}

#[test]
fn same_seed_reproduces_the_same_log() {
    let start = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();

    let a = synth::generate(start, 100, 42);
    let b = synth::generate(start, 100, 42);

    assert_eq!(a.records(), b.records());
}

#[test]
fn generated_fields_match_the_reference_shape() {
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();

    let log = synth::generate(start, 200, 11);

    for record in log.records() {
        assert!(
            ["Malware", "Intrusion", "Authentication Failure", "DDoS"]
                .contains(&record.event_type.as_str()),
            "unexpected event type {}",
            record.event_type
        );

        let octets: Vec<&str> = record.source_ip.split('.').collect();
        assert_eq!(octets[..2], ["192", "168"]);
        assert_eq!(octets.len(), 4);
    }
}

#[test]
fn generation_stops_at_the_representable_time_limit() {
    // Starting at the top of chrono's range, only the first timestamp
    // fits; the rest of the requested span is dropped, not wrapped.
    let start = DateTime::<Utc>::MAX_UTC;

    let log = synth::generate(start, 100, 7);

    assert_eq!(log.len(), 1);
    assert_eq!(log.records()[0].timestamp, start);
}
