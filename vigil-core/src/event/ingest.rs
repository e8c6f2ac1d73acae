use crate::event::{EventLog, EventRecord, IngestError};
use std::fs;
use std::path::Path;

/// Load an event log from a JSON-lines file (one `EventRecord` object
/// per line; blank lines ignored).
///
/// This is the one place strict validation happens: a severity outside
/// the closed High/Medium/Low set makes serde reject the line, and the
/// whole file is refused with the offending line number. Silently
/// dropping or miscounting such records would break the aggregation
/// invariant downstream. `event_type` and `source_ip` are never
/// validated.
pub fn load_events(path: &Path) -> Result<EventLog, IngestError> {
    let contents =
        fs::read_to_string(path).map_err(|e| IngestError::read_file(path, e))?;

    let mut records = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let record: EventRecord = serde_json::from_str(line)
            .map_err(|e| IngestError::parse(path, idx + 1, e))?;
        records.push(record);
    }

    tracing::info!(count = records.len(), path = %path.display(), "loaded event log");
    Ok(EventLog::from_records(records))
}
