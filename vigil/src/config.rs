use anyhow::Context;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventSource {
    /// Regenerate the reference dataset at startup.
    #[default]
    Synthetic,
    /// Load a JSON-lines event file.
    File,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    pub source: EventSource,

    /// Required for `source = "file"`.
    pub path: Option<String>,

    /// First synthetic timestamp; RFC 3339 or a bare date (UTC midnight).
    pub start: String,

    /// Synthetic span, one record per hour.
    pub hours: u64,

    pub seed: u64,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            source: EventSource::Synthetic,
            path: None,
            start: "2023-01-01".to_string(),
            hours: vigil_core::event::synth::HOURS_PER_YEAR,
            seed: 0,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Timeline bucket width, e.g. "15m", "1h", "1d".
    pub bucket: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            bucket: "1h".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct VigilConfig {
    pub events: EventsConfig,
    pub dashboard: DashboardConfig,
}

impl VigilConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {path}"))?;
        toml::from_str(&contents).with_context(|| format!("failed to parse config file {path}"))
    }

    /// Load `path`, falling back to defaults when the default config
    /// file simply isn't there. An explicitly named missing file is
    /// still an error.
    pub fn load(path: &str, is_default_path: bool) -> anyhow::Result<Self> {
        if is_default_path && !Path::new(path).exists() {
            tracing::info!(path, "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }
}

/// Parse a user-facing instant: RFC 3339, or a bare `YYYY-MM-DD` taken
/// as UTC midnight. All boundary input is normalized to UTC here.
pub fn parse_instant(s: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.with_timezone(&Utc));
    }

    let date: NaiveDate = s
        .parse()
        .with_context(|| format!("'{s}' is neither RFC 3339 nor YYYY-MM-DD"))?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}
