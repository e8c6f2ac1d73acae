mod config;
mod logging;

use crate::config::{EventSource, VigilConfig, parse_instant};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use vigil_core::dashboard::Dashboard;
use vigil_core::event::{EventLog, ingest, synth};
use vigil_core::filter::DateRange;
use vigil_core::stats::{BucketWidth, render_snapshot};

const DEFAULT_CONFIG: &str = "config/vigil.toml";

#[derive(Parser, Debug)]
#[command(name = "vigil", version, about = "Vigil: security-event dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Aggregate the event log over a date range and render it (default)
    Dashboard {
        /// Path to the Vigil config file
        #[arg(long, default_value = DEFAULT_CONFIG)]
        config: String,

        /// Range start, RFC 3339 or YYYY-MM-DD; defaults to the earliest event
        #[arg(long)]
        from: Option<String>,

        /// Range end (inclusive); defaults to the latest event
        #[arg(long)]
        to: Option<String>,

        /// Emit the raw view-model as JSON instead of rendered text
        #[arg(long)]
        json: bool,
    },

    /// Write the synthetic event log as JSON lines
    Generate {
        /// Path to the Vigil config file
        #[arg(long, default_value = DEFAULT_CONFIG)]
        config: String,

        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<String>,
    },
}

fn main() {
    logging::init_logging();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Dashboard {
            config,
            from,
            to,
            json,
        }) => run_dashboard(&config, from.as_deref(), to.as_deref(), json),

        Some(Command::Generate { config, out }) => run_generate(&config, out.as_deref()),

        None => run_dashboard(DEFAULT_CONFIG, None, None, false),
    };

    if let Err(e) = result {
        eprintln!("vigil error: {e:#}");
        std::process::exit(1);
    }
}

fn run_dashboard(
    config_path: &str,
    from: Option<&str>,
    to: Option<&str>,
    json: bool,
) -> Result<()> {
    let cfg = VigilConfig::load(config_path, config_path == DEFAULT_CONFIG)?;

    let log = build_log(&cfg)?;
    let bucket: BucketWidth = cfg.dashboard.bucket.parse()?;

    let mut dash = Dashboard::new(Arc::new(log), bucket);

    let snapshot = match selected_range(&dash, from, to)? {
        Some(range) => dash.on_range_changed(range),
        None => dash.refresh(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render_snapshot(&snapshot));
    }

    Ok(())
}

/// Resolve the user's `--from`/`--to` flags against the log's span.
/// With neither flag the caller falls through to the default selection.
fn selected_range(
    dash: &Dashboard,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<Option<DateRange>> {
    if from.is_none() && to.is_none() {
        return Ok(None);
    }

    let span = dash.default_range();
    let span_start = span.map(|r| r.start).unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
    let span_end = span.map(|r| r.end).unwrap_or(DateTime::<Utc>::UNIX_EPOCH);

    let start = match from {
        Some(s) => parse_instant(s)?,
        None => span_start,
    };
    let end = match to {
        Some(s) => parse_instant(s)?,
        None => span_end,
    };

    Ok(Some(DateRange::new(start, end)))
}

fn build_log(cfg: &VigilConfig) -> Result<EventLog> {
    match cfg.events.source {
        EventSource::Synthetic => {
            let start = parse_instant(&cfg.events.start)?;
            Ok(synth::generate(start, cfg.events.hours, cfg.events.seed))
        }
        EventSource::File => {
            let path = cfg
                .events
                .path
                .as_deref()
                .context("events.path is required when events.source = \"file\"")?;
            Ok(ingest::load_events(Path::new(path))?)
        }
    }
}

fn run_generate(config_path: &str, out: Option<&str>) -> Result<()> {
    let cfg = VigilConfig::load(config_path, config_path == DEFAULT_CONFIG)?;

    let start = parse_instant(&cfg.events.start)?;
    let log = synth::generate(start, cfg.events.hours, cfg.events.seed);

    let mut lines = String::with_capacity(log.len() * 96);
    for record in log.records() {
        lines.push_str(&serde_json::to_string(record)?);
        lines.push('\n');
    }

    match out {
        Some(path) => {
            fs::write(path, lines).with_context(|| format!("failed to write {path}"))?;
            tracing::info!(count = log.len(), path, "wrote synthetic event log");
        }
        None => print!("{lines}"),
    }

    Ok(())
}
