use crate::event::Severity;
use crate::stats::types::DashboardSnapshot;
use owo_colors::OwoColorize;

fn severity_label(severity: Severity) -> String {
    match severity {
        Severity::High => severity.label().red().to_string(),
        Severity::Medium => severity.label().yellow().to_string(),
        Severity::Low => severity.label().green().to_string(),
    }
}

fn bar(count: u64, total: u64) -> String {
    if total == 0 {
        return String::new();
    }
    let pct = (count as f64 / total as f64) * 100.0;
    let bars = ((pct / 5.0).floor() as usize).max(1);
    format!("{:<20} {:>5.1}%", "█".repeat(bars), pct)
}

/// Reference text rendering of a snapshot: the four stat cards and the
/// three chart datasets as terminal output. Anything fancier (widgets,
/// actual charts) belongs to an external rendering layer consuming the
/// snapshot directly.
pub fn render_snapshot(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Security Events\n\
         ===============\n\
         total: {} | high: {} | medium: {} | low: {}\n\n",
        snapshot.total, snapshot.high, snapshot.medium, snapshot.low
    ));

    if snapshot.total == 0 {
        out.push_str("<no events in selected range>\n");
        return out;
    }

    out.push_str("Severity:\n");
    for (severity, count) in &snapshot.severity_distribution {
        out.push_str(&format!(
            "  {:<15} {:>6}  {}\n",
            severity_label(*severity),
            count,
            bar(*count, snapshot.total)
        ));
    }
    out.push('\n');

    out.push_str("Event types:\n");
    for (event_type, count) in &snapshot.event_type_distribution {
        out.push_str(&format!(
            "  {:<24} {:>6}  {}\n",
            event_type,
            count,
            bar(*count, snapshot.total)
        ));
    }
    out.push('\n');

    if let (Some((first, _)), Some((last, _))) =
        (snapshot.timeline.first(), snapshot.timeline.last())
    {
        let peak = snapshot
            .timeline
            .iter()
            .max_by_key(|(_, count)| *count)
            .map(|(ts, count)| format!("{count} at {ts}"))
            .unwrap_or_default();

        out.push_str(&format!(
            "Timeline: {} buckets from {} to {} | peak: {}\n",
            snapshot.timeline.len(),
            first,
            last,
            peak
        ));
    }

    out
}
