//! Mock analysis history for the history view.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::debug;

use strip_model::{HistoryEntry, HistoryFilter, Status, StripType};

use crate::synth::StatusWeights;

/// Number of past runs generated for a strip.
pub const HISTORY_LEN: usize = 8;
/// Days between consecutive past runs.
pub const HISTORY_SPACING_DAYS: i64 = 3;

/// Share of biomarkers reported normal for a past run with `status`.
pub fn normal_fraction(status: Status) -> f64 {
    match status {
        Status::Normal => 0.9,
        Status::Attention => 0.7,
        Status::Critical => 0.5,
    }
}

/// Generate past runs of `strip`, newest first, ending at `now`.
pub fn mock_history<R: Rng + ?Sized>(
    strip: &StripType,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Vec<HistoryEntry> {
    let biomarker_count = strip.biomarkers.len();
    let entries: Vec<HistoryEntry> = (0..HISTORY_LEN)
        .map(|i| {
            let status = StatusWeights::HISTORY.sample(rng);
            let normal_count = (biomarker_count as f64 * normal_fraction(status)).floor() as usize;
            HistoryEntry {
                id: format!("analysis-{i}"),
                date: now - Duration::days(HISTORY_SPACING_DAYS * i as i64),
                strip_name: strip.name.clone(),
                status,
                biomarker_count,
                normal_count,
            }
        })
        .collect();
    debug!(strip = %strip.id, entries = entries.len(), "generated history");
    entries
}

pub fn filter_history(entries: &[HistoryEntry], filter: HistoryFilter) -> Vec<&HistoryEntry> {
    entries
        .iter()
        .filter(|entry| filter.matches(entry.status))
        .collect()
}

/// Percent-normal per run, oldest first, for the trend chart.
pub fn trend(entries: &[HistoryEntry]) -> Vec<(DateTime<Utc>, f64)> {
    let mut points: Vec<(DateTime<Utc>, f64)> = entries
        .iter()
        .map(|entry| (entry.date, entry.percent_normal()))
        .collect();
    points.sort_by_key(|(date, _)| *date);
    points
}
