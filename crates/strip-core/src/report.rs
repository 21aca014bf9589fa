//! Assemble a full analysis report from a synthesized run.

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::{info, info_span};

use strip_model::{AnalysisReport, BiomarkerResult, StatusCounts, StripType};

use crate::synth::{aggregate_status, synthesize};

/// Run a mock analysis of `strip` at `timestamp` and summarize it.
pub fn analyze<R: Rng + ?Sized>(
    strip: &StripType,
    rng: &mut R,
    timestamp: DateTime<Utc>,
) -> AnalysisReport {
    let span = info_span!("analyze", strip = %strip.id);
    let _guard = span.enter();
    let results = synthesize(strip, rng);
    let report = build_report(strip, results, timestamp);
    info!(
        overall = %report.overall_status,
        normal = report.counts.normal,
        attention = report.counts.attention,
        critical = report.counts.critical,
        "analysis complete"
    );
    report
}

/// Wrap already-synthesized results in a report.
pub fn build_report(
    strip: &StripType,
    results: Vec<BiomarkerResult>,
    timestamp: DateTime<Utc>,
) -> AnalysisReport {
    let overall_status = aggregate_status(&results);
    AnalysisReport {
        id: format!("{}-{}", strip.id, timestamp.timestamp_millis()),
        timestamp,
        strip_id: strip.id.clone(),
        strip_name: strip.name.clone(),
        counts: StatusCounts::from_results(&results),
        average_confidence: average_confidence(&results),
        summary: overall_status.guidance().to_string(),
        overall_status,
        biomarker_results: results,
    }
}

/// Rounded mean confidence, or `None` for an empty run.
pub fn average_confidence(results: &[BiomarkerResult]) -> Option<u8> {
    if results.is_empty() {
        return None;
    }
    let total: u32 = results.iter().map(|r| u32::from(r.confidence)).sum();
    let mean = f64::from(total) / results.len() as f64;
    Some(mean.round() as u8)
}
