use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{BiomarkerResult, Status, StripId};

/// Number of results per status in a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub normal: usize,
    pub attention: usize,
    pub critical: usize,
}

impl StatusCounts {
    pub fn from_results(results: &[BiomarkerResult]) -> Self {
        let mut counts = Self::default();
        for result in results {
            match result.status {
                Status::Normal => counts.normal += 1,
                Status::Attention => counts.attention += 1,
                Status::Critical => counts.critical += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.normal + self.attention + self.critical
    }
}

/// Everything the dashboard shows for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub strip_id: StripId,
    pub strip_name: String,
    pub biomarker_results: Vec<BiomarkerResult>,
    pub overall_status: Status,
    pub summary: String,
    pub counts: StatusCounts,
    /// Rounded mean confidence; `None` when the strip has no biomarkers.
    pub average_confidence: Option<u8>,
}
