use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ModelError, Status};

/// One past run as listed in the history view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub strip_name: String,
    pub status: Status,
    pub biomarker_count: usize,
    pub normal_count: usize,
}

impl HistoryEntry {
    /// Share of normal biomarkers as a percentage; 0 for an empty strip.
    pub fn percent_normal(&self) -> f64 {
        if self.biomarker_count == 0 {
            return 0.0;
        }
        self.normal_count as f64 / self.biomarker_count as f64 * 100.0
    }
}

/// Status filter for the history list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HistoryFilter {
    #[default]
    All,
    Only(Status),
}

impl HistoryFilter {
    pub fn matches(&self, status: Status) -> bool {
        match self {
            HistoryFilter::All => true,
            HistoryFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for HistoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryFilter::All => f.write_str("all"),
            HistoryFilter::Only(status) => fmt::Display::fmt(status, f),
        }
    }
}

impl FromStr for HistoryFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(HistoryFilter::All);
        }
        s.parse().map(HistoryFilter::Only)
    }
}
