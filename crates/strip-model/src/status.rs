//! Severity classification for biomarker results.
//!
//! A [`Status`] is attached to every synthesized biomarker result and is also
//! used for the aggregate banner of a whole run. The per-status lookup tables
//! (color palette, value text, reference range, banner text) are closed, so
//! no lookup here can fail.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Severity of a single biomarker result or of a set of results.
///
/// Variants are declared in increasing severity so the derived `Ord`
/// matches the aggregation priority.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Normal,
    Attention,
    Critical,
}

impl Status {
    /// All statuses, least severe first.
    pub const ALL: [Status; 3] = [Status::Normal, Status::Attention, Status::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Normal => "normal",
            Status::Attention => "attention",
            Status::Critical => "critical",
        }
    }

    /// Capitalized label used in tables ("Normal", "Attention", "Critical").
    pub fn label(&self) -> &'static str {
        match self {
            Status::Normal => "Normal",
            Status::Attention => "Attention",
            Status::Critical => "Critical",
        }
    }

    /// The three swatch colors a detected pad may show for this status.
    pub fn palette(&self) -> &'static [&'static str; 3] {
        match self {
            Status::Normal => &["#22C55E", "#4ADE80", "#86EFAC"],
            Status::Attention => &["#F59E0B", "#FBBF24", "#FCD34D"],
            Status::Critical => &["#EF4444", "#F87171", "#FCA5A5"],
        }
    }

    /// Descriptive value shown for a result with this status.
    pub fn value_text(&self) -> &'static str {
        match self {
            Status::Normal => "Normal",
            Status::Attention => "Elevated",
            Status::Critical => "High",
        }
    }

    /// Reference-range wording shown for a result with this status.
    pub fn reference_range(&self) -> &'static str {
        match self {
            Status::Normal => "Within range",
            Status::Attention => "Slightly above range",
            Status::Critical => "Above normal range",
        }
    }

    /// Banner headline for an overall status.
    pub fn banner_text(&self) -> &'static str {
        match self {
            Status::Normal => "All Clear",
            Status::Attention => "Attention Needed",
            Status::Critical => "Requires Review",
        }
    }

    /// One-sentence guidance attached to a report with this overall status.
    pub fn guidance(&self) -> &'static str {
        match self {
            Status::Normal => {
                "All biomarkers are within normal ranges. Continue monitoring as recommended."
            }
            Status::Attention => {
                "Some biomarkers require attention. Review the detailed analysis below."
            }
            Status::Critical => {
                "Critical values detected. Please consult with a healthcare professional."
            }
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ModelError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Status::Normal),
            "attention" => Ok(Status::Attention),
            "critical" => Ok(Status::Critical),
            _ => Err(ModelError::UnknownStatus(s.to_string())),
        }
    }
}
