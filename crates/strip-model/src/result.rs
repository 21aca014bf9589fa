use serde::{Deserialize, Serialize};

use crate::Status;

/// Mock reading for one biomarker pad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiomarkerResult {
    pub name: String,
    pub detected_color: String,
    pub value: String,
    pub status: Status,
    /// Simulated certainty, always in `75..100`.
    pub confidence: u8,
    pub reference_range: String,
}

impl BiomarkerResult {
    /// Build a result whose value and reference range come from the status table.
    pub fn for_status(
        name: impl Into<String>,
        status: Status,
        detected_color: impl Into<String>,
        confidence: u8,
    ) -> Self {
        Self {
            name: name.into(),
            detected_color: detected_color.into(),
            value: status.value_text().to_string(),
            status,
            confidence,
            reference_range: status.reference_range().to_string(),
        }
    }
}
