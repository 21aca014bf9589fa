use serde::{Deserialize, Serialize};

use crate::{ModelError, StripId};

/// A diagnostic strip category and the biomarkers its pads report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripType {
    pub id: StripId,
    pub name: String,
    pub description: String,
    /// Display color as `#RRGGBB`.
    pub color: String,
    /// Biomarker names in pad order.
    pub biomarkers: Vec<String>,
}

impl StripType {
    /// Build a strip type, validating the display color and name.
    pub fn new(
        id: StripId,
        name: impl Into<String>,
        description: impl Into<String>,
        color: impl Into<String>,
        biomarkers: Vec<String>,
    ) -> Result<Self, ModelError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ModelError::EmptyName(id.to_string()));
        }
        let color = validate_hex_color(&color.into())?;
        Ok(Self {
            id,
            name,
            description: description.into(),
            color,
            biomarkers,
        })
    }

    pub fn biomarker_count(&self) -> usize {
        self.biomarkers.len()
    }
}

/// Check a `#RRGGBB` color and return it uppercased.
pub fn validate_hex_color(value: &str) -> Result<String, ModelError> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or("");
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ModelError::InvalidColor(value.to_string()));
    }
    Ok(format!("#{}", digits.to_ascii_uppercase()))
}
