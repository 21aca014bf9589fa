//! Strip-type catalog: the built-in set and CSV loading.
//!
//! A catalog is loaded once at startup and passed by reference to whatever
//! needs it. Lookups by id are the only fallible runtime operation; callers
//! report [`CatalogError::UnknownStrip`] instead of running an analysis.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use strip_model::{StripId, StripType};

use crate::error::CatalogError;

/// Environment variable for overriding the catalog file.
pub const CATALOG_ENV_VAR: &str = "STRIPSCAN_CATALOG";

/// Separator between biomarker names in the catalog CSV.
pub const BIOMARKER_SEPARATOR: char = ';';

/// id, name, description, color, biomarkers
const BUILTIN: &[(&str, &str, &str, &str, &[&str])] = &[
    (
        "urine",
        "Urine",
        "Metabolic & renal biomarker analysis for comprehensive health screening",
        "#F59E0B",
        &[
            "Glucose",
            "Protein",
            "pH",
            "Blood",
            "Ketones",
            "Bilirubin",
            "Urobilinogen",
            "Nitrite",
            "Leukocytes",
            "Specific Gravity",
        ],
    ),
    (
        "sweat",
        "Sweat",
        "Electrolyte balance and hydration status assessment",
        "#3B82F6",
        &["Sodium", "Chloride", "Potassium", "Lactate", "Cortisol", "Glucose"],
    ),
    (
        "saliva",
        "Saliva",
        "Hormonal and stress marker evaluation for wellness monitoring",
        "#EC4899",
        &[
            "Cortisol",
            "Testosterone",
            "Estradiol",
            "DHEA",
            "Melatonin",
            "Progesterone",
        ],
    ),
    (
        "hair",
        "Hair Strands",
        "Long-term mineral and toxin accumulation detection",
        "#8B5CF6",
        &[
            "Lead",
            "Mercury",
            "Arsenic",
            "Cadmium",
            "Zinc",
            "Copper",
            "Magnesium",
            "Calcium",
        ],
    ),
    (
        "nails",
        "Nails",
        "Chronic exposure and nutritional status analysis",
        "#10B981",
        &["Selenium", "Zinc", "Calcium", "Iron", "Arsenic", "Lead"],
    ),
    (
        "tears",
        "Tears",
        "Ocular health and systemic biomarker detection",
        "#06B6D4",
        &[
            "Glucose",
            "Lactoferrin",
            "Lipocalin",
            "Lysozyme",
            "Albumin",
            "IgA",
        ],
    ),
];

/// Ordered, immutable collection of strip types with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripCatalog {
    strips: Vec<StripType>,
}

impl StripCatalog {
    /// Build a catalog, rejecting duplicate ids. Order is preserved.
    pub fn from_strips(strips: Vec<StripType>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for strip in &strips {
            if !seen.insert(strip.id.clone()) {
                return Err(CatalogError::DuplicateId {
                    id: strip.id.clone(),
                });
            }
        }
        Ok(Self { strips })
    }

    /// The six strip types shipped with the application.
    pub fn builtin() -> Result<Self, CatalogError> {
        let mut strips = Vec::with_capacity(BUILTIN.len());
        for (row, (id, name, description, color, biomarkers)) in BUILTIN.iter().enumerate() {
            let strip = build_strip(id, name, description, color, biomarkers.iter().copied())
                .map_err(|source| CatalogError::Model {
                    path: PathBuf::from("<builtin>"),
                    row: row + 1,
                    source,
                })?;
            strips.push(strip);
        }
        Self::from_strips(strips)
    }

    /// Look up a strip type by id.
    pub fn get(&self, id: &str) -> Result<&StripType, CatalogError> {
        self.find(id).ok_or_else(|| CatalogError::UnknownStrip {
            id: id.to_string(),
        })
    }

    pub fn find(&self, id: &str) -> Option<&StripType> {
        let id = id.trim();
        self.strips.iter().find(|strip| strip.id.as_str() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StripType> {
        self.strips.iter()
    }

    pub fn ids(&self) -> Vec<&StripId> {
        self.strips.iter().map(|strip| &strip.id).collect()
    }

    pub fn len(&self) -> usize {
        self.strips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strips.is_empty()
    }
}

impl<'a> IntoIterator for &'a StripCatalog {
    type Item = &'a StripType;
    type IntoIter = std::slice::Iter<'a, StripType>;

    fn into_iter(self) -> Self::IntoIter {
        self.strips.iter()
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    color: String,
    #[serde(default)]
    biomarkers: String,
}

/// Catalog file named by `STRIPSCAN_CATALOG`, if set and non-empty.
pub fn catalog_path_from_env() -> Option<PathBuf> {
    std::env::var_os(CATALOG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Load a catalog from a CSV file with header `id,name,description,color,biomarkers`.
///
/// Biomarkers are `;`-separated; blank entries are dropped.
pub fn load_catalog(path: &Path) -> Result<StripCatalog, CatalogError> {
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    let catalog = parse_catalog(&text, path)?;
    info!(path = %path.display(), strips = catalog.len(), "loaded strip catalog");
    Ok(catalog)
}

/// Parse catalog CSV text; `origin` is only used in error messages.
pub fn parse_catalog(text: &str, origin: &Path) -> Result<StripCatalog, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    let mut strips = Vec::new();
    for (index, record) in reader.deserialize::<CatalogRow>().enumerate() {
        let row = record.map_err(|source| CatalogError::Csv {
            path: origin.to_path_buf(),
            source,
        })?;
        let strip = build_strip(
            &row.id,
            &row.name,
            &row.description,
            &row.color,
            row.biomarkers.split(BIOMARKER_SEPARATOR),
        )
        .map_err(|source| CatalogError::Model {
            path: origin.to_path_buf(),
            row: index + 1,
            source,
        })?;
        debug!(id = %strip.id, biomarkers = strip.biomarkers.len(), "catalog row");
        strips.push(strip);
    }
    if strips.is_empty() {
        return Err(CatalogError::Empty {
            path: origin.to_path_buf(),
        });
    }
    StripCatalog::from_strips(strips)
}

fn build_strip<'a>(
    id: &str,
    name: &str,
    description: &str,
    color: &str,
    biomarkers: impl Iterator<Item = &'a str>,
) -> Result<StripType, strip_model::ModelError> {
    let biomarkers = biomarkers
        .map(str::trim)
        .filter(|marker| !marker.is_empty())
        .map(str::to_string)
        .collect();
    StripType::new(StripId::new(id)?, name, description, color, biomarkers)
}
