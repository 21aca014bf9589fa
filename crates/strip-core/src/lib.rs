//! Mock diagnostic-strip analysis: result synthesis, status aggregation,
//! the strip-type catalog, reports and history.

#![deny(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod history;
pub mod report;
pub mod synth;

pub use crate::catalog::{StripCatalog, catalog_path_from_env, load_catalog};
pub use crate::error::CatalogError;
pub use crate::history::{filter_history, mock_history, trend};
pub use crate::report::{analyze, average_confidence, build_report};
pub use crate::synth::{StatusWeights, aggregate_status, synthesize, synthesize_with_seed};
