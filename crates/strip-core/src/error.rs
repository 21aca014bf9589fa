#![deny(unsafe_code)]

use std::path::PathBuf;

use strip_model::{ModelError, StripId};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid catalog row {row} in {path}: {source}")]
    Model {
        path: PathBuf,
        row: usize,
        #[source]
        source: ModelError,
    },

    #[error("duplicate strip id in catalog: {id}")]
    DuplicateId { id: StripId },

    #[error("catalog {path} contains no strip types")]
    Empty { path: PathBuf },

    #[error("strip type not found: {id}")]
    UnknownStrip { id: String },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
