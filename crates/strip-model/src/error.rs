use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid strip id: {0:?}")]
    InvalidStripId(String),
    #[error("invalid display color {0:?} (expected #RRGGBB)")]
    InvalidColor(String),
    #[error("unknown status: {0:?}")]
    UnknownStatus(String),
    #[error("strip type {0} has an empty name")]
    EmptyName(String),
}
