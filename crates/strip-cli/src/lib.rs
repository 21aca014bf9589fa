//! CLI library components for stripscan.

pub mod commands;
pub mod logging;
pub mod render;
