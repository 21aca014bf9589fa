use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, info_span};

use strip_core::{
    StripCatalog, analyze, catalog_path_from_env, filter_history, load_catalog, mock_history,
};
use strip_model::{AnalysisReport, HistoryEntry, HistoryFilter};

/// Load the catalog from `path`, then `STRIPSCAN_CATALOG`, then the built-in set.
pub fn resolve_catalog(path: Option<&Path>) -> Result<StripCatalog> {
    let path = path.map(Path::to_path_buf).or_else(catalog_path_from_env);
    match path {
        Some(path) => {
            load_catalog(&path).with_context(|| format!("load catalog {}", path.display()))
        }
        None => {
            info!("using built-in strip catalog");
            StripCatalog::builtin().context("build built-in catalog")
        }
    }
}

/// Use `seed` when given, otherwise draw one so the run can be replayed.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, "random seed");
    seed
}

pub fn run_analyze(
    catalog: &StripCatalog,
    strip_id: &str,
    seed: u64,
    timestamp: DateTime<Utc>,
) -> Result<AnalysisReport> {
    let span = info_span!("command", name = "analyze", strip = %strip_id);
    let _guard = span.enter();
    let strip = catalog.get(strip_id)?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(analyze(strip, &mut rng, timestamp))
}

/// Past runs of a strip, newest first, after `filter`.
#[derive(Debug, Clone)]
pub struct HistoryView {
    pub strip_name: String,
    pub filter: HistoryFilter,
    /// Every generated entry; the trend chart ignores the filter.
    pub entries: Vec<HistoryEntry>,
    pub shown: Vec<HistoryEntry>,
}

pub fn run_history(
    catalog: &StripCatalog,
    strip_id: &str,
    seed: u64,
    filter: HistoryFilter,
    now: DateTime<Utc>,
) -> Result<HistoryView> {
    let span = info_span!("command", name = "history", strip = %strip_id);
    let _guard = span.enter();
    let strip = catalog.get(strip_id)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let entries = mock_history(strip, &mut rng, now);
    let shown = filter_history(&entries, filter)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();
    info!(%filter, total = entries.len(), shown = shown.len(), "history ready");
    Ok(HistoryView {
        strip_name: strip.name.clone(),
        filter,
        entries,
        shown,
    })
}
