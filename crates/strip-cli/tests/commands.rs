//! Integration tests for CLI commands and rendering.

use std::fs;
use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use strip_cli::commands::{resolve_catalog, run_analyze, run_history};
use strip_cli::render::{
    analysis_summary, biomarker_table, overview_text, strips_table, trend_text,
};
use strip_core::{StripCatalog, build_report};
use strip_model::{BiomarkerResult, HistoryEntry, HistoryFilter, Status};

fn catalog() -> StripCatalog {
    StripCatalog::builtin().unwrap()
}

fn shipped_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../catalog/strip_types.csv")
}

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "stripscan-cli-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn analyze_is_reproducible_for_a_seed() {
    let catalog = catalog();
    let timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let first = run_analyze(&catalog, "saliva", 1234, timestamp).unwrap();
    let second = run_analyze(&catalog, "saliva", 1234, timestamp).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.biomarker_results.len(), 6);
}

#[test]
fn analyze_unknown_strip_fails() {
    let err = run_analyze(&catalog(), "blood", 1, Utc::now()).unwrap_err();
    assert_eq!(err.to_string(), "strip type not found: blood");
}

#[test]
fn history_filter_limits_shown_runs() {
    let now = Utc.with_ymd_and_hms(2024, 6, 30, 8, 0, 0).unwrap();
    let view = run_history(&catalog(), "nails", 77, HistoryFilter::Only(Status::Normal), now)
        .unwrap();
    assert_eq!(view.strip_name, "Nails");
    assert_eq!(view.entries.len(), 8);
    assert!(view.shown.iter().all(|entry| entry.status == Status::Normal));
}

#[test]
fn explicit_catalog_path_is_loaded() {
    let loaded = resolve_catalog(Some(&shipped_catalog())).unwrap();
    assert_eq!(loaded, catalog());
}

// The only test in this binary that touches STRIPSCAN_CATALOG.
#[test]
fn env_catalog_applies_unless_a_path_is_given() {
    let dir = unique_temp_dir("env-catalog");
    let path = dir.join("strips.csv");
    fs::write(
        &path,
        "id,name,description,color,biomarkers\n\
         blood,Blood,Capillary blood panel,#DC2626,Hemoglobin;Ferritin\n",
    )
    .unwrap();

    // SAFETY: no other test in this binary reads or writes the variable.
    unsafe { std::env::set_var("STRIPSCAN_CATALOG", &path) };
    let from_env = resolve_catalog(None);
    let from_flag = resolve_catalog(Some(&shipped_catalog()));
    unsafe { std::env::remove_var("STRIPSCAN_CATALOG") };
    fs::remove_dir_all(dir).unwrap();

    let from_env = from_env.unwrap();
    let ids: Vec<&str> = from_env.ids().into_iter().map(|id| id.as_str()).collect();
    assert_eq!(ids, ["blood"]);
    assert_eq!(from_env.get("blood").unwrap().biomarkers, ["Hemoglobin", "Ferritin"]);
    assert_eq!(from_flag.unwrap().len(), 6);
}

#[test]
fn missing_catalog_path_has_context() {
    let path = PathBuf::from("/nonexistent/stripscan.csv");
    let err = resolve_catalog(Some(&path)).unwrap_err();
    assert!(err.to_string().starts_with("load catalog /nonexistent/stripscan.csv"));
}

#[test]
fn overview_text_renders_banner() {
    let catalog = catalog();
    let sweat = catalog.get("sweat").unwrap();
    let results = vec![
        BiomarkerResult::for_status("Sodium", Status::Normal, "#22C55E", 81),
        BiomarkerResult::for_status("Chloride", Status::Attention, "#FCD34D", 95),
    ];
    let timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let report = build_report(sweat, results, timestamp);
    insta::assert_snapshot!(overview_text(&report), @r"
    Sweat analysis 2024-05-01 12:00 UTC
    Attention Needed (attention)
    Some biomarkers require attention. Review the detailed analysis below.
    1 Normal | 1 Attention | 0 Critical
    Total biomarkers: 2 | Avg. confidence: 88%

    Analysis Summary
    The sweat analysis detected 2 biomarkers using advanced AI-powered color interpretation. The analysis utilized LAB color-space processing with white reference normalization for clinical-grade accuracy. Some biomarkers show variations from expected ranges and may warrant further investigation.
    ");
}

#[test]
fn analysis_summary_for_all_normal_run() {
    let catalog = catalog();
    let hair = catalog.get("hair").unwrap();
    let results = vec![
        BiomarkerResult::for_status("Lead", Status::Normal, "#22C55E", 90),
        BiomarkerResult::for_status("Zinc", Status::Normal, "#86EFAC", 76),
        BiomarkerResult::for_status("Copper", Status::Normal, "#4ADE80", 83),
    ];
    let report = build_report(hair, results, Utc::now());
    let summary = analysis_summary(&report);
    assert!(summary.starts_with("The hair strands analysis detected 3 biomarkers "));
    assert!(summary.ends_with("All detected values fall within expected reference ranges."));
}

#[test]
fn trend_text_is_oldest_first() {
    let newest = HistoryEntry {
        id: "analysis-0".to_string(),
        date: Utc.with_ymd_and_hms(2024, 6, 30, 8, 0, 0).unwrap(),
        strip_name: "Urine".to_string(),
        status: Status::Normal,
        biomarker_count: 10,
        normal_count: 9,
    };
    let older = HistoryEntry {
        id: "analysis-1".to_string(),
        date: Utc.with_ymd_and_hms(2024, 6, 27, 8, 0, 0).unwrap(),
        status: Status::Critical,
        normal_count: 5,
        ..newest.clone()
    };
    insta::assert_snapshot!(trend_text(&[newest, older]), @r"
    Jun 27 ##########..........  50% Normal
    Jun 30 ##################..  90% Normal
    ");
}

#[test]
fn tables_list_every_row() {
    let catalog = catalog();
    let rendered = strips_table(&catalog).to_string();
    for strip in &catalog {
        assert!(rendered.contains(strip.id.as_str()));
    }
    let report = run_analyze(&catalog, "urine", 5, Utc::now()).unwrap();
    let rendered = biomarker_table(&report.biomarker_results).to_string();
    assert!(rendered.contains("Specific Gravity"));
}
