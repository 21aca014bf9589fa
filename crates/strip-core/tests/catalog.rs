//! Integration tests for catalog loading.

use std::fs;
use std::path::{Path, PathBuf};

use strip_core::{CatalogError, StripCatalog, load_catalog};
use strip_core::catalog::parse_catalog;

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "stripscan-{}-{}-{}",
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

fn shipped_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../catalog/strip_types.csv")
}

#[test]
fn shipped_catalog_matches_builtin() {
    let loaded = load_catalog(&shipped_catalog()).unwrap();
    assert_eq!(loaded, StripCatalog::builtin().unwrap());
}

#[test]
fn loads_catalog_from_file() {
    let dir = unique_temp_dir("catalog");
    let path = dir.join("strips.csv");
    fs::write(
        &path,
        "id,name,description,color,biomarkers\n\
         blood,Blood,\"Finger-prick panel, capillary\",#dc2626,Hemoglobin;Ferritin\n",
    )
    .unwrap();
    let catalog = load_catalog(&path).unwrap();
    let blood = catalog.get("blood").unwrap();
    assert_eq!(blood.description, "Finger-prick panel, capillary");
    assert_eq!(blood.color, "#DC2626");
    assert_eq!(blood.biomarkers, ["Hemoglobin", "Ferritin"]);
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn missing_file_is_io_error() {
    let err = load_catalog(Path::new("/nonexistent/stripscan/catalog.csv")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn rejects_duplicate_ids() {
    let csv = "id,name,description,color,biomarkers\n\
               sweat,Sweat,,#3B82F6,Sodium\n\
               sweat,Sweat again,,#3B82F6,Chloride\n";
    let err = parse_catalog(csv, Path::new("dup.csv")).unwrap_err();
    assert_eq!(err.to_string(), "duplicate strip id in catalog: sweat");
}

#[test]
fn rejects_bad_color_with_row_number() {
    let csv = "id,name,description,color,biomarkers\n\
               sweat,Sweat,,#3B82F6,Sodium\n\
               tears,Tears,,cyan,Glucose\n";
    let err = parse_catalog(csv, Path::new("bad.csv")).unwrap_err();
    match err {
        CatalogError::Model { row, .. } => assert_eq!(row, 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn rejects_empty_catalog() {
    let err = parse_catalog("id,name,description,color,biomarkers\n", Path::new("empty.csv"))
        .unwrap_err();
    assert!(matches!(err, CatalogError::Empty { .. }));
}

#[test]
fn lookup_trims_id() {
    let catalog = StripCatalog::builtin().unwrap();
    assert_eq!(catalog.find(" tears ").map(|s| s.name.as_str()), Some("Tears"));
    assert!(catalog.find("Tears").is_none());
}
