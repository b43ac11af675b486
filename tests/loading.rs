use std::path::PathBuf;
use std::sync::Arc;

use gwd_terminal::load::{
    self, DatasetPaths, load_datasets, read_gwd_csv, validate_records,
};
use gwd_terminal::records::SeasonType;

fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    path
}

fn fixture_paths() -> DatasetPaths {
    DatasetPaths {
        regular: fixture("gwd_regular.csv"),
        playoffs: fixture("gwd_playoffs.csv"),
    }
}

#[test]
fn reads_gwd_csv_with_upstream_header_names() {
    let records = read_gwd_csv(&fixture("gwd_regular.csv")).expect("fixture should parse");
    assert_eq!(records.len(), 4);

    let brady = &records[0];
    assert_eq!(brady.quarterback, "T.Brady");
    assert_eq!(brady.total_gwd_attempts, 58);
    assert_eq!(brady.successful_gwd_attempts, 31);
    assert_eq!(brady.gwd_success_pct, Some(0.5344827586));
    assert_eq!(brady.games_won_after_successful_gwd, 27);
}

#[test]
fn empty_percentage_cells_deserialize_to_none() {
    let records = read_gwd_csv(&fixture("gwd_regular.csv")).expect("fixture should parse");
    let leaf = records
        .iter()
        .find(|r| r.quarterback == "R.Leaf")
        .expect("zero-attempt row should exist");
    assert_eq!(leaf.total_gwd_attempts, 0);
    assert_eq!(leaf.gwd_success_pct, None);
    assert_eq!(leaf.win_pct_with_attempt, None);
    assert_eq!(leaf.win_pct_after_success, None);
}

#[test]
fn validation_flags_invariant_violations_without_dropping_records() {
    let records = read_gwd_csv(&fixture("gwd_malformed.csv")).expect("fixture should parse");
    assert_eq!(records.len(), 1);

    let warnings = validate_records(&records, "test");
    // Successes exceed attempts, wins exceed games, and the success pct
    // is out of range.
    assert!(warnings.len() >= 3);
    assert!(warnings.iter().any(|w| w.contains("B.Gradkowski")));
}

#[test]
fn clean_fixtures_produce_no_warnings() {
    let records = read_gwd_csv(&fixture("gwd_playoffs.csv")).expect("fixture should parse");
    assert!(validate_records(&records, "test").is_empty());
}

#[test]
fn load_datasets_merges_both_files() {
    let loaded = load_datasets(&fixture_paths()).expect("fixtures should load");
    assert_eq!(loaded.merged.regular.len(), 4);
    assert_eq!(loaded.merged.playoffs.len(), 2);
    assert_eq!(loaded.merged.combined.len(), 6);
    assert!(loaded.warnings.is_empty());
    assert!(
        loaded
            .merged
            .playoffs
            .iter()
            .all(|r| r.season_type == SeasonType::Playoffs)
    );
    assert_eq!(
        loaded.merged.players,
        vec!["J.Allen", "P.Manning", "R.Leaf", "T.Brady"]
    );
}

#[test]
fn missing_file_is_an_error() {
    let paths = DatasetPaths {
        regular: fixture("does_not_exist.csv"),
        playoffs: fixture("gwd_playoffs.csv"),
    };
    assert!(load_datasets(&paths).is_err());
}

// The cache is process-wide, so every assertion about it lives in this
// one test to keep the harness threads from interfering.
#[test]
fn cache_loads_once_and_reloads_after_invalidation() {
    let paths = fixture_paths();

    load::invalidate();
    let first = load::load_or_init(&paths).expect("first load");
    let second = load::load_or_init(&paths).expect("cached load");
    assert!(Arc::ptr_eq(&first, &second));

    load::invalidate();
    let third = load::load_or_init(&paths).expect("reload");
    assert!(!Arc::ptr_eq(&first, &third));
    assert_eq!(first.merged.combined.len(), third.merged.combined.len());
}
