use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;

use crate::dataset::{self, MergedData};
use crate::records::CsvRecord;

pub const DEFAULT_REGULAR_CSV: &str =
    "./game_winning_drives/game_winning_drives_1999_2025_regular_season_qbs.csv";
pub const DEFAULT_PLAYOFFS_CSV: &str =
    "./game_winning_drives/game_winning_drives_1999_2025_post_season_qbs.csv";

#[derive(Debug, Clone)]
pub struct DatasetPaths {
    pub regular: PathBuf,
    pub playoffs: PathBuf,
}

impl DatasetPaths {
    pub fn from_env() -> Self {
        let regular = std::env::var("GWD_REGULAR_CSV")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REGULAR_CSV.to_string());
        let playoffs = std::env::var("GWD_PLAYOFFS_CSV")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PLAYOFFS_CSV.to_string());
        Self {
            regular: PathBuf::from(regular),
            playoffs: PathBuf::from(playoffs),
        }
    }
}

/// One loaded snapshot: the merged datasets plus any data-quality
/// warnings found at load time.
#[derive(Debug, Clone)]
pub struct LoadedData {
    pub merged: MergedData,
    pub warnings: Vec<String>,
}

pub fn read_gwd_csv(path: &Path) -> Result<Vec<CsvRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("open GWD csv {}", path.display()))?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: CsvRecord =
            row.with_context(|| format!("parse GWD csv row in {}", path.display()))?;
        records.push(record);
    }
    Ok(records)
}

/// Load-time data-quality check. Violations are flagged, not repaired:
/// the pipeline downstream assumes the invariants hold and does not
/// recompute percentages.
pub fn validate_records(records: &[CsvRecord], source: &str) -> Vec<String> {
    let mut warnings = Vec::new();
    for r in records {
        if r.quarterback.is_empty() {
            warnings.push(format!("{source}: record with empty quarterback name"));
        }
        if r.successful_gwd_attempts > r.total_gwd_attempts {
            warnings.push(format!(
                "{source}: {} has {} successful GWDs out of {} attempts",
                r.quarterback, r.successful_gwd_attempts, r.total_gwd_attempts
            ));
        }
        if r.games_won_with_gwd_attempt > r.games_with_gwd_attempt {
            warnings.push(format!(
                "{source}: {} won {} of {} games with a GWD attempt",
                r.quarterback, r.games_won_with_gwd_attempt, r.games_with_gwd_attempt
            ));
        }
        if r.games_won_after_successful_gwd > r.games_with_successful_gwd {
            warnings.push(format!(
                "{source}: {} won {} of {} games after a successful GWD",
                r.quarterback, r.games_won_after_successful_gwd, r.games_with_successful_gwd
            ));
        }
        for (label, pct) in [
            ("GWD success", r.gwd_success_pct),
            ("win w/ attempt", r.win_pct_with_attempt),
            ("win after success", r.win_pct_after_success),
        ] {
            if let Some(v) = pct {
                if !(0.0..=1.0).contains(&v) {
                    warnings.push(format!(
                        "{source}: {} has out-of-range {label} pct {v}",
                        r.quarterback
                    ));
                }
            }
        }
    }
    warnings
}

pub fn load_datasets(paths: &DatasetPaths) -> Result<LoadedData> {
    let regular = read_gwd_csv(&paths.regular)?;
    let playoffs = read_gwd_csv(&paths.playoffs)?;

    let mut warnings = validate_records(&regular, "regular season");
    warnings.extend(validate_records(&playoffs, "playoffs"));

    Ok(LoadedData {
        merged: dataset::merge(regular, playoffs),
        warnings,
    })
}

// Process-wide snapshot, loaded on first access and shared read-only
// afterwards. `invalidate` clears the slot so the next access reloads.
static CACHE: Lazy<Mutex<Option<Arc<LoadedData>>>> = Lazy::new(|| Mutex::new(None));

pub fn load_or_init(paths: &DatasetPaths) -> Result<Arc<LoadedData>> {
    let mut slot = CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(data) = slot.as_ref() {
        return Ok(Arc::clone(data));
    }
    let data = Arc::new(load_datasets(paths)?);
    *slot = Some(Arc::clone(&data));
    Ok(data)
}

pub fn invalidate() {
    let mut slot = CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    *slot = None;
}
