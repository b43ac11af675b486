use std::cmp::Ordering;

use crate::records::{Column, GwdRecord, season_type_label};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A view may offer a default column its own column set does not carry
/// (the single-season views drop Season Type). Fall back to the attempts
/// column instead of failing.
pub fn resolve_column(requested: Column, available: &[Column]) -> Column {
    if available.contains(&requested) {
        requested
    } else {
        Column::DEFAULT_SORT
    }
}

/// Stable sort on raw typed values. Formatted percentage strings never
/// enter a comparison; "10.0%" < "9.0%" lexicographically and would
/// silently break numeric order.
pub fn sort_records(
    records: &[GwdRecord],
    column: Column,
    direction: SortDirection,
) -> Vec<GwdRecord> {
    let mut sorted = records.to_vec();
    match direction {
        SortDirection::Ascending => sorted.sort_by(|a, b| compare(a, b, column)),
        // Reversed argument order keeps `sort_by` stability for ties.
        SortDirection::Descending => sorted.sort_by(|a, b| compare(b, a, column)),
    }
    sorted
}

/// Missing percentages compare below every present value, so they lead
/// an ascending sort and trail a descending one.
fn compare(a: &GwdRecord, b: &GwdRecord, column: Column) -> Ordering {
    match column {
        Column::Quarterback => a.quarterback.cmp(&b.quarterback),
        Column::SeasonType => {
            season_type_label(a.season_type).cmp(season_type_label(b.season_type))
        }
        Column::TotalGwdAttempts => a.total_gwd_attempts.cmp(&b.total_gwd_attempts),
        Column::SuccessfulGwdAttempts => {
            a.successful_gwd_attempts.cmp(&b.successful_gwd_attempts)
        }
        Column::GwdSuccessPct => compare_pct(a.gwd_success_pct, b.gwd_success_pct),
        Column::GamesWithGwdAttempt => a.games_with_gwd_attempt.cmp(&b.games_with_gwd_attempt),
        Column::GamesWonWithGwdAttempt => {
            a.games_won_with_gwd_attempt.cmp(&b.games_won_with_gwd_attempt)
        }
        Column::WinPctWithAttempt => compare_pct(a.win_pct_with_attempt, b.win_pct_with_attempt),
        Column::GamesWithSuccessfulGwd => {
            a.games_with_successful_gwd.cmp(&b.games_with_successful_gwd)
        }
        Column::GamesWonAfterSuccessfulGwd => a
            .games_won_after_successful_gwd
            .cmp(&b.games_won_after_successful_gwd),
        Column::WinPctAfterSuccess => {
            compare_pct(a.win_pct_after_success, b.win_pct_after_success)
        }
    }
}

fn compare_pct(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
