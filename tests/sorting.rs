use gwd_terminal::display::{format_pct, format_rows};
use gwd_terminal::records::{Column, GwdRecord, SeasonType};
use gwd_terminal::sort::{SortDirection, resolve_column, sort_records};

fn rec(qb: &str, attempts: u32, pct: Option<f64>) -> GwdRecord {
    GwdRecord {
        quarterback: qb.to_string(),
        season_type: SeasonType::RegularSeason,
        total_gwd_attempts: attempts,
        successful_gwd_attempts: 0,
        gwd_success_pct: pct,
        games_with_gwd_attempt: attempts,
        games_won_with_gwd_attempt: 0,
        win_pct_with_attempt: pct,
        games_with_successful_gwd: 0,
        games_won_after_successful_gwd: 0,
        win_pct_after_success: None,
    }
}

#[test]
fn sorts_counts_numerically_not_lexicographically() {
    let records = vec![rec("A", 9, None), rec("B", 10, None), rec("C", 2, None)];
    let sorted = sort_records(&records, Column::TotalGwdAttempts, SortDirection::Descending);
    let attempts: Vec<u32> = sorted.iter().map(|r| r.total_gwd_attempts).collect();
    assert_eq!(attempts, vec![10, 9, 2]);
}

#[test]
fn sorts_quarterback_as_string() {
    let records = vec![rec("M.Ryan", 1, None), rec("A.Dalton", 2, None)];
    let sorted = sort_records(&records, Column::Quarterback, SortDirection::Ascending);
    assert_eq!(sorted[0].quarterback, "A.Dalton");
}

#[test]
fn sort_is_stable_for_equal_keys_in_both_directions() {
    let records = vec![
        rec("first", 5, Some(0.4)),
        rec("second", 5, Some(0.4)),
        rec("third", 5, Some(0.4)),
    ];
    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        let sorted = sort_records(&records, Column::TotalGwdAttempts, direction);
        let names: Vec<&str> = sorted.iter().map(|r| r.quarterback.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}

#[test]
fn missing_percentages_sort_lowest_ascending_and_last_descending() {
    let records = vec![
        rec("has_low", 1, Some(0.1)),
        rec("missing_a", 1, None),
        rec("has_high", 1, Some(0.9)),
        rec("missing_b", 1, None),
    ];

    let asc = sort_records(&records, Column::GwdSuccessPct, SortDirection::Ascending);
    let names: Vec<&str> = asc.iter().map(|r| r.quarterback.as_str()).collect();
    // None first (input order among themselves), then present values.
    assert_eq!(names, vec!["missing_a", "missing_b", "has_low", "has_high"]);

    let desc = sort_records(&records, Column::GwdSuccessPct, SortDirection::Descending);
    let names: Vec<&str> = desc.iter().map(|r| r.quarterback.as_str()).collect();
    assert_eq!(names, vec!["has_high", "has_low", "missing_a", "missing_b"]);
}

#[test]
fn format_after_sort_keeps_numeric_order() {
    // "5.0%" < "50.0%" lexicographically, so formatting before the sort
    // would flip these. Sorting on raw values must win.
    let records = vec![rec("small", 1, Some(0.05)), rec("large", 1, Some(0.5))];
    let sorted = sort_records(&records, Column::GwdSuccessPct, SortDirection::Descending);
    let rows = format_rows(&sorted);
    let cells: Vec<&str> = rows.iter().map(|r| r.gwd_success_pct.as_str()).collect();
    assert_eq!(cells, vec!["50.0%", "5.0%"]);
}

#[test]
fn sort_is_idempotent() {
    let records = vec![
        rec("A", 3, Some(0.2)),
        rec("B", 9, None),
        rec("C", 9, Some(0.7)),
    ];
    let once = sort_records(&records, Column::WinPctWithAttempt, SortDirection::Descending);
    let twice = sort_records(&once, Column::WinPctWithAttempt, SortDirection::Descending);
    assert_eq!(once, twice);
}

#[test]
fn sorting_an_empty_dataset_is_empty() {
    let sorted = sort_records(&[], Column::Quarterback, SortDirection::Ascending);
    assert!(sorted.is_empty());
}

#[test]
fn unavailable_column_falls_back_to_total_attempts() {
    // Single-season views drop the Season Type column; a sort request
    // for it falls back instead of failing.
    assert_eq!(
        resolve_column(Column::SeasonType, Column::single_season()),
        Column::TotalGwdAttempts
    );
    assert_eq!(
        resolve_column(Column::SeasonType, Column::combined()),
        Column::SeasonType
    );
    assert_eq!(
        resolve_column(Column::GwdSuccessPct, Column::single_season()),
        Column::GwdSuccessPct
    );
}

#[test]
fn percentage_formatting_rounds_to_one_decimal() {
    assert_eq!(format_pct(Some(1.0)), "100.0%");
    assert_eq!(format_pct(Some(0.5344827586)), "53.4%");
    assert_eq!(format_pct(Some(0.0)), "0.0%");
    assert_eq!(format_pct(None), "");
}
