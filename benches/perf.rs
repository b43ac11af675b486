use std::collections::HashSet;
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use gwd_terminal::dataset::{MergedData, merge};
use gwd_terminal::display::format_rows;
use gwd_terminal::filter::filter_records;
use gwd_terminal::records::{Column, CsvRecord};
use gwd_terminal::sort::{SortDirection, sort_records};

fn sample_record(idx: u32) -> CsvRecord {
    let attempts = idx % 40;
    let successes = attempts / 2;
    let pct = if attempts == 0 {
        None
    } else {
        Some(successes as f64 / attempts as f64)
    };
    CsvRecord {
        quarterback: format!("Q.Back{idx}"),
        total_gwd_attempts: attempts,
        successful_gwd_attempts: successes,
        gwd_success_pct: pct,
        games_with_gwd_attempt: attempts,
        games_won_with_gwd_attempt: successes,
        win_pct_with_attempt: pct,
        games_with_successful_gwd: successes,
        games_won_after_successful_gwd: successes,
        win_pct_after_success: pct,
    }
}

fn sample_merged() -> MergedData {
    let regular: Vec<CsvRecord> = (0..300).map(sample_record).collect();
    let playoffs: Vec<CsvRecord> = (0..120).map(sample_record).collect();
    merge(regular, playoffs)
}

fn bench_merge(c: &mut Criterion) {
    let regular: Vec<CsvRecord> = (0..300).map(sample_record).collect();
    let playoffs: Vec<CsvRecord> = (0..120).map(sample_record).collect();

    c.bench_function("merge", |b| {
        b.iter(|| {
            let merged = merge(black_box(regular.clone()), black_box(playoffs.clone()));
            black_box(merged.players.len());
        })
    });
}

fn bench_filter_sort_format(c: &mut Criterion) {
    let merged = sample_merged();
    let players: HashSet<String> = (0..150).map(|idx| format!("Q.Back{idx}")).collect();

    c.bench_function("filter_sort_format", |b| {
        b.iter(|| {
            let filtered = filter_records(black_box(&merged.combined), &players, 5);
            let sorted = sort_records(&filtered, Column::GwdSuccessPct, SortDirection::Descending);
            let rows = format_rows(&sorted);
            black_box(rows.len());
        })
    });
}

criterion_group!(perf, bench_merge, bench_filter_sort_format);
criterion_main!(perf);
