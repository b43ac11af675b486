use crate::records::{Column, GwdRecord, SeasonType, season_type_label};

/// Display projection of a `GwdRecord`: counts stay typed, the three
/// percentage fields become rendered strings ("" when the source value
/// is missing). Built from already-sorted records; these strings must
/// never flow back into filtering or sorting.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub quarterback: String,
    pub season_type: SeasonType,
    pub total_gwd_attempts: u32,
    pub successful_gwd_attempts: u32,
    pub gwd_success_pct: String,
    pub games_with_gwd_attempt: u32,
    pub games_won_with_gwd_attempt: u32,
    pub win_pct_with_attempt: String,
    pub games_with_successful_gwd: u32,
    pub games_won_after_successful_gwd: u32,
    pub win_pct_after_success: String,
}

pub fn format_rows(records: &[GwdRecord]) -> Vec<DisplayRow> {
    records
        .iter()
        .map(|r| DisplayRow {
            quarterback: r.quarterback.clone(),
            season_type: r.season_type,
            total_gwd_attempts: r.total_gwd_attempts,
            successful_gwd_attempts: r.successful_gwd_attempts,
            gwd_success_pct: format_pct(r.gwd_success_pct),
            games_with_gwd_attempt: r.games_with_gwd_attempt,
            games_won_with_gwd_attempt: r.games_won_with_gwd_attempt,
            win_pct_with_attempt: format_pct(r.win_pct_with_attempt),
            games_with_successful_gwd: r.games_with_successful_gwd,
            games_won_after_successful_gwd: r.games_won_after_successful_gwd,
            win_pct_after_success: format_pct(r.win_pct_after_success),
        })
        .collect()
}

/// Ratio in [0,1] → "52.4%"; missing → "".
pub fn format_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => String::new(),
    }
}

impl DisplayRow {
    /// Cell text for one table column.
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::Quarterback => self.quarterback.clone(),
            Column::SeasonType => season_type_label(self.season_type).to_string(),
            Column::TotalGwdAttempts => self.total_gwd_attempts.to_string(),
            Column::SuccessfulGwdAttempts => self.successful_gwd_attempts.to_string(),
            Column::GwdSuccessPct => self.gwd_success_pct.clone(),
            Column::GamesWithGwdAttempt => self.games_with_gwd_attempt.to_string(),
            Column::GamesWonWithGwdAttempt => self.games_won_with_gwd_attempt.to_string(),
            Column::WinPctWithAttempt => self.win_pct_with_attempt.clone(),
            Column::GamesWithSuccessfulGwd => self.games_with_successful_gwd.to_string(),
            Column::GamesWonAfterSuccessfulGwd => {
                self.games_won_after_successful_gwd.to_string()
            }
            Column::WinPctAfterSuccess => self.win_pct_after_success.clone(),
        }
    }
}
