use serde::{Deserialize, Serialize};

/// One quarterback's aggregated GWD statistics as it arrives from a
/// per-season CSV. Percentages are precomputed upstream; empty cells
/// (zero-attempt denominators) deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvRecord {
    #[serde(rename = "passer_player_name")]
    pub quarterback: String,
    pub total_gwd_attempts: u32,
    pub successful_gwd_attempts: u32,
    #[serde(rename = "pct_successful_gwd")]
    pub gwd_success_pct: Option<f64>,
    pub games_with_gwd_attempt: u32,
    pub games_won_with_gwd_attempt: u32,
    #[serde(rename = "pct_won_when_gwd_attempt")]
    pub win_pct_with_attempt: Option<f64>,
    pub games_with_successful_gwd: u32,
    pub games_won_after_successful_gwd: u32,
    #[serde(rename = "pct_won_after_successful_gwd")]
    pub win_pct_after_success: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonType {
    RegularSeason,
    Playoffs,
}

/// A `CsvRecord` tagged with its season-type provenance. Identity after
/// the merge is `(quarterback, season_type)`.
#[derive(Debug, Clone, PartialEq)]
pub struct GwdRecord {
    pub quarterback: String,
    pub season_type: SeasonType,
    pub total_gwd_attempts: u32,
    pub successful_gwd_attempts: u32,
    pub gwd_success_pct: Option<f64>,
    pub games_with_gwd_attempt: u32,
    pub games_won_with_gwd_attempt: u32,
    pub win_pct_with_attempt: Option<f64>,
    pub games_with_successful_gwd: u32,
    pub games_won_after_successful_gwd: u32,
    pub win_pct_after_success: Option<f64>,
}

impl CsvRecord {
    pub fn tagged(self, season_type: SeasonType) -> GwdRecord {
        GwdRecord {
            quarterback: self.quarterback,
            season_type,
            total_gwd_attempts: self.total_gwd_attempts,
            successful_gwd_attempts: self.successful_gwd_attempts,
            gwd_success_pct: self.gwd_success_pct,
            games_with_gwd_attempt: self.games_with_gwd_attempt,
            games_won_with_gwd_attempt: self.games_won_with_gwd_attempt,
            win_pct_with_attempt: self.win_pct_with_attempt,
            games_with_successful_gwd: self.games_with_successful_gwd,
            games_won_after_successful_gwd: self.games_won_after_successful_gwd,
            win_pct_after_success: self.win_pct_after_success,
        }
    }
}

/// Display columns. Sorting always goes through a `Column`, never the
/// formatted cell text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Quarterback,
    SeasonType,
    TotalGwdAttempts,
    SuccessfulGwdAttempts,
    GwdSuccessPct,
    GamesWithGwdAttempt,
    GamesWonWithGwdAttempt,
    WinPctWithAttempt,
    GamesWithSuccessfulGwd,
    GamesWonAfterSuccessfulGwd,
    WinPctAfterSuccess,
}

impl Column {
    pub const DEFAULT_SORT: Column = Column::TotalGwdAttempts;

    pub const PCT_COLUMNS: &'static [Column] = &[
        Column::GwdSuccessPct,
        Column::WinPctWithAttempt,
        Column::WinPctAfterSuccess,
    ];

    /// Column order for the combined view: season type sits right after
    /// the quarterback name.
    pub fn combined() -> &'static [Column] {
        &[
            Column::Quarterback,
            Column::SeasonType,
            Column::TotalGwdAttempts,
            Column::SuccessfulGwdAttempts,
            Column::GwdSuccessPct,
            Column::GamesWithGwdAttempt,
            Column::GamesWonWithGwdAttempt,
            Column::WinPctWithAttempt,
            Column::GamesWithSuccessfulGwd,
            Column::GamesWonAfterSuccessfulGwd,
            Column::WinPctAfterSuccess,
        ]
    }

    /// Column order for a single-season view: the season-type column is
    /// redundant and dropped.
    pub fn single_season() -> &'static [Column] {
        &[
            Column::Quarterback,
            Column::TotalGwdAttempts,
            Column::SuccessfulGwdAttempts,
            Column::GwdSuccessPct,
            Column::GamesWithGwdAttempt,
            Column::GamesWonWithGwdAttempt,
            Column::WinPctWithAttempt,
            Column::GamesWithSuccessfulGwd,
            Column::GamesWonAfterSuccessfulGwd,
            Column::WinPctAfterSuccess,
        ]
    }
}

pub fn season_type_label(season_type: SeasonType) -> &'static str {
    match season_type {
        SeasonType::RegularSeason => "Regular Season",
        SeasonType::Playoffs => "Playoffs",
    }
}

pub fn column_label(column: Column) -> &'static str {
    match column {
        Column::Quarterback => "Quarterback",
        Column::SeasonType => "Season Type",
        Column::TotalGwdAttempts => "Total GWD Attempts",
        Column::SuccessfulGwdAttempts => "Successful GWDs",
        Column::GwdSuccessPct => "GWD Success %",
        Column::GamesWithGwdAttempt => "Games w/ GWD Attempt",
        Column::GamesWonWithGwdAttempt => "Games Won (w/ Attempt)",
        Column::WinPctWithAttempt => "Win % (w/ Attempt)",
        Column::GamesWithSuccessfulGwd => "Games w/ Successful GWD",
        Column::GamesWonAfterSuccessfulGwd => "Games Won (After Success)",
        Column::WinPctAfterSuccess => "Win % (After Success)",
    }
}
