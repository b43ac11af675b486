use crate::records::{CsvRecord, GwdRecord, SeasonType};

/// The three dataset views derived from one load, plus the player index.
/// Held as an immutable snapshot for the life of the session; every user
/// interaction reads from it and none writes back.
#[derive(Debug, Clone, Default)]
pub struct MergedData {
    pub regular: Vec<GwdRecord>,
    pub playoffs: Vec<GwdRecord>,
    /// `regular ++ playoffs`, source order preserved. Not deduplicated:
    /// a quarterback legitimately appears once per season type.
    pub combined: Vec<GwdRecord>,
    /// Sorted, deduplicated quarterback names across `combined`.
    pub players: Vec<String>,
}

pub fn merge(regular: Vec<CsvRecord>, playoffs: Vec<CsvRecord>) -> MergedData {
    let regular: Vec<GwdRecord> = regular
        .into_iter()
        .map(|r| r.tagged(SeasonType::RegularSeason))
        .collect();
    let playoffs: Vec<GwdRecord> = playoffs
        .into_iter()
        .map(|r| r.tagged(SeasonType::Playoffs))
        .collect();

    let mut combined = Vec::with_capacity(regular.len() + playoffs.len());
    combined.extend(regular.iter().cloned());
    combined.extend(playoffs.iter().cloned());

    let mut players: Vec<String> = combined
        .iter()
        .filter(|r| !r.quarterback.is_empty())
        .map(|r| r.quarterback.clone())
        .collect();
    players.sort();
    players.dedup();

    MergedData {
        regular,
        playoffs,
        combined,
        players,
    }
}

impl MergedData {
    /// Upper bound for the minimum-attempts control.
    pub fn max_attempts(&self) -> u32 {
        self.combined
            .iter()
            .map(|r| r.total_gwd_attempts)
            .max()
            .unwrap_or(0)
    }
}
