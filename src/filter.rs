use std::collections::HashSet;

use crate::records::GwdRecord;

/// Player-subset and minimum-attempts predicates, conjoined. An empty
/// player set means "all quarterbacks". Never reorders; the input is
/// left untouched.
pub fn filter_records(
    records: &[GwdRecord],
    players: &HashSet<String>,
    min_attempts: u32,
) -> Vec<GwdRecord> {
    records
        .iter()
        .filter(|r| players.is_empty() || players.contains(&r.quarterback))
        .filter(|r| r.total_gwd_attempts >= min_attempts)
        .cloned()
        .collect()
}
