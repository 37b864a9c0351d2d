use super::{sort_standings, Standing};
use crate::model::Candidate;
use crate::tabulator::{Matchup, MatchupTally};

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn rank_by<C, F>(tally: &MatchupTally<C>, score: F) -> Vec<Standing<C, f64>>
where
    C: Candidate,
    F: Fn(&Matchup) -> f64,
{
    let standings = tally
        .candidates()
        .iter()
        .map(|candidate| Standing::new(candidate.clone(), score(&tally.record(candidate))))
        .collect();

    sort_standings(standings, |a: &f64, b: &f64| b.total_cmp(a))
}

/// Wins over decided matchups (ties ignored), best first. Zero when a
/// candidate has no decided matchups.
pub fn win_ratio<C: Candidate>(tally: &MatchupTally<C>) -> Vec<Standing<C, f64>> {
    rank_by(tally, |record| ratio(record.wins, record.wins + record.losses))
}

/// Wins plus ties over all matchups, best first. Zero when a candidate has no
/// matchups.
pub fn win_tie_ratio<C: Candidate>(tally: &MatchupTally<C>) -> Vec<Standing<C, f64>> {
    rank_by(tally, |record| ratio(record.wins + record.ties, record.total()))
}
