use crate::model::{Candidate, Outcome, Vote};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::AddAssign;
use tracing::trace;

/// Win/loss/tie counts for one side of a pairing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub wins: u64,
    pub losses: u64,
    pub ties: u64,
}

impl Matchup {
    pub fn total(&self) -> u64 {
        self.wins + self.losses + self.ties
    }

    /// Share of recorded votes that were wins. `None` when nothing was recorded.
    pub fn margin(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.wins as f64 / total as f64),
        }
    }

    /// The same counts seen from the opponent.
    pub fn reversed(&self) -> Self {
        Self {
            wins: self.losses,
            losses: self.wins,
            ties: self.ties,
        }
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
}

impl AddAssign for Matchup {
    fn add_assign(&mut self, other: Self) {
        self.wins += other.wins;
        self.losses += other.losses;
        self.ties += other.ties;
    }
}

/// Counts for every ordered pair of distinct candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchupTally<C: Candidate> {
    candidates: BTreeSet<C>,
    matchups: BTreeMap<(C, C), Matchup>,
    records: BTreeMap<C, Matchup>,
}

impl<C: Candidate> MatchupTally<C> {
    /// Tally validated votes. Every ordered pair of distinct candidates gets an
    /// entry, zeroed when the pair never met; self-votes are skipped.
    pub fn from_votes(votes: &[Vote<C>], candidates: &BTreeSet<C>) -> Self {
        let mut matchups = BTreeMap::new();
        for x in candidates {
            for y in candidates {
                if x != y {
                    matchups.insert((x.clone(), y.clone()), Matchup::default());
                }
            }
        }

        for vote in votes {
            if vote.is_self_vote() {
                trace!(candidate = ?vote.first, "skipping self-vote");
                continue;
            }

            let forward = (vote.first.clone(), vote.second.clone());
            let backward = (vote.second.clone(), vote.first.clone());
            matchups.entry(forward).or_default().record(vote.outcome);
            matchups
                .entry(backward)
                .or_default()
                .record(vote.outcome.reversed());
        }

        let mut records: BTreeMap<C, Matchup> = BTreeMap::new();
        for ((x, _), matchup) in &matchups {
            *records.entry(x.clone()).or_default() += *matchup;
        }

        Self {
            candidates: candidates.clone(),
            matchups,
            records,
        }
    }

    pub fn candidates(&self) -> &BTreeSet<C> {
        &self.candidates
    }

    /// Counts for `x` against `y`. `None` only when either is unknown or `x == y`.
    pub fn get(&self, x: &C, y: &C) -> Option<&Matchup> {
        self.matchups.get(&(x.clone(), y.clone()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&C, &C, &Matchup)> {
        self.matchups.iter().map(|((x, y), m)| (x, y, m))
    }

    pub fn len(&self) -> usize {
        self.matchups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matchups.is_empty()
    }

    /// Summed counts for `candidate` across all opponents.
    pub fn record(&self, candidate: &C) -> Matchup {
        self.records.get(candidate).copied().unwrap_or_default()
    }
}
