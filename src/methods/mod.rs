// Ranking methods over the pairwise tally and graphs.

pub mod copeland;
pub mod minimax;
pub mod ranked_pairs;
pub mod ratio;

use crate::election::ElectionError;
use crate::model::Candidate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub use copeland::copeland;
pub use minimax::minimax;
pub use ranked_pairs::{ranked_pairs, ranked_pairs_locks, LockDecision, LockGraph};
pub use ratio::{win_ratio, win_tie_ratio};

/// Ranking method for a pairwise election
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMethod {
    /// Tideman: lock strongest victories that do not create a cycle
    RankedPairs,
    /// Net victories minus defeats in the victory graph
    Copeland,
    /// Smallest worst defeat first
    Minimax,
    /// Wins over decided matchups
    WinRatio,
    /// Wins and ties over all matchups
    WinTieRatio,
}

impl RankingMethod {
    pub const ALL: [RankingMethod; 5] = [
        RankingMethod::RankedPairs,
        RankingMethod::Copeland,
        RankingMethod::Minimax,
        RankingMethod::WinRatio,
        RankingMethod::WinTieRatio,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RankingMethod::RankedPairs => "ranked_pairs",
            RankingMethod::Copeland => "copeland",
            RankingMethod::Minimax => "minimax",
            RankingMethod::WinRatio => "win_ratio",
            RankingMethod::WinTieRatio => "win_tie_ratio",
        }
    }
}

impl fmt::Display for RankingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for RankingMethod {
    type Err = ElectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RankingMethod::ALL
            .into_iter()
            .find(|method| method.name() == s)
            .ok_or_else(|| ElectionError::UnknownMethod(s.to_string()))
    }
}

/// What Minimax does with a candidate that has no incoming matchup edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinimaxPolicy {
    /// Score is `f64::NEG_INFINITY`, ranking the candidate ahead of anyone who lost.
    NoLossesRankFirst,
    /// Fail with `ElectionError::NoInEdgesForCandidate`.
    Reject,
}

/// Ranking options
#[derive(Debug, Clone)]
pub struct RankingOptions {
    pub minimax_policy: MinimaxPolicy,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            minimax_policy: MinimaxPolicy::NoLossesRankFirst,
        }
    }
}

/// A candidate and the score a method assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing<C, S> {
    pub candidate: C,
    pub score: S,
}

impl<C, S> Standing<C, S> {
    pub fn new(candidate: C, score: S) -> Self {
        Self { candidate, score }
    }
}

/// Output of any one method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ranking<C> {
    Order(Vec<C>),
    Integer(Vec<Standing<C, i64>>),
    Ratio(Vec<Standing<C, f64>>),
}

impl<C: Candidate> Ranking<C> {
    /// Candidates best first, whatever the result shape.
    pub fn order(&self) -> Vec<C> {
        match self {
            Ranking::Order(order) => order.clone(),
            Ranking::Integer(standings) => {
                standings.iter().map(|s| s.candidate.clone()).collect()
            }
            Ranking::Ratio(standings) => standings.iter().map(|s| s.candidate.clone()).collect(),
        }
    }

    /// First-placed candidate. Score ties are resolved by candidate order.
    pub fn winner(&self) -> Option<C> {
        self.order().into_iter().next()
    }
}

/// Every method's result for one election.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingSummary<C> {
    pub ranked_pairs: Vec<C>,
    pub copeland: Vec<Standing<C, i64>>,
    pub minimax: Vec<Standing<C, f64>>,
    pub win_ratio: Vec<Standing<C, f64>>,
    pub win_tie_ratio: Vec<Standing<C, f64>>,
}

/// Sort by `compare` on scores, breaking ties by candidate order.
pub(crate) fn sort_standings<C, S, F>(
    standings: Vec<Standing<C, S>>,
    compare: F,
) -> Vec<Standing<C, S>>
where
    C: Candidate,
    F: Fn(&S, &S) -> Ordering,
{
    standings
        .into_iter()
        .sorted_by(|a, b| compare(&a.score, &b.score).then_with(|| a.candidate.cmp(&b.candidate)))
        .collect()
}
