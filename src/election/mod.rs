use crate::ballot::{validate_records, ValidatedVotes};
use crate::methods::{
    self, MinimaxPolicy, Ranking, RankingMethod, RankingOptions, RankingSummary, Standing,
};
use crate::model::{Candidate, Vote};
use crate::tabulator::{MatchupGraph, MatchupTally, PairGraph, VictoryGraph};
use std::collections::BTreeSet;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ElectionError {
    #[error("Vote {index} has {len} components, expected 3")]
    InvalidVoteShape { index: usize, len: usize },
    #[error("Vote {index} has outcome {label:?}, expected one of win, loss, tie")]
    InvalidOutcomeLabel { index: usize, label: String },
    /// Candidate types need not implement `Display`, so the payload is the
    /// candidate's `Debug` rendering (`"D"` for a string candidate `D`).
    #[error("Candidate {0} has no incoming matchup edges")]
    NoInEdgesForCandidate(String),
    #[error("Unknown ranking method: {0}")]
    UnknownMethod(String),
}

pub type Result<T> = std::result::Result<T, ElectionError>;

/// A fixed set of pairwise votes and every ranking derived from them.
///
/// Construction validates and tallies the votes once; all queries are pure
/// functions of that state and may be called in any order.
#[derive(Debug, Clone)]
pub struct Election<C: Candidate> {
    votes: Vec<Vote<C>>,
    tally: MatchupTally<C>,
    options: RankingOptions,
}

impl<C: Candidate> Election<C> {
    pub fn new(votes: Vec<Vote<C>>) -> Self {
        Self::with_options(votes, RankingOptions::default())
    }

    pub fn with_options(votes: Vec<Vote<C>>, options: RankingOptions) -> Self {
        Self::from_validated(ValidatedVotes::from_votes(votes), options)
    }

    fn from_validated(validated: ValidatedVotes<C>, options: RankingOptions) -> Self {
        let tally = MatchupTally::from_votes(&validated.votes, &validated.candidates);
        debug!(
            votes = validated.votes.len(),
            candidates = validated.candidates.len(),
            "election constructed"
        );

        Self {
            votes: validated.votes,
            tally,
            options,
        }
    }

    pub fn candidates(&self) -> &BTreeSet<C> {
        self.tally.candidates()
    }

    pub fn votes(&self) -> &[Vote<C>] {
        &self.votes
    }

    pub fn options(&self) -> &RankingOptions {
        &self.options
    }

    pub fn matchups(&self) -> &MatchupTally<C> {
        &self.tally
    }

    pub fn matchup_graph(&self) -> MatchupGraph<C> {
        PairGraph::from_tally(&self.tally)
    }

    pub fn victory_graph(&self) -> VictoryGraph<C> {
        self.matchup_graph().victories()
    }

    pub fn ranked_pairs(&self) -> Vec<C> {
        methods::ranked_pairs(&self.victory_graph())
    }

    pub fn ranked_pairs_locks(&self) -> Vec<methods::LockDecision<C>> {
        methods::ranked_pairs_locks(&self.victory_graph())
    }

    pub fn copeland(&self) -> Vec<Standing<C, i64>> {
        methods::copeland(&self.victory_graph())
    }

    /// Minimax under the configured `MinimaxPolicy`. Only fails under
    /// `MinimaxPolicy::Reject`.
    pub fn minimax(&self) -> Result<Vec<Standing<C, f64>>> {
        self.minimax_with(self.options.minimax_policy)
    }

    pub fn minimax_with(&self, policy: MinimaxPolicy) -> Result<Vec<Standing<C, f64>>> {
        methods::minimax(&self.matchup_graph(), policy)
    }

    pub fn win_ratio(&self) -> Vec<Standing<C, f64>> {
        methods::win_ratio(&self.tally)
    }

    pub fn win_tie_ratio(&self) -> Vec<Standing<C, f64>> {
        methods::win_tie_ratio(&self.tally)
    }

    pub fn rank(&self, method: RankingMethod) -> Result<Ranking<C>> {
        let ranking = match method {
            RankingMethod::RankedPairs => Ranking::Order(self.ranked_pairs()),
            RankingMethod::Copeland => Ranking::Integer(self.copeland()),
            RankingMethod::Minimax => Ranking::Ratio(self.minimax()?),
            RankingMethod::WinRatio => Ranking::Ratio(self.win_ratio()),
            RankingMethod::WinTieRatio => Ranking::Ratio(self.win_tie_ratio()),
        };
        Ok(ranking)
    }

    pub fn rank_all(&self) -> Result<RankingSummary<C>> {
        Ok(RankingSummary {
            ranked_pairs: self.ranked_pairs(),
            copeland: self.copeland(),
            minimax: self.minimax()?,
            win_ratio: self.win_ratio(),
            win_tie_ratio: self.win_tie_ratio(),
        })
    }

    /// The candidate holding a victory over every other candidate, if any.
    pub fn condorcet_winner(&self) -> Option<C> {
        let victories = self.victory_graph();
        let others = self.candidates().len().saturating_sub(1);

        self.candidates()
            .iter()
            .find(|candidate| others > 0 && victories.out_degree(candidate) == others)
            .cloned()
    }
}

impl Election<String> {
    /// Validate string records `[candidate, candidate, outcome]` and build an
    /// election from them.
    pub fn from_records<R, S>(records: &[R]) -> Result<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        Self::from_records_with_options(records, RankingOptions::default())
    }

    pub fn from_records_with_options<R, S>(records: &[R], options: RankingOptions) -> Result<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let validated = validate_records(records)?;
        Ok(Self::from_validated(validated, options))
    }
}
