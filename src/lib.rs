//! Pairwise social-choice rankings.
//!
//! Votes are pairwise judgments (`A` beat, lost to, or tied `B`). They are
//! tallied per ordered pair, turned into a matchup graph with win margins,
//! reduced to a victory graph holding the dominant direction of each pair, and
//! ranked with Ranked Pairs, Copeland, Minimax, Win-Ratio or Win-Tie-Ratio.
//!
//! ```rust
//! use pairwise_vote::{Election, Vote};
//!
//! let election = Election::new(vec![
//!     Vote::win("alice", "bob"),
//!     Vote::win("bob", "carol"),
//!     Vote::tie("alice", "carol"),
//! ]);
//!
//! assert_eq!(election.ranked_pairs(), vec!["alice", "bob", "carol"]);
//! assert_eq!(election.copeland()[0].candidate, "alice");
//! ```

pub mod ballot;
pub mod election;
pub mod methods;
pub mod model;
pub mod tabulator;

pub use ballot::{validate_records, ValidatedVotes};
pub use election::{Election, ElectionError, Result};
pub use methods::{
    LockDecision, MinimaxPolicy, Ranking, RankingMethod, RankingOptions, RankingSummary, Standing,
};
pub use model::{Candidate, Outcome, Vote};
pub use tabulator::{Matchup, MatchupEdge, MatchupGraph, MatchupTally, VictoryGraph};
