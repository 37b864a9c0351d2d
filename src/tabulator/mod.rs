// Pairwise aggregation: votes -> tally -> matchup graph -> victory graph.

pub mod graph;
pub mod tally;

pub use graph::{MatchupEdge, MatchupGraph, PairGraph, VictoryGraph};
pub use tally::{Matchup, MatchupTally};
