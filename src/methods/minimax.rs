use super::{sort_standings, MinimaxPolicy, Standing};
use crate::election::{ElectionError, Result};
use crate::model::Candidate;
use crate::tabulator::MatchupGraph;

/// Minimax: each candidate's score is its worst defeat, the largest margin on
/// any matchup edge pointing at it. Lower is better.
///
/// A candidate with no incoming edges is scored according to `policy`.
pub fn minimax<C: Candidate>(
    graph: &MatchupGraph<C>,
    policy: MinimaxPolicy,
) -> Result<Vec<Standing<C, f64>>> {
    let mut standings = Vec::with_capacity(graph.nodes().len());

    for node in graph.nodes() {
        let worst = graph
            .in_edges(node)
            .map(|(_, edge)| edge.margin)
            .reduce(f64::max);

        let score = match (worst, policy) {
            (Some(margin), _) => margin,
            (None, MinimaxPolicy::NoLossesRankFirst) => f64::NEG_INFINITY,
            (None, MinimaxPolicy::Reject) => {
                // Candidate is only bound on Debug.
                return Err(ElectionError::NoInEdgesForCandidate(format!("{:?}", node)))
            }
        };
        standings.push(Standing::new(node.clone(), score));
    }

    Ok(sort_standings(standings, f64::total_cmp))
}
