use super::{sort_standings, Standing};
use crate::model::Candidate;
use crate::tabulator::VictoryGraph;

/// Copeland score: victories minus defeats in the victory graph, best first.
pub fn copeland<C: Candidate>(victories: &VictoryGraph<C>) -> Vec<Standing<C, i64>> {
    let standings = victories
        .nodes()
        .iter()
        .map(|node| {
            let score = victories.out_degree(node) as i64 - victories.in_degree(node) as i64;
            Standing::new(node.clone(), score)
        })
        .collect();

    sort_standings(standings, |a, b| b.cmp(a))
}
