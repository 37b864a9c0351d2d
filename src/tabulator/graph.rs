use super::tally::{Matchup, MatchupTally};
use crate::model::Candidate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Attributes carried by a directed edge `x → y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchupEdge {
    pub wins: u64,
    pub losses: u64,
    pub ties: u64,
    /// `wins / (wins + losses + ties)` for `x` against `y`.
    pub margin: f64,
}

impl MatchupEdge {
    fn from_matchup(matchup: &Matchup) -> Option<Self> {
        matchup.margin().map(|margin| Self {
            wins: matchup.wins,
            losses: matchup.losses,
            ties: matchup.ties,
            margin,
        })
    }
}

/// Directed graph over candidates with at most one edge per ordered pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PairGraph<C: Candidate> {
    nodes: BTreeSet<C>,
    edges: BTreeMap<(C, C), MatchupEdge>,
    successors: BTreeMap<C, BTreeSet<C>>,
    predecessors: BTreeMap<C, BTreeSet<C>>,
}

/// Every ordered pair with at least one recorded vote.
pub type MatchupGraph<C> = PairGraph<C>;

/// Only the dominant direction of each pairing.
pub type VictoryGraph<C> = PairGraph<C>;

impl<C: Candidate> PairGraph<C> {
    /// Build the matchup graph: one edge per ordered pair with a nonzero total.
    pub fn from_tally(tally: &MatchupTally<C>) -> MatchupGraph<C> {
        let edges = tally
            .iter()
            .filter_map(|(x, y, matchup)| {
                MatchupEdge::from_matchup(matchup).map(|edge| ((x.clone(), y.clone()), edge))
            })
            .collect();

        PairGraph::from_parts(tally.candidates().clone(), edges)
    }

    /// Reduce to the victory graph. For each unordered pair the direction with
    /// the strictly greater margin survives; equal margins drop both.
    pub fn victories(&self) -> VictoryGraph<C> {
        let mut edges = BTreeMap::new();

        for (x, y) in self.nodes.iter().tuple_combinations() {
            let forward = self.edge(x, y);
            let backward = self.edge(y, x);
            let forward_margin = forward.map(|e| e.margin);
            let backward_margin = backward.map(|e| e.margin);

            match (forward, backward) {
                (Some(edge), _) if forward_margin > backward_margin => {
                    edges.insert((x.clone(), y.clone()), *edge);
                }
                (_, Some(edge)) if backward_margin > forward_margin => {
                    edges.insert((y.clone(), x.clone()), *edge);
                }
                _ => {}
            }
        }

        PairGraph::from_parts(self.nodes.clone(), edges)
    }

    fn from_parts(nodes: BTreeSet<C>, edges: BTreeMap<(C, C), MatchupEdge>) -> Self {
        let mut successors: BTreeMap<C, BTreeSet<C>> = BTreeMap::new();
        let mut predecessors: BTreeMap<C, BTreeSet<C>> = BTreeMap::new();
        for (x, y) in edges.keys() {
            successors.entry(x.clone()).or_default().insert(y.clone());
            predecessors.entry(y.clone()).or_default().insert(x.clone());
        }

        PairGraph {
            nodes,
            edges,
            successors,
            predecessors,
        }
    }

    pub fn nodes(&self) -> &BTreeSet<C> {
        &self.nodes
    }

    pub fn edge(&self, x: &C, y: &C) -> Option<&MatchupEdge> {
        self.edges.get(&(x.clone(), y.clone()))
    }

    pub fn contains_edge(&self, x: &C, y: &C) -> bool {
        self.edge(x, y).is_some()
    }

    /// All edges in `(source, target)` order.
    pub fn edges(&self) -> impl Iterator<Item = (&C, &C, &MatchupEdge)> {
        self.edges.iter().map(|((x, y), edge)| (x, y, edge))
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges directed into `node`.
    pub fn in_edges<'a>(
        &'a self,
        node: &'a C,
    ) -> impl Iterator<Item = (&'a C, &'a MatchupEdge)> + 'a {
        self.predecessors
            .get(node)
            .into_iter()
            .flatten()
            .filter_map(move |x| self.edge(x, node).map(|edge| (x, edge)))
    }

    /// Edges directed out of `node`.
    pub fn out_edges<'a>(
        &'a self,
        node: &'a C,
    ) -> impl Iterator<Item = (&'a C, &'a MatchupEdge)> + 'a {
        self.successors
            .get(node)
            .into_iter()
            .flatten()
            .filter_map(move |y| self.edge(node, y).map(|edge| (y, edge)))
    }

    pub fn in_degree(&self, node: &C) -> usize {
        self.predecessors.get(node).map_or(0, BTreeSet::len)
    }

    pub fn out_degree(&self, node: &C) -> usize {
        self.successors.get(node).map_or(0, BTreeSet::len)
    }
}
