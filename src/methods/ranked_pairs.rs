//! Ranked Pairs (Tideman).
//!
//! Victories are considered strongest margin first and locked into a graph
//! unless doing so would close a directed cycle. The ranking is a topological
//! order of the locked graph.

use crate::model::Candidate;
use crate::tabulator::VictoryGraph;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Whether a victory was locked in or skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LockDecision<C> {
    pub winner: C,
    pub loser: C,
    pub margin: f64,
    pub locked: bool,
}

/// Acyclic directed graph grown one edge at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockGraph<C: Candidate> {
    nodes: BTreeSet<C>,
    successors: BTreeMap<C, BTreeSet<C>>,
}

impl<C: Candidate> LockGraph<C> {
    pub fn new(nodes: &BTreeSet<C>) -> Self {
        Self {
            nodes: nodes.clone(),
            successors: BTreeMap::new(),
        }
    }

    pub fn contains_edge(&self, from: &C, to: &C) -> bool {
        self.successors
            .get(from)
            .map_or(false, |targets| targets.contains(to))
    }

    /// Is there a directed path from `from` to `to`?
    pub fn reaches(&self, from: &C, to: &C) -> bool {
        let mut stack = vec![from];
        let mut seen = BTreeSet::new();

        while let Some(node) = stack.pop() {
            if node == to {
                return true;
            }
            if !seen.insert(node) {
                continue;
            }
            if let Some(targets) = self.successors.get(node) {
                stack.extend(targets.iter().filter(|t| !seen.contains(t)));
            }
        }

        false
    }

    /// Add `winner → loser` unless it would close a cycle. Returns whether the
    /// edge was added.
    pub fn try_lock(&mut self, winner: &C, loser: &C) -> bool {
        if self.reaches(loser, winner) {
            return false;
        }
        self.nodes.insert(winner.clone());
        self.nodes.insert(loser.clone());
        self.successors
            .entry(winner.clone())
            .or_default()
            .insert(loser.clone());
        true
    }

    /// Kahn's algorithm; among available nodes the smallest candidate goes
    /// first. `None` if the graph has a cycle.
    pub fn topological_order(&self) -> Option<Vec<C>> {
        let mut in_degree: BTreeMap<&C, usize> = self.nodes.iter().map(|n| (n, 0)).collect();
        for targets in self.successors.values() {
            for target in targets {
                *in_degree.entry(target).or_insert(0) += 1;
            }
        }

        let mut ready: BTreeSet<&C> = in_degree
            .iter()
            .filter(|(_, &degree)| degree == 0)
            .map(|(node, _)| *node)
            .collect();
        let mut order = Vec::with_capacity(self.nodes.len());

        while let Some(node) = ready.pop_first() {
            order.push(node.clone());
            for target in self.successors.get(node).into_iter().flatten() {
                if let Some(degree) = in_degree.get_mut(target) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.insert(target);
                    }
                }
            }
        }

        (order.len() == in_degree.len()).then_some(order)
    }
}

/// Victory edges strongest first; equal margins in `(winner, loser)` order.
fn sorted_victories<C: Candidate>(victories: &VictoryGraph<C>) -> Vec<(C, C, f64)> {
    victories
        .edges()
        .map(|(winner, loser, edge)| (winner.clone(), loser.clone(), edge.margin))
        .sorted_by(|a, b| {
            b.2.total_cmp(&a.2)
                .then_with(|| a.0.cmp(&b.0))
                .then_with(|| a.1.cmp(&b.1))
        })
        .collect()
}

fn lock_victories<C: Candidate>(
    victories: &VictoryGraph<C>,
) -> (LockGraph<C>, Vec<LockDecision<C>>) {
    let mut graph = LockGraph::new(victories.nodes());
    let mut decisions = Vec::with_capacity(victories.edge_count());

    for (winner, loser, margin) in sorted_victories(victories) {
        let locked = graph.try_lock(&winner, &loser);
        if !locked {
            debug!(?winner, ?loser, margin, "rejected victory that would close a cycle");
        }
        decisions.push(LockDecision {
            winner,
            loser,
            margin,
            locked,
        });
    }

    (graph, decisions)
}

/// Every victory in the order it was considered, with its lock decision.
pub fn ranked_pairs_locks<C: Candidate>(victories: &VictoryGraph<C>) -> Vec<LockDecision<C>> {
    lock_victories(victories).1
}

/// Full Ranked Pairs ordering, most preferred first.
pub fn ranked_pairs<C: Candidate>(victories: &VictoryGraph<C>) -> Vec<C> {
    let (graph, decisions) = lock_victories(victories);
    let locked = decisions.iter().filter(|d| d.locked).count();
    debug!(
        considered = decisions.len(),
        locked,
        "ranked pairs lock phase complete"
    );

    match graph.topological_order() {
        Some(order) => order,
        None => panic!("ranked pairs lock graph contains a cycle"),
    }
}
