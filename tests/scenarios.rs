//! End-to-end election scenarios.

use approx::assert_relative_eq;
use pairwise_vote::{Election, ElectionError, MinimaxPolicy, RankingMethod, Vote};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_unanimous_pair() {
    let election = Election::from_records(&[["A", "B", "win"], ["B", "A", "loss"]]).unwrap();
    let a = "A".to_string();
    let b = "B".to_string();

    let tally = election.matchups();
    assert_eq!(tally.get(&a, &b).unwrap().wins, 2);
    assert_eq!(tally.get(&b, &a).unwrap().losses, 2);

    let graph = election.matchup_graph();
    assert_relative_eq!(graph.edge(&a, &b).unwrap().margin, 1.0);
    assert_relative_eq!(graph.edge(&b, &a).unwrap().margin, 0.0);

    let victories = election.victory_graph();
    assert!(victories.contains_edge(&a, &b));
    assert_eq!(victories.edge_count(), 1);

    assert_eq!(election.ranked_pairs(), strings(&["A", "B"]));
    let copeland: Vec<_> = election
        .copeland()
        .into_iter()
        .map(|s| (s.candidate, s.score))
        .collect();
    assert_eq!(copeland, vec![(a, 1), (b, -1)]);
}

#[test]
fn test_single_tie_leaves_pair_unordered() {
    let election = Election::new(vec![Vote::tie("A", "B")]);

    let graph = election.matchup_graph();
    assert_eq!(graph.edge(&"A", &"B").unwrap().margin, 0.0);
    assert_eq!(graph.edge(&"B", &"A").unwrap().margin, 0.0);
    assert_eq!(election.victory_graph().edge_count(), 0);

    let first = election.ranked_pairs();
    assert_eq!(first, vec!["A", "B"]);
    assert_eq!(election.ranked_pairs(), first);
}

#[test]
fn test_three_way_cycle() {
    let election = Election::new(vec![
        Vote::win("A", "B"),
        Vote::win("B", "C"),
        Vote::win("C", "A"),
    ]);

    let locks = election.ranked_pairs_locks();
    assert_eq!(locks.len(), 3);
    assert_eq!(locks.iter().filter(|d| !d.locked).count(), 1);

    let order = election.ranked_pairs();
    let mut sorted = order.clone();
    sorted.sort();
    assert_eq!(sorted, vec!["A", "B", "C"]);

    assert!(election.copeland().iter().all(|s| s.score == 0));
    assert_eq!(election.condorcet_winner(), None);
}

#[test]
fn test_minimax_undefeated_and_isolated_candidates() {
    // A wins every matchup it is in: its in-edges exist but carry margin 0.
    // D appears only in a self-vote, so it has no in-edges at all.
    let votes = vec![
        Vote::win("A", "B"),
        Vote::win("A", "C"),
        Vote::loss("C", "A"),
        Vote::win("B", "C"),
        Vote::tie("D", "D"),
    ];
    let election = Election::new(votes.clone());

    let standings = election.minimax().unwrap();
    let order: Vec<_> = standings.iter().map(|s| s.candidate).collect();
    assert_eq!(order, vec!["D", "A", "B", "C"]);
    assert_eq!(standings[0].score, f64::NEG_INFINITY);
    assert_eq!(standings[1].score, 0.0);

    assert_eq!(
        election.minimax_with(MinimaxPolicy::Reject),
        Err(ElectionError::NoInEdgesForCandidate("\"D\"".to_string()))
    );
    assert!(election.rank(RankingMethod::Minimax).is_ok());
}

#[test]
fn test_win_ratio_without_decided_matchups() {
    let election = Election::new(vec![Vote::tie("A", "B"), Vote::win("C", "D")]);

    let ratios = election.win_ratio();
    let a = ratios.iter().find(|s| s.candidate == "A").unwrap();
    assert_eq!(a.score, 0.0);
    assert_eq!(ratios[0].candidate, "C");

    let with_ties = election.win_tie_ratio();
    assert_eq!(with_ties.iter().find(|s| s.candidate == "A").unwrap().score, 1.0);
    assert_eq!(with_ties.iter().find(|s| s.candidate == "D").unwrap().score, 0.0);
}

#[test]
fn test_rank_all_summary_serializes() {
    let election = Election::new(vec![Vote::win(1u32, 2u32), Vote::win(2, 3), Vote::loss(3, 1)]);

    let summary = election.rank_all().unwrap();
    assert_eq!(summary.ranked_pairs, vec![1, 2, 3]);
    assert_eq!(summary.copeland[0].candidate, 1);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["ranked_pairs"], serde_json::json!([1, 2, 3]));
    assert_eq!(json["copeland"][0]["score"], serde_json::json!(2));
}

#[test]
fn test_invalid_records_abort_construction() {
    let short = vec![vec!["A", "B", "win"], vec!["A"]];
    assert_eq!(
        Election::from_records(&short).unwrap_err(),
        ElectionError::InvalidVoteShape { index: 1, len: 1 }
    );

    let bad_label = vec![vec!["A", "B", "won"]];
    assert!(matches!(
        Election::from_records(&bad_label),
        Err(ElectionError::InvalidOutcomeLabel { index: 0, .. })
    ));
}
