//! Benchmarks for tallying and ranking a dense pairwise election.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pairwise_vote::{Election, Outcome, Vote};

/// Every ordered pair among `candidates` judged `rounds` times, with outcomes
/// cycling deterministically so the victory graph contains cycles.
fn dense_votes(candidates: u32, rounds: u32) -> Vec<Vote<u32>> {
    let outcomes = [Outcome::Win, Outcome::Loss, Outcome::Tie, Outcome::Win];
    let mut votes = Vec::new();
    for round in 0..rounds {
        for a in 0..candidates {
            for b in 0..candidates {
                if a != b {
                    let outcome = outcomes[((a * 7 + b * 3 + round) % 4) as usize];
                    votes.push(Vote::new(a, b, outcome));
                }
            }
        }
    }
    votes
}

/// Construction cost: candidate set plus full pairwise tally.
fn bench_tally_50_candidates(c: &mut Criterion) {
    let votes = dense_votes(50, 4);

    c.bench_function("tally_50_candidates", |b| {
        b.iter(|| Election::new(black_box(votes.clone())));
    });
}

/// Ranked Pairs including graph construction and the lock phase.
fn bench_ranked_pairs_50_candidates(c: &mut Criterion) {
    let election = Election::new(dense_votes(50, 4));

    c.bench_function("ranked_pairs_50_candidates", |b| {
        b.iter(|| black_box(&election).ranked_pairs());
    });
}

fn bench_rank_all_20_candidates(c: &mut Criterion) {
    let election = Election::new(dense_votes(20, 10));

    c.bench_function("rank_all_20_candidates", |b| {
        b.iter(|| black_box(&election).rank_all());
    });
}

criterion_group!(
    benches,
    bench_tally_50_candidates,
    bench_ranked_pairs_50_candidates,
    bench_rank_all_20_candidates
);
criterion_main!(benches);
