//! Validation of raw pairwise vote records into normalized votes.
use crate::election::{ElectionError, Result};
use crate::model::{Candidate, Outcome, Vote};
use std::collections::BTreeSet;
use tracing::debug;

/// Votes that passed validation, together with the candidate set they define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedVotes<C: Candidate> {
    pub votes: Vec<Vote<C>>,
    pub candidates: BTreeSet<C>,
}

impl<C: Candidate> ValidatedVotes<C> {
    /// Typed votes are well-shaped already; only the candidate set is derived.
    pub fn from_votes(votes: Vec<Vote<C>>) -> Self {
        let candidates = candidate_set(&votes);
        Self { votes, candidates }
    }
}

/// Every value appearing in the first two positions of any vote.
pub fn candidate_set<C: Candidate>(votes: &[Vote<C>]) -> BTreeSet<C> {
    votes
        .iter()
        .flat_map(|vote| [vote.first.clone(), vote.second.clone()])
        .collect()
}

/// Validate string records of the form `[candidate, candidate, outcome]`.
///
/// The whole input is checked before anything is returned; the error names the
/// lowest-indexed offending record.
pub fn validate_records<R, S>(records: &[R]) -> Result<ValidatedVotes<String>>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut votes = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let fields = record.as_ref();
        let [first, second, label] = fields else {
            return Err(ElectionError::InvalidVoteShape {
                index,
                len: fields.len(),
            });
        };

        let outcome: Outcome =
            label
                .as_ref()
                .parse()
                .map_err(|_| ElectionError::InvalidOutcomeLabel {
                    index,
                    label: label.as_ref().to_string(),
                })?;

        votes.push(Vote::new(
            first.as_ref().to_string(),
            second.as_ref().to_string(),
            outcome,
        ));
    }

    let validated = ValidatedVotes::from_votes(votes);
    debug!(
        votes = validated.votes.len(),
        candidates = validated.candidates.len(),
        "validated vote records"
    );
    Ok(validated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_records_derives_candidates() {
        let records = vec![
            vec!["A", "B", "win"],
            vec!["C", "B", "tie"],
            vec!["A", "A", "loss"],
        ];

        let validated = validate_records(&records).unwrap();

        assert_eq!(validated.votes.len(), 3);
        assert_eq!(validated.votes[1], Vote::tie("C".to_string(), "B".to_string()));
        let names: Vec<&str> = validated.candidates.iter().map(String::as_str).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_validate_records_rejects_bad_shape() {
        let records = vec![vec!["A", "B", "win"], vec!["A", "B"], vec!["A", "B", "draw"]];

        let err = validate_records(&records).unwrap_err();

        assert_eq!(err, ElectionError::InvalidVoteShape { index: 1, len: 2 });
    }

    #[test]
    fn test_validate_records_rejects_long_record() {
        let records = vec![vec!["A", "B", "win", "extra"]];

        assert_eq!(
            validate_records(&records).unwrap_err(),
            ElectionError::InvalidVoteShape { index: 0, len: 4 }
        );
    }

    #[test]
    fn test_validate_records_rejects_bad_label() {
        let records = vec![vec!["A", "B", "win"], vec!["B", "C", "Win"]];

        assert_eq!(
            validate_records(&records).unwrap_err(),
            ElectionError::InvalidOutcomeLabel {
                index: 1,
                label: "Win".to_string()
            }
        );
    }

    #[test]
    fn test_validate_empty_input() {
        let records: Vec<Vec<String>> = Vec::new();

        let validated = validate_records(&records).unwrap();

        assert!(validated.votes.is_empty());
        assert!(validated.candidates.is_empty());
    }
}
