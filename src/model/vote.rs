use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result of a single pairwise judgment, read from the first candidate's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    pub const LABELS: [&'static str; 3] = ["win", "loss", "tie"];

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Loss => "loss",
            Outcome::Tie => "tie",
        }
    }

    /// The same judgment seen from the other candidate.
    pub fn reversed(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Label did not name an outcome. Carries the rejected label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown outcome label {0:?}, expected one of win, loss, tie")]
pub struct UnknownOutcome(pub String);

impl FromStr for Outcome {
    type Err = UnknownOutcome;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(Outcome::Win),
            "loss" => Ok(Outcome::Loss),
            "tie" => Ok(Outcome::Tie),
            other => Err(UnknownOutcome(other.to_string())),
        }
    }
}

/// A normalized pairwise vote: `first` had `outcome` against `second`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vote<C> {
    pub first: C,
    pub second: C,
    pub outcome: Outcome,
}

impl<C> Vote<C> {
    pub fn new(first: C, second: C, outcome: Outcome) -> Self {
        Self {
            first,
            second,
            outcome,
        }
    }

    pub fn win(first: C, second: C) -> Self {
        Self::new(first, second, Outcome::Win)
    }

    pub fn loss(first: C, second: C) -> Self {
        Self::new(first, second, Outcome::Loss)
    }

    pub fn tie(first: C, second: C) -> Self {
        Self::new(first, second, Outcome::Tie)
    }
}

impl<C: PartialEq> Vote<C> {
    /// Self-votes pass validation but say nothing about any pairing.
    pub fn is_self_vote(&self) -> bool {
        self.first == self.second
    }
}

impl<C> From<(C, C, Outcome)> for Vote<C> {
    fn from((first, second, outcome): (C, C, Outcome)) -> Self {
        Self::new(first, second, outcome)
    }
}
