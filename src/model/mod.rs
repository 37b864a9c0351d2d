pub mod vote;

use std::fmt::Debug;
use std::hash::Hash;

pub use vote::{Outcome, UnknownOutcome, Vote};

/// Anything usable as a candidate identifier.
///
/// `Ord` supplies the deterministic secondary ordering used to break score and
/// margin ties; nothing else about a candidate is inspected.
pub trait Candidate: Clone + Ord + Hash + Debug {}

impl<T: Clone + Ord + Hash + Debug> Candidate for T {}
