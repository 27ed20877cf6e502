// ******** Output data structures *********

use std::error::Error;
use std::fmt::Display;

/// Statistics for one tabulation round.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RoundStats {
    pub round: u32,
    /// (name, count) pairs in the order the round's tally recorded them.
    pub tally: Vec<(String, u64)>,
    /// The candidate eliminated at the end of this round, if any.
    pub eliminated: Option<String>,
    /// The candidate elected in this round, if any.
    pub elected: Option<String>,
}

/// The outcome of a full tabulation: the winner, or `None` when every
/// ballot exhausted before a majority emerged.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct TabulationResult {
    pub winner: Option<String>,
    pub round_stats: Vec<RoundStats>,
}

/// Errors that prevent the tabulation from completing.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum TabulationError {
    /// A ballot held more than `MAX_CANDIDATES` entries.
    BallotOverflow,
    /// A candidate name was empty after canonicalization.
    EmptyCandidateName,
    /// A round recorded votes but produced no leading candidate.
    EmptyElection,
    /// The round safety bound was exceeded.
    NoConvergence,
}

impl Error for TabulationError {}

impl Display for TabulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TabulationError::BallotOverflow => write!(
                f,
                "ballot holds more than {} candidates",
                crate::ballot::MAX_CANDIDATES
            ),
            TabulationError::EmptyCandidateName => {
                write!(f, "candidate name is empty after canonicalization")
            }
            TabulationError::EmptyElection => {
                write!(f, "no leading candidate in a non-empty round")
            }
            TabulationError::NoConvergence => write!(f, "tabulation did not converge"),
        }
    }
}
