/*!
Instant-runoff vote tabulation.

Ballots rank candidates in preference order. Each round counts every
ballot's current leader; a candidate holding a strict majority of the
counted votes wins, otherwise the candidate with the fewest votes is
eliminated on every ballot and the count repeats, until a winner emerges or
no votes remain.
*/

mod ballot;
mod ballot_box;
mod result;
mod tally;

use log::{debug, info};

pub use crate::ballot::{canonical_name, Ballot, MAX_CANDIDATES};
pub use crate::ballot_box::BallotBox;
pub use crate::result::{RoundStats, TabulationError, TabulationResult};
pub use crate::tally::Tally;

// Safety bound on the number of rounds. Each round eliminates a candidate
// that led at least one ballot, so any realistic election stays far below.
const MAX_ROUNDS: usize = 10_000;

/// Runs the instant-runoff loop over the ballots in `ballots`.
///
/// Every round builds a fresh tally from the current leaders. A candidate
/// with a strict majority (`votes * 2 > total`, integer arithmetic) wins
/// immediately; otherwise the candidate with the fewest votes is eliminated
/// across the whole box and the next round starts. When no votes remain the
/// election is exhausted and the winner is `None`.
///
/// Ties for the greatest and the fewest votes both go to the candidate
/// recorded first in the round's tally, which follows ballot insertion
/// order and is therefore deterministic.
///
/// The box is mutated in place: eliminations are permanent.
pub fn run_instant_runoff(
    ballots: &mut BallotBox,
) -> Result<TabulationResult, TabulationError> {
    info!("run_instant_runoff: processing {} ballots", ballots.len());
    let mut round_stats: Vec<RoundStats> = Vec::new();
    while round_stats.len() < MAX_ROUNDS {
        let round = round_stats.len() as u32 + 1;
        let tally = ballots.tally();
        let total = tally.total();
        debug!("round {}: total {}, tally {:?}", round, total, tally);

        if total == 0 {
            info!("round {}: no votes remain, no winner", round);
            return Ok(TabulationResult {
                winner: None,
                round_stats,
            });
        }

        let leader = match tally.max() {
            Some(name) => name.to_string(),
            None => return Err(TabulationError::EmptyElection),
        };
        let leader_votes = tally.lookup(&leader);
        let mut stats = RoundStats {
            round,
            tally: tally.iter().map(|(n, c)| (n.to_string(), c)).collect(),
            eliminated: None,
            elected: None,
        };

        if leader_votes * 2 > total {
            info!(
                "round {}: {} elected with {}/{} votes",
                round, leader, leader_votes, total
            );
            stats.elected = Some(leader.clone());
            round_stats.push(stats);
            return Ok(TabulationResult {
                winner: Some(leader),
                round_stats,
            });
        }

        let loser = match tally.min() {
            Some(name) => name.to_string(),
            None => return Err(TabulationError::EmptyElection),
        };
        info!(
            "round {}: no majority, eliminating {} ({} votes)",
            round,
            loser,
            tally.lookup(&loser)
        );
        ballots.eliminate(&loser);
        stats.eliminated = Some(loser);
        round_stats.push(stats);
    }
    Err(TabulationError::NoConvergence)
}
