use log::debug;

use crate::ballot::Ballot;
use crate::tally::Tally;

/// The full collection of ballots tabulated together.
///
/// The box owns its ballots exclusively. Insertion order is preserved so
/// iteration is deterministic, but tallying does not depend on it.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct BallotBox {
    ballots: Vec<Ballot>,
}

impl BallotBox {
    pub fn new() -> BallotBox {
        BallotBox {
            ballots: Vec::new(),
        }
    }

    /// Takes ownership of a ballot and adds it to the collection.
    pub fn insert(&mut self, ballot: Ballot) {
        self.ballots.push(ballot);
    }

    pub fn len(&self) -> usize {
        self.ballots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ballots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ballot> {
        self.ballots.iter()
    }

    /// Permanently deactivates `name` on every ballot. Idempotent.
    pub fn eliminate(&mut self, name: &str) {
        debug!(
            "eliminate: deactivating {} across {} ballots",
            name,
            self.ballots.len()
        );
        for ballot in self.ballots.iter_mut() {
            ballot.eliminate(name);
        }
    }

    /// Counts the current leader of every ballot into a fresh tally.
    /// Exhausted and empty ballots contribute nothing. Ballots are not
    /// mutated.
    pub fn tally(&self) -> Tally {
        let mut tally = Tally::new();
        for ballot in self.ballots.iter() {
            if let Some(leader) = ballot.leader() {
                *tally.entry(leader) += 1;
            }
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ballot(names: &[&str]) -> Ballot {
        let mut b = Ballot::new();
        for name in names {
            b.insert(name).unwrap();
        }
        b
    }

    #[test]
    fn empty_box_tallies_to_zero() {
        let ballots = BallotBox::new();
        assert!(ballots.is_empty());
        assert_eq!(ballots.tally().total(), 0);
    }

    #[test]
    fn tally_counts_each_leader_once() {
        let mut ballots = BallotBox::new();
        ballots.insert(ballot(&["A", "B", "C"]));
        ballots.insert(ballot(&["A", "C", "B"]));
        ballots.insert(ballot(&["B", "C", "A"]));
        ballots.insert(ballot(&[]));

        let tally = ballots.tally();
        assert_eq!(tally.lookup("A"), 2);
        assert_eq!(tally.lookup("B"), 1);
        assert_eq!(tally.lookup("C"), 0);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn tally_does_not_mutate_ballots() {
        let mut ballots = BallotBox::new();
        ballots.insert(ballot(&["A", "B"]));
        let before = ballots.clone();
        let _ = ballots.tally();
        assert_eq!(ballots, before);
    }

    #[test]
    fn eliminate_reaches_every_ballot() {
        let mut ballots = BallotBox::new();
        ballots.insert(ballot(&["A", "B"]));
        ballots.insert(ballot(&["A", "C"]));
        ballots.insert(ballot(&["B", "A"]));

        ballots.eliminate("A");
        let tally = ballots.tally();
        assert_eq!(tally.lookup("A"), 0);
        assert_eq!(tally.lookup("B"), 2);
        assert_eq!(tally.lookup("C"), 1);

        // Re-eliminating is a harmless no-op.
        let before = ballots.clone();
        ballots.eliminate("A");
        assert_eq!(ballots, before);
    }

    #[test]
    fn votes_transfer_after_elimination() {
        let mut ballots = BallotBox::new();
        ballots.insert(ballot(&["A", "B", "C"]));

        let tally = ballots.tally();
        assert_eq!(tally.lookup("A"), 1);
        assert_eq!(tally.max(), Some("A"));
        assert_eq!(tally.min(), Some("A"));

        ballots.eliminate("B");
        assert_eq!(ballots.tally().lookup("A"), 1);

        ballots.eliminate("A");
        let tally = ballots.tally();
        assert_eq!(tally.lookup("A"), 0);
        assert_eq!(tally.lookup("C"), 1);

        ballots.eliminate("C");
        assert_eq!(ballots.tally().total(), 0);
    }
}
