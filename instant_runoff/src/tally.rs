use std::collections::HashMap;

/// Per-round accumulator from candidate name to vote count.
///
/// Names are enumerated in first-recorded order, and that order is also the
/// deterministic tie-break for `max` and `min`. A name absent from the
/// tally looks up as zero. `min` ranges over exactly the names the tally
/// enumerates, so a zero-count slot created through `entry` and never
/// incremented is still eligible for elimination.
///
/// A tally lives for one round: created empty, filled, queried, dropped.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct Tally {
    counts: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl Tally {
    pub fn new() -> Tally {
        Tally::default()
    }

    /// The count slot for `name`, zero-initialized when absent.
    pub fn entry(&mut self, name: &str) -> &mut u64 {
        let idx = match self.index.get(name) {
            Some(&i) => i,
            None => {
                let i = self.counts.len();
                self.counts.push((name.to_string(), 0));
                self.index.insert(name.to_string(), i);
                i
            }
        };
        &mut self.counts[idx].1
    }

    /// The recorded count for `name`, zero when absent.
    pub fn lookup(&self, name: &str) -> u64 {
        self.index
            .get(name)
            .map(|&i| self.counts[i].1)
            .unwrap_or(0)
    }

    /// Sum of all recorded counts, which equals the number of ballots that
    /// contributed a leader this round.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|(_, c)| *c).sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The name with the greatest count; first-recorded wins ties.
    pub fn max(&self) -> Option<&str> {
        self.counts
            .iter()
            .reduce(|best, cur| if cur.1 > best.1 { cur } else { best })
            .map(|(name, _)| name.as_str())
    }

    /// The name with the least count; first-recorded wins ties.
    pub fn min(&self) -> Option<&str> {
        self.counts
            .iter()
            .reduce(|best, cur| if cur.1 < best.1 { cur } else { best })
            .map(|(name, _)| name.as_str())
    }

    /// (name, count) pairs in first-recorded order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(n, c)| (n.as_str(), *c))
    }
}
