use std::fmt::Display;

use crate::result::TabulationError;

/// Upper bound on the number of entries on a single ballot.
///
/// Exceeding it at insert time is a structural violation of the input, not
/// bad data, and aborts the whole tabulation.
pub const MAX_CANDIDATES: usize = 16;

/// Reduces a raw candidate token to its canonical comparison form: ASCII
/// letters only, uppercased. Two tokens denote the same candidate iff their
/// canonical forms are equal.
pub fn canonical_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[derive(Eq, PartialEq, Debug, Clone)]
struct Entry {
    name: String,
    active: bool,
}

/// One voter's ranked preference list.
///
/// Entries stay in insertion order (first inserted = most preferred). A
/// name is fixed once inserted; only the active flag changes, and only from
/// true to false. The same candidate may legally appear more than once.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct Ballot {
    entries: Vec<Entry>,
}

impl Ballot {
    pub fn new() -> Ballot {
        Ballot {
            entries: Vec::new(),
        }
    }

    /// Appends a choice, canonicalizing the raw name before it is stored.
    ///
    /// Fails when the ballot already holds `MAX_CANDIDATES` entries or when
    /// the name canonicalizes to the empty string.
    pub fn insert(&mut self, raw_name: &str) -> Result<(), TabulationError> {
        if self.entries.len() >= MAX_CANDIDATES {
            return Err(TabulationError::BallotOverflow);
        }
        let name = canonical_name(raw_name);
        if name.is_empty() {
            return Err(TabulationError::EmptyCandidateName);
        }
        self.entries.push(Entry { name, active: true });
        Ok(())
    }

    /// The most preferred candidate that is still active, if any.
    pub fn leader(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.active)
            .map(|e| e.name.as_str())
    }

    /// Deactivates every active entry matching `name`. Eliminating a name
    /// that does not appear, or is already inactive, is a no-op.
    pub fn eliminate(&mut self, name: &str) {
        for e in self.entries.iter_mut() {
            if e.active && e.name == name {
                e.active = false;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in preference order, as (name, active) pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|e| (e.name.as_str(), e.active))
    }
}

/// Renders one entry per line: active candidates as the bare name,
/// eliminated ones bracketed.
impl Display for Ballot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for e in self.entries.iter() {
            if e.active {
                writeln!(f, "{}", e.name)?;
            } else {
                writeln!(f, "[{}]", e.name)?;
            }
        }
        Ok(())
    }
}
