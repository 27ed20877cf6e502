// Line-oriented ballot ingestion.
//
// One raw candidate name per line, most preferred first. A '%' line or a
// blank line ends the current ballot; end of input with nothing read means
// there are no more ballots.

use std::io::BufRead;

use instant_runoff::{canonical_name, Ballot, BallotBox};
use log::warn;
use snafu::prelude::*;

use super::{CountResult, MalformedBallotSnafu, ReadingInputSnafu};

/// Reads one ballot. Returns `None` when the input is exhausted before any
/// line could be read.
pub fn read_ballot<R: BufRead>(reader: &mut R) -> CountResult<Option<Ballot>> {
    let mut ballot = Ballot::new();
    let mut line = String::new();
    let mut first = true;
    loop {
        line.clear();
        let n = reader.read_line(&mut line).context(ReadingInputSnafu {})?;
        if n == 0 {
            if first {
                return Ok(None);
            }
            return Ok(Some(ballot));
        }
        first = false;
        let token = line.trim_end();
        if token == "%" || token.is_empty() {
            return Ok(Some(ballot));
        }
        // Names without any letter canonicalize to nothing and never reach
        // the ballot.
        if canonical_name(token).is_empty() {
            warn!("read_ballot: skipping token with no letters: {:?}", token);
            continue;
        }
        ballot.insert(token).context(MalformedBallotSnafu {})?;
    }
}

/// Reads ballots until the input runs out. A ballot past the entry bound
/// aborts the whole read.
pub fn read_ballot_box<R: BufRead>(reader: &mut R) -> CountResult<BallotBox> {
    let mut ballots = BallotBox::new();
    while let Some(ballot) = read_ballot(reader)? {
        ballots.insert(ballot);
    }
    Ok(ballots)
}
