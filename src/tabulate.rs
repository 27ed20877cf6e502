use log::{debug, info, warn};

use instant_runoff::{run_instant_runoff, TabulationError, TabulationResult};
use snafu::{prelude::*, Snafu};

use std::fs;
use std::io::BufReader;

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_json::Map as JSMap;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;

pub mod io_text;

#[derive(Debug, Snafu)]
pub enum CountError {
    #[snafu(display("Error opening ballot file {path}"))]
    OpeningInput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error reading ballots"))]
    ReadingInput { source: std::io::Error },
    #[snafu(display("Malformed ballot: {source}"))]
    MalformedBallot { source: TabulationError },
    #[snafu(display("Error opening summary file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing summary JSON"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Error writing summary file {path}"))]
    WritingSummary {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Tabulation failed: {source}"))]
    Tabulation { source: TabulationError },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type CountResult<T> = Result<T, CountError>;

/// Exit status for each failure category, so a caller can tell a capacity
/// violation apart from a tabulation failure or plain bad input.
pub fn exit_code(err: &CountError) -> i32 {
    match err {
        CountError::MalformedBallot { .. } => 3,
        CountError::Tabulation { .. } => 4,
        _ => 1,
    }
}

/// Header block echoed at the top of the summary document.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub contest: String,
    pub winner: Option<String>,
    pub rounds: u32,
}

fn result_stats_to_json(rs: &TabulationResult) -> Vec<JSValue> {
    let mut l: Vec<JSValue> = Vec::new();
    for round_stat in rs.round_stats.iter() {
        let mut tally: JSMap<String, JSValue> = JSMap::new();
        for (name, count) in round_stat.tally.iter() {
            tally.insert(name.clone(), json!(count.to_string()));
        }

        let mut tally_results: Vec<JSValue> = Vec::new();
        if let Some(name) = &round_stat.eliminated {
            tally_results.push(json!({ "eliminated": name }));
        }
        if let Some(name) = &round_stat.elected {
            tally_results.push(json!({ "elected": name }));
        }

        let js =
            json!({"round": round_stat.round, "tally": tally, "tallyResults": tally_results});
        l.push(js);
    }
    l
}

fn build_summary_js(contest: &Option<String>, rv: &TabulationResult) -> JSValue {
    let c = OutputConfig {
        contest: contest
            .clone()
            .unwrap_or_else(|| "unnamed contest".to_string()),
        winner: rv.winner.clone(),
        rounds: rv.round_stats.len() as u32,
    };
    json!({
        "config": c,
        "results": result_stats_to_json(rv) })
}

fn read_summary(path: &str) -> CountResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    debug!("read content: {:?}", contents);
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(js)
}

pub fn run_count(args: &Args) -> CountResult<()> {
    let mut ballots = match &args.input {
        Some(path) => {
            info!("Reading ballots from {}", path);
            let f = fs::File::open(path).context(OpeningInputSnafu { path: path.clone() })?;
            io_text::read_ballot_box(&mut BufReader::new(f))?
        }
        None => {
            info!("Reading ballots from standard input");
            let stdin = std::io::stdin();
            let mut locked = stdin.lock();
            io_text::read_ballot_box(&mut locked)?
        }
    };
    info!("Read {} ballots", ballots.len());

    let result = run_instant_runoff(&mut ballots).context(TabulationSnafu {})?;

    match &result.winner {
        Some(name) => println!("winner: {}", name),
        None => println!("no winner"),
    }

    // Display-only: the algorithm is done by the time ballots are printed.
    if args.print_ballots {
        for ballot in ballots.iter() {
            print!("{}", ballot);
            println!("%");
        }
    }

    let summary = build_summary_js(&args.contest, &result);
    let pretty_js_stats = serde_json::to_string_pretty(&summary).context(ParsingJsonSnafu {})?;
    match args.out.as_deref() {
        Some("stdout") => println!("{}", pretty_js_stats),
        Some(path) => fs::write(path, &pretty_js_stats).context(WritingSummarySnafu { path })?,
        None => debug!("summary: {}", pretty_js_stats),
    }

    // The reference summary, if provided for comparison
    if let Some(summary_p) = &args.reference {
        let summary_ref = read_summary(summary_p)?;
        info!("summary: {:?}", summary_ref);
        let pretty_js_summary_ref =
            serde_json::to_string_pretty(&summary_ref).context(ParsingJsonSnafu {})?;
        if pretty_js_summary_ref != pretty_js_stats {
            warn!("Found differences with the reference summary");
            print_diff(
                pretty_js_summary_ref.as_str(),
                pretty_js_stats.as_ref(),
                "\n",
            );
            whatever!("Difference detected between calculated summary and reference summary")
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::io_text::{read_ballot, read_ballot_box};
    use super::*;
    use std::io::Cursor;

    #[test]
    fn percent_separates_ballots() {
        let mut input = Cursor::new("Alice\nBob\n%\nBob\nAlice\n");
        let ballots = read_ballot_box(&mut input).unwrap();
        assert_eq!(ballots.len(), 2);
        let leaders: Vec<&str> = ballots.iter().filter_map(|b| b.leader()).collect();
        assert_eq!(leaders, vec!["ALICE", "BOB"]);
    }

    #[test]
    fn blank_line_ends_a_ballot() {
        let mut input = Cursor::new("Alice\n\nBob\n");
        let ballots = read_ballot_box(&mut input).unwrap();
        assert_eq!(ballots.len(), 2);
    }

    #[test]
    fn eof_ends_the_last_ballot() {
        let mut input = Cursor::new("Alice\nBob");
        let ballot = read_ballot(&mut input).unwrap().unwrap();
        assert_eq!(ballot.len(), 2);
        assert!(read_ballot(&mut input).unwrap().is_none());
    }

    #[test]
    fn empty_input_means_no_ballots() {
        let mut input = Cursor::new("");
        let ballots = read_ballot_box(&mut input).unwrap();
        assert!(ballots.is_empty());
    }

    #[test]
    fn lone_percent_is_an_empty_ballot() {
        let mut input = Cursor::new("%\n");
        let ballots = read_ballot_box(&mut input).unwrap();
        assert_eq!(ballots.len(), 1);
        assert!(ballots.iter().next().unwrap().is_empty());
    }

    #[test]
    fn tokens_without_letters_are_skipped() {
        let mut input = Cursor::new("Alice\n123!\nBob\n%\n");
        let ballots = read_ballot_box(&mut input).unwrap();
        let names: Vec<&str> = ballots
            .iter()
            .next()
            .unwrap()
            .entries()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["ALICE", "BOB"]);
    }

    #[test]
    fn overlong_ballot_aborts_the_read() {
        let mut text = String::new();
        for i in 0..=instant_runoff::MAX_CANDIDATES {
            text.push_str(&"A".repeat(i + 1));
            text.push('\n');
        }
        let mut input = Cursor::new(text);
        let err = read_ballot_box(&mut input).unwrap_err();
        assert!(matches!(err, CountError::MalformedBallot { .. }));
        assert_eq!(exit_code(&err), 3);
    }

    #[test]
    fn tabulation_failures_have_their_own_exit_code() {
        let err = CountError::Tabulation {
            source: TabulationError::NoConvergence,
        };
        assert_eq!(exit_code(&err), 4);
    }

    #[test]
    fn end_to_end_from_text() {
        let mut input =
            Cursor::new("Alice\nBob\nCarol\n%\nAlice\nBob\nCarol\n%\nBob\nCarol\nAlice\n");
        let mut ballots = read_ballot_box(&mut input).unwrap();
        let result = run_instant_runoff(&mut ballots).unwrap();
        assert_eq!(result.winner.as_deref(), Some("ALICE"));

        let summary = build_summary_js(&Some("test contest".to_string()), &result);
        assert_eq!(summary["config"]["contest"], "test contest");
        assert_eq!(summary["config"]["winner"], "ALICE");
        let rounds = summary["results"].as_array().unwrap();
        assert_eq!(rounds.len(), 1);
        assert_eq!(rounds[0]["tally"]["ALICE"], "2");
    }
}
