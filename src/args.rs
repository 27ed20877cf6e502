use clap::Parser;

/// This is an instant-runoff election tabulation program.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path or empty) The plain-text ballot file: one candidate name per
    /// line, most preferred first; a '%' line or a blank line ends the current
    /// ballot. Reads from standard input when not specified.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the round-by-round summary
    /// of the election will be written in JSON format to the given location.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference file containing the expected summary of the
    /// election in JSON format. If provided, irvtab will check that the
    /// tabulated output matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (string, optional) A display name for the contest, echoed in the summary.
    #[clap(long, value_parser)]
    pub contest: Option<String>,

    /// If passed as an argument, prints the final state of every ballot after
    /// tabulation, with eliminated candidates bracketed.
    #[clap(long, takes_value = false)]
    pub print_ballots: bool,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
