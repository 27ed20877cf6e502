use clap::Parser;

mod args;
mod tabulate;

use crate::args::Args;

fn main() {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .init();

    if let Err(e) = tabulate::run_count(&args) {
        eprintln!("irvtab: {}", e);
        std::process::exit(tabulate::exit_code(&e));
    }
}
