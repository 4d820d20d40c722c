use std::process::ExitCode;

use clap::Parser;
use cron_expander::{logging, render_report, Invocation};
use tracing::debug;

/// `-h`/`--help` and `-V`/`--version` are handled by clap, any other argument is passed on to [`Invocation`]
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Expand a cron expression into the values of each field.\n\nExample: cron-expander \"*/15 0 1,15 * 1-5 /usr/bin/find\""
)]
struct Cli {
    /// Five cron fields followed by a command, as a single argument
    #[arg(num_args = 0.., allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> ExitCode {
    logging::init_cli_logger();
    let cli = Cli::parse();
    debug!(?cli, "Parsed command line");

    match Invocation::from_args(&cli.args).and_then(|invocation| render_report(&invocation)) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
