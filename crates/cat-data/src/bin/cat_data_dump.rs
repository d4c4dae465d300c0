//! Dumps a generated cat dataset as JSON.
//!
//! This binary delegates to `cat_data::dump_cli` for parsing and output,
//! keeping the CLI behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use cat_data::dump_cli::{CliError, ParseOutcome, execute, parse_args, success_message};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    if let Err(err) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %err, "tracing init failed");
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let dataset = execute(&options, &mut io::stdout().lock())?;
            if let Some(path) = options.output() {
                write_success(&success_message(path, dataset.cats.len()));
            }
            Ok(())
        }
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: cat-data-dump [options]\n",
        "\n",
        "Options:\n",
        "  --output <path>      Write the dataset to a file instead of stdout\n",
        "  --seed <seed>        RNG seed for a reproducible dataset\n",
        "  --pretty             Pretty-print the JSON output\n",
        "  -h, --help           Print this help output\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}

fn write_success(message: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{message}") {
        drop(err);
    }
}
