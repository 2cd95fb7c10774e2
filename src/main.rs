//! Command line interface of wdsym.

use std::{path::PathBuf, process::ExitCode};

use clap::{ArgGroup, CommandFactory, Parser, error::ErrorKind};
use tracing_subscriber::EnvFilter;
use wdsym::{CompareJob, DumpJob, Error, SymbolsJob};

/// Extract, replay and compare symbol values from WinDbg text output.
#[derive(Parser, Debug)]
#[command(name = "wdsym", version, about, long_about = None)]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["parse_dump", "parse_symbols", "compare_symbols"]),
))]
struct Cli {
    /// Convert a symbol listing into `dd <symbol> l1` commands
    #[arg(long, value_name = "INPUT")]
    parse_dump: Option<PathBuf>,

    /// Extract `<symbol> <value>` pairs from a debugger transcript
    #[arg(long, value_name = "INPUT")]
    parse_symbols: Option<PathBuf>,

    /// Compare two symbol snapshots
    #[arg(long, num_args = 2, value_names = ["INPUT_1", "INPUT_2"])]
    compare_symbols: Option<Vec<PathBuf>>,

    /// Write the result here instead of the default file
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Log debug messages to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

enum Mode {
    Dump(PathBuf),
    Symbols(PathBuf),
    Compare(PathBuf, PathBuf),
}

impl Cli {
    /// Returns the selected mode, or `None` if no complete mode was given.
    fn mode(&mut self) -> Option<Mode> {
        if let Some(input) = self.parse_dump.take() {
            return Some(Mode::Dump(input));
        }

        if let Some(input) = self.parse_symbols.take() {
            return Some(Mode::Symbols(input));
        }

        let [input_a, input_b]: [PathBuf; 2] = self.compare_symbols.take()?.try_into().ok()?;
        Some(Mode::Compare(input_a, input_b))
    }
}

fn run(mode: Mode, output: Option<PathBuf>) -> Result<String, Error> {
    match mode {
        Mode::Dump(input) => {
            let mut job = DumpJob::new(input);
            if let Some(output) = output {
                job = job.with_output(output);
            }

            job.run()?;
            Ok(format!(
                "Commands have been written to {}",
                job.output().display()
            ))
        }
        Mode::Symbols(input) => {
            let mut job = SymbolsJob::new(input);
            if let Some(output) = output {
                job = job.with_output(output);
            }

            job.run()?;
            Ok(format!(
                "Symbols have been written to {}",
                job.output().display()
            ))
        }
        Mode::Compare(input_a, input_b) => {
            let mut job = CompareJob::new(input_a, input_b);
            if let Some(output) = output {
                job = job.with_output(output);
            }

            job.run()?;
            Ok(format!(
                "Comparison result has been written to {}",
                job.output().display()
            ))
        }
    }
}

fn main() -> ExitCode {
    let mut cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors exit with 1, `--help` and `--version` with 0.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let Some(mode) = cli.mode() else {
        let _ = Cli::command()
            .error(ErrorKind::MissingRequiredArgument, "no mode selected")
            .print();
        return ExitCode::FAILURE;
    };

    init_logging(cli.verbose);

    // A file that cannot be opened aborts the job, not the program.
    match run(mode, cli.output.take()) {
        Ok(message) => println!("{message}"),
        Err(err) => {
            tracing::debug!(?err, "job failed");
            eprintln!("{err}");
        }
    }

    ExitCode::SUCCESS
}
