//! CLI tool to select delimited fields from each input line.
//!
//! Usage:
//!   fieldcut -f 1,3-5 [-d DELIM] [-s] [FILE]...
//!
//! With no FILE, or when FILE is `-`, reads standard input.

use clap::Parser;
use fieldcut::logging::{init_logging, level_for};
use fieldcut::{Config, CutError, FilterStats, Input, Specification, filter_lines};
use std::io::{self, BufWriter, ErrorKind};
use std::path::PathBuf;
use std::process;
use tracing::{debug, warn};

/// Print selected fields from each line of the input.
#[derive(Parser)]
#[command(name = "fieldcut", version)]
struct Cli {
    /// Fields to print, e.g. `1,3-5` (empty prints whole lines)
    #[arg(
        short = 'f',
        long = "fields",
        value_name = "LIST",
        default_value = "",
        allow_hyphen_values = true
    )]
    fields: String,

    /// Field delimiter (any non-empty string)
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "DELIM",
        default_value = "\t",
        allow_hyphen_values = true
    )]
    delimiter: String,

    /// Skip lines that do not contain the delimiter
    #[arg(short = 's', long = "only-delimited")]
    only_delimited: bool,

    /// Show debug logs and record counts on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Input files (`-` for stdin)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn build_config(cli: &Cli) -> Result<Config, CutError> {
    let spec = if cli.fields.is_empty() {
        Specification::default()
    } else {
        Specification::parse(&cli.fields)?
    };
    debug!(fields = %spec, delimiter = ?cli.delimiter, "parsed field list");
    Ok(Config::new(cli.delimiter.as_str(), cli.only_delimited, spec)?)
}

fn main() {
    let cli = Cli::parse();
    init_logging(level_for(cli.verbose));

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("fieldcut: {e}");
            process::exit(1);
        }
    };

    let inputs: Vec<Input> = if cli.files.is_empty() {
        vec![Input::Stdin]
    } else {
        cli.files.iter().map(|p| Input::from_arg(p)).collect()
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut stats = FilterStats::default();
    let mut open_failed = false;

    for input in &inputs {
        let reader = match input.open() {
            Ok(reader) => reader,
            Err(e) => {
                warn!(error = %e, "skipping input");
                eprintln!("fieldcut: {e}");
                open_failed = true;
                continue;
            }
        };

        match filter_lines(reader, &mut out, &config) {
            Ok(s) => stats.merge(s),
            Err(CutError::Write(e)) if e.kind() == ErrorKind::BrokenPipe => process::exit(1),
            Err(e) => {
                eprintln!("fieldcut: {e}");
                process::exit(1);
            }
        }
    }

    debug!(
        read = stats.records_read,
        written = stats.records_written,
        suppressed = stats.records_suppressed,
        "done"
    );
    if cli.verbose {
        eprintln!(
            "Records:  {} in -> {} out",
            stats.records_read, stats.records_written
        );
    }

    if open_failed {
        process::exit(1);
    }
}
