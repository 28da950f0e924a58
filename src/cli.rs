//! Command-line driver: load each dataset, sort it, print it.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{ArgAction, Parser};
use tracing::{info, warn};

use crate::{dataset::load_dataset, InsertionSorter, Natural, Reversed, Sorter};

#[derive(Debug, Parser)]
#[command(
    name = "insertion",
    about = "Sort whitespace-separated integer files with insertion sort",
    version
)]
pub struct Args {
    /// Files to sort, each one independently
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Sort in descending order
    #[arg(short, long)]
    pub reverse: bool,

    /// Print each dataset on a single space-separated line
    #[arg(short = 'l', long)]
    pub one_line: bool,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Default `tracing` filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Sorts and prints every file in `args`.
///
/// A file that fails to load is reported on `err` and skipped. Returns the number of
/// files that failed; only errors writing to `out` or `err` abort the run.
pub fn run<O: Write, E: Write>(args: &Args, out: &mut O, err: &mut E) -> io::Result<usize> {
    let mut failures = 0;
    for path in &args.files {
        let mut numbers = match load_dataset(path) {
            Ok(numbers) => numbers,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping dataset");
                writeln!(err, "error reading file {}: {e}", path.display())?;
                failures += 1;
                continue;
            }
        };
        if args.reverse {
            InsertionSorter.sort_by(&mut numbers, Reversed(Natural));
        } else {
            InsertionSorter.sort_by(&mut numbers, Natural);
        }
        info!(path = %path.display(), len = numbers.len(), "sorted dataset");
        print_numbers(&numbers, args.one_line, out)?;
    }
    out.flush()?;
    Ok(failures)
}

fn print_numbers<O: Write>(numbers: &[i32], one_line: bool, out: &mut O) -> io::Result<()> {
    if one_line {
        let line: Vec<String> = numbers.iter().map(i32::to_string).collect();
        writeln!(out, "{}", line.join(" "))
    } else {
        numbers.iter().try_for_each(|n| writeln!(out, "{n}"))
    }
}
