use std::{io, process::ExitCode};

use clap::Parser;
use insertion_rs::cli::{run, Args};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let (stdout, stderr) = (io::stdout(), io::stderr());
    match run(&args, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("insertion: {e}");
            ExitCode::FAILURE
        }
    }
}
