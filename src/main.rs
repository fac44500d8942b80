//! grainpress CLI entrypoint.
//!
//! `grainpress <input_path> <output_path>`: exit 0 and print
//! `SUCCESS:<output_path>` on success, exit 1 with a message on stderr otherwise.

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    let result = cli::parse_args(std::env::args_os()).and_then(|parsed| match parsed {
        Some(args) => cli::run(args),
        None => Ok(()),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(cli::AppError::Usage(msg)) => {
            eprint!("{msg}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
