//! Page dump CLI for inspecting generated books and reviews.
//!
//! This binary delegates to `book_data::page_cli` for parsing and rendering,
//! keeping the CLI behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use book_data::page_cli::{CliError, ParseOutcome, USAGE, parse_args, render};
use chrono::Utc;

fn main() -> ExitCode {
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

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            write_output(USAGE);
            Ok(())
        }
        ParseOutcome::Command(command) => {
            let json = render(&command, Utc::now().date_naive())?;
            write_output(&json);
            Ok(())
        }
    }
}

fn write_output(text: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{text}") {
        drop(err);
    }
}
