//! Print the OpenAPI document as JSON.

use std::io::{self, Write};
use std::process::ExitCode;

use backend::doc::ApiDoc;
use utoipa::OpenApi;

fn main() -> ExitCode {
    let json = match ApiDoc::openapi().to_pretty_json() {
        Ok(json) => json,
        Err(err) => {
            drop(writeln!(io::stderr().lock(), "failed to render OpenAPI document: {err}"));
            return ExitCode::FAILURE;
        }
    };
    match writeln!(io::stdout().lock(), "{json}") {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
