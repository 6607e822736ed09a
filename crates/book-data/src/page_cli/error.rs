//! Error types for the page dump CLI.

use thiserror::Error;

use crate::error::GenerationError;

/// Errors surfaced by the CLI parsing and rendering flow.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CliError {
    /// No subcommand was supplied.
    #[error("missing command: expected 'books' or 'reviews'")]
    MissingCommand,
    /// The first argument was not a known subcommand.
    #[error("unknown command: {value}")]
    UnknownCommand {
        /// Command that was not recognised.
        value: String,
    },
    /// The `reviews` command was run without an ISBN.
    #[error("missing required flag: --isbn")]
    MissingIsbn,
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// A numeric value failed to parse.
    #[error("invalid number for {flag}: '{value}' ({message})")]
    InvalidNumber {
        /// Flag associated with the invalid number.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// The reference date was not a `YYYY-MM-DD` date.
    #[error("invalid date for --date: '{value}' ({message})")]
    InvalidDate {
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// Generation rejected the supplied parameters.
    #[error("generation failed: {source}")]
    Generation {
        /// Underlying generation error.
        #[from]
        #[source]
        source: GenerationError,
    },
    /// Records could not be rendered as JSON.
    #[error("failed to render JSON: {message}")]
    Render {
        /// Serialiser error message.
        message: String,
    },
}
