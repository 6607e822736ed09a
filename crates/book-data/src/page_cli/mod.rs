//! CLI support for dumping generated pages and reviews as JSON.
//!
//! This module provides parsing and rendering helpers for the
//! `book-data-page` binary. The binary delegates to these functions so they
//! can be exercised in tests without spawning a subprocess.

mod error;

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::generator::{generate_books, generate_reviews};
use crate::record::BookPageQuery;

pub use error::CliError;

const DEFAULT_REGION: &str = "en";
const DEFAULT_SEED: i64 = 42;
const DEFAULT_REVIEW_COUNT: u32 = 3;

/// Options for the `books` command.
#[derive(Debug, Clone, PartialEq)]
pub struct BookOptions {
    query: BookPageQuery,
    date: Option<NaiveDate>,
}

impl BookOptions {
    /// Returns the page query assembled from the flags.
    #[must_use]
    pub const fn query(&self) -> &BookPageQuery {
        &self.query
    }

    /// Returns the reference date, falling back to `today` when `--date` was
    /// not supplied.
    #[must_use]
    pub fn reference_date(&self, today: NaiveDate) -> NaiveDate {
        self.date.unwrap_or(today)
    }
}

/// Options for the `reviews` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewOptions {
    isbn: String,
    region: String,
    count: u32,
}

impl ReviewOptions {
    /// Returns the ISBN whose reviews are generated.
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Returns the requested review count.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }
}

/// A parsed CLI command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Generate one page of books.
    Books(BookOptions),
    /// Generate the reviews of one book.
    Reviews(ReviewOptions),
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Run the parsed command.
    Command(Command),
}

/// Parses CLI arguments into a command.
///
/// # Errors
///
/// Returns [`CliError`] when the command is missing or unknown, a flag is
/// unknown, or a value cannot be parsed.
///
/// # Example
///
/// ```
/// use book_data::page_cli::{Command, ParseOutcome, parse_args};
///
/// let args = ["books", "--region", "fr", "--seed", "7", "--page", "2"];
/// let outcome = parse_args(args.into_iter().map(str::to_owned)).expect("parse args");
///
/// let ParseOutcome::Command(Command::Books(options)) = outcome else {
///     panic!("expected books command");
/// };
/// assert_eq!(options.query().page, 2);
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let Some(command) = args.next() else {
        return Err(CliError::MissingCommand);
    };
    match command.as_str() {
        "-h" | "--help" => Ok(ParseOutcome::Help),
        "books" => parse_book_args(args),
        "reviews" => parse_review_args(args),
        _ => Err(CliError::UnknownCommand { value: command }),
    }
}

fn parse_book_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut query = BookPageQuery::new(DEFAULT_REGION, DEFAULT_SEED, 0);
    let mut date: Option<NaiveDate> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--region" => query.region = next_value(&mut args, "--region")?,
            "--seed" => {
                let value = next_value(&mut args, "--seed")?;
                query.seed = parse_number(&value, "--seed")?;
            }
            "--page" => {
                let value = next_value(&mut args, "--page")?;
                query.page = parse_number(&value, "--page")?;
            }
            "--likes" => {
                let value = next_value(&mut args, "--likes")?;
                query.expected_likes = parse_number(&value, "--likes")?;
            }
            "--reviews" => {
                let value = next_value(&mut args, "--reviews")?;
                query.review_count = parse_number(&value, "--reviews")?;
            }
            "--date" => {
                let value = next_value(&mut args, "--date")?;
                date = Some(parse_date(&value)?);
            }
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    Ok(ParseOutcome::Command(Command::Books(BookOptions {
        query,
        date,
    })))
}

fn parse_review_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut isbn: Option<String> = None;
    let mut region = DEFAULT_REGION.to_owned();
    let mut count = DEFAULT_REVIEW_COUNT;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--isbn" => isbn = Some(next_value(&mut args, "--isbn")?),
            "--region" => region = next_value(&mut args, "--region")?,
            "--count" => {
                let value = next_value(&mut args, "--count")?;
                count = parse_number(&value, "--count")?;
            }
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    let resolved_isbn = isbn.ok_or(CliError::MissingIsbn)?;
    Ok(ParseOutcome::Command(Command::Reviews(ReviewOptions {
        isbn: resolved_isbn,
        region,
        count,
    })))
}

/// Runs a command and renders its records as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`CliError`] when generation rejects the parameters or the records
/// cannot be serialised.
///
/// # Example
///
/// ```
/// use book_data::page_cli::{ParseOutcome, parse_args, render};
/// use chrono::NaiveDate;
///
/// let args = ["reviews", "--isbn", "9780306406157", "--count", "2"];
/// let ParseOutcome::Command(command) =
///     parse_args(args.into_iter().map(str::to_owned)).expect("parse")
/// else {
///     panic!("expected command");
/// };
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date");
/// let json = render(&command, today).expect("render");
/// assert!(json.contains("\"user\""));
/// ```
pub fn render(command: &Command, today: NaiveDate) -> Result<String, CliError> {
    match command {
        Command::Books(options) => {
            let books = generate_books(options.query(), options.reference_date(today))?;
            to_pretty_json(&books)
        }
        Command::Reviews(options) => {
            let reviews = generate_reviews(&options.isbn, &options.region, options.count)?;
            to_pretty_json(&reviews)
        }
    }
}

/// Usage text printed for `--help`.
pub const USAGE: &str = concat!(
    "Usage:\n",
    "  book-data-page books [options]\n",
    "  book-data-page reviews --isbn <isbn> [options]\n",
    "\n",
    "Books options:\n",
    "  --region <code>      Region code: en, fr, de, es (defaults to en)\n",
    "  --seed <seed>        Base seed (defaults to 42)\n",
    "  --page <n>           Zero-based page number (defaults to 0)\n",
    "  --likes <avg>        Expected likes per book (defaults to 0)\n",
    "  --reviews <n>        Review count per book (defaults to 0)\n",
    "  --date <YYYY-MM-DD>  Reference date for publication dates (defaults to today)\n",
    "\n",
    "Reviews options:\n",
    "  --isbn <isbn>        ISBN whose reviews are generated\n",
    "  --region <code>      Region code (defaults to en)\n",
    "  --count <n>          Number of reviews (defaults to 3)\n",
    "\n",
    "  -h, --help           Print this help output\n",
);

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(|err| CliError::Render {
        message: err.to_string(),
    })
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}

fn parse_date(value: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|err| CliError::InvalidDate {
        value: value.to_owned(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests;
