//! Unit tests for the page dump CLI helpers.

use rstest::{fixture, rstest};

use super::*;
use crate::error::GenerationError;
use crate::record::{BookRecord, ReviewRecord};

#[fixture]
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).expect("valid date")
}

fn parse(args: &[&str]) -> Result<ParseOutcome, CliError> {
    parse_args(args.iter().map(|arg| (*arg).to_owned()))
}

fn parse_command(args: &[&str]) -> Command {
    match parse(args).expect("parse args") {
        ParseOutcome::Command(command) => command,
        ParseOutcome::Help => panic!("expected a command"),
    }
}

#[rstest]
#[case(&["--help"])]
#[case(&["-h"])]
#[case(&["books", "--help"])]
#[case(&["reviews", "-h"])]
fn parse_args_returns_help_for_help_flag(#[case] args: &[&str]) {
    assert_eq!(parse(args), Ok(ParseOutcome::Help));
}

#[test]
fn parse_args_requires_a_command() {
    assert_eq!(parse(&[]), Err(CliError::MissingCommand));
}

#[test]
fn parse_args_rejects_unknown_command() {
    assert_eq!(
        parse(&["authors"]),
        Err(CliError::UnknownCommand {
            value: "authors".to_owned()
        })
    );
}

#[test]
fn books_defaults_match_the_http_defaults() {
    let Command::Books(options) = parse_command(&["books"]) else {
        panic!("expected books command");
    };
    assert_eq!(options.query(), &BookPageQuery::new("en", 42, 0));
}

#[rstest]
fn books_flags_populate_the_query(today: NaiveDate) {
    let Command::Books(options) = parse_command(&[
        "books",
        "--region",
        "de",
        "--seed",
        "1234",
        "--page",
        "3",
        "--likes",
        "2.5",
        "--reviews",
        "4",
        "--date",
        "2025-01-31",
    ]) else {
        panic!("expected books command");
    };

    assert_eq!(
        options.query(),
        &BookPageQuery::new("de", 1234, 3)
            .with_expected_likes(2.5)
            .with_review_count(4)
    );
    assert_eq!(
        options.reference_date(today),
        NaiveDate::from_ymd_opt(2025, 1, 31).expect("valid date")
    );
}

#[rstest]
fn books_reference_date_falls_back_to_today(today: NaiveDate) {
    let Command::Books(options) = parse_command(&["books"]) else {
        panic!("expected books command");
    };
    assert_eq!(options.reference_date(today), today);
}

#[test]
fn books_accept_negative_seeds() {
    let Command::Books(options) = parse_command(&["books", "--seed", "-5"]) else {
        panic!("expected books command");
    };
    assert_eq!(options.query().seed, -5);
}

#[test]
fn parse_args_reports_missing_values() {
    assert_eq!(
        parse(&["books", "--seed"]),
        Err(CliError::MissingValue { flag: "--seed" })
    );
}

#[test]
fn parse_args_reports_invalid_numbers() {
    let err = parse(&["books", "--page", "-1"]).expect_err("negative page");
    assert!(matches!(
        err,
        CliError::InvalidNumber { flag: "--page", ref value, .. } if value == "-1"
    ));
}

#[test]
fn parse_args_reports_invalid_dates() {
    let err = parse(&["books", "--date", "16/10/2026"]).expect_err("bad date");
    assert!(matches!(err, CliError::InvalidDate { .. }));
}

#[test]
fn parse_args_rejects_unknown_flags() {
    assert_eq!(
        parse(&["reviews", "--isbn", "9780306406157", "--seed", "1"]),
        Err(CliError::UnknownArgument {
            value: "--seed".to_owned()
        })
    );
}

#[test]
fn reviews_require_an_isbn() {
    assert_eq!(parse(&["reviews", "--count", "2"]), Err(CliError::MissingIsbn));
}

#[test]
fn reviews_default_to_three_english_reviews() {
    let Command::Reviews(options) = parse_command(&["reviews", "--isbn", "9780306406157"]) else {
        panic!("expected reviews command");
    };
    assert_eq!(options.isbn(), "9780306406157");
    assert_eq!(options.count(), 3);
}

#[rstest]
fn render_books_emits_a_page_of_records(today: NaiveDate) {
    let command = parse_command(&["books", "--page", "1"]);
    let json = render(&command, today).expect("render");
    let books: Vec<BookRecord> = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(books.len(), 10);
    assert_eq!(books.first().map(|book| book.index), Some(10));
}

#[rstest]
fn render_reviews_emits_requested_count(today: NaiveDate) {
    let command = parse_command(&["reviews", "--isbn", "9780306406157", "--count", "4"]);
    let json = render(&command, today).expect("render");
    let reviews: Vec<ReviewRecord> = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(reviews.len(), 4);
}

#[rstest]
fn render_surfaces_generation_errors(today: NaiveDate) {
    let command = parse_command(&["books", "--region", "xx"]);
    let err = render(&command, today).expect_err("unsupported region");
    assert!(matches!(
        err,
        CliError::Generation {
            source: GenerationError::UnsupportedRegion { .. }
        }
    ));
}
