//! Query parameter parsing for the catalogue endpoints.
//!
//! Parameters arrive as raw strings so that malformed values produce the JSON
//! error envelope with the offending field, rather than Actix's plain-text
//! deserialisation failure.

use std::str::FromStr;

use serde_json::json;

use crate::domain::Error;

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidNumber,
    OutOfRange,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidNumber => "invalid_number",
            Self::OutOfRange => "out_of_range",
        }
    }
}

/// Name of a query parameter as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: ErrorCode, value: &str, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

/// Parse an optional numeric parameter, falling back to `default` when absent.
pub(crate) fn parse_or_default<T>(
    field: FieldName,
    raw: Option<&str>,
    default: T,
) -> Result<T, Error>
where
    T: FromStr,
{
    let Some(raw) = raw else {
        return Ok(default);
    };
    raw.trim().parse::<T>().map_err(|_| {
        field_error(
            field,
            ErrorCode::InvalidNumber,
            raw,
            format!("{} must be a number, got '{raw}'", field.as_str()),
        )
    })
}

/// Report a parsed value that lies outside its accepted range.
pub(crate) fn out_of_range(field: FieldName, raw: &str, message: impl Into<String>) -> Error {
    field_error(field, ErrorCode::OutOfRange, raw, message.into())
}

/// Normalise a region code, falling back to `default` when absent.
///
/// Surrounding whitespace is trimmed; case is kept so the generator's gate
/// matches codes exactly.
pub(crate) fn normalise_region(raw: Option<&str>, default: &str) -> String {
    raw.map_or_else(|| default.to_owned(), |code| code.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainErrorCode;
    use rstest::rstest;

    const SEED: FieldName = FieldName::new("seed");

    #[rstest]
    #[case(None, 42)]
    #[case(Some("7"), 7)]
    #[case(Some(" 9 "), 9)]
    #[case(Some("-5"), -5)]
    fn parse_or_default_accepts_missing_and_numeric_values(
        #[case] raw: Option<&str>,
        #[case] expected: i64,
    ) {
        assert_eq!(parse_or_default(SEED, raw, 42_i64), Ok(expected));
    }

    #[rstest]
    #[case("1.5")]
    #[case("abc")]
    #[case("")]
    fn parse_or_default_reports_the_field(#[case] raw: &str) {
        let err = parse_or_default(SEED, Some(raw), 42_i64).expect_err("invalid number");
        assert_eq!(err.code(), DomainErrorCode::InvalidRequest);
        let details = err.details().expect("details");
        assert_eq!(details.get("field"), Some(&json!("seed")));
        assert_eq!(details.get("code"), Some(&json!("invalid_number")));
        assert_eq!(details.get("value"), Some(&json!(raw)));
    }

    #[test]
    fn out_of_range_reports_the_field() {
        let err = out_of_range(FieldName::new("likes"), "1e9", "too many likes");
        assert_eq!(err.message(), "too many likes");
        assert_eq!(
            err.details().and_then(|details| details.get("code")),
            Some(&json!("out_of_range"))
        );
    }

    #[rstest]
    #[case(None, "en")]
    #[case(Some("fr"), "fr")]
    #[case(Some(" de "), "de")]
    #[case(Some("EN"), "EN")]
    #[case(Some("xx"), "xx")]
    fn normalise_region_trims_but_keeps_case(#[case] raw: Option<&str>, #[case] expected: &str) {
        assert_eq!(normalise_region(raw, "en"), expected);
    }
}
