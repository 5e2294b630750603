// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    missing_argument = { Error::MissingArgument("direction"), "direction" },
    invalid_direction = { Error::InvalidDirection("sideways".into()), "older, younger" },
    invalid_unit = { Error::InvalidUnit("fortnights".into()), "fortnights" },
    invalid_state = { Error::InvalidState("DONE".into()), "IN_PROGRESS" },
    invalid_kind = { Error::InvalidPatternKind("glob".into()), "regex, prefix, suffix, timestring" },
    empty_list = { Error::EmptyList, "empty" },
    empty_value = { Error::EmptyValue, "empty" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn error_fetch_failed_names_repository() {
    let err = Error::FetchFailed {
        repository: "backups".into(),
        source: SourceError("connection refused".into()),
    };
    assert!(err.to_string().contains("backups"));
    // The transport failure rides along as the error source.
    let source = std::error::Error::source(&err).unwrap();
    assert!(source.to_string().contains("connection refused"));
}

#[test]
fn error_from_regex() {
    let regex_err = regex::Regex::new("(unclosed").unwrap_err();
    let err: Error = regex_err.into();
    assert!(matches!(err, Error::Regex(_)));
}
