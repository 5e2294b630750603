// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for snapsift-core operations.

use thiserror::Error;

use crate::source::SourceError;

/// All possible errors that can occur in snapsift-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no value for required argument: {0}")]
    MissingArgument(&'static str),

    #[error("invalid direction: '{0}'\n  hint: valid directions are: older, younger")]
    InvalidDirection(String),

    #[error("invalid age source: '{0}'\n  hint: valid sources are: creation_date, name")]
    InvalidAgeSource(String),

    #[error(
        "invalid unit: '{0}'\n  hint: valid units are: seconds, minutes, hours, days, weeks, months, years"
    )]
    InvalidUnit(String),

    #[error(
        "invalid snapshot state: '{0}'\n  hint: valid states are: SUCCESS, PARTIAL, FAILED, IN_PROGRESS"
    )]
    InvalidState(String),

    #[error("invalid pattern kind: '{0}'\n  hint: valid kinds are: regex, prefix, suffix, timestring")]
    InvalidPatternKind(String),

    #[error("invalid pattern value: cannot be empty")]
    EmptyValue,

    #[error("invalid timestring '{timestring}': {reason}")]
    InvalidTimestring { timestring: String, reason: String },

    #[error("invalid filter specification: {0}")]
    InvalidFilterSpec(String),

    #[error("snapshot list is empty")]
    EmptyList,

    #[error("failed to fetch snapshots from repository '{repository}'")]
    FetchFailed {
        repository: String,
        #[source]
        source: SourceError,
    },

    #[error("invalid regular expression: {0}")]
    Regex(#[from] regex::Error),

    #[error("point of reference out of range: {0}")]
    OutOfRange(String),
}

/// A specialized Result type for snapsift-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
