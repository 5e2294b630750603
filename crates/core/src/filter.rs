// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter specifications.
//!
//! A retention policy supplies an ordered list of filter specs, each a
//! mapping with a `filtertype` tag plus type-specific parameters. The
//! closed set of filter kinds is a tagged enum, so an unknown tag or a
//! mis-shaped parameter is rejected when the spec is parsed, before any
//! predicate runs.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::age::AgeUnit;
use crate::error::{Error, Result};
use crate::snapshot::SnapshotState;

/// Where an age filter reads each snapshot's age from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeSource {
    /// The repository-reported creation time.
    #[default]
    CreationDate,
    /// A timestamp embedded in the snapshot name.
    Name,
}

impl AgeSource {
    /// Returns the string representation used in filter specifications.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeSource::CreationDate => "creation_date",
            AgeSource::Name => "name",
        }
    }
}

impl fmt::Display for AgeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AgeSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "creation_date" => Ok(AgeSource::CreationDate),
            "name" => Ok(AgeSource::Name),
            _ => Err(Error::InvalidAgeSource(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for AgeSource {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Which side of the point of reference an age filter matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeDirection {
    /// Snapshots whose age is before the point of reference.
    Older,
    /// Snapshots whose age is after the point of reference.
    Younger,
}

impl AgeDirection {
    /// Returns the string representation used in filter specifications.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeDirection::Older => "older",
            AgeDirection::Younger => "younger",
        }
    }
}

impl fmt::Display for AgeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AgeDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "older" => Ok(AgeDirection::Older),
            "younger" => Ok(AgeDirection::Younger),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for AgeDirection {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// What kind of expression a pattern filter builds from its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// The value is a regular expression, used as-is.
    Regex,
    /// The value anchors at the start of the identifier.
    Prefix,
    /// The value anchors at the end of the identifier.
    Suffix,
    /// The value is a timestring template; identifiers carrying a matching
    /// datestamp anywhere match.
    Timestring,
}

impl PatternKind {
    /// Returns the string representation used in filter specifications.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Regex => "regex",
            PatternKind::Prefix => "prefix",
            PatternKind::Suffix => "suffix",
            PatternKind::Timestring => "timestring",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PatternKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "regex" => Ok(PatternKind::Regex),
            "prefix" => Ok(PatternKind::Prefix),
            "suffix" => Ok(PatternKind::Suffix),
            "timestring" => Ok(PatternKind::Timestring),
            _ => Err(Error::InvalidPatternKind(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for PatternKind {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A single filter specification, tagged by `filtertype`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "filtertype", rename_all = "lowercase")]
pub enum FilterSpec {
    /// Narrow the working set by relative age.
    Age {
        #[serde(default)]
        source: AgeSource,
        /// Mandatory; there is no default direction.
        #[serde(default)]
        direction: Option<AgeDirection>,
        /// Required when `source` is [`AgeSource::Name`].
        #[serde(default)]
        timestring: Option<String>,
        unit: AgeUnit,
        unit_count: u32,
        /// Reference instant override; the current time when absent.
        #[serde(default)]
        epoch: Option<i64>,
        #[serde(default)]
        exclude: bool,
    },
    /// Keep everything; a structurally valid but inert entry.
    None,
    /// Narrow the working set by identifier pattern.
    Pattern {
        kind: PatternKind,
        #[serde(default, deserialize_with = "opt_string_or_int")]
        value: Option<String>,
        #[serde(default)]
        exclude: bool,
    },
    /// Narrow the working set by completion state.
    State {
        #[serde(default)]
        state: Option<SnapshotState>,
        #[serde(default)]
        exclude: bool,
    },
}

impl FilterSpec {
    /// Validate one raw filter mapping against the schema for its declared
    /// filter type.
    pub fn from_value(raw: &serde_json::Value) -> Result<Self> {
        serde_json::from_value(raw.clone()).map_err(|e| Error::InvalidFilterSpec(e.to_string()))
    }
}

/// Accept a string or an integer for the pattern `value`. A numeric zero is
/// falsy in some policy languages but is still a valid value here; it
/// arrives as the string `"0"`.
fn opt_string_or_int<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        Text(String),
        Number(i64),
    }

    Ok(match Option::<StringOrInt>::deserialize(deserializer)? {
        Some(StringOrInt::Text(s)) => Some(s),
        Some(StringOrInt::Number(n)) => Some(n.to_string()),
        None => None,
    })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
