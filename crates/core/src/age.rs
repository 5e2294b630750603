// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Relative-age arithmetic: converting a relative policy ("older than 5
//! days") into an absolute epoch boundary, the point of reference.

use chrono::{DateTime, Duration, Months, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Units accepted by relative age specifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    /// Calendar months, honoring variable month lengths.
    Months,
    /// Calendar years, honoring leap years.
    Years,
}

impl AgeUnit {
    /// Returns the string representation used in filter specifications.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeUnit::Seconds => "seconds",
            AgeUnit::Minutes => "minutes",
            AgeUnit::Hours => "hours",
            AgeUnit::Days => "days",
            AgeUnit::Weeks => "weeks",
            AgeUnit::Months => "months",
            AgeUnit::Years => "years",
        }
    }
}

impl fmt::Display for AgeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AgeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "seconds" => Ok(AgeUnit::Seconds),
            "minutes" => Ok(AgeUnit::Minutes),
            "hours" => Ok(AgeUnit::Hours),
            "days" => Ok(AgeUnit::Days),
            "weeks" => Ok(AgeUnit::Weeks),
            "months" => Ok(AgeUnit::Months),
            "years" => Ok(AgeUnit::Years),
            _ => Err(Error::InvalidUnit(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for AgeUnit {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Compute the point of reference: the absolute epoch value lying
/// `unit_count` `unit`s before the reference instant.
///
/// The reference instant is `epoch` when supplied (deterministic tests,
/// as-of comparisons), otherwise the current wall-clock time. Seconds
/// through weeks are fixed durations; months and years are resolved by
/// calendar subtraction, so "1 month before March 31st" lands on the last
/// day of February and leap days clamp rather than drift.
pub fn point_of_reference(unit: AgeUnit, unit_count: u32, epoch: Option<i64>) -> Result<i64> {
    let reference = match epoch {
        Some(e) => DateTime::<Utc>::from_timestamp(e, 0)
            .ok_or_else(|| Error::OutOfRange(format!("epoch {e} is not a representable instant")))?,
        None => Utc::now(),
    };
    let count = i64::from(unit_count);
    let por = match unit {
        AgeUnit::Seconds => reference.checked_sub_signed(Duration::seconds(count)),
        AgeUnit::Minutes => reference.checked_sub_signed(Duration::minutes(count)),
        AgeUnit::Hours => reference.checked_sub_signed(Duration::hours(count)),
        AgeUnit::Days => reference.checked_sub_signed(Duration::days(count)),
        AgeUnit::Weeks => reference.checked_sub_signed(Duration::weeks(count)),
        AgeUnit::Months => reference.checked_sub_months(Months::new(unit_count)),
        AgeUnit::Years => unit_count
            .checked_mul(12)
            .and_then(|months| reference.checked_sub_months(Months::new(months))),
    };
    por.map(|dt| dt.timestamp())
        .ok_or_else(|| Error::OutOfRange(format!("{unit_count} {unit} before the reference instant")))
}

#[cfg(test)]
#[path = "age_tests.rs"]
mod tests;
