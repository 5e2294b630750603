// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Extraction of timestamps embedded in snapshot identifiers.
//!
//! A timestring is an strftime-style template (e.g. `%Y.%m.%d`) describing
//! the shape of the datestamp embedded in snapshot names. It compiles to a
//! regular expression with one capture group per date component; captured
//! digits are assembled into a UTC epoch.
//!
//! Recognized tokens: `%Y` `%y` `%m` `%d` `%j` `%H` `%M` `%S` (`%%` for a
//! literal percent sign).

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::error::{Error, Result};

/// Translate a timestring template into a regex fragment.
///
/// Every recognized token becomes a fixed-width numeric capture group and
/// every literal character is escaped. A template must carry exactly one
/// year component; a duplicated component or an unrecognized token is an
/// error.
pub fn date_regex(timestring: &str) -> Result<String> {
    let invalid = |reason: String| Error::InvalidTimestring {
        timestring: timestring.to_string(),
        reason,
    };

    let mut fragment = String::new();
    let mut seen: Vec<&'static str> = Vec::new();
    let mut chars = timestring.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            fragment.push_str(&regex::escape(&c.to_string()));
            continue;
        }
        let Some(token) = chars.next() else {
            return Err(invalid("trailing '%'".to_string()));
        };
        let (group, width) = match token {
            'Y' => ("year4", 4),
            'y' => ("year2", 2),
            'm' => ("month", 2),
            'd' => ("day", 2),
            'j' => ("yearday", 3),
            'H' => ("hour", 2),
            'M' => ("minute", 2),
            'S' => ("second", 2),
            '%' => {
                fragment.push('%');
                continue;
            }
            other => return Err(invalid(format!("unrecognized token '%{other}'"))),
        };
        if seen.contains(&group) {
            return Err(invalid(format!("duplicate token '%{token}'")));
        }
        seen.push(group);
        fragment.push_str(&format!("(?P<{group}>\\d{{{width}}})"));
    }
    if seen.contains(&"year4") && seen.contains(&"year2") {
        return Err(invalid("both '%Y' and '%y' present".to_string()));
    }
    if !seen.contains(&"year4") && !seen.contains(&"year2") {
        return Err(invalid("no year component".to_string()));
    }
    Ok(fragment)
}

/// A compiled timestring matcher that can pull an embedded timestamp out of
/// an arbitrary identifier string.
#[derive(Debug, Clone)]
pub struct TimestringSearch {
    pattern: Regex,
}

impl TimestringSearch {
    /// Compile `timestring` into a matcher.
    pub fn new(timestring: &str) -> Result<Self> {
        let pattern = Regex::new(&date_regex(timestring)?)?;
        Ok(TimestringSearch { pattern })
    }

    /// Scan `identifier` for a substring matching the template shape and
    /// return the corresponding UTC epoch seconds.
    ///
    /// The timestamp may be embedded anywhere in the identifier; the
    /// leftmost match wins. Components the template does not carry default
    /// to the earliest value (January, the 1st, midnight). `None` means no
    /// embedded timestamp was found, or the captured digits do not form a
    /// real calendar date; absence is an expected outcome, not an error.
    pub fn extract(&self, identifier: &str) -> Option<i64> {
        let caps = self.pattern.captures(identifier)?;
        let group = |name: &str| {
            caps.name(name)
                .and_then(|m| m.as_str().parse::<u32>().ok())
        };

        let year = match group("year4") {
            Some(y) => y as i32,
            // strptime century rule: 00-68 map to 20xx, 69-99 to 19xx.
            None => match group("year2")? {
                y if y <= 68 => 2000 + y as i32,
                y => 1900 + y as i32,
            },
        };
        let date = match group("yearday") {
            Some(ordinal) => NaiveDate::from_yo_opt(year, ordinal)?,
            None => NaiveDate::from_ymd_opt(
                year,
                group("month").unwrap_or(1),
                group("day").unwrap_or(1),
            )?,
        };
        let time = NaiveTime::from_hms_opt(
            group("hour").unwrap_or(0),
            group("minute").unwrap_or(0),
            group("second").unwrap_or(0),
        )?;
        Some(date.and_time(time).and_utc().timestamp())
    }
}

#[cfg(test)]
#[path = "timestring_tests.rs"]
mod tests;
