// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn epoch(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> i64 {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
        .and_utc()
        .timestamp()
}

#[test]
fn date_regex_translates_tokens() {
    assert_eq!(
        date_regex("%Y.%m.%d").unwrap(),
        r"(?P<year4>\d{4})\.(?P<month>\d{2})\.(?P<day>\d{2})"
    );
}

#[test]
fn date_regex_escapes_literals() {
    let fragment = date_regex("snap+%Y").unwrap();
    assert!(fragment.starts_with(r"snap\+"));
}

#[parameterized(
    no_year = { "%m.%d" },
    duplicate = { "%Y-%Y" },
    both_years = { "%Y-%y" },
    trailing_percent = { "%Y%" },
    unknown_token = { "%Y-%q" },
)]
fn date_regex_rejects_bad_templates(template: &str) {
    assert!(matches!(
        date_regex(template),
        Err(Error::InvalidTimestring { .. })
    ));
}

#[test]
fn extract_finds_embedded_timestamp() {
    let search = TimestringSearch::new("%Y.%m.%d").unwrap();
    assert_eq!(
        search.extract("weekly-2026.01.05-full"),
        Some(epoch(2026, 1, 5, 0, 0, 0))
    );
}

#[test]
fn extract_returns_none_without_match() {
    let search = TimestringSearch::new("%Y.%m.%d").unwrap();
    assert_eq!(search.extract("no-datestamp-here"), None);
    // Digits of the wrong width do not count.
    assert_eq!(search.extract("snap-26.1.5"), None);
}

#[test]
fn extract_returns_none_for_impossible_dates() {
    let search = TimestringSearch::new("%Y.%m.%d").unwrap();
    assert_eq!(search.extract("snap-2026.13.40"), None);
    assert_eq!(search.extract("snap-2026.02.30"), None);
}

#[test]
fn extract_assembles_time_of_day() {
    let search = TimestringSearch::new("%Y%m%d%H%M%S").unwrap();
    assert_eq!(
        search.extract("snap-20260105133742"),
        Some(epoch(2026, 1, 5, 13, 37, 42))
    );
}

#[parameterized(
    low_maps_to_2000s = { "snap-240105", 2024 },
    cutoff_maps_to_2000s = { "snap-680105", 2068 },
    high_maps_to_1900s = { "snap-690105", 1969 },
    top_maps_to_1900s = { "snap-990105", 1999 },
)]
fn extract_two_digit_year_century_rule(identifier: &str, year: i32) {
    let search = TimestringSearch::new("%y%m%d").unwrap();
    assert_eq!(search.extract(identifier), Some(epoch(year, 1, 5, 0, 0, 0)));
}

#[test]
fn extract_day_of_year() {
    let search = TimestringSearch::new("%Y-%j").unwrap();
    // Day 100 of a leap year is April 9th.
    assert_eq!(search.extract("snap-2024-100"), Some(epoch(2024, 4, 9, 0, 0, 0)));
    assert_eq!(search.extract("snap-2024-366"), Some(epoch(2024, 12, 31, 0, 0, 0)));
    // A non-leap year has no day 366.
    assert_eq!(search.extract("snap-2025-366"), None);
}

#[test]
fn extract_leftmost_match_wins() {
    let search = TimestringSearch::new("%Y.%m.%d").unwrap();
    assert_eq!(
        search.extract("2026.01.05-copied-2026.02.06"),
        Some(epoch(2026, 1, 5, 0, 0, 0))
    );
}
