// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    upper = { "SUCCESS", SnapshotState::Success },
    lower = { "success", SnapshotState::Success },
    mixed = { "Partial", SnapshotState::Partial },
    failed = { "failed", SnapshotState::Failed },
    in_progress = { "in_progress", SnapshotState::InProgress },
    in_progress_upper = { "IN_PROGRESS", SnapshotState::InProgress },
)]
fn state_parse_is_case_insensitive(input: &str, expected: SnapshotState) {
    assert_eq!(input.parse::<SnapshotState>().unwrap(), expected);
}

#[parameterized(
    unknown = { "DONE" },
    empty = { "" },
    spaced = { "IN PROGRESS" },
)]
fn state_parse_rejects_unknown(input: &str) {
    assert!(matches!(
        input.parse::<SnapshotState>(),
        Err(Error::InvalidState(_))
    ));
}

#[test]
fn state_display_uses_wire_spelling() {
    assert_eq!(SnapshotState::InProgress.to_string(), "IN_PROGRESS");
    assert_eq!(SnapshotState::Success.as_str(), "SUCCESS");
}

#[test]
fn state_serde_roundtrip() {
    let json = serde_json::to_string(&SnapshotState::InProgress).unwrap();
    assert_eq!(json, "\"IN_PROGRESS\"");
    let back: SnapshotState = serde_json::from_str("\"in_progress\"").unwrap();
    assert_eq!(back, SnapshotState::InProgress);
}

#[test]
fn raw_snapshot_deserializes_full_record() {
    let raw: RawSnapshot = serde_json::from_value(serde_json::json!({
        "snapshot": "nightly-2026.01.05",
        "state": "SUCCESS",
        "start_time_in_millis": 1_767_571_200_000_i64,
    }))
    .unwrap();
    assert_eq!(raw.snapshot.as_deref(), Some("nightly-2026.01.05"));
    assert_eq!(raw.state, SnapshotState::Success);
    assert_eq!(raw.start_time_in_millis, Some(1_767_571_200_000));
}

#[test]
fn raw_snapshot_tolerates_missing_fields() {
    let raw: RawSnapshot =
        serde_json::from_value(serde_json::json!({ "state": "FAILED" })).unwrap();
    assert!(raw.snapshot.is_none());
    assert!(raw.start_time_in_millis.is_none());
}

#[test]
fn start_time_seconds_converts_millis() {
    let snap = Snapshot {
        state: SnapshotState::Success,
        start_time_in_millis: Some(1_767_571_200_123),
        age_by_name: None,
    };
    assert_eq!(snap.start_time_seconds(), Some(1_767_571_200));

    let bare = Snapshot { state: SnapshotState::Failed, start_time_in_millis: None, age_by_name: None };
    assert_eq!(bare.start_time_seconds(), None);
}
