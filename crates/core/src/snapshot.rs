// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core snapshot types: the raw record shape returned by a repository
//! listing and the metadata tracked per snapshot.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Completion state of a snapshot as reported by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SnapshotState {
    /// Every shard was stored.
    Success,
    /// Stored, but one or more shards failed.
    Partial,
    /// The snapshot did not complete.
    Failed,
    /// Still running.
    InProgress,
}

impl SnapshotState {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotState::Success => "SUCCESS",
            SnapshotState::Partial => "PARTIAL",
            SnapshotState::Failed => "FAILED",
            SnapshotState::InProgress => "IN_PROGRESS",
        }
    }
}

impl fmt::Display for SnapshotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SnapshotState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "SUCCESS" => Ok(SnapshotState::Success),
            "PARTIAL" => Ok(SnapshotState::Partial),
            "FAILED" => Ok(SnapshotState::Failed),
            "IN_PROGRESS" => Ok(SnapshotState::InProgress),
            _ => Err(Error::InvalidState(s.to_string())),
        }
    }
}

// Intake is case-insensitive, so deserialization goes through `FromStr`
// rather than a derive.
impl<'de> Deserialize<'de> for SnapshotState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A raw snapshot record as returned by a
/// [`SnapshotSource`](crate::SnapshotSource) listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSnapshot {
    /// Snapshot identifier. Records without one are skipped at intake.
    #[serde(default)]
    pub snapshot: Option<String>,
    /// Completion state.
    pub state: SnapshotState,
    /// Start time in milliseconds since the Unix epoch, when reported.
    #[serde(default)]
    pub start_time_in_millis: Option<i64>,
}

/// Metadata tracked for one snapshot over the life of an
/// [`Inventory`](crate::Inventory).
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Completion state.
    pub state: SnapshotState,
    /// Start time in milliseconds since the Unix epoch, when reported.
    pub start_time_in_millis: Option<i64>,
    /// Age derived from a timestamp embedded in the identifier, in epoch
    /// seconds. Populated when a name-based age filter runs.
    pub age_by_name: Option<i64>,
}

impl Snapshot {
    /// Start time in epoch seconds.
    pub fn start_time_seconds(&self) -> Option<i64> {
        self.start_time_in_millis.map(|ms| ms / 1000)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
