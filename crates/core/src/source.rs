// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport seam for listing the snapshots held in a repository.
//!
//! Provides a trait-based listing layer that enables:
//! - Real repository clients for production
//! - Mock sources for unit testing

use thiserror::Error;

use crate::snapshot::RawSnapshot;

/// Error returned by a [`SnapshotSource`] implementation.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct SourceError(pub String);

/// Trait for fetching the snapshot listing of a named repository.
///
/// This trait abstracts over the actual transport mechanism, allowing
/// for easy testing with mock implementations. Verifying that the
/// repository exists, along with any retry or backoff behavior, is the
/// implementor's concern; the engine treats any error as a fetch failure.
pub trait SnapshotSource {
    /// List every snapshot currently held in `repository`.
    ///
    /// The call is made exactly once per [`Inventory`](crate::Inventory),
    /// at construction time.
    fn list_snapshots(&self, repository: &str) -> std::result::Result<Vec<RawSnapshot>, SourceError>;
}

impl<S: SnapshotSource> SnapshotSource for &S {
    fn list_snapshots(&self, repository: &str) -> std::result::Result<Vec<RawSnapshot>, SourceError> {
        (*self).list_snapshots(repository)
    }
}
