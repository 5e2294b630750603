// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! snapsift-core: snapshot retention filter engine
//!
//! This crate maintains a working set of snapshot identifiers fetched from
//! a repository and narrows it through an ordered chain of declarative
//! filters (age, name pattern, completion state) so a caller can act on
//! exactly the snapshots matching a retention policy. Listing the snapshots
//! is delegated to a [`SnapshotSource`] implementation; acting on the final
//! set is the caller's business.

pub mod age;
pub mod error;
pub mod filter;
pub mod inventory;
pub mod snapshot;
pub mod source;
pub mod timestring;

pub use age::{point_of_reference, AgeUnit};
pub use error::{Error, Result};
pub use filter::{AgeDirection, AgeSource, FilterSpec, PatternKind};
pub use inventory::Inventory;
pub use snapshot::{RawSnapshot, Snapshot, SnapshotState};
pub use source::{SnapshotSource, SourceError};
pub use timestring::TimestringSearch;
