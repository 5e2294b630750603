// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The snapshot inventory: the per-repository metadata map, the shrinking
//! working set of actionable identifiers, and the filter chain that narrows
//! it.

use std::collections::HashMap;

use regex::Regex;
use tracing::{debug, debug_span, Span};

use crate::age::{point_of_reference, AgeUnit};
use crate::error::{Error, Result};
use crate::filter::{AgeDirection, AgeSource, FilterSpec, PatternKind};
use crate::snapshot::{RawSnapshot, Snapshot, SnapshotState};
use crate::source::SnapshotSource;
use crate::timestring::{date_regex, TimestringSearch};

/// Include/exclude policy shared by every predicate filter: a snapshot is
/// kept iff the predicate result XOR `exclude` is true.
fn keep(condition: bool, exclude: bool) -> bool {
    condition != exclude
}

/// The snapshots of one repository and the working set of identifiers still
/// considered actionable.
///
/// Constructed once per repository inspection; the listing is fetched
/// exactly once, at construction. Filters shrink the working set in place
/// over the instance's lifetime. Metadata entries are never removed, only
/// identifiers leave the working set, so removed snapshots can still be
/// looked up with [`Inventory::get`].
///
/// Not designed for concurrent mutation; a single caller drives the filter
/// chain synchronously.
#[derive(Debug)]
pub struct Inventory {
    repository: String,
    /// identifier → metadata, for every snapshot ever fetched.
    snapshot_info: HashMap<String, Snapshot>,
    /// The ordered working set.
    snapshots: Vec<String>,
    /// Instance-scoped span; all filter activity is logged inside it.
    span: Span,
}

impl Inventory {
    /// Fetch the snapshot listing for `repository` through `source` and
    /// build the inventory.
    ///
    /// Records without an identifier are skipped. Fails with
    /// [`Error::FetchFailed`] when the source errors, and with
    /// [`Error::EmptyList`] when no usable records come back.
    pub fn new<S: SnapshotSource>(source: &S, repository: &str) -> Result<Self> {
        if repository.is_empty() {
            return Err(Error::MissingArgument("repository"));
        }
        let span = debug_span!("inventory", repository = %repository);
        debug!(parent: &span, "fetching snapshot listing");
        let raw = source
            .list_snapshots(repository)
            .map_err(|e| Error::FetchFailed { repository: repository.to_string(), source: e })?;

        let mut snapshot_info = HashMap::with_capacity(raw.len());
        let mut snapshots = Vec::with_capacity(raw.len());
        for record in raw {
            let RawSnapshot { snapshot, state, start_time_in_millis } = record;
            let Some(id) = snapshot else {
                debug!(parent: &span, "skipping record without an identifier");
                continue;
            };
            snapshots.push(id.clone());
            snapshot_info.insert(id, Snapshot { state, start_time_in_millis, age_by_name: None });
        }

        let inventory = Inventory {
            repository: repository.to_string(),
            snapshot_info,
            snapshots,
            span,
        };
        inventory.empty_list_check()?;
        Ok(inventory)
    }

    /// The repository this inventory was fetched from.
    pub fn repository(&self) -> &str {
        &self.repository
    }

    /// Metadata for one snapshot, if it was ever fetched. Stays available
    /// after the identifier leaves the working set.
    pub fn get(&self, identifier: &str) -> Option<&Snapshot> {
        self.snapshot_info.get(identifier)
    }

    /// Value copy of the current working set, so callers can iterate freely
    /// while the live set is mutated.
    pub fn working_list(&self) -> Vec<String> {
        self.snapshots.clone()
    }

    /// Error unless the working set still has members.
    pub fn empty_list_check(&self) -> Result<()> {
        if self.snapshots.is_empty() {
            Err(Error::EmptyList)
        } else {
            Ok(())
        }
    }

    /// Identifier of the working-set snapshot with the greatest start time.
    ///
    /// Snapshots with no reported start time are ignored; `None` means no
    /// working-set member reported one.
    pub fn most_recent(&self) -> Result<Option<&str>> {
        self.empty_list_check()?;
        let mut best: Option<(&str, i64)> = None;
        for id in &self.snapshots {
            let Some(start) = self.snapshot_info.get(id).and_then(|s| s.start_time_in_millis)
            else {
                continue;
            };
            if best.is_none_or(|(_, t)| start > t) {
                best = Some((id, start));
            }
        }
        Ok(best.map(|(id, _)| id))
    }

    /// Derive `age_by_name` for every working-set snapshot by locating an
    /// embedded timestamp matching `timestring` in its identifier.
    fn derive_name_ages(&mut self, timestring: &str) -> Result<()> {
        self.empty_list_check()?;
        let search = TimestringSearch::new(timestring)?;
        for id in self.working_list() {
            let epoch = search.extract(&id);
            if epoch.is_none() {
                debug!(parent: &self.span, snapshot = %id, "no timestamp in name");
            }
            if let Some(snap) = self.snapshot_info.get_mut(&id) {
                snap.age_by_name = epoch;
            }
        }
        Ok(())
    }

    /// Remove snapshots from the working set by relative age.
    ///
    /// `source` selects where each snapshot's age comes from; the name
    /// source requires `timestring` and derives ages from identifiers
    /// before evaluating. The point of reference lies `unit_count` `unit`s
    /// before `epoch` (or before now). A snapshot with no determinable age
    /// can never satisfy an age comparison, so it is dropped regardless of
    /// `exclude`.
    #[allow(clippy::too_many_arguments)]
    pub fn filter_by_age(
        &mut self,
        source: AgeSource,
        direction: Option<AgeDirection>,
        timestring: Option<&str>,
        unit: AgeUnit,
        unit_count: u32,
        epoch: Option<i64>,
        exclude: bool,
    ) -> Result<()> {
        self.empty_list_check()?;
        let por = point_of_reference(unit, unit_count, epoch)?;
        let Some(direction) = direction else {
            return Err(Error::MissingArgument("direction"));
        };
        debug!(parent: &self.span, point_of_reference = por, direction = %direction, "starting age filter");
        if source == AgeSource::Name {
            let timestring = timestring.ok_or(Error::MissingArgument("timestring"))?;
            self.derive_name_ages(timestring)?;
        }

        let mut retained = Vec::with_capacity(self.snapshots.len());
        for id in self.working_list() {
            let age = self.snapshot_info.get(&id).and_then(|snap| match source {
                AgeSource::CreationDate => snap.start_time_seconds(),
                AgeSource::Name => snap.age_by_name,
            });
            let Some(age) = age else {
                debug!(parent: &self.span, snapshot = %id, "removing snapshot with no determinable age");
                continue;
            };
            // Time adds to epoch, so a smaller value is an older timestamp.
            let condition = match direction {
                AgeDirection::Older => age < por,
                AgeDirection::Younger => age > por,
            };
            if keep(condition, exclude) {
                retained.push(id);
            } else {
                debug!(parent: &self.span, snapshot = %id, age, "removed from actionable list");
            }
        }
        self.snapshots = retained;
        Ok(())
    }

    /// Remove snapshots whose identifiers do not match the pattern built
    /// from `kind` and `value`, or those that do when `exclude` is set.
    pub fn filter_by_regex(
        &mut self,
        kind: PatternKind,
        value: Option<&str>,
        exclude: bool,
    ) -> Result<()> {
        let value = value.ok_or(Error::EmptyValue)?;
        if value.is_empty() {
            return Err(Error::EmptyValue);
        }
        let pattern = match kind {
            PatternKind::Regex => value.to_string(),
            PatternKind::Prefix => format!("^{value}.*$"),
            PatternKind::Suffix => format!("^.*{value}$"),
            PatternKind::Timestring => format!("^.*{}.*$", date_regex(value)?),
        };
        self.empty_list_check()?;
        let regex = Regex::new(&pattern)?;

        let mut retained = Vec::with_capacity(self.snapshots.len());
        for id in self.working_list() {
            // Anchored match semantics: the pattern must match from the
            // first byte of the identifier, as opposed to searching
            // anywhere inside it.
            let condition = regex.find(&id).is_some_and(|m| m.start() == 0);
            if keep(condition, exclude) {
                retained.push(id);
            } else {
                debug!(parent: &self.span, snapshot = %id, "removed from actionable list");
            }
        }
        self.snapshots = retained;
        Ok(())
    }

    /// Keep only snapshots whose stored state equals `state`, or drop them
    /// when `exclude` is set.
    pub fn filter_by_state(&mut self, state: Option<SnapshotState>, exclude: bool) -> Result<()> {
        let Some(state) = state else {
            return Err(Error::MissingArgument("state"));
        };
        self.empty_list_check()?;

        let mut retained = Vec::with_capacity(self.snapshots.len());
        for id in self.working_list() {
            let condition = self.snapshot_info.get(&id).is_some_and(|snap| snap.state == state);
            if keep(condition, exclude) {
                retained.push(id);
            } else {
                debug!(parent: &self.span, snapshot = %id, state = %state, "removed from actionable list");
            }
        }
        self.snapshots = retained;
        Ok(())
    }

    /// The inert filter: logs and leaves the working set untouched.
    pub fn filter_none(&self) {
        debug!(parent: &self.span, "no-op filter selected, nothing to do");
    }

    /// Apply one parsed filter specification to the working set.
    pub fn apply_filter(&mut self, spec: &FilterSpec) -> Result<()> {
        match spec {
            FilterSpec::Age { source, direction, timestring, unit, unit_count, epoch, exclude } => {
                self.filter_by_age(
                    *source,
                    *direction,
                    timestring.as_deref(),
                    *unit,
                    *unit_count,
                    *epoch,
                    *exclude,
                )
            }
            FilterSpec::None => {
                self.filter_none();
                Ok(())
            }
            FilterSpec::Pattern { kind, value, exclude } => {
                self.filter_by_regex(*kind, value.as_deref(), *exclude)
            }
            FilterSpec::State { state, exclude } => self.filter_by_state(*state, *exclude),
        }
    }

    /// Validate and apply an ordered chain of raw filter specifications.
    ///
    /// An empty chain returns immediately with no effect. Each spec is
    /// validated against its filter type's schema right before it runs,
    /// then dispatched to the matching predicate. The chain is strictly
    /// sequential and stateful: every filter observes the working set as
    /// the previous filter left it, and there is no rollback.
    pub fn iterate_filters(&mut self, specs: &[serde_json::Value]) -> Result<()> {
        if specs.is_empty() {
            debug!(parent: &self.span, "no filters supplied, leaving working set unaltered");
            return Ok(());
        }
        for raw in specs {
            let spec = FilterSpec::from_value(raw)?;
            debug!(parent: &self.span, remaining = self.snapshots.len(), filter = ?spec, "applying filter");
            self.apply_filter(&spec)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "inventory_tests.rs"]
mod tests;
