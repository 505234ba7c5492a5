// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The position reporting matrix as an explicit directed graph.
//!
//! A position may report to zero, one, or many other positions. Adjacency
//! sets are keyed by position id and iterate in ascending id order, which
//! makes "the first manager position" deterministic for supervisor lookup.
//!
//! Only direct self-reference is rejected. Longer cycles are not validated:
//! every traversal over the matrix is single-hop, so no correctness property
//! depends on acyclicity.

use crate::error::DomainError;
use std::collections::{BTreeMap, BTreeSet};

/// Directed reporting graph over positions.
///
/// An edge `position -> manager` means `position` reports to `manager`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportingMatrix {
    managers_by_position: BTreeMap<i64, BTreeSet<i64>>,
}

impl ReportingMatrix {
    /// Creates an empty matrix.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            managers_by_position: BTreeMap::new(),
        }
    }

    /// Builds a matrix from `(position_id, manager_position_id)` edges.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SelfReportingPosition` if any edge is a
    /// self-reference.
    pub fn from_edges<I>(edges: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut matrix = Self::new();
        for (position_id, manager_position_id) in edges {
            matrix.insert(position_id, manager_position_id)?;
        }
        Ok(matrix)
    }

    /// Records that `position_id` reports to `manager_position_id`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SelfReportingPosition` if the two ids are equal.
    pub fn insert(&mut self, position_id: i64, manager_position_id: i64) -> Result<(), DomainError> {
        if position_id == manager_position_id {
            return Err(DomainError::SelfReportingPosition { position_id });
        }
        self.managers_by_position
            .entry(position_id)
            .or_default()
            .insert(manager_position_id);
        Ok(())
    }

    /// Returns the ordered set of positions `position_id` reports to.
    ///
    /// Empty when the position has no manager configured — callers must
    /// distinguish that from a configured-but-unfilled manager position.
    #[must_use]
    pub fn managers_of(&self, position_id: i64) -> &BTreeSet<i64> {
        static EMPTY: BTreeSet<i64> = BTreeSet::new();
        self.managers_by_position.get(&position_id).unwrap_or(&EMPTY)
    }

    /// Returns the positions whose manager set contains `manager_position_id`,
    /// in ascending id order.
    #[must_use]
    pub fn direct_reports_of(&self, manager_position_id: i64) -> Vec<i64> {
        self.managers_by_position
            .iter()
            .filter(|(_, managers)| managers.contains(&manager_position_id))
            .map(|(position_id, _)| *position_id)
            .collect()
    }

    /// Returns every `(position_id, manager_position_id)` edge, ordered by
    /// position id then manager id.
    #[must_use]
    pub fn edges(&self) -> Vec<(i64, i64)> {
        self.managers_by_position
            .iter()
            .flat_map(|(position_id, managers)| {
                managers.iter().map(|manager_id| (*position_id, *manager_id))
            })
            .collect()
    }

    /// Returns whether the matrix has any edge for `position_id`.
    #[must_use]
    pub fn has_manager(&self, position_id: i64) -> bool {
        self.managers_by_position
            .get(&position_id)
            .is_some_and(|managers| !managers.is_empty())
    }
}
