// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use orgledger_domain::{EmploymentStatus, ExitReason};
use time::Date;

/// Why a status-log row was written.
///
/// The rendered text is the log's free-text `reason` column. The "initial
/// hire" reason appears only on employment creation, never on a later
/// status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogReason {
    /// The employment was just created.
    InitialHire,
    /// The contract moved to a terminal-like status.
    Exit {
        /// The recorded exit reason.
        reason: ExitReason,
        /// Free-text notes accompanying the exit.
        notes: Option<String>,
    },
    /// Any other status change.
    Administrative,
}

impl LogReason {
    /// Renders the reason text stored in the log row.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::InitialHire => String::from("initial hire"),
            Self::Exit { reason, notes } => match notes {
                Some(notes) if !notes.is_empty() => {
                    format!("{}: {notes}", reason.label())
                }
                _ => reason.label().to_string(),
            },
            Self::Administrative => String::from("administrative status change"),
        }
    }
}

/// An immutable status-log entry.
///
/// Every employment creation and every status change must produce exactly
/// one log entry. Entries are append-only: once persisted they are never
/// updated or deleted by this core (removal of the owning employment
/// cascades, nothing else touches them).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLogEntry {
    /// The employment this entry belongs to. `None` until the employment
    /// row itself has been persisted in the same transaction.
    pub employment_id: Option<i64>,
    /// The status the employment holds as of this entry.
    pub status: EmploymentStatus,
    /// The date this status took effect.
    pub start_date: Date,
    /// Why the entry was written.
    pub reason: LogReason,
}

impl StatusLogEntry {
    /// Creates a new `StatusLogEntry`.
    ///
    /// Once created, a log entry is immutable.
    ///
    /// # Arguments
    ///
    /// * `status` - The status as of this entry
    /// * `start_date` - The date the status took effect
    /// * `reason` - Why the entry was written
    #[must_use]
    pub const fn new(status: EmploymentStatus, start_date: Date, reason: LogReason) -> Self {
        Self {
            employment_id: None,
            status,
            start_date,
            reason,
        }
    }

    /// Creates a `StatusLogEntry` bound to a persisted employment.
    #[must_use]
    pub const fn for_employment(
        employment_id: i64,
        status: EmploymentStatus,
        start_date: Date,
        reason: LogReason,
    ) -> Self {
        Self {
            employment_id: Some(employment_id),
            status,
            start_date,
            reason,
        }
    }
}
