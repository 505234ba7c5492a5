// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use orgledger_domain::{EmploymentRole, EmploymentStatus, EmploymentType, ExitReason};
use time::Date;

/// A command represents caller intent as data only.
///
/// Commands are the only way to request changes to the employment ledger.
/// The engine turns a command plus observed context into a plan; the
/// persistence layer executes the plan atomically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new employment binding a person to a position.
    Hire {
        /// The person being hired.
        person_id: i64,
        /// The position being filled.
        position_id: i64,
        /// The contractual role.
        role: EmploymentRole,
        /// The contractual modality.
        employment_type: EmploymentType,
        /// The initial status. Active-like statuses reserve a seat.
        status: EmploymentStatus,
        /// The contract start date.
        hire_date: Date,
        /// The contract end date, for fixed-term contracts.
        end_date: Option<Date>,
    },
    /// Move an existing employment to a new status.
    ChangeStatus {
        /// The employment to transition.
        employment_id: i64,
        /// The requested status.
        new_status: EmploymentStatus,
        /// Explicit end date; preserved verbatim when supplied. When absent
        /// and the transition is active-like to terminal-like, today's date
        /// is stamped.
        end_date: Option<Date>,
        /// The exit reason, for terminal-like transitions.
        exit_reason: Option<ExitReason>,
        /// Free-text exit notes.
        exit_notes: Option<String>,
    },
    /// Remove an employment row entirely.
    ///
    /// Removal of an active-like employment must release its seat in the
    /// same transaction; omitting the compensation corrupts capacity
    /// accounting.
    Remove {
        /// The employment to remove.
        employment_id: i64,
    },
}
