// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure transition planning.
//!
//! The engine computes what a command does — the row image, the seat action,
//! the audit entry — from the command and the observed context alone. It
//! performs no I/O. Classification (active-like vs terminal-like) drives
//! every side effect; there is no status-to-status adjacency restriction.

use crate::command::Command;
use crate::error::CoreError;
use crate::plan::{RemovalPlan, SeatAction, TransitionPlan};
use orgledger_audit::{LogReason, StatusLogEntry};
use orgledger_domain::{
    DomainError, Employment, EmploymentStatus, Person, validate_contract_dates,
};
use time::Date;

/// Plans the creation of a new employment.
///
/// Duplicate-contract and capacity checks are deliberately absent here:
/// both require a fresh read of the ledger and are enforced by the executor
/// inside the same write transaction that commits this plan.
///
/// # Arguments
///
/// * `person` - The person being hired (for birthdate validation)
/// * `command` - A `Command::Hire`
///
/// # Returns
///
/// A `TransitionPlan` whose seat action is `Reserve` when the initial
/// status is active-like, with an "initial hire" log entry dated at the
/// hire date.
///
/// # Errors
///
/// * `DomainError::InvalidDateRange` if the end date precedes the hire date
/// * `DomainError::BirthdateInconsistent` if the hire date precedes the
///   person's birthdate
pub fn plan_hire(person: &Person, command: Command) -> Result<TransitionPlan, CoreError> {
    match command {
        Command::Hire {
            person_id,
            position_id,
            role,
            employment_type,
            status,
            hire_date,
            end_date,
        } => {
            validate_contract_dates(hire_date, end_date, person.birthdate)?;

            let seat_action = if status.is_active_like() {
                SeatAction::Reserve
            } else {
                SeatAction::Keep
            };

            let employment = Employment::new(
                person_id,
                position_id,
                role,
                employment_type,
                status,
                hire_date,
                end_date,
            );

            let log_entry = StatusLogEntry::new(status, hire_date, LogReason::InitialHire);

            Ok(TransitionPlan {
                employment,
                seat_action,
                log_entry,
            })
        }
        Command::ChangeStatus { .. } | Command::Remove { .. } => {
            unreachable!("plan_hire called with a non-hire command")
        }
    }
}

/// Plans a status change on an existing employment.
///
/// Classification drives the plan:
/// - active-like → terminal-like releases the seat and stamps
///   `end_date = today` when the caller supplied none;
/// - terminal-like → active-like reserves a seat (checked by the executor)
///   and clears the prior exit record;
/// - moves within a class keep occupancy unchanged.
///
/// An explicit `end_date` is preserved verbatim in every case. The log
/// entry's reason is the exit-reason label plus notes when moving to a
/// terminal-like status, and "administrative status change" otherwise;
/// "initial hire" is never written here.
///
/// # Arguments
///
/// * `current` - The employment row as currently persisted
/// * `command` - A `Command::ChangeStatus`
/// * `today` - The calling day, used for end-date stamping
///
/// # Errors
///
/// Returns `DomainError::InvalidDateRange` if a supplied end date precedes
/// the hire date.
pub fn plan_status_change(
    current: &Employment,
    command: Command,
    today: Date,
) -> Result<TransitionPlan, CoreError> {
    match command {
        Command::ChangeStatus {
            employment_id,
            new_status,
            end_date,
            exit_reason,
            exit_notes,
        } => {
            if let Some(end_date) = end_date
                && end_date < current.hire_date
            {
                return Err(CoreError::DomainViolation(DomainError::InvalidDateRange {
                    hire_date: current.hire_date,
                    end_date,
                }));
            }

            let was_active = current.current_status.is_active_like();
            let now_active = new_status.is_active_like();

            let seat_action = match (was_active, now_active) {
                (true, false) => SeatAction::Release,
                (false, true) => SeatAction::Reserve,
                _ => SeatAction::Keep,
            };

            let mut employment = current.clone();
            employment.employment_id = Some(employment_id);
            employment.current_status = new_status;

            if now_active {
                // Reactivation discards the prior exit record; a stale end
                // date would misreport the contract as expiring.
                employment.end_date = end_date;
                employment.exit_reason = None;
                employment.exit_notes = None;
            } else {
                employment.end_date = match end_date {
                    Some(supplied) => Some(supplied),
                    None if was_active => Some(today),
                    None => current.end_date,
                };
                employment.exit_reason = exit_reason.or(current.exit_reason);
                employment.exit_notes = exit_notes.clone().or_else(|| current.exit_notes.clone());
            }

            let reason = if now_active {
                LogReason::Administrative
            } else {
                exit_reason.map_or(LogReason::Administrative, |reason| LogReason::Exit {
                    reason,
                    notes: exit_notes,
                })
            };

            let log_date = if now_active {
                today
            } else {
                employment.end_date.unwrap_or(today)
            };

            let log_entry = StatusLogEntry::for_employment(employment_id, new_status, log_date, reason);

            Ok(TransitionPlan {
                employment,
                seat_action,
                log_entry,
            })
        }
        Command::Hire { .. } | Command::Remove { .. } => {
            unreachable!("plan_status_change called with a non-status command")
        }
    }
}

/// Plans the removal of an employment row.
///
/// An active-like row still occupies a seat; its removal must release that
/// seat in the same transaction.
#[must_use]
pub const fn plan_removal(employment_id: i64, current_status: EmploymentStatus) -> RemovalPlan {
    let seat_action = if current_status.is_active_like() {
        SeatAction::Release
    } else {
        SeatAction::Keep
    };
    RemovalPlan {
        employment_id,
        seat_action,
    }
}
