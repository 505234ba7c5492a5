// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The transition engine's executor.
//!
//! Each function turns a core command into committed rows: the engine plans
//! (pure), the seat accountant checks capacity against a fresh count, the
//! row and its log entry land together. A failure anywhere rolls back the
//! whole transaction — no seat is ever reserved without its employment row,
//! and no row lands without its log entry.

use crate::data_models::{NewEmployment, NewStatusLog};
use crate::dates;
use crate::diesel_schema::{employment_status_log, employments};
use crate::error::PersistenceError;
use crate::mutations::seats;
use crate::queries;
use diesel::prelude::*;
use orgledger::{Command, SeatAction, plan_hire, plan_removal, plan_status_change};
use orgledger_audit::StatusLogEntry;
use orgledger_domain::{DomainError, Employment};
use time::Date;
use tracing::info;

/// Appends one status-log row for an employment.
fn append_log(
    conn: &mut SqliteConnection,
    employment_id: i64,
    entry: &StatusLogEntry,
) -> Result<i64, PersistenceError> {
    let record = NewStatusLog {
        employment_id,
        status: entry.status.as_str().to_string(),
        start_date: dates::to_iso(entry.start_date)?,
        reason: entry.reason.text(),
    };
    diesel::insert_into(employment_status_log::table)
        .values(&record)
        .execute(conn)?;
    crate::backend::get_last_insert_rowid(conn)
}

/// Creates a new employment from a `Command::Hire`.
///
/// Enforces, under the write lock:
/// - the duplicate-contract invariant: no active-like employment may
///   already exist for the (person, position) pair;
/// - the capacity invariant: an active-like initial status reserves a seat
///   against a fresh occupancy count.
///
/// Appends exactly one "initial hire" log row.
///
/// # Returns
///
/// The new employment id.
///
/// # Errors
///
/// * `DomainError::PersonNotFound` / `PositionNotFound` (wrapped) for
///   missing references
/// * `DomainError::DuplicateActiveContract` (wrapped)
/// * `DomainError::CapacityExceeded` (wrapped)
/// * date-validation errors from the engine
pub fn create_employment(
    conn: &mut SqliteConnection,
    command: Command,
) -> Result<i64, PersistenceError> {
    let Command::Hire {
        person_id,
        position_id,
        ..
    } = command
    else {
        return Err(PersistenceError::Other(String::from(
            "create_employment requires a Hire command",
        )));
    };

    let person = queries::org::get_person(conn, person_id)?;
    // Position must exist before counting its seats.
    let _ = queries::seats::declared_vacancies(conn, position_id)?;

    let plan = plan_hire(&person, command)?;

    if queries::employment::find_active_contract(conn, person_id, position_id, None)?.is_some() {
        return Err(PersistenceError::DomainViolation(
            DomainError::DuplicateActiveContract {
                person_id,
                position_id,
            },
        ));
    }

    if plan.seat_action == SeatAction::Reserve {
        seats::try_reserve_seat(conn, position_id)?;
    }

    let employment = &plan.employment;
    let record = NewEmployment {
        person_id: employment.person_id,
        position_id: employment.position_id,
        role: employment.role.as_str().to_string(),
        employment_type: employment.employment_type.as_str().to_string(),
        current_status: employment.current_status.as_str().to_string(),
        hire_date: dates::to_iso(employment.hire_date)?,
        end_date: employment.end_date.map(dates::to_iso).transpose()?,
        exit_reason: employment.exit_reason.map(|r| r.as_str().to_string()),
        exit_notes: employment.exit_notes.clone(),
    };
    diesel::insert_into(employments::table)
        .values(&record)
        .execute(conn)?;
    let employment_id = crate::backend::get_last_insert_rowid(conn)?;

    append_log(conn, employment_id, &plan.log_entry)?;

    info!(
        employment_id,
        person_id,
        position_id,
        status = %employment.current_status,
        "Created employment"
    );
    Ok(employment_id)
}

/// Applies a `Command::ChangeStatus` to an existing employment.
///
/// Classification drives the side effects (see the engine). When the
/// transition re-enters an active-like status, both the duplicate-contract
/// invariant and capacity are re-validated under the write lock. Appends
/// exactly one log row.
///
/// # Arguments
///
/// * `conn` - The database connection, inside an immediate transaction
/// * `command` - The status-change command
/// * `today` - The calling day, used for end-date stamping
///
/// # Returns
///
/// The employment as persisted after the transition.
///
/// # Errors
///
/// * `NotFound` if the employment does not exist
/// * `DomainError::DuplicateActiveContract` / `CapacityExceeded` (wrapped)
///   when re-entering an active-like status
/// * date-validation errors from the engine
pub fn change_employment_status(
    conn: &mut SqliteConnection,
    command: Command,
    today: Date,
) -> Result<Employment, PersistenceError> {
    let Command::ChangeStatus { employment_id, .. } = command else {
        return Err(PersistenceError::Other(String::from(
            "change_employment_status requires a ChangeStatus command",
        )));
    };

    let current = queries::employment::get_employment(conn, employment_id)?;
    let plan = plan_status_change(&current, command, today)?;

    match plan.seat_action {
        SeatAction::Reserve => {
            if queries::employment::find_active_contract(
                conn,
                current.person_id,
                current.position_id,
                Some(employment_id),
            )?
            .is_some()
            {
                return Err(PersistenceError::DomainViolation(
                    DomainError::DuplicateActiveContract {
                        person_id: current.person_id,
                        position_id: current.position_id,
                    },
                ));
            }
            seats::try_reserve_seat(conn, current.position_id)?;
        }
        SeatAction::Release | SeatAction::Keep => {}
    }

    let employment = &plan.employment;
    diesel::update(employments::table.filter(employments::employment_id.eq(employment_id)))
        .set((
            employments::current_status.eq(employment.current_status.as_str()),
            employments::end_date.eq(employment.end_date.map(dates::to_iso).transpose()?),
            employments::exit_reason.eq(employment.exit_reason.map(|r| r.as_str().to_string())),
            employments::exit_notes.eq(employment.exit_notes.clone()),
        ))
        .execute(conn)?;

    append_log(conn, employment_id, &plan.log_entry)?;

    if plan.seat_action == SeatAction::Release {
        seats::release_seat(conn, current.position_id)?;
    }

    info!(
        employment_id,
        from = %current.current_status,
        to = %employment.current_status,
        "Changed employment status"
    );
    Ok(plan.employment)
}

/// Removes an employment row.
///
/// Removal of an active-like row is the compensating capacity action
/// itself: occupancy is derived, so the fresh count drops with the row.
/// The seat accountant still reports the released seat. Log rows cascade
/// with the employment.
///
/// # Errors
///
/// Returns `NotFound` if the employment does not exist.
pub fn delete_employment(
    conn: &mut SqliteConnection,
    employment_id: i64,
) -> Result<(), PersistenceError> {
    let current = queries::employment::get_employment(conn, employment_id)?;
    let plan = plan_removal(employment_id, current.current_status);

    diesel::delete(employments::table.filter(employments::employment_id.eq(employment_id)))
        .execute(conn)?;

    if plan.seat_action == SeatAction::Release {
        seats::release_seat(conn, current.position_id)?;
    }

    info!(employment_id, position_id = current.position_id, "Deleted employment");
    Ok(())
}
