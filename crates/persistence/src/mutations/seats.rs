// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The capacity accountant.
//!
//! Occupancy is never stored: it is always a fresh count of active-like
//! employments referencing the position, compared against the position's
//! declared `vacancies`. Both functions must be called inside the write
//! transaction that commits the employment row they account for.

use crate::error::PersistenceError;
use crate::queries;
use diesel::SqliteConnection;
use orgledger_domain::DomainError;
use tracing::debug;

/// Checks and reserves one seat on a position.
///
/// Succeeds only if the fresh count of active-like employments is strictly
/// less than the declared capacity. The reservation itself is the
/// employment row the caller is about to insert or reactivate in the same
/// transaction.
///
/// # Arguments
///
/// * `conn` - The database connection, inside an immediate transaction
/// * `position_id` - The position to reserve a seat on
///
/// # Returns
///
/// The remaining capacity after the caller's row lands.
///
/// # Errors
///
/// Returns `DomainError::CapacityExceeded` (wrapped) when the position is
/// full.
pub fn try_reserve_seat(
    conn: &mut SqliteConnection,
    position_id: i64,
) -> Result<u32, PersistenceError> {
    let report = queries::seats::seat_report(conn, position_id)?;
    if report.occupied >= report.vacancies {
        return Err(PersistenceError::DomainViolation(
            DomainError::CapacityExceeded {
                position_id,
                vacancies: report.vacancies,
            },
        ));
    }
    let remaining = report.remaining - 1;
    debug!(position_id, remaining, "Reserved seat");
    Ok(remaining)
}

/// Releases a seat on a position.
///
/// Unconditional: with derived occupancy the release is the status change
/// or row removal the caller has already applied in this transaction; this
/// recomputes and reports the remaining capacity. Capacity cannot go
/// negative.
///
/// # Arguments
///
/// * `conn` - The database connection, inside an immediate transaction
/// * `position_id` - The position whose seat was released
///
/// # Returns
///
/// The remaining capacity after the release.
///
/// # Errors
///
/// Returns an error if the position does not exist or the count query
/// fails.
pub fn release_seat(
    conn: &mut SqliteConnection,
    position_id: i64,
) -> Result<u32, PersistenceError> {
    let report = queries::seats::seat_report(conn, position_id)?;
    debug!(position_id, remaining = report.remaining, "Released seat");
    Ok(report.remaining)
}
