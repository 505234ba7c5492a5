// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Occupancy reports.
//!
//! Occupancy is computed fresh from the employment ledger on every call,
//! never cached. Inside a write transaction these counts are the
//! authoritative input to the capacity accountant.

use crate::data_models::SeatReport;
use crate::diesel_schema::{employments, positions};
use crate::error::PersistenceError;
use diesel::prelude::*;
use num_traits::cast::ToPrimitive;
use orgledger_domain::{DomainError, EmploymentStatus};

/// Returns a position's declared capacity.
///
/// # Errors
///
/// Returns `DomainError::PositionNotFound` (wrapped) if the position does
/// not exist.
pub fn declared_vacancies(
    conn: &mut SqliteConnection,
    position_id: i64,
) -> Result<u32, PersistenceError> {
    let vacancies: i32 = positions::table
        .filter(positions::position_id.eq(position_id))
        .select(positions::vacancies)
        .first(conn)
        .optional()?
        .ok_or(PersistenceError::DomainViolation(
            DomainError::PositionNotFound(position_id),
        ))?;

    vacancies.to_u32().ok_or_else(|| {
        PersistenceError::DataCorruption(format!(
            "Negative vacancy count {vacancies} on position {position_id}"
        ))
    })
}

/// Counts the active-like employments referencing a position.
///
/// # Errors
///
/// Returns an error if the count query fails.
pub fn active_occupancy(
    conn: &mut SqliteConnection,
    position_id: i64,
) -> Result<u32, PersistenceError> {
    let count: i64 = employments::table
        .filter(employments::position_id.eq(position_id))
        .filter(employments::current_status.eq_any(EmploymentStatus::active_like_codes()))
        .count()
        .get_result(conn)?;

    count.to_u32().ok_or_else(|| {
        PersistenceError::Other(format!("Occupancy count {count} out of range"))
    })
}

/// Builds the full seat report for a position.
///
/// # Errors
///
/// Returns `DomainError::PositionNotFound` (wrapped) if the position does
/// not exist.
pub fn seat_report(
    conn: &mut SqliteConnection,
    position_id: i64,
) -> Result<SeatReport, PersistenceError> {
    let vacancies = declared_vacancies(conn, position_id)?;
    let occupied = active_occupancy(conn, position_id)?;
    Ok(SeatReport {
        vacancies,
        occupied,
        remaining: vacancies.saturating_sub(occupied),
    })
}
