// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ledger lookups and the append-only status log.

use crate::data_models::StatusLogRecord;
use crate::dates;
use crate::diesel_schema::{employment_status_log, employments};
use crate::error::PersistenceError;
use diesel::prelude::*;
use orgledger_domain::{DomainError, Employment, EmploymentStatus};

/// Diesel Queryable struct for employment rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = employments)]
struct EmploymentRow {
    employment_id: i64,
    person_id: i64,
    position_id: i64,
    role: String,
    employment_type: String,
    current_status: String,
    hire_date: String,
    end_date: Option<String>,
    exit_reason: Option<String>,
    exit_notes: Option<String>,
}

/// Diesel Queryable struct for status-log rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = employment_status_log)]
struct StatusLogRow {
    log_id: i64,
    employment_id: i64,
    status: String,
    start_date: String,
    reason: String,
}

fn corrupt(err: &dyn std::fmt::Display) -> PersistenceError {
    PersistenceError::DataCorruption(err.to_string())
}

impl EmploymentRow {
    fn into_domain(self) -> Result<Employment, PersistenceError> {
        let mut employment = Employment::new(
            self.person_id,
            self.position_id,
            self.role.parse().map_err(|e: DomainError| corrupt(&e))?,
            self.employment_type
                .parse()
                .map_err(|e: DomainError| corrupt(&e))?,
            self.current_status
                .parse()
                .map_err(|e: DomainError| corrupt(&e))?,
            dates::from_iso(&self.hire_date)?,
            dates::from_iso_opt(self.end_date.as_deref())?,
        );
        employment.employment_id = Some(self.employment_id);
        employment.exit_reason = self
            .exit_reason
            .as_deref()
            .map(str::parse)
            .transpose()
            .map_err(|e: DomainError| corrupt(&e))?;
        employment.exit_notes = self.exit_notes;
        Ok(employment)
    }
}

/// Retrieves an employment by id.
///
/// # Errors
///
/// Returns `DomainError::EmploymentNotFound` (wrapped) if the row does not
/// exist.
pub fn get_employment(
    conn: &mut SqliteConnection,
    employment_id: i64,
) -> Result<Employment, PersistenceError> {
    let row: EmploymentRow = employments::table
        .filter(employments::employment_id.eq(employment_id))
        .select(EmploymentRow::as_select())
        .first(conn)
        .optional()?
        .ok_or(PersistenceError::DomainViolation(
            DomainError::EmploymentNotFound(employment_id),
        ))?;

    row.into_domain()
}

/// Finds an active-like employment for a (person, position) pair.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `person_id` - The person
/// * `position_id` - The position
/// * `exclude_employment_id` - A row to ignore, when re-validating during a
///   status change on that row
///
/// # Returns
///
/// The offending employment id, or `None` when the pair is free.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_active_contract(
    conn: &mut SqliteConnection,
    person_id: i64,
    position_id: i64,
    exclude_employment_id: Option<i64>,
) -> Result<Option<i64>, PersistenceError> {
    let mut query = employments::table
        .filter(employments::person_id.eq(person_id))
        .filter(employments::position_id.eq(position_id))
        .filter(employments::current_status.eq_any(EmploymentStatus::active_like_codes()))
        .select(employments::employment_id)
        .into_boxed();

    if let Some(exclude) = exclude_employment_id {
        query = query.filter(employments::employment_id.ne(exclude));
    }

    Ok(query
        .order(employments::employment_id.asc())
        .first(conn)
        .optional()?)
}

/// Lists an employment's status log in append order.
///
/// # Errors
///
/// Returns `DomainError::EmploymentNotFound` (wrapped) if the employment
/// does not exist.
pub fn status_log(
    conn: &mut SqliteConnection,
    employment_id: i64,
) -> Result<Vec<StatusLogRecord>, PersistenceError> {
    // Distinguish "no log rows" from "no such employment".
    let _ = get_employment(conn, employment_id)?;

    let rows: Vec<StatusLogRow> = employment_status_log::table
        .filter(employment_status_log::employment_id.eq(employment_id))
        .order(employment_status_log::log_id.asc())
        .select(StatusLogRow::as_select())
        .load(conn)?;

    rows.into_iter()
        .map(|row| {
            Ok(StatusLogRecord {
                log_id: row.log_id,
                employment_id: row.employment_id,
                status: row.status,
                start_date: dates::from_iso(&row.start_date)?,
                reason: row.reason,
            })
        })
        .collect()
}
