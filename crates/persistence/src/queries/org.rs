// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog lookups: persons and positions with their manager sets.

use crate::dates;
use crate::diesel_schema::{departments, job_titles, persons, position_managers, positions};
use crate::error::PersistenceError;
use diesel::prelude::*;
use num_traits::cast::ToPrimitive;
use orgledger_domain::{DomainError, Person, Position, ReportingMatrix};
use std::collections::BTreeSet;

/// Diesel Queryable struct for person rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = persons)]
struct PersonRow {
    person_id: i64,
    first_name: String,
    last_name: String,
    birthdate: String,
    national_id: Option<String>,
    has_user_account: i32,
}

/// Diesel Queryable struct for position rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = positions)]
struct PositionRow {
    position_id: i64,
    department_id: i64,
    job_title_id: i64,
    vacancies: i32,
    is_manager: i32,
}

/// Verifies that a department exists.
///
/// # Errors
///
/// Returns `DomainError::DepartmentNotFound` (wrapped) if it does not.
pub fn ensure_department(
    conn: &mut SqliteConnection,
    department_id: i64,
) -> Result<(), PersistenceError> {
    let found: Option<i64> = departments::table
        .filter(departments::department_id.eq(department_id))
        .select(departments::department_id)
        .first(conn)
        .optional()?;
    found.map(|_| ()).ok_or(PersistenceError::DomainViolation(
        DomainError::DepartmentNotFound(department_id),
    ))
}

/// Verifies that a job title exists.
///
/// # Errors
///
/// Returns `DomainError::JobTitleNotFound` (wrapped) if it does not.
pub fn ensure_job_title(
    conn: &mut SqliteConnection,
    job_title_id: i64,
) -> Result<(), PersistenceError> {
    let found: Option<i64> = job_titles::table
        .filter(job_titles::job_title_id.eq(job_title_id))
        .select(job_titles::job_title_id)
        .first(conn)
        .optional()?;
    found.map(|_| ()).ok_or(PersistenceError::DomainViolation(
        DomainError::JobTitleNotFound(job_title_id),
    ))
}

/// Loads the whole reporting matrix as a directed graph.
///
/// Used to render organization-wide charts without one query per position.
///
/// # Errors
///
/// Returns `DataCorruption` if the stored edges violate the self-report
/// rule (the schema forbids it).
pub fn load_reporting_matrix(
    conn: &mut SqliteConnection,
) -> Result<ReportingMatrix, PersistenceError> {
    let edges: Vec<(i64, i64)> = position_managers::table
        .order((
            position_managers::position_id.asc(),
            position_managers::manager_position_id.asc(),
        ))
        .select((
            position_managers::position_id,
            position_managers::manager_position_id,
        ))
        .load(conn)?;

    ReportingMatrix::from_edges(edges)
        .map_err(|e| PersistenceError::DataCorruption(e.to_string()))
}

/// Retrieves a person by id.
///
/// # Errors
///
/// Returns `DomainError::PersonNotFound` (wrapped) if the person does not
/// exist.
pub fn get_person(conn: &mut SqliteConnection, person_id: i64) -> Result<Person, PersistenceError> {
    let row: PersonRow = persons::table
        .filter(persons::person_id.eq(person_id))
        .select(PersonRow::as_select())
        .first(conn)
        .optional()?
        .ok_or(PersistenceError::DomainViolation(
            DomainError::PersonNotFound(person_id),
        ))?;

    Ok(Person::with_id(
        row.person_id,
        row.first_name,
        row.last_name,
        dates::from_iso(&row.birthdate)?,
        row.national_id,
        row.has_user_account != 0,
    ))
}

/// Retrieves a position by id, with its manager set loaded.
///
/// # Errors
///
/// Returns `DomainError::PositionNotFound` (wrapped) if the position does
/// not exist.
pub fn get_position(
    conn: &mut SqliteConnection,
    position_id: i64,
) -> Result<Position, PersistenceError> {
    let row: PositionRow = positions::table
        .filter(positions::position_id.eq(position_id))
        .select(PositionRow::as_select())
        .first(conn)
        .optional()?
        .ok_or(PersistenceError::DomainViolation(
            DomainError::PositionNotFound(position_id),
        ))?;

    let manager_positions: BTreeSet<i64> = position_managers::table
        .filter(position_managers::position_id.eq(position_id))
        .select(position_managers::manager_position_id)
        .load::<i64>(conn)?
        .into_iter()
        .collect();

    let vacancies = row.vacancies.to_u32().ok_or_else(|| {
        PersistenceError::DataCorruption(format!(
            "Negative vacancy count {} on position {position_id}",
            row.vacancies
        ))
    })?;

    Ok(Position::with_id(
        row.position_id,
        row.department_id,
        row.job_title_id,
        vacancies,
        row.is_manager != 0,
        manager_positions,
    ))
}
