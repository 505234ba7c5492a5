// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog mutations: departments, job titles, positions, the reporting
//! matrix, and persons.
//!
//! These rows are owned by organizational-design collaborators; the engine
//! needs them only as reference data, so the mutations are thin inserts
//! with uniqueness enforced by the schema.

use crate::backend::get_last_insert_rowid;
use crate::dates;
use crate::diesel_schema::{
    departments, job_titles, persons, position_managers, positions,
};
use crate::error::PersistenceError;
use diesel::prelude::*;
use num_traits::cast::ToPrimitive;
use orgledger_domain::{Person, validate_manager_set};
use std::collections::BTreeSet;
use tracing::debug;

/// Creates a department.
///
/// # Errors
///
/// Returns an error if the name is not unique or the insert fails.
pub fn create_department(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(departments::table)
        .values(departments::name.eq(name))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Creates a job title.
///
/// # Errors
///
/// Returns an error if the name is not unique or the insert fails.
pub fn create_job_title(conn: &mut SqliteConnection, name: &str) -> Result<i64, PersistenceError> {
    diesel::insert_into(job_titles::table)
        .values(job_titles::name.eq(name))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Creates a position with its declared capacity.
///
/// The (department, job title) pair is unique per the schema. The manager
/// set is configured separately via `set_position_managers`.
///
/// # Errors
///
/// * `DomainError::DepartmentNotFound` / `JobTitleNotFound` (wrapped)
/// * a database error if the pair is duplicated
pub fn create_position(
    conn: &mut SqliteConnection,
    department_id: i64,
    job_title_id: i64,
    vacancies: u32,
    is_manager: bool,
) -> Result<i64, PersistenceError> {
    crate::queries::org::ensure_department(conn, department_id)?;
    crate::queries::org::ensure_job_title(conn, job_title_id)?;

    let vacancies_i32 = vacancies.to_i32().ok_or_else(|| {
        PersistenceError::Other(format!("Vacancy count {vacancies} out of range"))
    })?;

    diesel::insert_into(positions::table)
        .values((
            positions::department_id.eq(department_id),
            positions::job_title_id.eq(job_title_id),
            positions::vacancies.eq(vacancies_i32),
            positions::is_manager.eq(i32::from(is_manager)),
        ))
        .execute(conn)?;
    let position_id = get_last_insert_rowid(conn)?;
    debug!(position_id, department_id, job_title_id, vacancies, "Created position");
    Ok(position_id)
}

/// Replaces a position's manager set.
///
/// # Errors
///
/// Returns `DomainError::SelfReportingPosition` (wrapped) if the set
/// contains the position itself, or a database error if an edge references
/// a missing position.
pub fn set_position_managers(
    conn: &mut SqliteConnection,
    position_id: i64,
    manager_positions: &BTreeSet<i64>,
) -> Result<(), PersistenceError> {
    validate_manager_set(position_id, manager_positions)?;

    diesel::delete(
        position_managers::table.filter(position_managers::position_id.eq(position_id)),
    )
    .execute(conn)?;

    for &manager_position_id in manager_positions {
        diesel::insert_into(position_managers::table)
            .values((
                position_managers::position_id.eq(position_id),
                position_managers::manager_position_id.eq(manager_position_id),
            ))
            .execute(conn)?;
    }
    Ok(())
}

/// Creates a person.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_person(conn: &mut SqliteConnection, person: &Person) -> Result<i64, PersistenceError> {
    diesel::insert_into(persons::table)
        .values((
            persons::first_name.eq(&person.first_name),
            persons::last_name.eq(&person.last_name),
            persons::birthdate.eq(dates::to_iso(person.birthdate)?),
            persons::national_id.eq(person.national_id.as_deref()),
            persons::has_user_account.eq(i32::from(person.has_user_account)),
        ))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Sets whether a person has a provisioned user account.
///
/// # Errors
///
/// Returns `NotFound` if the person does not exist.
pub fn set_person_account_flag(
    conn: &mut SqliteConnection,
    person_id: i64,
    has_user_account: bool,
) -> Result<(), PersistenceError> {
    let rows_affected = diesel::update(persons::table.filter(persons::person_id.eq(person_id)))
        .set(persons::has_user_account.eq(i32::from(has_user_account)))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Person {person_id} not found"
        )));
    }
    Ok(())
}
