// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Department-role assignment.
//!
//! Two tables carry the same interval semantics: person-scoped roles (the
//! canonical matrix-organization tagging) and their contract-scoped
//! sibling. The Manager role is exclusive per department: a conflicting
//! assignment for a *different* subject is rejected, while a new role for
//! the *same* subject supersedes the prior open one by closing it the day
//! before the new start.

use crate::data_models::{NewEmploymentDepartmentRole, NewPersonDepartmentRole};
use crate::dates;
use crate::diesel_schema::{employment_department_roles, person_department_roles};
use crate::error::PersistenceError;
use crate::queries;
use diesel::prelude::*;
use orgledger_domain::{DepartmentRole, DomainError, HierarchicalRole};
use time::Date;
use tracing::debug;

/// Computes the supersede end date: the day before the new start.
fn supersede_end(start_date: Date) -> Result<String, PersistenceError> {
    let end = start_date
        .previous_day()
        .ok_or(DomainError::DateArithmeticOverflow {
            operation: String::from("computing the superseded role's end date"),
        })?;
    dates::to_iso(end)
}

/// Finds a conflicting Manager role among candidate rows.
///
/// Candidates are Manager rows held by *other* subjects; the interval check
/// (started, not yet ended, open end never ends) is the domain's
/// `DepartmentRole::covers`.
fn manager_conflict(
    department_id: i64,
    candidates: Vec<(i64, String, Option<String>)>,
    today: Date,
) -> Result<Option<i64>, PersistenceError> {
    for (holder_id, start_date, end_date) in candidates {
        let mut role = DepartmentRole::new(
            department_id,
            HierarchicalRole::Manager,
            dates::from_iso(&start_date)?,
            None,
        );
        role.end_date = dates::from_iso_opt(end_date.as_deref())?;
        if role.covers(today) {
            return Ok(Some(holder_id));
        }
    }
    Ok(None)
}

/// Assigns a person-scoped department role.
///
/// A Manager assignment fails with `ManagerConflict` when another person
/// holds an open Manager role in the department covering today. Otherwise
/// any open role for the same (person, department) is closed with
/// `end_date = start_date - 1 day` before the new row is inserted.
///
/// # Returns
///
/// The new role row id.
///
/// # Errors
///
/// * `DomainError::PersonNotFound` / `DepartmentNotFound` (wrapped)
/// * `DomainError::ManagerConflict` (wrapped)
/// * `DomainError::DateArithmeticOverflow` (wrapped) on an impossible
///   supersede date
pub fn assign_person_department_role(
    conn: &mut SqliteConnection,
    person_id: i64,
    department_id: i64,
    hierarchical_role: HierarchicalRole,
    start_date: Date,
    notes: Option<String>,
    today: Date,
) -> Result<i64, PersistenceError> {
    let _ = queries::org::get_person(conn, person_id)?;
    queries::org::ensure_department(conn, department_id)?;

    if hierarchical_role == HierarchicalRole::Manager {
        let candidates: Vec<(i64, String, Option<String>)> = person_department_roles::table
            .filter(person_department_roles::department_id.eq(department_id))
            .filter(
                person_department_roles::hierarchical_role.eq(HierarchicalRole::Manager.as_str()),
            )
            .filter(person_department_roles::person_id.ne(person_id))
            .select((
                person_department_roles::person_id,
                person_department_roles::start_date,
                person_department_roles::end_date,
            ))
            .load(conn)?;

        if let Some(holder_id) = manager_conflict(department_id, candidates, today)? {
            return Err(PersistenceError::DomainViolation(
                DomainError::ManagerConflict {
                    department_id,
                    holder_id,
                },
            ));
        }
    }

    let closed = diesel::update(
        person_department_roles::table
            .filter(person_department_roles::person_id.eq(person_id))
            .filter(person_department_roles::department_id.eq(department_id))
            .filter(person_department_roles::end_date.is_null()),
    )
    .set(person_department_roles::end_date.eq(supersede_end(start_date)?))
    .execute(conn)?;

    if closed > 0 {
        debug!(person_id, department_id, closed, "Superseded open department roles");
    }

    let record = NewPersonDepartmentRole {
        person_id,
        department_id,
        hierarchical_role: hierarchical_role.as_str().to_string(),
        start_date: dates::to_iso(start_date)?,
        end_date: None,
        notes,
    };
    diesel::insert_into(person_department_roles::table)
        .values(&record)
        .execute(conn)?;
    crate::backend::get_last_insert_rowid(conn)
}

/// Assigns an employment-scoped department role.
///
/// Same conflict and supersede semantics as the person-scoped table, keyed
/// by employment.
///
/// # Returns
///
/// The new role row id.
///
/// # Errors
///
/// * `DomainError::EmploymentNotFound` / `DepartmentNotFound` (wrapped)
/// * `DomainError::ManagerConflict` (wrapped)
/// * `DomainError::DateArithmeticOverflow` (wrapped)
pub fn assign_employment_department_role(
    conn: &mut SqliteConnection,
    employment_id: i64,
    department_id: i64,
    hierarchical_role: HierarchicalRole,
    start_date: Date,
    notes: Option<String>,
    today: Date,
) -> Result<i64, PersistenceError> {
    let _ = queries::employment::get_employment(conn, employment_id)?;
    queries::org::ensure_department(conn, department_id)?;

    if hierarchical_role == HierarchicalRole::Manager {
        let candidates: Vec<(i64, String, Option<String>)> = employment_department_roles::table
            .filter(employment_department_roles::department_id.eq(department_id))
            .filter(
                employment_department_roles::hierarchical_role
                    .eq(HierarchicalRole::Manager.as_str()),
            )
            .filter(employment_department_roles::employment_id.ne(employment_id))
            .select((
                employment_department_roles::employment_id,
                employment_department_roles::start_date,
                employment_department_roles::end_date,
            ))
            .load(conn)?;

        if let Some(holder_id) = manager_conflict(department_id, candidates, today)? {
            return Err(PersistenceError::DomainViolation(
                DomainError::ManagerConflict {
                    department_id,
                    holder_id,
                },
            ));
        }
    }

    diesel::update(
        employment_department_roles::table
            .filter(employment_department_roles::employment_id.eq(employment_id))
            .filter(employment_department_roles::department_id.eq(department_id))
            .filter(employment_department_roles::end_date.is_null()),
    )
    .set(employment_department_roles::end_date.eq(supersede_end(start_date)?))
    .execute(conn)?;

    let record = NewEmploymentDepartmentRole {
        employment_id,
        department_id,
        hierarchical_role: hierarchical_role.as_str().to_string(),
        start_date: dates::to_iso(start_date)?,
        end_date: None,
        notes,
    };
    diesel::insert_into(employment_department_roles::table)
        .values(&record)
        .execute(conn)?;
    crate::backend::get_last_insert_rowid(conn)
}
