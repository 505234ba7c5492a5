// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Department-role listings.

use crate::data_models::DepartmentRoleRecord;
use crate::dates;
use crate::diesel_schema::{employment_department_roles, person_department_roles};
use crate::error::PersistenceError;
use diesel::prelude::*;
use orgledger_domain::HierarchicalRole;

type RoleTuple = (i64, i64, i64, String, String, Option<String>, Option<String>);

fn record_from(row: RoleTuple) -> Result<DepartmentRoleRecord, PersistenceError> {
    let (role_id, subject_id, department_id, hierarchical_role, start_date, end_date, notes) = row;
    Ok(DepartmentRoleRecord {
        role_id,
        subject_id,
        department_id,
        hierarchical_role,
        start_date: dates::from_iso(&start_date)?,
        end_date: dates::from_iso_opt(end_date.as_deref())?,
        notes,
    })
}

/// Lists the currently open person-scoped Manager roles.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `department_id` - Restrict to one department, or `None` for all
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn current_person_managers(
    conn: &mut SqliteConnection,
    department_id: Option<i64>,
) -> Result<Vec<DepartmentRoleRecord>, PersistenceError> {
    let mut query = person_department_roles::table
        .filter(
            person_department_roles::hierarchical_role.eq(HierarchicalRole::Manager.as_str()),
        )
        .filter(person_department_roles::end_date.is_null())
        .select((
            person_department_roles::role_id,
            person_department_roles::person_id,
            person_department_roles::department_id,
            person_department_roles::hierarchical_role,
            person_department_roles::start_date,
            person_department_roles::end_date,
            person_department_roles::notes,
        ))
        .into_boxed();

    if let Some(department_id) = department_id {
        query = query.filter(person_department_roles::department_id.eq(department_id));
    }

    let rows: Vec<RoleTuple> = query
        .order(person_department_roles::start_date.desc())
        .load(conn)?;

    rows.into_iter().map(record_from).collect()
}

/// Lists all person-scoped roles for one person, newest first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn person_roles(
    conn: &mut SqliteConnection,
    person_id: i64,
) -> Result<Vec<DepartmentRoleRecord>, PersistenceError> {
    let rows: Vec<RoleTuple> = person_department_roles::table
        .filter(person_department_roles::person_id.eq(person_id))
        .order(person_department_roles::start_date.desc())
        .select((
            person_department_roles::role_id,
            person_department_roles::person_id,
            person_department_roles::department_id,
            person_department_roles::hierarchical_role,
            person_department_roles::start_date,
            person_department_roles::end_date,
            person_department_roles::notes,
        ))
        .load(conn)?;

    rows.into_iter().map(record_from).collect()
}

/// Lists all employment-scoped roles for one employment, newest first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn employment_roles(
    conn: &mut SqliteConnection,
    employment_id: i64,
) -> Result<Vec<DepartmentRoleRecord>, PersistenceError> {
    let rows: Vec<RoleTuple> = employment_department_roles::table
        .filter(employment_department_roles::employment_id.eq(employment_id))
        .order(employment_department_roles::start_date.desc())
        .select((
            employment_department_roles::role_id,
            employment_department_roles::employment_id,
            employment_department_roles::department_id,
            employment_department_roles::hierarchical_role,
            employment_department_roles::start_date,
            employment_department_roles::end_date,
            employment_department_roles::notes,
        ))
        .load(conn)?;

    rows.into_iter().map(record_from).collect()
}
