// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The hierarchy resolver.
//!
//! Read-side traversal of the manager-position matrix and the employment
//! ledger: who is my boss, who are my peers and subordinates, who occupies
//! a department's manager seat. Every traversal is single-hop over the
//! adjacency set; none recurses, so acyclicity of the matrix is never
//! assumed.

use crate::data_models::{OccupantInfo, OrgChart, SupervisorLookup};
use crate::diesel_schema::{
    departments, employments, job_titles, persons, position_managers, positions,
};
use crate::error::PersistenceError;
use diesel::prelude::*;
use orgledger_domain::EmploymentStatus;

/// The columns resolved for one occupant, plus the department id used for
/// peer grouping.
type OccupantTuple = (i64, i64, String, String, i64, String, String, i64);

fn occupant_from(row: OccupantTuple) -> (OccupantInfo, i64) {
    let (employment_id, person_id, first_name, last_name, position_id, title, department, department_id) =
        row;
    (
        OccupantInfo {
            employment_id,
            person_id,
            person_name: format!("{first_name} {last_name}"),
            position_id,
            position_title: title,
            department_name: department,
        },
        department_id,
    )
}

#[allow(clippy::type_complexity)]
fn occupant_selection() -> (
    employments::employment_id,
    persons::person_id,
    persons::first_name,
    persons::last_name,
    positions::position_id,
    job_titles::name,
    departments::name,
    departments::department_id,
) {
    (
        employments::employment_id,
        persons::person_id,
        persons::first_name,
        persons::last_name,
        positions::position_id,
        job_titles::name,
        departments::name,
        departments::department_id,
    )
}

/// Finds the first active-like occupant of a position, by employment id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn occupant_of_position(
    conn: &mut SqliteConnection,
    position_id: i64,
) -> Result<Option<OccupantInfo>, PersistenceError> {
    let row: Option<OccupantTuple> = employments::table
        .inner_join(persons::table)
        .inner_join(positions::table.inner_join(job_titles::table).inner_join(departments::table))
        .filter(employments::position_id.eq(position_id))
        .filter(employments::current_status.eq_any(EmploymentStatus::active_like_codes()))
        .order(employments::employment_id.asc())
        .select(occupant_selection())
        .first(conn)
        .optional()?;

    Ok(row.map(|row| occupant_from(row).0))
}

/// Returns the job title name of a position, for vacant-seat display.
fn position_title(
    conn: &mut SqliteConnection,
    position_id: i64,
) -> Result<String, PersistenceError> {
    Ok(positions::table
        .inner_join(job_titles::table)
        .filter(positions::position_id.eq(position_id))
        .select(job_titles::name)
        .first(conn)?)
}

/// Resolves the supervisor of a position over its manager set.
///
/// Walks the manager positions in ascending id order and returns the first
/// active-like occupant found. When the set is configured but nobody
/// occupies any of its positions, the result names the first manager
/// position's title rather than nothing: callers must distinguish "no
/// manager configured" from "manager seat unfilled".
///
/// # Errors
///
/// Returns an error if a query fails.
pub fn supervisor_of(
    conn: &mut SqliteConnection,
    position_id: i64,
) -> Result<SupervisorLookup, PersistenceError> {
    let manager_ids: Vec<i64> = position_managers::table
        .filter(position_managers::position_id.eq(position_id))
        .order(position_managers::manager_position_id.asc())
        .select(position_managers::manager_position_id)
        .load(conn)?;

    let Some(first_manager) = manager_ids.first().copied() else {
        return Ok(SupervisorLookup::Unconfigured);
    };

    for manager_position_id in &manager_ids {
        if let Some(occupant) = occupant_of_position(conn, *manager_position_id)? {
            return Ok(SupervisorLookup::Occupied(occupant));
        }
    }

    Ok(SupervisorLookup::Vacant {
        position_id: first_manager,
        position_title: position_title(conn, first_manager)?,
    })
}

/// Builds a person's org chart: self, boss, peers, subordinates.
///
/// The person's own employment is the first active-like row by employment
/// id. Peers are other active-like employments in the same department;
/// subordinates are active-like employments whose position reports to the
/// person's position.
///
/// # Errors
///
/// Returns `NotFound` when the person has no active-like employment.
pub fn org_chart_for(
    conn: &mut SqliteConnection,
    person_id: i64,
) -> Result<OrgChart, PersistenceError> {
    let me_row: Option<OccupantTuple> = employments::table
        .inner_join(persons::table)
        .inner_join(positions::table.inner_join(job_titles::table).inner_join(departments::table))
        .filter(persons::person_id.eq(person_id))
        .filter(employments::current_status.eq_any(EmploymentStatus::active_like_codes()))
        .order(employments::employment_id.asc())
        .select(occupant_selection())
        .first(conn)
        .optional()?;

    let Some(me_row) = me_row else {
        return Err(PersistenceError::NotFound(format!(
            "Person {person_id} has no active employment"
        )));
    };
    let (me, department_id) = occupant_from(me_row);

    let peer_rows: Vec<OccupantTuple> = employments::table
        .inner_join(persons::table)
        .inner_join(positions::table.inner_join(job_titles::table).inner_join(departments::table))
        .filter(departments::department_id.eq(department_id))
        .filter(employments::current_status.eq_any(EmploymentStatus::active_like_codes()))
        .filter(employments::employment_id.ne(me.employment_id))
        .order(employments::employment_id.asc())
        .select(occupant_selection())
        .load(conn)?;
    let peers = peer_rows
        .into_iter()
        .map(|row| occupant_from(row).0)
        .collect();

    let reporting_positions = position_managers::table
        .filter(position_managers::manager_position_id.eq(me.position_id))
        .select(position_managers::position_id);
    let subordinate_rows: Vec<OccupantTuple> = employments::table
        .inner_join(persons::table)
        .inner_join(positions::table.inner_join(job_titles::table).inner_join(departments::table))
        .filter(employments::position_id.eq_any(reporting_positions))
        .filter(employments::current_status.eq_any(EmploymentStatus::active_like_codes()))
        .order(employments::employment_id.asc())
        .select(occupant_selection())
        .load(conn)?;
    let subordinates = subordinate_rows
        .into_iter()
        .map(|row| occupant_from(row).0)
        .collect();

    let boss = supervisor_of(conn, me.position_id)?;

    Ok(OrgChart {
        me,
        boss,
        peers,
        subordinates,
    })
}

/// Finds the occupant of a department's manager seat.
///
/// The manager seat is the department's position flagged `is_manager`
/// (lowest position id when several are flagged). Same vacant-versus-
/// unconfigured distinction as `supervisor_of`.
///
/// # Errors
///
/// Returns an error if a query fails.
pub fn department_manager_occupant(
    conn: &mut SqliteConnection,
    department_id: i64,
) -> Result<SupervisorLookup, PersistenceError> {
    let manager_position: Option<i64> = positions::table
        .filter(positions::department_id.eq(department_id))
        .filter(positions::is_manager.eq(1))
        .order(positions::position_id.asc())
        .select(positions::position_id)
        .first(conn)
        .optional()?;

    let Some(manager_position_id) = manager_position else {
        return Ok(SupervisorLookup::Unconfigured);
    };

    occupant_of_position(conn, manager_position_id)?.map_or_else(
        || {
            Ok(SupervisorLookup::Vacant {
                position_id: manager_position_id,
                position_title: position_title(conn, manager_position_id)?,
            })
        },
        |occupant| Ok(SupervisorLookup::Occupied(occupant)),
    )
}
