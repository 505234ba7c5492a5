// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Public result shapes and Diesel insert structs.
//!
//! Queryable row structs stay private to the query modules that use them;
//! the types here are either inserted into tables or returned to callers.

use crate::diesel_schema::{
    employment_department_roles, employment_status_log, employments, person_department_roles,
};
use diesel::prelude::*;
use serde::Serialize;
use time::Date;

/// Diesel Insertable struct for new employment rows.
#[derive(Insertable)]
#[diesel(table_name = employments)]
pub struct NewEmployment {
    pub person_id: i64,
    pub position_id: i64,
    pub role: String,
    pub employment_type: String,
    pub current_status: String,
    pub hire_date: String,
    pub end_date: Option<String>,
    pub exit_reason: Option<String>,
    pub exit_notes: Option<String>,
}

/// Diesel Insertable struct for new status-log rows.
#[derive(Insertable)]
#[diesel(table_name = employment_status_log)]
pub struct NewStatusLog {
    pub employment_id: i64,
    pub status: String,
    pub start_date: String,
    pub reason: String,
}

/// Diesel Insertable struct for new person-scoped department roles.
#[derive(Insertable)]
#[diesel(table_name = person_department_roles)]
pub struct NewPersonDepartmentRole {
    pub person_id: i64,
    pub department_id: i64,
    pub hierarchical_role: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub notes: Option<String>,
}

/// Diesel Insertable struct for new employment-scoped department roles.
#[derive(Insertable)]
#[diesel(table_name = employment_department_roles)]
pub struct NewEmploymentDepartmentRole {
    pub employment_id: i64,
    pub department_id: i64,
    pub hierarchical_role: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub notes: Option<String>,
}

/// A seat-occupancy report for one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeatReport {
    /// The position's declared capacity.
    pub vacancies: u32,
    /// Fresh count of active-like employments referencing the position.
    pub occupied: u32,
    /// `vacancies - occupied`, saturating at zero.
    pub remaining: u32,
}

/// An active-like occupant of a position, resolved with display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OccupantInfo {
    /// The occupying employment.
    pub employment_id: i64,
    /// The occupying person.
    pub person_id: i64,
    /// "First Last" display name.
    pub person_name: String,
    /// The occupied position.
    pub position_id: i64,
    /// The position's job title name.
    pub position_title: String,
    /// The position's department name.
    pub department_name: String,
}

/// The result of resolving a supervisor or a department manager seat.
///
/// Callers must distinguish "no manager position configured" from
/// "manager position configured but unfilled".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SupervisorLookup {
    /// No manager position is configured.
    Unconfigured,
    /// A manager position is configured but has no active-like occupant.
    Vacant {
        /// The unfilled manager position.
        position_id: i64,
        /// Its job title name, for display.
        position_title: String,
    },
    /// The manager position's first active-like occupant.
    Occupied(OccupantInfo),
}

/// A person's place in the organization: self, boss, peers, subordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrgChart {
    /// The person's own active-like employment.
    pub me: OccupantInfo,
    /// The occupant of the position's first manager position, if any.
    pub boss: SupervisorLookup,
    /// Other active-like employments in the same department.
    pub peers: Vec<OccupantInfo>,
    /// Active-like employments whose position reports to this person's
    /// position.
    pub subordinates: Vec<OccupantInfo>,
}

/// One department's share of the active headcount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentHeadcount {
    /// The department name.
    pub department_name: String,
    /// Active-like employments in the department.
    pub count: u32,
}

/// An active contract whose end date falls inside the lookahead window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiringContract {
    /// The expiring employment.
    pub employment_id: i64,
    /// "First Last" display name.
    pub person_name: String,
    /// The person's primary national identity document, if recorded.
    pub person_document: Option<String>,
    /// The contract end date.
    pub end_date: Date,
}

/// Read-only aggregation over active-like employments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    /// Count of active-like employments.
    pub headcount: u32,
    /// Active-like employments hired on or after the first of the month.
    pub new_hires_this_month: u32,
    /// Terminal-like employments ended on or after the first of the month.
    pub exits_this_month: u32,
    /// Active-like employments whose person has no user account yet.
    pub pending_accounts: u32,
    /// Top departments by active headcount, descending.
    pub department_distribution: Vec<DepartmentHeadcount>,
    /// Active contracts ending within the next 30 days.
    pub contracts_expiring_soon: Vec<ExpiringContract>,
}

/// One row of an employment's append-only status log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLogRecord {
    /// The log row id.
    pub log_id: i64,
    /// The employment the row belongs to.
    pub employment_id: i64,
    /// The status as of this row.
    pub status: String,
    /// The date the status took effect.
    pub start_date: Date,
    /// The free-text reason.
    pub reason: String,
}

/// One department-role row, person- or employment-scoped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentRoleRecord {
    /// The role row id.
    pub role_id: i64,
    /// The subject id: a person or an employment, per the owning table.
    pub subject_id: i64,
    /// The department.
    pub department_id: i64,
    /// "manager" or "employee".
    pub hierarchical_role: String,
    /// The date the role takes effect.
    pub start_date: Date,
    /// The date the role ended; `None` while open.
    pub end_date: Option<Date>,
    /// Free-text notes.
    pub notes: Option<String>,
}
