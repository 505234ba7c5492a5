// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry dates and enum codes as strings; parsing happens at the
//! boundary so a bad value is an input error naming its field, never a
//! panic deeper down.

use serde::{Deserialize, Serialize};
use time::Date;

/// API request to create a department.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateDepartmentRequest {
    /// The department name (unique).
    pub name: String,
}

/// API response for a successful department creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDepartmentResponse {
    /// The canonical numeric identifier.
    pub department_id: i64,
    /// The department name.
    pub name: String,
    /// A success message.
    pub message: String,
}

/// API request to create a job title.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateJobTitleRequest {
    /// The title name (unique).
    pub name: String,
}

/// API response for a successful job title creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateJobTitleResponse {
    /// The canonical numeric identifier.
    pub job_title_id: i64,
    /// The title name.
    pub name: String,
    /// A success message.
    pub message: String,
}

/// API request to create a position.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePositionRequest {
    /// The owning department.
    pub department_id: i64,
    /// The job title (unique per department).
    pub job_title_id: i64,
    /// Declared seat capacity.
    pub vacancies: u32,
    /// Whether this is the department's manager seat.
    #[serde(default)]
    pub is_manager: bool,
    /// The positions this position reports to.
    #[serde(default)]
    pub manager_position_ids: Vec<i64>,
}

/// API response for a successful position creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePositionResponse {
    /// The canonical numeric identifier.
    pub position_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to create a person.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePersonRequest {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Date of birth (ISO 8601).
    pub birthdate: String,
    /// Primary national identity document, if recorded.
    pub national_id: Option<String>,
    /// Whether a user account is already provisioned.
    #[serde(default)]
    pub has_user_account: bool,
}

/// API response for a successful person creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePersonResponse {
    /// The canonical numeric identifier.
    pub person_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to create an employment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateEmploymentRequest {
    /// The person being hired.
    pub person_id: i64,
    /// The position being filled.
    pub position_id: i64,
    /// The contractual role code (manager, supervisor, employee).
    pub role: String,
    /// The contractual modality code (probation, permanent, `fixed_term`).
    pub employment_type: String,
    /// The initial status code.
    pub status: String,
    /// The contract start date (ISO 8601).
    pub hire_date: String,
    /// The contract end date, for fixed-term contracts (ISO 8601).
    pub end_date: Option<String>,
}

/// API response for a successful employment creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEmploymentResponse {
    /// The new employment id.
    pub employment_id: i64,
    /// Seats left on the position after this hire.
    pub remaining_capacity: u32,
    /// A success message.
    pub message: String,
}

/// API request to change an employment's status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangeEmploymentStatusRequest {
    /// The requested status code.
    pub new_status: String,
    /// Explicit end date (ISO 8601); preserved verbatim when supplied.
    pub end_date: Option<String>,
    /// Exit reason code, for terminal-like transitions.
    pub exit_reason: Option<String>,
    /// Free-text exit notes.
    pub exit_notes: Option<String>,
}

/// An employment as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentInfo {
    /// The employment id.
    pub employment_id: i64,
    /// The person bound by the contract.
    pub person_id: i64,
    /// The occupied position.
    pub position_id: i64,
    /// The contractual role code.
    pub role: String,
    /// The contractual modality code.
    pub employment_type: String,
    /// The current status code.
    pub current_status: String,
    /// The contract start date.
    pub hire_date: Date,
    /// The contract end date, if any.
    pub end_date: Option<Date>,
    /// The exit reason code, if any.
    pub exit_reason: Option<String>,
    /// Free-text exit notes.
    pub exit_notes: Option<String>,
}

/// API response for a successful employment removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteEmploymentResponse {
    /// The removed employment id.
    pub employment_id: i64,
    /// A success message.
    pub message: String,
}

/// API response for a supervisor lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetSupervisorResponse {
    /// The position whose supervisor was resolved.
    pub position_id: i64,
    /// The resolution: occupied, vacant, or unconfigured.
    pub supervisor: orgledger_persistence::SupervisorLookup,
}

/// API request to assign a person-scoped department role.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssignDepartmentRoleRequest {
    /// The person receiving the role.
    pub person_id: i64,
    /// The department.
    pub department_id: i64,
    /// "manager" or "employee".
    pub hierarchical_role: String,
    /// The date the role takes effect (ISO 8601).
    pub start_date: String,
    /// Free-text notes.
    pub notes: Option<String>,
}

/// API request to assign an employment-scoped department role.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssignEmploymentDepartmentRoleRequest {
    /// The employment receiving the role.
    pub employment_id: i64,
    /// The department.
    pub department_id: i64,
    /// "manager" or "employee".
    pub hierarchical_role: String,
    /// The date the role takes effect (ISO 8601).
    pub start_date: String,
    /// Free-text notes.
    pub notes: Option<String>,
}

/// API response for a successful role assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignRoleResponse {
    /// The new role row id.
    pub role_id: i64,
    /// A success message.
    pub message: String,
}

/// API response for an employment's status log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLogResponse {
    /// The employment.
    pub employment_id: i64,
    /// The log rows in append order.
    pub entries: Vec<orgledger_persistence::StatusLogRecord>,
}

/// API request to replace a position's manager set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SetPositionManagersRequest {
    /// The positions this position reports to.
    pub manager_position_ids: Vec<i64>,
}

/// API response for a successful position update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePositionResponse {
    /// The updated position.
    pub position_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to flag a person's user account as provisioned (or not).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SetAccountFlagRequest {
    /// Whether a user account exists for the person.
    pub has_user_account: bool,
}

/// API response for a successful account-flag update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetAccountFlagResponse {
    /// The updated person.
    pub person_id: i64,
    /// A success message.
    pub message: String,
}

/// One edge of the reporting matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingEdge {
    /// The reporting position.
    pub position_id: i64,
    /// The position it reports to.
    pub manager_position_id: i64,
}

/// API response for the organization-wide reporting matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingMatrixResponse {
    /// Every reporting edge, ordered by position id then manager id.
    pub edges: Vec<ReportingEdge>,
}

/// API response listing the currently open Manager roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentManagersResponse {
    /// The open Manager roles, newest first.
    pub managers: Vec<orgledger_persistence::DepartmentRoleRecord>,
}
