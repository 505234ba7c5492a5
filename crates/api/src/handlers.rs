// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers translate requests into domain types, call the persistence
//! layer (which owns the transactions), and translate every failure into an
//! `ApiError`. Nothing here retries: capacity and duplicate-contract
//! failures are expected, caller-recoverable conditions.

use crate::date_rules::{parse_iso_date, parse_optional_iso_date};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    AssignDepartmentRoleRequest, AssignEmploymentDepartmentRoleRequest, AssignRoleResponse,
    ChangeEmploymentStatusRequest, CreateDepartmentRequest, CreateDepartmentResponse,
    CreateEmploymentRequest, CreateEmploymentResponse, CreateJobTitleRequest,
    CreateJobTitleResponse, CreatePersonRequest, CreatePersonResponse, CreatePositionRequest,
    CreatePositionResponse, CurrentManagersResponse, DeleteEmploymentResponse, EmploymentInfo,
    GetSupervisorResponse, ReportingEdge, ReportingMatrixResponse, SetAccountFlagRequest,
    SetAccountFlagResponse, SetPositionManagersRequest, StatusLogResponse,
    UpdatePositionResponse,
};
use orgledger::Command;
use orgledger_domain::{
    DomainError, Employment, EmploymentRole, EmploymentStatus, EmploymentType, ExitReason,
    HierarchicalRole, Person,
};
use orgledger_persistence::{DashboardStats, OrgChart, Persistence, SupervisorLookup};
use std::collections::BTreeSet;
use std::str::FromStr;
use time::Date;
use tracing::info;

/// Parses a request code into its domain enum, translating the failure
/// into an input error naming the field.
fn translate_code<T>(value: &str) -> Result<T, ApiError>
where
    T: FromStr<Err = DomainError>,
{
    value.parse().map_err(translate_domain_error)
}

fn employment_info(employment: &Employment, employment_id: i64) -> EmploymentInfo {
    EmploymentInfo {
        employment_id: employment.employment_id.unwrap_or(employment_id),
        person_id: employment.person_id,
        position_id: employment.position_id,
        role: employment.role.as_str().to_string(),
        employment_type: employment.employment_type.as_str().to_string(),
        current_status: employment.current_status.as_str().to_string(),
        hire_date: employment.hire_date,
        end_date: employment.end_date,
        exit_reason: employment.exit_reason.map(|r| r.as_str().to_string()),
        exit_notes: employment.exit_notes.clone(),
    }
}

/// Creates a department.
///
/// # Errors
///
/// Returns an error if the name is not unique.
pub fn create_department(
    persistence: &mut Persistence,
    request: CreateDepartmentRequest,
) -> Result<CreateDepartmentResponse, ApiError> {
    let department_id = persistence
        .create_department(&request.name)
        .map_err(translate_persistence_error)?;
    Ok(CreateDepartmentResponse {
        department_id,
        name: request.name.clone(),
        message: format!("Department '{}' created", request.name),
    })
}

/// Creates a job title.
///
/// # Errors
///
/// Returns an error if the name is not unique.
pub fn create_job_title(
    persistence: &mut Persistence,
    request: CreateJobTitleRequest,
) -> Result<CreateJobTitleResponse, ApiError> {
    let job_title_id = persistence
        .create_job_title(&request.name)
        .map_err(translate_persistence_error)?;
    Ok(CreateJobTitleResponse {
        job_title_id,
        name: request.name.clone(),
        message: format!("Job title '{}' created", request.name),
    })
}

/// Creates a position with its declared capacity and manager set.
///
/// # Errors
///
/// Returns `self_reporting_position` when the manager set contains the
/// position itself (impossible on creation, relevant on later edits), or a
/// not-found error for missing references.
pub fn create_position(
    persistence: &mut Persistence,
    request: CreatePositionRequest,
) -> Result<CreatePositionResponse, ApiError> {
    let manager_positions: BTreeSet<i64> = request.manager_position_ids.iter().copied().collect();
    let position_id = persistence
        .create_position(
            request.department_id,
            request.job_title_id,
            request.vacancies,
            request.is_manager,
            &manager_positions,
        )
        .map_err(translate_persistence_error)?;
    Ok(CreatePositionResponse {
        position_id,
        message: format!(
            "Position created with {} seat(s) in department {}",
            request.vacancies, request.department_id
        ),
    })
}

/// Replaces a position's manager set.
///
/// # Errors
///
/// Returns a `self_reporting_position` rule violation when the set
/// contains the position itself.
pub fn set_position_managers(
    persistence: &mut Persistence,
    position_id: i64,
    request: SetPositionManagersRequest,
) -> Result<UpdatePositionResponse, ApiError> {
    let manager_positions: BTreeSet<i64> = request.manager_position_ids.iter().copied().collect();
    persistence
        .set_position_managers(position_id, &manager_positions)
        .map_err(translate_persistence_error)?;
    Ok(UpdatePositionResponse {
        position_id,
        message: format!(
            "Position {position_id} now reports to {} position(s)",
            manager_positions.len()
        ),
    })
}

/// Flags a person's user account as provisioned (or not).
///
/// # Errors
///
/// Returns a not-found error for a missing person.
pub fn set_person_account_flag(
    persistence: &mut Persistence,
    person_id: i64,
    request: SetAccountFlagRequest,
) -> Result<SetAccountFlagResponse, ApiError> {
    persistence
        .set_person_account_flag(person_id, request.has_user_account)
        .map_err(translate_persistence_error)?;
    Ok(SetAccountFlagResponse {
        person_id,
        message: format!(
            "Person {person_id} account flag set to {}",
            request.has_user_account
        ),
    })
}

/// Creates a person.
///
/// # Errors
///
/// Returns an input error for a malformed birthdate.
pub fn create_person(
    persistence: &mut Persistence,
    request: CreatePersonRequest,
) -> Result<CreatePersonResponse, ApiError> {
    let birthdate = parse_iso_date("birthdate", &request.birthdate)?;
    let person = Person::new(
        request.first_name.clone(),
        request.last_name.clone(),
        birthdate,
        request.national_id.clone(),
        request.has_user_account,
    );
    let person_id = persistence
        .create_person(&person)
        .map_err(translate_persistence_error)?;
    Ok(CreatePersonResponse {
        person_id,
        message: format!("Person '{}' created", person.full_name()),
    })
}

/// Creates an employment binding a person to a position.
///
/// # Errors
///
/// * `duplicate_active_contract` / `capacity_exceeded` rule violations
/// * input errors for malformed codes or dates
/// * not-found errors for missing person or position
pub fn create_employment(
    persistence: &mut Persistence,
    request: CreateEmploymentRequest,
) -> Result<CreateEmploymentResponse, ApiError> {
    let role: EmploymentRole = translate_code(&request.role)?;
    let employment_type: EmploymentType = translate_code(&request.employment_type)?;
    let status: EmploymentStatus = translate_code(&request.status)?;
    let hire_date = parse_iso_date("hire_date", &request.hire_date)?;
    let end_date = parse_optional_iso_date("end_date", request.end_date.as_deref())?;

    let command = Command::Hire {
        person_id: request.person_id,
        position_id: request.position_id,
        role,
        employment_type,
        status,
        hire_date,
        end_date,
    };

    let employment_id = persistence
        .create_employment(command)
        .map_err(translate_persistence_error)?;
    let report = persistence
        .seat_report(request.position_id)
        .map_err(translate_persistence_error)?;

    info!(employment_id, person_id = request.person_id, "Employment created");
    Ok(CreateEmploymentResponse {
        employment_id,
        remaining_capacity: report.remaining,
        message: format!(
            "Employment {employment_id} created for person {} on position {}",
            request.person_id, request.position_id
        ),
    })
}

/// Changes an employment's status.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `employment_id` - The employment to transition
/// * `request` - The requested status and optional exit record
/// * `today` - The calling day, used for end-date stamping
///
/// # Errors
///
/// * `capacity_exceeded` / `duplicate_active_contract` rule violations on
///   reactivation
/// * input errors for malformed codes or dates
/// * a not-found error for a missing employment
pub fn change_employment_status(
    persistence: &mut Persistence,
    employment_id: i64,
    request: ChangeEmploymentStatusRequest,
    today: Date,
) -> Result<EmploymentInfo, ApiError> {
    let new_status: EmploymentStatus = translate_code(&request.new_status)?;
    let exit_reason: Option<ExitReason> = request
        .exit_reason
        .as_deref()
        .map(translate_code)
        .transpose()?;
    let end_date = parse_optional_iso_date("end_date", request.end_date.as_deref())?;

    let command = Command::ChangeStatus {
        employment_id,
        new_status,
        end_date,
        exit_reason,
        exit_notes: request.exit_notes,
    };

    let employment = persistence
        .change_employment_status(command, today)
        .map_err(translate_persistence_error)?;

    Ok(employment_info(&employment, employment_id))
}

/// Removes an employment row, releasing its seat when active-like.
///
/// # Errors
///
/// Returns a not-found error for a missing employment.
pub fn delete_employment(
    persistence: &mut Persistence,
    employment_id: i64,
) -> Result<DeleteEmploymentResponse, ApiError> {
    persistence
        .delete_employment(employment_id)
        .map_err(translate_persistence_error)?;
    Ok(DeleteEmploymentResponse {
        employment_id,
        message: format!("Employment {employment_id} deleted"),
    })
}

/// Resolves the supervisor of a position.
///
/// # Errors
///
/// Returns an internal error if the lookup fails.
pub fn get_supervisor(
    persistence: &mut Persistence,
    position_id: i64,
) -> Result<GetSupervisorResponse, ApiError> {
    let supervisor = persistence
        .supervisor_of(position_id)
        .map_err(translate_persistence_error)?;
    Ok(GetSupervisorResponse {
        position_id,
        supervisor,
    })
}

/// Builds a person's org chart.
///
/// # Errors
///
/// Returns a not-found error when the person has no active employment.
pub fn get_org_chart(
    persistence: &mut Persistence,
    person_id: i64,
) -> Result<OrgChart, ApiError> {
    persistence
        .org_chart_for(person_id)
        .map_err(translate_persistence_error)
}

/// Finds the occupant of a department's manager seat.
///
/// # Errors
///
/// Returns an internal error if the lookup fails.
pub fn get_department_manager(
    persistence: &mut Persistence,
    department_id: i64,
) -> Result<SupervisorLookup, ApiError> {
    persistence
        .department_manager_occupant(department_id)
        .map_err(translate_persistence_error)
}

/// Computes the dashboard KPI aggregation as of `today`.
///
/// # Errors
///
/// Returns an internal error if a query fails.
pub fn get_dashboard_stats(
    persistence: &mut Persistence,
    today: Date,
) -> Result<DashboardStats, ApiError> {
    persistence
        .dashboard_stats(today)
        .map_err(translate_persistence_error)
}

/// Assigns a person-scoped department role.
///
/// # Errors
///
/// Returns a `manager_conflict` rule violation when another person holds
/// the department's open Manager role.
pub fn assign_department_role(
    persistence: &mut Persistence,
    request: AssignDepartmentRoleRequest,
    today: Date,
) -> Result<AssignRoleResponse, ApiError> {
    let hierarchical_role: HierarchicalRole = translate_code(&request.hierarchical_role)?;
    let start_date = parse_iso_date("start_date", &request.start_date)?;

    let role_id = persistence
        .assign_person_department_role(
            request.person_id,
            request.department_id,
            hierarchical_role,
            start_date,
            request.notes,
            today,
        )
        .map_err(translate_persistence_error)?;

    Ok(AssignRoleResponse {
        role_id,
        message: format!(
            "Role '{hierarchical_role}' assigned to person {} in department {}",
            request.person_id, request.department_id
        ),
    })
}

/// Assigns an employment-scoped department role.
///
/// # Errors
///
/// Returns a `manager_conflict` rule violation when another employment
/// holds the department's open Manager role.
pub fn assign_employment_department_role(
    persistence: &mut Persistence,
    request: AssignEmploymentDepartmentRoleRequest,
    today: Date,
) -> Result<AssignRoleResponse, ApiError> {
    let hierarchical_role: HierarchicalRole = translate_code(&request.hierarchical_role)?;
    let start_date = parse_iso_date("start_date", &request.start_date)?;

    let role_id = persistence
        .assign_employment_department_role(
            request.employment_id,
            request.department_id,
            hierarchical_role,
            start_date,
            request.notes,
            today,
        )
        .map_err(translate_persistence_error)?;

    Ok(AssignRoleResponse {
        role_id,
        message: format!(
            "Role '{hierarchical_role}' assigned to employment {} in department {}",
            request.employment_id, request.department_id
        ),
    })
}

/// Lists an employment's status log in append order.
///
/// # Errors
///
/// Returns a not-found error for a missing employment.
pub fn list_status_log(
    persistence: &mut Persistence,
    employment_id: i64,
) -> Result<StatusLogResponse, ApiError> {
    let entries = persistence
        .status_log(employment_id)
        .map_err(translate_persistence_error)?;
    Ok(StatusLogResponse {
        employment_id,
        entries,
    })
}

/// Returns the organization-wide reporting matrix for chart rendering.
///
/// # Errors
///
/// Returns an internal error if the edge query fails.
pub fn get_reporting_matrix(
    persistence: &mut Persistence,
) -> Result<ReportingMatrixResponse, ApiError> {
    let matrix = persistence
        .reporting_matrix()
        .map_err(translate_persistence_error)?;
    Ok(ReportingMatrixResponse {
        edges: matrix
            .edges()
            .into_iter()
            .map(|(position_id, manager_position_id)| ReportingEdge {
                position_id,
                manager_position_id,
            })
            .collect(),
    })
}

/// Lists the currently open person-scoped Manager roles.
///
/// # Errors
///
/// Returns an internal error if the query fails.
pub fn list_current_managers(
    persistence: &mut Persistence,
    department_id: Option<i64>,
) -> Result<CurrentManagersResponse, ApiError> {
    let managers = persistence
        .current_person_managers(department_id)
        .map_err(translate_persistence_error)?;
    Ok(CurrentManagersResponse { managers })
}
