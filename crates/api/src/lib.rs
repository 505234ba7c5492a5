// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod date_rules;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use date_rules::{DateRuleError, parse_iso_date, parse_optional_iso_date};
pub use error::{ApiError, translate_core_error, translate_domain_error, translate_persistence_error};
pub use handlers::{
    assign_department_role, assign_employment_department_role, change_employment_status,
    create_department, create_employment, create_job_title, create_person, create_position,
    delete_employment, get_dashboard_stats, get_department_manager, get_org_chart,
    get_reporting_matrix, get_supervisor, list_current_managers, list_status_log,
    set_person_account_flag, set_position_managers,
};
pub use request_response::{
    AssignDepartmentRoleRequest, AssignEmploymentDepartmentRoleRequest,
    AssignRoleResponse, ChangeEmploymentStatusRequest, CreateDepartmentRequest,
    CreateDepartmentResponse, CreateEmploymentRequest, CreateEmploymentResponse,
    CreateJobTitleRequest, CreateJobTitleResponse, CreatePersonRequest, CreatePersonResponse,
    CreatePositionRequest, CreatePositionResponse, CurrentManagersResponse,
    DeleteEmploymentResponse, EmploymentInfo, GetSupervisorResponse, ReportingEdge,
    ReportingMatrixResponse, SetAccountFlagRequest, SetAccountFlagResponse,
    SetPositionManagersRequest, StatusLogResponse, UpdatePositionResponse,
};
