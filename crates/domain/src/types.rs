// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::status::{EmploymentStatus, ExitReason};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use time::Date;

/// The contractual role attached to an employment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentRole {
    /// Manages a department or team.
    Manager,
    /// Supervises other employees without department authority.
    Supervisor,
    /// Regular employee.
    Employee,
}

impl EmploymentRole {
    /// Converts this role to its persisted string code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Supervisor => "supervisor",
            Self::Employee => "employee",
        }
    }
}

impl FromStr for EmploymentRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manager" => Ok(Self::Manager),
            "supervisor" => Ok(Self::Supervisor),
            "employee" => Ok(Self::Employee),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for EmploymentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The contractual modality of an employment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Probationary period.
    Probation,
    /// Open-ended contract.
    Permanent,
    /// Contract with a fixed end date.
    FixedTerm,
}

impl EmploymentType {
    /// Converts this type to its persisted string code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Probation => "probation",
            Self::Permanent => "permanent",
            Self::FixedTerm => "fixed_term",
        }
    }
}

impl FromStr for EmploymentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "probation" => Ok(Self::Probation),
            "permanent" => Ok(Self::Permanent),
            "fixed_term" => Ok(Self::FixedTerm),
            _ => Err(DomainError::InvalidEmploymentType(s.to_string())),
        }
    }
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The hierarchical role a person holds within a department.
///
/// This is the loose, department-level tagging mechanism that runs in
/// parallel to the position reporting matrix. At most one open Manager role
/// may exist per department at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HierarchicalRole {
    /// Manages the department.
    Manager,
    /// Works in the department.
    Employee,
}

impl HierarchicalRole {
    /// Converts this role to its persisted string code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Employee => "employee",
        }
    }
}

impl FromStr for HierarchicalRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manager" => Ok(Self::Manager),
            "employee" => Ok(Self::Employee),
            _ => Err(DomainError::InvalidHierarchicalRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for HierarchicalRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An organizational slot with a declared, finite seat capacity.
///
/// A position is identified by its (department, job title) pair. It may
/// report to zero, one, or many other positions — the reporting structure is
/// a matrix, not a tree. `vacancies` is the declared capacity; occupancy is
/// always derived from the employment ledger, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the position has not been persisted yet.
    pub position_id: Option<i64>,
    /// The department this position belongs to.
    pub department_id: i64,
    /// The job title of this position.
    pub job_title_id: i64,
    /// Declared seat capacity. At most this many active-like employments
    /// may reference the position simultaneously.
    pub vacancies: u32,
    /// Whether this position is the department's manager seat for
    /// department-level reporting.
    pub is_manager: bool,
    /// Positions this position reports to. Must not contain the position
    /// itself.
    pub manager_positions: BTreeSet<i64>,
}

impl Position {
    /// Creates a new `Position` without a persisted ID.
    #[must_use]
    pub const fn new(
        department_id: i64,
        job_title_id: i64,
        vacancies: u32,
        is_manager: bool,
        manager_positions: BTreeSet<i64>,
    ) -> Self {
        Self {
            position_id: None,
            department_id,
            job_title_id,
            vacancies,
            is_manager,
            manager_positions,
        }
    }

    /// Creates a `Position` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        position_id: i64,
        department_id: i64,
        job_title_id: i64,
        vacancies: u32,
        is_manager: bool,
        manager_positions: BTreeSet<i64>,
    ) -> Self {
        Self {
            position_id: Some(position_id),
            department_id,
            job_title_id,
            vacancies,
            is_manager,
            manager_positions,
        }
    }
}

/// A person on record.
///
/// Identity, contact and account management live outside this core; the
/// fields here are the ones the ledger and dashboards need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the person has not been persisted yet.
    pub person_id: Option<i64>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Date of birth. Contracts cannot start before it.
    pub birthdate: Date,
    /// Primary national identity document, if recorded.
    pub national_id: Option<String>,
    /// Whether a user account has been provisioned for this person.
    /// Account management itself is out of scope; the flag feeds the
    /// pending-accounts dashboard KPI.
    pub has_user_account: bool,
}

impl Person {
    /// Creates a new `Person` without a persisted ID.
    #[must_use]
    pub const fn new(
        first_name: String,
        last_name: String,
        birthdate: Date,
        national_id: Option<String>,
        has_user_account: bool,
    ) -> Self {
        Self {
            person_id: None,
            first_name,
            last_name,
            birthdate,
            national_id,
            has_user_account,
        }
    }

    /// Creates a `Person` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        person_id: i64,
        first_name: String,
        last_name: String,
        birthdate: Date,
        national_id: Option<String>,
        has_user_account: bool,
    ) -> Self {
        Self {
            person_id: Some(person_id),
            first_name,
            last_name,
            birthdate,
            national_id,
            has_user_account,
        }
    }

    /// Returns the display name, "First Last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A contract binding one person to one position for a span of time.
///
/// One person may hold many employments over time, but never more than one
/// active-like employment per position concurrently. At most `vacancies`
/// employments referencing a position may be active-like at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employment {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the employment has not been persisted yet.
    pub employment_id: Option<i64>,
    /// The person bound by this contract.
    pub person_id: i64,
    /// The position this contract occupies.
    pub position_id: i64,
    /// The contractual role.
    pub role: EmploymentRole,
    /// The contractual modality.
    pub employment_type: EmploymentType,
    /// The current status. Drives seat occupancy.
    pub current_status: EmploymentStatus,
    /// The date the contract took effect.
    pub hire_date: Date,
    /// The date the contract ended, if it has.
    pub end_date: Option<Date>,
    /// Why the contract ended, if it has.
    pub exit_reason: Option<ExitReason>,
    /// Free-text notes on the exit.
    pub exit_notes: Option<String>,
}

impl Employment {
    /// Creates a new `Employment` without a persisted ID.
    #[must_use]
    pub const fn new(
        person_id: i64,
        position_id: i64,
        role: EmploymentRole,
        employment_type: EmploymentType,
        current_status: EmploymentStatus,
        hire_date: Date,
        end_date: Option<Date>,
    ) -> Self {
        Self {
            employment_id: None,
            person_id,
            position_id,
            role,
            employment_type,
            current_status,
            hire_date,
            end_date,
            exit_reason: None,
            exit_notes: None,
        }
    }
}

/// A department-level role assignment.
///
/// Subject identity (person or employment) is carried by the owning table;
/// the interval semantics are shared: `end_date = None` means the role is
/// currently open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRole {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the role has not been persisted yet.
    pub role_id: Option<i64>,
    /// The department this role applies to.
    pub department_id: i64,
    /// Manager or Employee.
    pub hierarchical_role: HierarchicalRole,
    /// The date the role takes effect.
    pub start_date: Date,
    /// The date the role ends; `None` while the role is open.
    pub end_date: Option<Date>,
    /// Free-text notes.
    pub notes: Option<String>,
}

impl DepartmentRole {
    /// Creates a new open-ended `DepartmentRole` without a persisted ID.
    #[must_use]
    pub const fn new(
        department_id: i64,
        hierarchical_role: HierarchicalRole,
        start_date: Date,
        notes: Option<String>,
    ) -> Self {
        Self {
            role_id: None,
            department_id,
            hierarchical_role,
            start_date,
            end_date: None,
            notes,
        }
    }

    /// Returns whether this role covers the given date.
    ///
    /// A role covers `on` when it has started and has not yet ended
    /// (an open `end_date` never ends).
    #[must_use]
    pub fn covers(&self, on: Date) -> bool {
        self.start_date <= on && self.end_date.is_none_or(|end| end >= on)
    }
}
