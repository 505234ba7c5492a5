// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An active-like employment already exists for this (person, position)
    /// pair. The caller may finalize the prior contract first.
    DuplicateActiveContract {
        /// The person already under contract.
        person_id: i64,
        /// The position already occupied by that person.
        position_id: i64,
    },
    /// The position has no remaining seats. The caller may pick a different
    /// position; this is expected and recoverable, never retried blindly.
    CapacityExceeded {
        /// The position that is full.
        position_id: i64,
        /// The position's declared capacity.
        vacancies: u32,
    },
    /// The contract end date precedes the hire date.
    InvalidDateRange {
        /// The contract start.
        hire_date: Date,
        /// The offending end date.
        end_date: Date,
    },
    /// The hire date precedes the person's birthdate.
    BirthdateInconsistent {
        /// The contract start.
        hire_date: Date,
        /// The person's date of birth.
        birthdate: Date,
    },
    /// Another person already holds an open Manager role in the department.
    ManagerConflict {
        /// The contested department.
        department_id: i64,
        /// The id of the subject (person or employment, per the owning
        /// table) currently holding the role.
        holder_id: i64,
    },
    /// A position cannot be a member of its own manager set.
    SelfReportingPosition {
        /// The offending position.
        position_id: i64,
    },
    /// Employment status code is not recognized.
    InvalidStatus(String),
    /// Exit reason code is not recognized.
    InvalidExitReason(String),
    /// Employment role code is not recognized.
    InvalidRole(String),
    /// Employment type code is not recognized.
    InvalidEmploymentType(String),
    /// Hierarchical role code is not recognized.
    InvalidHierarchicalRole(String),
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Department does not exist.
    DepartmentNotFound(i64),
    /// Job title does not exist.
    JobTitleNotFound(i64),
    /// Position does not exist.
    PositionNotFound(i64),
    /// Person does not exist.
    PersonNotFound(i64),
    /// Employment does not exist.
    EmploymentNotFound(i64),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateActiveContract {
                person_id,
                position_id,
            } => {
                write!(
                    f,
                    "Person {person_id} already holds an active contract for position {position_id}"
                )
            }
            Self::CapacityExceeded {
                position_id,
                vacancies,
            } => {
                write!(
                    f,
                    "Position {position_id} has no remaining seats (capacity {vacancies})"
                )
            }
            Self::InvalidDateRange {
                hire_date,
                end_date,
            } => {
                write!(
                    f,
                    "End date {end_date} precedes hire date {hire_date}"
                )
            }
            Self::BirthdateInconsistent {
                hire_date,
                birthdate,
            } => {
                write!(
                    f,
                    "Hire date {hire_date} precedes the person's birthdate {birthdate}"
                )
            }
            Self::ManagerConflict {
                department_id,
                holder_id,
            } => {
                write!(
                    f,
                    "Department {department_id} already has an open Manager role (held by {holder_id})"
                )
            }
            Self::SelfReportingPosition { position_id } => {
                write!(f, "Position {position_id} cannot report to itself")
            }
            Self::InvalidStatus(code) => write!(f, "Unknown employment status: {code}"),
            Self::InvalidExitReason(code) => write!(f, "Unknown exit reason: {code}"),
            Self::InvalidRole(code) => write!(f, "Unknown employment role: {code}"),
            Self::InvalidEmploymentType(code) => {
                write!(f, "Unknown employment type: {code}")
            }
            Self::InvalidHierarchicalRole(code) => {
                write!(f, "Unknown hierarchical role: {code}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DepartmentNotFound(id) => write!(f, "Department {id} not found"),
            Self::JobTitleNotFound(id) => write!(f, "Job title {id} not found"),
            Self::PositionNotFound(id) => write!(f, "Position {id} not found"),
            Self::PersonNotFound(id) => write!(f, "Person {id} not found"),
            Self::EmploymentNotFound(id) => write!(f, "Employment {id} not found"),
        }
    }
}

impl std::error::Error for DomainError {}
