// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::date_rules::DateRuleError;
use orgledger::CoreError;
use orgledger_domain::DomainError;
use orgledger_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/persistence errors and represent the API
/// contract. Every validation failure carries enough context to render a
/// user-facing message; none is retried automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DateRuleError> for ApiError {
    fn from(err: DateRuleError) -> Self {
        match err {
            DateRuleError::UnparseableDate { ref field, .. } => Self::InvalidInput {
                field: field.clone(),
                message: err.to_string(),
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly. Expected, caller-recoverable conditions (capacity, duplicate
/// contract, manager conflict) become named rule violations.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::DuplicateActiveContract { .. } => ApiError::DomainRuleViolation {
            rule: String::from("duplicate_active_contract"),
            message: err.to_string(),
        },
        DomainError::CapacityExceeded { .. } => ApiError::DomainRuleViolation {
            rule: String::from("capacity_exceeded"),
            message: err.to_string(),
        },
        DomainError::ManagerConflict { .. } => ApiError::DomainRuleViolation {
            rule: String::from("manager_conflict"),
            message: err.to_string(),
        },
        DomainError::SelfReportingPosition { .. } => ApiError::DomainRuleViolation {
            rule: String::from("self_reporting_position"),
            message: err.to_string(),
        },
        DomainError::InvalidDateRange { .. } => ApiError::InvalidInput {
            field: String::from("end_date"),
            message: err.to_string(),
        },
        DomainError::BirthdateInconsistent { .. } => ApiError::InvalidInput {
            field: String::from("hire_date"),
            message: err.to_string(),
        },
        DomainError::InvalidStatus(_) => ApiError::InvalidInput {
            field: String::from("status"),
            message: err.to_string(),
        },
        DomainError::InvalidExitReason(_) => ApiError::InvalidInput {
            field: String::from("exit_reason"),
            message: err.to_string(),
        },
        DomainError::InvalidRole(_) => ApiError::InvalidInput {
            field: String::from("role"),
            message: err.to_string(),
        },
        DomainError::InvalidEmploymentType(_) => ApiError::InvalidInput {
            field: String::from("employment_type"),
            message: err.to_string(),
        },
        DomainError::InvalidHierarchicalRole(_) => ApiError::InvalidInput {
            field: String::from("hierarchical_role"),
            message: err.to_string(),
        },
        DomainError::DepartmentNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Department"),
            message: err.to_string(),
        },
        DomainError::JobTitleNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Job title"),
            message: err.to_string(),
        },
        DomainError::PositionNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Position"),
            message: err.to_string(),
        },
        DomainError::PersonNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Person"),
            message: err.to_string(),
        },
        DomainError::EmploymentNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Employment"),
            message: err.to_string(),
        },
        DomainError::DateArithmeticOverflow { .. } => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(err) => translate_domain_error(err),
    }
}

/// Translates a persistence error into an API error.
///
/// Domain invariant failures surfaced through the persistence layer (they
/// must run under the write lock) translate exactly like direct domain
/// errors; infrastructure failures stay internal.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::DomainViolation(err) => translate_domain_error(err),
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Resource"),
            message,
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}
