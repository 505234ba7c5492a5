// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use std::collections::BTreeSet;
use time::Date;

/// Validates the date consistency of a contract.
///
/// # Arguments
///
/// * `hire_date` - The contract start
/// * `end_date` - The contract end, if any
/// * `birthdate` - The person's date of birth
///
/// # Errors
///
/// * `DomainError::InvalidDateRange` if `end_date` precedes `hire_date`
/// * `DomainError::BirthdateInconsistent` if `hire_date` precedes `birthdate`
pub fn validate_contract_dates(
    hire_date: Date,
    end_date: Option<Date>,
    birthdate: Date,
) -> Result<(), DomainError> {
    if let Some(end_date) = end_date
        && end_date < hire_date
    {
        return Err(DomainError::InvalidDateRange {
            hire_date,
            end_date,
        });
    }
    if hire_date < birthdate {
        return Err(DomainError::BirthdateInconsistent {
            hire_date,
            birthdate,
        });
    }
    Ok(())
}

/// Validates a position's manager set.
///
/// # Arguments
///
/// * `position_id` - The position being configured
/// * `manager_positions` - The set of positions it would report to
///
/// # Errors
///
/// Returns `DomainError::SelfReportingPosition` if the set contains the
/// position itself.
pub fn validate_manager_set(
    position_id: i64,
    manager_positions: &BTreeSet<i64>,
) -> Result<(), DomainError> {
    if manager_positions.contains(&position_id) {
        return Err(DomainError::SelfReportingPosition { position_id });
    }
    Ok(())
}
