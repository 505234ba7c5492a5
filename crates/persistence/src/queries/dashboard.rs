// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The read-only dashboard aggregation.
//!
//! Windowed over the calling period boundaries: month-to-date for hires
//! and exits, the next 30 days for expiring contracts.

use crate::data_models::{DashboardStats, DepartmentHeadcount, ExpiringContract};
use crate::dates;
use crate::diesel_schema::{departments, employments, persons, positions};
use crate::error::PersistenceError;
use diesel::dsl::count;
use diesel::prelude::*;
use num_traits::cast::ToPrimitive;
use orgledger_domain::{DomainError, EmploymentStatus};
use time::{Date, Duration};

fn to_u32(count: i64, what: &str) -> Result<u32, PersistenceError> {
    count
        .to_u32()
        .ok_or_else(|| PersistenceError::Other(format!("{what} count {count} out of range")))
}

/// How many departments the distribution lists.
const DISTRIBUTION_LIMIT: i64 = 5;

/// How far ahead the expiring-contract window reaches.
const EXPIRY_WINDOW_DAYS: i64 = 30;

/// Computes the dashboard KPI aggregation as of `today`.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `today` - The calling day; fixes the month and lookahead windows
///
/// # Errors
///
/// Returns an error if a query fails or the date windows cannot be
/// computed.
pub fn dashboard_stats(
    conn: &mut SqliteConnection,
    today: Date,
) -> Result<DashboardStats, PersistenceError> {
    let active = EmploymentStatus::active_like_codes();
    let terminal: &[&str] = &[
        EmploymentStatus::Terminated.as_str(),
        EmploymentStatus::Resigned.as_str(),
        EmploymentStatus::Dismissed.as_str(),
        EmploymentStatus::Annulled.as_str(),
    ];

    let month_start = today
        .replace_day(1)
        .map_err(|e| PersistenceError::Other(format!("Failed to compute month start: {e}")))?;
    let month_start_iso = dates::to_iso(month_start)?;
    let today_iso = dates::to_iso(today)?;
    let window_end =
        today
            .checked_add(Duration::days(EXPIRY_WINDOW_DAYS))
            .ok_or(DomainError::DateArithmeticOverflow {
                operation: String::from("computing the contract-expiry window"),
            })?;
    let window_end_iso = dates::to_iso(window_end)?;

    let headcount: i64 = employments::table
        .filter(employments::current_status.eq_any(active))
        .count()
        .get_result(conn)?;

    let new_hires: i64 = employments::table
        .filter(employments::current_status.eq_any(active))
        .filter(employments::hire_date.ge(&month_start_iso))
        .count()
        .get_result(conn)?;

    let exits: i64 = employments::table
        .filter(employments::current_status.eq_any(terminal))
        .filter(employments::end_date.is_not_null())
        .filter(employments::end_date.ge(&month_start_iso))
        .count()
        .get_result(conn)?;

    let pending_accounts: i64 = employments::table
        .inner_join(persons::table)
        .filter(employments::current_status.eq_any(active))
        .filter(persons::has_user_account.eq(0))
        .count()
        .get_result(conn)?;

    let distribution_rows: Vec<(String, i64)> = employments::table
        .inner_join(positions::table.inner_join(departments::table))
        .filter(employments::current_status.eq_any(active))
        .group_by(departments::name)
        .select((departments::name, count(employments::employment_id)))
        .order(count(employments::employment_id).desc())
        .limit(DISTRIBUTION_LIMIT)
        .load(conn)?;
    let department_distribution = distribution_rows
        .into_iter()
        .map(|(department_name, n)| {
            Ok(DepartmentHeadcount {
                department_name,
                count: to_u32(n, "department headcount")?,
            })
        })
        .collect::<Result<Vec<_>, PersistenceError>>()?;

    let expiring_rows: Vec<(i64, String, String, Option<String>, String)> = employments::table
        .inner_join(persons::table)
        .filter(employments::current_status.eq_any(active))
        .filter(employments::end_date.is_not_null())
        .filter(employments::end_date.ge(&today_iso))
        .filter(employments::end_date.le(&window_end_iso))
        .order(employments::end_date.asc())
        .select((
            employments::employment_id,
            persons::first_name,
            persons::last_name,
            persons::national_id,
            employments::end_date.assume_not_null(),
        ))
        .load(conn)?;
    let contracts_expiring_soon = expiring_rows
        .into_iter()
        .map(|(employment_id, first_name, last_name, national_id, end_date)| {
            Ok(ExpiringContract {
                employment_id,
                person_name: format!("{first_name} {last_name}"),
                person_document: national_id,
                end_date: dates::from_iso(&end_date)?,
            })
        })
        .collect::<Result<Vec<_>, PersistenceError>>()?;

    Ok(DashboardStats {
        headcount: to_u32(headcount, "headcount")?,
        new_hires_this_month: to_u32(new_hires, "new hire")?,
        exits_this_month: to_u32(exits, "exit")?,
        pending_accounts: to_u32(pending_accounts, "pending account")?,
        department_distribution,
        contracts_expiring_soon,
    })
}
