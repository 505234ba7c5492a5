// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Date parsing rules at the API boundary.
//!
//! All request dates arrive as ISO-8601 `YYYY-MM-DD` strings and are parsed
//! here, before any domain logic runs, so date-format failures surface as
//! input errors naming the offending field.

use thiserror::Error;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Violations of the API date rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRuleError {
    /// The field is not a valid ISO-8601 calendar date.
    #[error("Field '{field}' must be an ISO-8601 date (YYYY-MM-DD), got '{value}'")]
    UnparseableDate {
        /// The request field.
        field: String,
        /// The rejected value.
        value: String,
    },
}

/// Parses a required ISO-8601 date field.
///
/// # Errors
///
/// Returns `DateRuleError::UnparseableDate` naming the field.
pub fn parse_iso_date(field: &str, value: &str) -> Result<Date, DateRuleError> {
    Date::parse(value, ISO_DATE).map_err(|_| DateRuleError::UnparseableDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Parses an optional ISO-8601 date field.
///
/// # Errors
///
/// Returns `DateRuleError::UnparseableDate` if a present value does not
/// parse.
pub fn parse_optional_iso_date(
    field: &str,
    value: Option<&str>,
) -> Result<Option<Date>, DateRuleError> {
    value.map(|value| parse_iso_date(field, value)).transpose()
}
