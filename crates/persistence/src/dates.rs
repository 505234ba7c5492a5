// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! ISO-8601 date column codec.
//!
//! Dates are stored as `YYYY-MM-DD` text, so lexicographic comparison in
//! SQL equals calendar comparison. Every stored date goes through these two
//! functions.

use crate::error::PersistenceError;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Formats a date as its stored `YYYY-MM-DD` representation.
///
/// # Errors
///
/// Returns an error if the date cannot be formatted (out-of-range years).
pub fn to_iso(date: Date) -> Result<String, PersistenceError> {
    date.format(ISO_DATE)
        .map_err(|e| PersistenceError::Other(format!("Failed to format date: {e}")))
}

/// Parses a stored `YYYY-MM-DD` column value.
///
/// # Errors
///
/// Returns `PersistenceError::DataCorruption` if the value is not a valid
/// ISO date.
pub fn from_iso(value: &str) -> Result<Date, PersistenceError> {
    Date::parse(value, ISO_DATE)
        .map_err(|e| PersistenceError::DataCorruption(format!("Bad date '{value}': {e}")))
}

/// Parses an optional stored date column.
///
/// # Errors
///
/// Returns `PersistenceError::DataCorruption` if a present value is not a
/// valid ISO date.
pub fn from_iso_opt(value: Option<&str>) -> Result<Option<Date>, PersistenceError> {
    value.map(from_iso).transpose()
}
