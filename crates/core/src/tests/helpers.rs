// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for engine tests.

use orgledger_domain::{
    Employment, EmploymentRole, EmploymentStatus, EmploymentType, Person,
};
use time::Date;
use time::macros::date;

/// A person born well before any test hire date.
pub fn test_person() -> Person {
    Person::with_id(
        1,
        String::from("Alice"),
        String::from("Moreno"),
        date!(1990 - 03 - 14),
        Some(String::from("V-12345678")),
        true,
    )
}

/// A persisted active employment starting on the given date.
pub fn active_employment(hire_date: Date) -> Employment {
    let mut employment = Employment::new(
        1,
        10,
        EmploymentRole::Employee,
        EmploymentType::Permanent,
        EmploymentStatus::Active,
        hire_date,
        None,
    );
    employment.employment_id = Some(100);
    employment
}
