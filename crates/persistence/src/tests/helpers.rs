// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared fixtures for persistence tests.

use crate::{Persistence, PersistenceError};
use orgledger::Command;
use orgledger_domain::{
    EmploymentRole, EmploymentStatus, EmploymentType, Person,
};
use std::collections::BTreeSet;
use time::Date;
use time::macros::date;

/// A seeded store: one department, one job title, one position, two people.
pub struct TestOrg {
    pub persistence: Persistence,
    pub department_id: i64,
    pub job_title_id: i64,
    pub position_id: i64,
    pub alice_id: i64,
    pub bob_id: i64,
}

/// Creates a person born 1990-03-14 with the given name.
pub fn make_person(first_name: &str, last_name: &str, has_account: bool) -> Person {
    Person::new(
        first_name.to_string(),
        last_name.to_string(),
        date!(1990 - 03 - 14),
        Some(format!("V-{first_name}")),
        has_account,
    )
}

/// Seeds a store with an "Analyst / Human Resources" position of the given
/// capacity, plus Alice and Bob.
pub fn setup_org(vacancies: u32) -> Result<TestOrg, PersistenceError> {
    let mut persistence = Persistence::new_in_memory()?;
    let department_id = persistence.create_department("Human Resources")?;
    let job_title_id = persistence.create_job_title("Analyst")?;
    let position_id = persistence.create_position(
        department_id,
        job_title_id,
        vacancies,
        false,
        &BTreeSet::new(),
    )?;
    let alice_id = persistence.create_person(&make_person("Alice", "Moreno", true))?;
    let bob_id = persistence.create_person(&make_person("Bob", "Paredes", true))?;

    Ok(TestOrg {
        persistence,
        department_id,
        job_title_id,
        position_id,
        alice_id,
        bob_id,
    })
}

/// Builds a hire command with standard role and type.
pub fn hire_command(
    person_id: i64,
    position_id: i64,
    status: EmploymentStatus,
    hire_date: Date,
) -> Command {
    Command::Hire {
        person_id,
        position_id,
        role: EmploymentRole::Employee,
        employment_type: EmploymentType::Permanent,
        status,
        hire_date,
        end_date: None,
    }
}

/// Builds a status-change command with no explicit dates or exit record.
pub fn change_command(employment_id: i64, new_status: EmploymentStatus) -> Command {
    Command::ChangeStatus {
        employment_id,
        new_status,
        end_date: None,
        exit_reason: None,
        exit_notes: None,
    }
}
