// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end lifecycle scenario through the API boundary.
//!
//! Position "Analyst / Human Resources" has one seat. Alice is hired and
//! fills it; Bob's hire fails; Alice resigns (end date stamped, seat
//! released); Bob's hire now succeeds.

use crate::{
    ApiError, ChangeEmploymentStatusRequest, CreateDepartmentRequest, CreateEmploymentRequest,
    CreateJobTitleRequest, CreatePersonRequest, CreatePositionRequest,
    change_employment_status, create_department, create_employment, create_job_title,
    create_person, create_position, list_status_log,
};
use orgledger_persistence::Persistence;
use time::macros::date;

fn employment_request(person_id: i64, position_id: i64, hire_date: &str) -> CreateEmploymentRequest {
    CreateEmploymentRequest {
        person_id,
        position_id,
        role: String::from("employee"),
        employment_type: String::from("permanent"),
        status: String::from("active"),
        hire_date: hire_date.to_string(),
        end_date: None,
    }
}

#[test]
fn test_hire_fill_resign_rehire_lifecycle() {
    let mut persistence = Persistence::new_in_memory().expect("store");
    let today = date!(2024 - 06 - 15);

    let department = create_department(
        &mut persistence,
        CreateDepartmentRequest {
            name: String::from("Human Resources"),
        },
    )
    .expect("department");
    let title = create_job_title(
        &mut persistence,
        CreateJobTitleRequest {
            name: String::from("Analyst"),
        },
    )
    .expect("title");
    let position = create_position(
        &mut persistence,
        CreatePositionRequest {
            department_id: department.department_id,
            job_title_id: title.job_title_id,
            vacancies: 1,
            is_manager: false,
            manager_position_ids: Vec::new(),
        },
    )
    .expect("position");

    let alice = create_person(
        &mut persistence,
        CreatePersonRequest {
            first_name: String::from("Alice"),
            last_name: String::from("Moreno"),
            birthdate: String::from("1990-03-14"),
            national_id: Some(String::from("V-12345678")),
            has_user_account: true,
        },
    )
    .expect("alice");
    let bob = create_person(
        &mut persistence,
        CreatePersonRequest {
            first_name: String::from("Bob"),
            last_name: String::from("Paredes"),
            birthdate: String::from("1988-11-02"),
            national_id: Some(String::from("V-87654321")),
            has_user_account: true,
        },
    )
    .expect("bob");

    // Alice takes the only seat.
    let alice_hire = create_employment(
        &mut persistence,
        employment_request(alice.person_id, position.position_id, "2024-01-01"),
    )
    .expect("alice hired");
    assert_eq!(alice_hire.remaining_capacity, 0);

    // Bob cannot fit.
    let bob_attempt = create_employment(
        &mut persistence,
        employment_request(bob.person_id, position.position_id, "2024-02-01"),
    );
    assert!(matches!(
        bob_attempt,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "capacity_exceeded"
    ));

    // Alice resigns; no end date supplied, today is stamped.
    let resigned = change_employment_status(
        &mut persistence,
        alice_hire.employment_id,
        ChangeEmploymentStatusRequest {
            new_status: String::from("resigned"),
            end_date: None,
            exit_reason: Some(String::from("resignation")),
            exit_notes: Some(String::from("relocation")),
        },
        today,
    )
    .expect("resignation");
    assert_eq!(resigned.current_status, "resigned");
    assert_eq!(resigned.end_date, Some(today));

    // The freed seat is immediately available to Bob.
    let bob_hire = create_employment(
        &mut persistence,
        employment_request(bob.person_id, position.position_id, "2024-06-15"),
    )
    .expect("bob hired into freed seat");
    assert_eq!(bob_hire.remaining_capacity, 0);

    // Audit completeness: Alice's ledger shows the hire and the exit.
    let log = list_status_log(&mut persistence, alice_hire.employment_id).expect("log");
    assert_eq!(log.entries.len(), 2);
    assert_eq!(log.entries[0].reason, "initial hire");
    assert_eq!(log.entries[1].reason, "Resignation: relocation");
    assert_eq!(log.entries[1].start_date, today);
}
