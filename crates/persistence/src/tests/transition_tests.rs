// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Status transition tests: auto-dating, audit completeness, reactivation
//! invariants.

use crate::tests::helpers::{change_command, hire_command, setup_org};
use crate::PersistenceError;
use orgledger::Command;
use orgledger_domain::{DomainError, EmploymentStatus, ExitReason};
use time::macros::date;

#[test]
fn test_resignation_without_end_date_stamps_today() {
    let mut org = setup_org(1).expect("setup");
    let today = date!(2024 - 06 - 15);

    let employment_id = org
        .persistence
        .create_employment(hire_command(
            org.alice_id,
            org.position_id,
            EmploymentStatus::Active,
            date!(2024 - 01 - 01),
        ))
        .expect("hire");

    let command = Command::ChangeStatus {
        employment_id,
        new_status: EmploymentStatus::Resigned,
        end_date: None,
        exit_reason: Some(ExitReason::Resignation),
        exit_notes: Some(String::from("moving abroad")),
    };
    let employment = org
        .persistence
        .change_employment_status(command, today)
        .expect("resignation");

    assert_eq!(employment.current_status, EmploymentStatus::Resigned);
    assert_eq!(employment.end_date, Some(today));
    assert_eq!(employment.exit_reason, Some(ExitReason::Resignation));

    // The persisted row matches what was returned.
    let reloaded = org.persistence.get_employment(employment_id).expect("reload");
    assert_eq!(reloaded, employment);
}

#[test]
fn test_explicit_end_date_is_preserved_verbatim() {
    let mut org = setup_org(1).expect("setup");

    let employment_id = org
        .persistence
        .create_employment(hire_command(
            org.alice_id,
            org.position_id,
            EmploymentStatus::Active,
            date!(2024 - 01 - 01),
        ))
        .expect("hire");

    let command = Command::ChangeStatus {
        employment_id,
        new_status: EmploymentStatus::Terminated,
        end_date: Some(date!(2024 - 03 - 31)),
        exit_reason: Some(ExitReason::EndOfContract),
        exit_notes: None,
    };
    let employment = org
        .persistence
        .change_employment_status(command, date!(2024 - 06 - 15))
        .expect("termination");

    assert_eq!(employment.end_date, Some(date!(2024 - 03 - 31)));
}

#[test]
fn test_every_transition_appends_exactly_one_log_row() {
    let mut org = setup_org(1).expect("setup");

    let employment_id = org
        .persistence
        .create_employment(hire_command(
            org.alice_id,
            org.position_id,
            EmploymentStatus::Active,
            date!(2024 - 01 - 01),
        ))
        .expect("hire");

    let log = org.persistence.status_log(employment_id).expect("log");
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].reason, "initial hire");
    assert_eq!(log[0].status, "active");
    assert_eq!(log[0].start_date, date!(2024 - 01 - 01));

    org.persistence
        .change_employment_status(
            change_command(employment_id, EmploymentStatus::Suspended),
            date!(2024 - 02 - 01),
        )
        .expect("suspension");

    let command = Command::ChangeStatus {
        employment_id,
        new_status: EmploymentStatus::Dismissed,
        end_date: None,
        exit_reason: Some(ExitReason::Dismissal),
        exit_notes: Some(String::from("misconduct")),
    };
    org.persistence
        .change_employment_status(command, date!(2024 - 03 - 01))
        .expect("dismissal");

    let log = org.persistence.status_log(employment_id).expect("log");
    assert_eq!(log.len(), 3);
    assert_eq!(log[1].reason, "administrative status change");
    assert_eq!(log[1].status, "suspended");
    assert_eq!(log[2].reason, "Dismissal: misconduct");
    assert_eq!(log[2].status, "dismissed");
}

#[test]
fn test_existing_log_rows_are_never_modified() {
    let mut org = setup_org(1).expect("setup");

    let employment_id = org
        .persistence
        .create_employment(hire_command(
            org.alice_id,
            org.position_id,
            EmploymentStatus::Active,
            date!(2024 - 01 - 01),
        ))
        .expect("hire");

    let before = org.persistence.status_log(employment_id).expect("log");

    org.persistence
        .change_employment_status(
            change_command(employment_id, EmploymentStatus::OnLeave),
            date!(2024 - 04 - 01),
        )
        .expect("leave");

    let after = org.persistence.status_log(employment_id).expect("log");
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], &before[..]);
}

#[test]
fn test_reactivation_re_checks_capacity() {
    let mut org = setup_org(1).expect("setup");
    let today = date!(2024 - 06 - 15);

    // Bob's contract ended; his row no longer holds the seat.
    let bob_employment = org
        .persistence
        .create_employment(hire_command(
            org.bob_id,
            org.position_id,
            EmploymentStatus::Terminated,
            date!(2023 - 01 - 01),
        ))
        .expect("historical hire");

    // Alice takes the only seat.
    org.persistence
        .create_employment(hire_command(
            org.alice_id,
            org.position_id,
            EmploymentStatus::Active,
            date!(2024 - 01 - 01),
        ))
        .expect("hire");

    let result = org.persistence.change_employment_status(
        change_command(bob_employment, EmploymentStatus::Active),
        today,
    );

    assert_eq!(
        result,
        Err(PersistenceError::DomainViolation(
            DomainError::CapacityExceeded {
                position_id: org.position_id,
                vacancies: 1,
            }
        ))
    );

    // The failed transition left the row untouched.
    let bob = org.persistence.get_employment(bob_employment).expect("reload");
    assert_eq!(bob.current_status, EmploymentStatus::Terminated);
}

#[test]
fn test_reactivation_re_checks_the_duplicate_contract_invariant() {
    let mut org = setup_org(2).expect("setup");
    let today = date!(2024 - 06 - 15);

    let first = org
        .persistence
        .create_employment(hire_command(
            org.alice_id,
            org.position_id,
            EmploymentStatus::Active,
            date!(2024 - 01 - 01),
        ))
        .expect("hire");

    // First contract ends, a second one starts for the same pair.
    org.persistence
        .change_employment_status(change_command(first, EmploymentStatus::Resigned), today)
        .expect("resignation");
    org.persistence
        .create_employment(hire_command(
            org.alice_id,
            org.position_id,
            EmploymentStatus::Active,
            today,
        ))
        .expect("second contract");

    // Reviving the first contract would give Alice two active rows.
    let result = org
        .persistence
        .change_employment_status(change_command(first, EmploymentStatus::Active), today);

    assert_eq!(
        result,
        Err(PersistenceError::DomainViolation(
            DomainError::DuplicateActiveContract {
                person_id: org.alice_id,
                position_id: org.position_id,
            }
        ))
    );
}

#[test]
fn test_reactivation_clears_the_exit_record() {
    let mut org = setup_org(1).expect("setup");
    let today = date!(2024 - 06 - 15);

    let employment_id = org
        .persistence
        .create_employment(hire_command(
            org.alice_id,
            org.position_id,
            EmploymentStatus::Active,
            date!(2024 - 01 - 01),
        ))
        .expect("hire");

    let command = Command::ChangeStatus {
        employment_id,
        new_status: EmploymentStatus::Resigned,
        end_date: None,
        exit_reason: Some(ExitReason::Resignation),
        exit_notes: Some(String::from("left")),
    };
    org.persistence
        .change_employment_status(command, today)
        .expect("resignation");

    let employment = org
        .persistence
        .change_employment_status(
            change_command(employment_id, EmploymentStatus::Active),
            date!(2024 - 07 - 01),
        )
        .expect("reactivation");

    assert_eq!(employment.current_status, EmploymentStatus::Active);
    assert_eq!(employment.end_date, None);
    assert_eq!(employment.exit_reason, None);
    assert_eq!(employment.exit_notes, None);
}

#[test]
fn test_change_status_on_missing_employment_is_not_found() {
    let mut org = setup_org(1).expect("setup");

    let result = org.persistence.change_employment_status(
        change_command(9999, EmploymentStatus::Active),
        date!(2024 - 06 - 15),
    );

    assert_eq!(
        result,
        Err(PersistenceError::DomainViolation(
            DomainError::EmploymentNotFound(9999)
        ))
    );
}

#[test]
fn test_end_date_before_hire_date_is_rejected() {
    let mut org = setup_org(1).expect("setup");

    let employment_id = org
        .persistence
        .create_employment(hire_command(
            org.alice_id,
            org.position_id,
            EmploymentStatus::Active,
            date!(2024 - 01 - 01),
        ))
        .expect("hire");

    let command = Command::ChangeStatus {
        employment_id,
        new_status: EmploymentStatus::Terminated,
        end_date: Some(date!(2023 - 12 - 31)),
        exit_reason: None,
        exit_notes: None,
    };
    let result = org
        .persistence
        .change_employment_status(command, date!(2024 - 06 - 15));

    assert!(matches!(
        result,
        Err(PersistenceError::DomainViolation(
            DomainError::InvalidDateRange { .. }
        ))
    ));
}
