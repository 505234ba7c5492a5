// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Transition planning tests: seat actions, end-date stamping, audit
//! reasons.

use crate::tests::helpers::{active_employment, test_person};
use crate::{Command, CoreError, SeatAction, plan_hire, plan_removal, plan_status_change};
use orgledger_audit::LogReason;
use orgledger_domain::{
    DomainError, EmploymentRole, EmploymentStatus, EmploymentType, ExitReason,
};
use time::macros::date;

fn hire_command(status: EmploymentStatus) -> Command {
    Command::Hire {
        person_id: 1,
        position_id: 10,
        role: EmploymentRole::Employee,
        employment_type: EmploymentType::Permanent,
        status,
        hire_date: date!(2024 - 01 - 01),
        end_date: None,
    }
}

#[test]
fn test_active_hire_reserves_a_seat_and_logs_initial_hire() {
    let plan = plan_hire(&test_person(), hire_command(EmploymentStatus::Active))
        .expect("valid hire");

    assert_eq!(plan.seat_action, SeatAction::Reserve);
    assert_eq!(plan.employment.current_status, EmploymentStatus::Active);
    assert_eq!(plan.log_entry.reason, LogReason::InitialHire);
    assert_eq!(plan.log_entry.start_date, date!(2024 - 01 - 01));
    assert_eq!(plan.log_entry.status, EmploymentStatus::Active);
}

#[test]
fn test_terminal_hire_does_not_touch_capacity() {
    // Backfilling a historical contract that already ended.
    let plan = plan_hire(&test_person(), hire_command(EmploymentStatus::Resigned))
        .expect("valid hire");

    assert_eq!(plan.seat_action, SeatAction::Keep);
    assert_eq!(plan.log_entry.reason, LogReason::InitialHire);
}

#[test]
fn test_hire_before_birthdate_is_rejected() {
    let command = Command::Hire {
        person_id: 1,
        position_id: 10,
        role: EmploymentRole::Employee,
        employment_type: EmploymentType::Permanent,
        status: EmploymentStatus::Active,
        hire_date: date!(1980 - 01 - 01),
        end_date: None,
    };

    let result = plan_hire(&test_person(), command);
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::BirthdateInconsistent {
                hire_date: date!(1980 - 01 - 01),
                birthdate: date!(1990 - 03 - 14),
            }
        ))
    );
}

#[test]
fn test_hire_with_inverted_dates_is_rejected() {
    let command = Command::Hire {
        person_id: 1,
        position_id: 10,
        role: EmploymentRole::Employee,
        employment_type: EmploymentType::FixedTerm,
        status: EmploymentStatus::Active,
        hire_date: date!(2024 - 06 - 01),
        end_date: Some(date!(2024 - 01 - 01)),
    };

    let result = plan_hire(&test_person(), command);
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidDateRange { .. }))
    ));
}

#[test]
fn test_resignation_without_end_date_stamps_today_and_releases() {
    let current = active_employment(date!(2024 - 01 - 01));
    let today = date!(2024 - 06 - 15);

    let command = Command::ChangeStatus {
        employment_id: 100,
        new_status: EmploymentStatus::Resigned,
        end_date: None,
        exit_reason: Some(ExitReason::Resignation),
        exit_notes: Some(String::from("moving abroad")),
    };

    let plan = plan_status_change(&current, command, today).expect("valid transition");

    assert_eq!(plan.seat_action, SeatAction::Release);
    assert_eq!(plan.employment.end_date, Some(today));
    assert_eq!(plan.employment.exit_reason, Some(ExitReason::Resignation));
    assert_eq!(plan.log_entry.start_date, today);
    assert_eq!(
        plan.log_entry.reason,
        LogReason::Exit {
            reason: ExitReason::Resignation,
            notes: Some(String::from("moving abroad")),
        }
    );
    assert_eq!(plan.log_entry.reason.text(), "Resignation: moving abroad");
}

#[test]
fn test_explicit_end_date_is_preserved_verbatim() {
    let current = active_employment(date!(2024 - 01 - 01));

    let command = Command::ChangeStatus {
        employment_id: 100,
        new_status: EmploymentStatus::Terminated,
        end_date: Some(date!(2024 - 03 - 31)),
        exit_reason: Some(ExitReason::EndOfContract),
        exit_notes: None,
    };

    let plan = plan_status_change(&current, command, date!(2024 - 06 - 15))
        .expect("valid transition");

    assert_eq!(plan.employment.end_date, Some(date!(2024 - 03 - 31)));
    assert_eq!(plan.log_entry.start_date, date!(2024 - 03 - 31));
}

#[test]
fn test_end_date_before_hire_date_is_rejected() {
    let current = active_employment(date!(2024 - 01 - 01));

    let command = Command::ChangeStatus {
        employment_id: 100,
        new_status: EmploymentStatus::Terminated,
        end_date: Some(date!(2023 - 12 - 31)),
        exit_reason: None,
        exit_notes: None,
    };

    let result = plan_status_change(&current, command, date!(2024 - 06 - 15));
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidDateRange { .. }))
    ));
}

#[test]
fn test_suspension_keeps_the_seat_and_logs_administratively() {
    let current = active_employment(date!(2024 - 01 - 01));
    let today = date!(2024 - 06 - 15);

    let command = Command::ChangeStatus {
        employment_id: 100,
        new_status: EmploymentStatus::Suspended,
        end_date: None,
        exit_reason: None,
        exit_notes: None,
    };

    let plan = plan_status_change(&current, command, today).expect("valid transition");

    assert_eq!(plan.seat_action, SeatAction::Keep);
    assert_eq!(plan.employment.end_date, None);
    assert_eq!(plan.log_entry.reason, LogReason::Administrative);
    assert_eq!(
        plan.log_entry.reason.text(),
        "administrative status change"
    );
}

#[test]
fn test_reactivation_reserves_a_seat_and_clears_the_exit_record() {
    let mut current = active_employment(date!(2024 - 01 - 01));
    current.current_status = EmploymentStatus::Resigned;
    current.end_date = Some(date!(2024 - 03 - 31));
    current.exit_reason = Some(ExitReason::Resignation);
    current.exit_notes = Some(String::from("left"));

    let command = Command::ChangeStatus {
        employment_id: 100,
        new_status: EmploymentStatus::Active,
        end_date: None,
        exit_reason: None,
        exit_notes: None,
    };

    let plan = plan_status_change(&current, command, date!(2024 - 07 - 01))
        .expect("valid transition");

    assert_eq!(plan.seat_action, SeatAction::Reserve);
    assert_eq!(plan.employment.end_date, None);
    assert_eq!(plan.employment.exit_reason, None);
    assert_eq!(plan.employment.exit_notes, None);
    assert_eq!(plan.log_entry.reason, LogReason::Administrative);
}

#[test]
fn test_terminal_exit_without_reason_logs_administratively() {
    let current = active_employment(date!(2024 - 01 - 01));

    let command = Command::ChangeStatus {
        employment_id: 100,
        new_status: EmploymentStatus::Annulled,
        end_date: None,
        exit_reason: None,
        exit_notes: None,
    };

    let plan = plan_status_change(&current, command, date!(2024 - 02 - 01))
        .expect("valid transition");

    assert_eq!(plan.seat_action, SeatAction::Release);
    assert_eq!(plan.log_entry.reason, LogReason::Administrative);
}

#[test]
fn test_removal_of_active_row_releases_its_seat() {
    let plan = plan_removal(100, EmploymentStatus::OnLeave);
    assert_eq!(plan.seat_action, SeatAction::Release);
    assert_eq!(plan.employment_id, 100);

    let terminal = plan_removal(100, EmploymentStatus::Dismissed);
    assert_eq!(terminal.seat_action, SeatAction::Keep);
}
