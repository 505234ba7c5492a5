// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog and reporting-matrix tests.

use crate::tests::helpers::setup_org;
use crate::{Persistence, PersistenceError};
use orgledger_domain::DomainError;
use std::collections::BTreeSet;

#[test]
fn test_position_requires_existing_department_and_title() {
    let mut org = setup_org(1).expect("setup");

    let result =
        org.persistence
            .create_position(9999, org.job_title_id, 1, false, &BTreeSet::new());
    assert_eq!(
        result,
        Err(PersistenceError::DomainViolation(
            DomainError::DepartmentNotFound(9999)
        ))
    );

    let result =
        org.persistence
            .create_position(org.department_id, 9999, 1, false, &BTreeSet::new());
    assert_eq!(
        result,
        Err(PersistenceError::DomainViolation(
            DomainError::JobTitleNotFound(9999)
        ))
    );
}

#[test]
fn test_department_job_title_pair_is_unique() {
    let mut org = setup_org(1).expect("setup");

    // The pair already exists from setup.
    let result = org.persistence.create_position(
        org.department_id,
        org.job_title_id,
        2,
        false,
        &BTreeSet::new(),
    );
    assert!(matches!(result, Err(PersistenceError::DatabaseError(_))));
}

#[test]
fn test_self_reporting_manager_set_is_rejected() {
    let mut org = setup_org(1).expect("setup");

    let managers: BTreeSet<i64> = [org.position_id].into_iter().collect();
    let result = org
        .persistence
        .set_position_managers(org.position_id, &managers);
    assert_eq!(
        result,
        Err(PersistenceError::DomainViolation(
            DomainError::SelfReportingPosition {
                position_id: org.position_id,
            }
        ))
    );
}

#[test]
fn test_get_position_loads_the_manager_set() {
    let mut persistence = Persistence::new_in_memory().expect("store");
    let department = persistence.create_department("Engineering").expect("dept");
    let lead_title = persistence.create_job_title("Lead").expect("title");
    let engineer_title = persistence.create_job_title("Engineer").expect("title");

    let lead = persistence
        .create_position(department, lead_title, 1, true, &BTreeSet::new())
        .expect("lead");
    let engineer = persistence
        .create_position(
            department,
            engineer_title,
            4,
            false,
            &[lead].into_iter().collect(),
        )
        .expect("engineer");

    let position = persistence.get_position(engineer).expect("position");
    assert_eq!(position.position_id, Some(engineer));
    assert_eq!(position.vacancies, 4);
    assert!(!position.is_manager);
    assert_eq!(
        position.manager_positions,
        [lead].into_iter().collect::<BTreeSet<i64>>()
    );
}

#[test]
fn test_reporting_matrix_round_trips_through_the_store() {
    let mut persistence = Persistence::new_in_memory().expect("store");
    let department = persistence.create_department("Engineering").expect("dept");
    let lead_title = persistence.create_job_title("Lead").expect("title");
    let engineer_title = persistence.create_job_title("Engineer").expect("title");
    let qa_title = persistence.create_job_title("QA").expect("title");

    let lead = persistence
        .create_position(department, lead_title, 1, true, &BTreeSet::new())
        .expect("lead");
    let engineer = persistence
        .create_position(
            department,
            engineer_title,
            4,
            false,
            &[lead].into_iter().collect(),
        )
        .expect("engineer");
    // QA has a dual reporting line.
    let qa = persistence
        .create_position(
            department,
            qa_title,
            2,
            false,
            &[lead, engineer].into_iter().collect(),
        )
        .expect("qa");

    let matrix = persistence.reporting_matrix().expect("matrix");
    assert_eq!(matrix.edges(), vec![(engineer, lead), (qa, lead), (qa, engineer)]);
    assert_eq!(matrix.direct_reports_of(lead), vec![engineer, qa]);
    assert!(!matrix.has_manager(lead));
}

#[test]
fn test_replacing_a_manager_set_drops_the_old_edges() {
    let mut persistence = Persistence::new_in_memory().expect("store");
    let department = persistence.create_department("Engineering").expect("dept");
    let a_title = persistence.create_job_title("A").expect("title");
    let b_title = persistence.create_job_title("B").expect("title");
    let c_title = persistence.create_job_title("C").expect("title");

    let a = persistence
        .create_position(department, a_title, 1, false, &BTreeSet::new())
        .expect("a");
    let b = persistence
        .create_position(department, b_title, 1, false, &BTreeSet::new())
        .expect("b");
    let c = persistence
        .create_position(department, c_title, 1, false, &[a].into_iter().collect())
        .expect("c");

    persistence
        .set_position_managers(c, &[b].into_iter().collect())
        .expect("replace");

    let position = persistence.get_position(c).expect("position");
    assert_eq!(
        position.manager_positions,
        [b].into_iter().collect::<BTreeSet<i64>>()
    );
}
