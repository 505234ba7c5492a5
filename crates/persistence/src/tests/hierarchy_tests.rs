// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hierarchy resolver tests: supervisor lookup over the matrix, org chart
//! assembly, department manager occupancy.

use crate::tests::helpers::{change_command, hire_command, make_person};
use crate::{Persistence, SupervisorLookup};
use orgledger_domain::EmploymentStatus;
use std::collections::BTreeSet;
use time::macros::date;

/// A small org: HR with a manager seat and an analyst seat reporting to it.
struct MatrixOrg {
    persistence: Persistence,
    department_id: i64,
    manager_position: i64,
    analyst_position: i64,
    alice: i64,
    bob: i64,
    carol: i64,
}

fn setup_matrix_org() -> MatrixOrg {
    let mut persistence = Persistence::new_in_memory().expect("store");
    let department_id = persistence.create_department("Human Resources").expect("dept");
    let manager_title = persistence.create_job_title("HR Manager").expect("title");
    let analyst_title = persistence.create_job_title("Analyst").expect("title");

    let manager_position = persistence
        .create_position(department_id, manager_title, 1, true, &BTreeSet::new())
        .expect("manager position");
    let analyst_position = persistence
        .create_position(
            department_id,
            analyst_title,
            3,
            false,
            &[manager_position].into_iter().collect(),
        )
        .expect("analyst position");

    let alice = persistence
        .create_person(&make_person("Alice", "Moreno", true))
        .expect("person");
    let bob = persistence
        .create_person(&make_person("Bob", "Paredes", true))
        .expect("person");
    let carol = persistence
        .create_person(&make_person("Carol", "Diaz", true))
        .expect("person");

    MatrixOrg {
        persistence,
        department_id,
        manager_position,
        analyst_position,
        alice,
        bob,
        carol,
    }
}

#[test]
fn test_position_without_managers_is_unconfigured() {
    let mut org = setup_matrix_org();
    let lookup = org
        .persistence
        .supervisor_of(org.manager_position)
        .expect("lookup");
    assert_eq!(lookup, SupervisorLookup::Unconfigured);
}

#[test]
fn test_configured_but_unfilled_manager_seat_is_vacant_with_title() {
    let mut org = setup_matrix_org();
    let lookup = org
        .persistence
        .supervisor_of(org.analyst_position)
        .expect("lookup");
    assert_eq!(
        lookup,
        SupervisorLookup::Vacant {
            position_id: org.manager_position,
            position_title: String::from("HR Manager"),
        }
    );
}

#[test]
fn test_supervisor_is_the_first_active_occupant() {
    let mut org = setup_matrix_org();
    org.persistence
        .create_employment(hire_command(
            org.carol,
            org.manager_position,
            EmploymentStatus::Active,
            date!(2023 - 01 - 01),
        ))
        .expect("hire boss");

    let lookup = org
        .persistence
        .supervisor_of(org.analyst_position)
        .expect("lookup");
    match lookup {
        SupervisorLookup::Occupied(occupant) => {
            assert_eq!(occupant.person_id, org.carol);
            assert_eq!(occupant.person_name, "Carol Diaz");
            assert_eq!(occupant.position_title, "HR Manager");
        }
        other => panic!("expected occupied supervisor, got {other:?}"),
    }
}

#[test]
fn test_resigned_manager_leaves_the_seat_vacant() {
    let mut org = setup_matrix_org();
    let boss_employment = org
        .persistence
        .create_employment(hire_command(
            org.carol,
            org.manager_position,
            EmploymentStatus::Active,
            date!(2023 - 01 - 01),
        ))
        .expect("hire boss");
    org.persistence
        .change_employment_status(
            change_command(boss_employment, EmploymentStatus::Resigned),
            date!(2024 - 01 - 01),
        )
        .expect("resignation");

    let lookup = org
        .persistence
        .supervisor_of(org.analyst_position)
        .expect("lookup");
    assert!(matches!(lookup, SupervisorLookup::Vacant { .. }));
}

#[test]
fn test_second_manager_position_fills_in_when_the_first_is_vacant() {
    let mut org = setup_matrix_org();
    let second_title = org
        .persistence
        .create_job_title("Deputy Manager")
        .expect("title");
    let second_manager = org
        .persistence
        .create_position(org.department_id, second_title, 1, false, &BTreeSet::new())
        .expect("position");
    org.persistence
        .set_position_managers(
            org.analyst_position,
            &[org.manager_position, second_manager].into_iter().collect(),
        )
        .expect("matrix");

    org.persistence
        .create_employment(hire_command(
            org.bob,
            second_manager,
            EmploymentStatus::Active,
            date!(2023 - 06 - 01),
        ))
        .expect("hire deputy");

    let lookup = org
        .persistence
        .supervisor_of(org.analyst_position)
        .expect("lookup");
    match lookup {
        SupervisorLookup::Occupied(occupant) => assert_eq!(occupant.person_id, org.bob),
        other => panic!("expected deputy as supervisor, got {other:?}"),
    }
}

#[test]
fn test_org_chart_resolves_boss_peers_and_subordinates() {
    let mut org = setup_matrix_org();
    org.persistence
        .create_employment(hire_command(
            org.carol,
            org.manager_position,
            EmploymentStatus::Active,
            date!(2023 - 01 - 01),
        ))
        .expect("hire boss");
    org.persistence
        .create_employment(hire_command(
            org.alice,
            org.analyst_position,
            EmploymentStatus::Active,
            date!(2024 - 01 - 01),
        ))
        .expect("hire alice");
    org.persistence
        .create_employment(hire_command(
            org.bob,
            org.analyst_position,
            EmploymentStatus::Active,
            date!(2024 - 02 - 01),
        ))
        .expect("hire bob");

    let chart = org.persistence.org_chart_for(org.alice).expect("chart");
    assert_eq!(chart.me.person_id, org.alice);
    assert_eq!(chart.me.department_name, "Human Resources");
    match &chart.boss {
        SupervisorLookup::Occupied(occupant) => assert_eq!(occupant.person_id, org.carol),
        other => panic!("expected boss, got {other:?}"),
    }
    // Carol shares the department, so she appears among the peers too.
    let peer_ids: Vec<i64> = chart.peers.iter().map(|p| p.person_id).collect();
    assert!(peer_ids.contains(&org.bob));
    assert!(!peer_ids.contains(&org.alice));
    assert!(chart.subordinates.is_empty());

    let boss_chart = org.persistence.org_chart_for(org.carol).expect("chart");
    let subordinate_ids: Vec<i64> = boss_chart
        .subordinates
        .iter()
        .map(|s| s.person_id)
        .collect();
    assert_eq!(subordinate_ids, vec![org.alice, org.bob]);
    assert_eq!(boss_chart.boss, SupervisorLookup::Unconfigured);
}

#[test]
fn test_org_chart_requires_an_active_employment() {
    let mut org = setup_matrix_org();
    let result = org.persistence.org_chart_for(org.alice);
    assert!(matches!(
        result,
        Err(crate::PersistenceError::NotFound(_))
    ));
}

#[test]
fn test_department_manager_occupant_distinguishes_vacant_from_unconfigured() {
    let mut org = setup_matrix_org();

    // The manager seat exists but is unfilled.
    let lookup = org
        .persistence
        .department_manager_occupant(org.department_id)
        .expect("lookup");
    assert_eq!(
        lookup,
        SupervisorLookup::Vacant {
            position_id: org.manager_position,
            position_title: String::from("HR Manager"),
        }
    );

    org.persistence
        .create_employment(hire_command(
            org.carol,
            org.manager_position,
            EmploymentStatus::Active,
            date!(2023 - 01 - 01),
        ))
        .expect("hire boss");
    let lookup = org
        .persistence
        .department_manager_occupant(org.department_id)
        .expect("lookup");
    assert!(matches!(lookup, SupervisorLookup::Occupied(_)));

    // A department with no manager-flagged position at all.
    let other_department = org
        .persistence
        .create_department("Finance")
        .expect("dept");
    let lookup = org
        .persistence
        .department_manager_occupant(other_department)
        .expect("lookup");
    assert_eq!(lookup, SupervisorLookup::Unconfigured);
}
