// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! Workflow automation for the orgledger workspace:
//!
//! - `cargo xtask ci` — formatting check, clippy, and the full test suite
//! - `cargo xtask seed --database <path>` — provision a demo organization
//!   (departments, job titles, a reporting matrix, people and hires) in a
//!   `SQLite` database file, for driving the server against realistic data

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use duct::cmd;
use orgledger_api::{
    CreateDepartmentRequest, CreateEmploymentRequest, CreateJobTitleRequest, CreatePersonRequest,
    CreatePositionRequest, create_department, create_employment, create_job_title, create_person,
    create_position,
};
use orgledger_persistence::Persistence;
use tracing::info;
use tracing_log::AsTrace;

#[derive(Parser)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full CI pipeline: fmt --check, clippy, test.
    Ci,
    /// Seed a demo organization into a database file.
    Seed {
        /// Path to the `SQLite` database file to create or reuse.
        #[arg(short, long, default_value = "orgledger-demo.sqlite3")]
        database: String,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbosity.log_level_filter().as_trace())
        .init();

    match args.command {
        Command::Ci => run_ci(),
        Command::Seed { database } => seed_demo(&database),
    }
}

fn run_ci() -> Result<()> {
    info!("Running cargo fmt --check");
    cmd!("cargo", "fmt", "--all", "--", "--check").run()?;
    info!("Running cargo clippy");
    cmd!("cargo", "clippy", "--workspace", "--all-targets", "--", "-D", "warnings").run()?;
    info!("Running cargo test");
    cmd!("cargo", "test", "--workspace").run()?;
    info!("CI pipeline passed");
    Ok(())
}

struct SeedPerson<'a> {
    first_name: &'a str,
    last_name: &'a str,
    birthdate: &'a str,
    national_id: &'a str,
    has_account: bool,
    role: &'a str,
}

fn seed_demo(database: &str) -> Result<()> {
    info!("Seeding demo organization into {database}");
    let mut persistence = Persistence::new_with_file(database)?;

    let hr = create_department(
        &mut persistence,
        CreateDepartmentRequest {
            name: String::from("Human Resources"),
        },
    )?;
    let engineering = create_department(
        &mut persistence,
        CreateDepartmentRequest {
            name: String::from("Engineering"),
        },
    )?;

    let manager_title = create_job_title(
        &mut persistence,
        CreateJobTitleRequest {
            name: String::from("Department Manager"),
        },
    )?;
    let analyst_title = create_job_title(
        &mut persistence,
        CreateJobTitleRequest {
            name: String::from("Analyst"),
        },
    )?;
    let engineer_title = create_job_title(
        &mut persistence,
        CreateJobTitleRequest {
            name: String::from("Engineer"),
        },
    )?;

    let hr_manager_seat = create_position(
        &mut persistence,
        CreatePositionRequest {
            department_id: hr.department_id,
            job_title_id: manager_title.job_title_id,
            vacancies: 1,
            is_manager: true,
            manager_position_ids: Vec::new(),
        },
    )?;
    let hr_analyst_seat = create_position(
        &mut persistence,
        CreatePositionRequest {
            department_id: hr.department_id,
            job_title_id: analyst_title.job_title_id,
            vacancies: 3,
            is_manager: false,
            manager_position_ids: vec![hr_manager_seat.position_id],
        },
    )?;
    let engineering_seat = create_position(
        &mut persistence,
        CreatePositionRequest {
            department_id: engineering.department_id,
            job_title_id: engineer_title.job_title_id,
            vacancies: 5,
            is_manager: false,
            manager_position_ids: vec![hr_manager_seat.position_id],
        },
    )?;

    let roster = [
        (
            SeedPerson {
                first_name: "Carla",
                last_name: "Mendoza",
                birthdate: "1979-02-11",
                national_id: "V-10293847",
                has_account: true,
                role: "manager",
            },
            hr_manager_seat.position_id,
        ),
        (
            SeedPerson {
                first_name: "Alicia",
                last_name: "Moreno",
                birthdate: "1990-03-14",
                national_id: "V-12345678",
                has_account: true,
                role: "employee",
            },
            hr_analyst_seat.position_id,
        ),
        (
            SeedPerson {
                first_name: "Bruno",
                last_name: "Paredes",
                birthdate: "1988-11-02",
                national_id: "V-87654321",
                has_account: false,
                role: "employee",
            },
            hr_analyst_seat.position_id,
        ),
        (
            SeedPerson {
                first_name: "Elena",
                last_name: "Rivas",
                birthdate: "1994-07-23",
                national_id: "V-56473829",
                has_account: true,
                role: "employee",
            },
            engineering_seat.position_id,
        ),
    ];

    for (person, position_id) in roster {
        let created = create_person(
            &mut persistence,
            CreatePersonRequest {
                first_name: person.first_name.to_string(),
                last_name: person.last_name.to_string(),
                birthdate: person.birthdate.to_string(),
                national_id: Some(person.national_id.to_string()),
                has_user_account: person.has_account,
            },
        )?;
        create_employment(
            &mut persistence,
            CreateEmploymentRequest {
                person_id: created.person_id,
                position_id,
                role: person.role.to_string(),
                employment_type: String::from("permanent"),
                status: String::from("active"),
                hire_date: String::from("2024-01-15"),
                end_date: None,
            },
        )?;
        info!("Hired {} {}", person.first_name, person.last_name);
    }

    info!("Demo organization ready");
    Ok(())
}
