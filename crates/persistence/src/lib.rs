// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the orgledger personnel system.
//!
//! This crate provides `SQLite` persistence for the employment ledger, the
//! append-only status log, the position catalog with its reporting matrix,
//! and the department-role tables. It is built on Diesel with embedded
//! migrations.
//!
//! ## Concurrency model
//!
//! Every mutating operation runs inside
//! [`SqliteConnection::immediate_transaction`]: `BEGIN IMMEDIATE` acquires
//! the database write lock before the first read, so the
//! count-occupancy-then-insert sequence of the capacity accountant can
//! never interleave with another writer. No two concurrent seat
//! reservations against the same position can both observe the last seat
//! as available.
//!
//! Reads run outside write transactions and never block writers; a
//! momentarily stale hierarchy read is cosmetic, not capacity-violating.
//!
//! ## Testing
//!
//! Standard tests run against unique shared in-memory databases, named via
//! an atomic counter for deterministic isolation without time-based
//! collisions.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use orgledger::Command;
use orgledger_domain::{Employment, HierarchicalRole, Person, Position, ReportingMatrix};
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::Date;

mod backend;
mod data_models;
mod dates;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{
    DashboardStats, DepartmentHeadcount, DepartmentRoleRecord, ExpiringContract, OccupantInfo,
    OrgChart, SeatReport, StatusLogRecord, SupervisorLookup,
};
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique sequential
/// ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the employment ledger and its read models.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// ensuring deterministic test isolation without time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_orgledger_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn = backend::initialize_database(&shared_memory_url)?;
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn = backend::initialize_database(path_str)?;
        backend::enable_wal_mode(&mut conn)?;
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// This is a startup-time check required to ensure referential
    /// integrity constraints are enforced.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Catalog
    // ========================================================================

    /// Creates a department.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not unique or the insert fails.
    pub fn create_department(&mut self, name: &str) -> Result<i64, PersistenceError> {
        self.conn
            .immediate_transaction(|conn| mutations::org::create_department(conn, name))
    }

    /// Creates a job title.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not unique or the insert fails.
    pub fn create_job_title(&mut self, name: &str) -> Result<i64, PersistenceError> {
        self.conn
            .immediate_transaction(|conn| mutations::org::create_job_title(conn, name))
    }

    /// Creates a position with its declared capacity and manager set.
    ///
    /// # Arguments
    ///
    /// * `department_id` - The owning department
    /// * `job_title_id` - The job title (unique per department)
    /// * `vacancies` - Declared seat capacity
    /// * `is_manager` - Whether this is the department's manager seat
    /// * `manager_positions` - The positions this position reports to
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SelfReportingPosition` (wrapped) if the
    /// manager set is invalid, or a database error on constraint
    /// violations.
    pub fn create_position(
        &mut self,
        department_id: i64,
        job_title_id: i64,
        vacancies: u32,
        is_manager: bool,
        manager_positions: &BTreeSet<i64>,
    ) -> Result<i64, PersistenceError> {
        self.conn.immediate_transaction(|conn| {
            let position_id = mutations::org::create_position(
                conn,
                department_id,
                job_title_id,
                vacancies,
                is_manager,
            )?;
            mutations::org::set_position_managers(conn, position_id, manager_positions)?;
            Ok(position_id)
        })
    }

    /// Replaces a position's manager set.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SelfReportingPosition` (wrapped) if the set
    /// contains the position itself.
    pub fn set_position_managers(
        &mut self,
        position_id: i64,
        manager_positions: &BTreeSet<i64>,
    ) -> Result<(), PersistenceError> {
        self.conn.immediate_transaction(|conn| {
            mutations::org::set_position_managers(conn, position_id, manager_positions)
        })
    }

    /// Retrieves a position with its manager set.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PositionNotFound` (wrapped) if it does not
    /// exist.
    pub fn get_position(&mut self, position_id: i64) -> Result<Position, PersistenceError> {
        queries::org::get_position(&mut self.conn, position_id)
    }

    /// Loads the whole reporting matrix as a directed graph.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge query fails.
    pub fn reporting_matrix(&mut self) -> Result<ReportingMatrix, PersistenceError> {
        queries::org::load_reporting_matrix(&mut self.conn)
    }

    /// Creates a person.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_person(&mut self, person: &Person) -> Result<i64, PersistenceError> {
        self.conn
            .immediate_transaction(|conn| mutations::org::create_person(conn, person))
    }

    /// Retrieves a person by id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PersonNotFound` (wrapped) if the person does
    /// not exist.
    pub fn get_person(&mut self, person_id: i64) -> Result<Person, PersistenceError> {
        queries::org::get_person(&mut self.conn, person_id)
    }

    /// Sets whether a person has a provisioned user account.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the person does not exist.
    pub fn set_person_account_flag(
        &mut self,
        person_id: i64,
        has_user_account: bool,
    ) -> Result<(), PersistenceError> {
        self.conn.immediate_transaction(|conn| {
            mutations::org::set_person_account_flag(conn, person_id, has_user_account)
        })
    }

    // ========================================================================
    // Employment transitions
    // ========================================================================

    /// Creates an employment from a `Command::Hire`.
    ///
    /// The duplicate-contract check, the capacity reservation, the row
    /// insert and the "initial hire" log append are one atomic unit under
    /// the write lock; any failure rolls back all of them.
    ///
    /// # Returns
    ///
    /// The new employment id.
    ///
    /// # Errors
    ///
    /// * `DomainError::DuplicateActiveContract` (wrapped)
    /// * `DomainError::CapacityExceeded` (wrapped)
    /// * `DomainError::PersonNotFound` / `PositionNotFound` (wrapped)
    /// * date-validation errors from the engine
    pub fn create_employment(&mut self, command: Command) -> Result<i64, PersistenceError> {
        self.conn
            .immediate_transaction(|conn| mutations::employment::create_employment(conn, command))
    }

    /// Applies a `Command::ChangeStatus` to an existing employment.
    ///
    /// # Arguments
    ///
    /// * `command` - The status-change command
    /// * `today` - The calling day, used for end-date stamping
    ///
    /// # Returns
    ///
    /// The employment as persisted after the transition.
    ///
    /// # Errors
    ///
    /// * `NotFound` if the employment does not exist
    /// * `DomainError::DuplicateActiveContract` / `CapacityExceeded`
    ///   (wrapped) when re-entering an active-like status
    pub fn change_employment_status(
        &mut self,
        command: Command,
        today: Date,
    ) -> Result<Employment, PersistenceError> {
        self.conn.immediate_transaction(|conn| {
            mutations::employment::change_employment_status(conn, command, today)
        })
    }

    /// Removes an employment row, releasing its seat when active-like.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the employment does not exist.
    pub fn delete_employment(&mut self, employment_id: i64) -> Result<(), PersistenceError> {
        self.conn.immediate_transaction(|conn| {
            mutations::employment::delete_employment(conn, employment_id)
        })
    }

    /// Retrieves an employment by id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmploymentNotFound` (wrapped) if the row does
    /// not exist.
    pub fn get_employment(&mut self, employment_id: i64) -> Result<Employment, PersistenceError> {
        queries::employment::get_employment(&mut self.conn, employment_id)
    }

    /// Lists an employment's status log in append order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmploymentNotFound` (wrapped) if the
    /// employment does not exist.
    pub fn status_log(
        &mut self,
        employment_id: i64,
    ) -> Result<Vec<StatusLogRecord>, PersistenceError> {
        queries::employment::status_log(&mut self.conn, employment_id)
    }

    /// Reports a position's declared capacity and fresh occupancy.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PositionNotFound` (wrapped) if the position
    /// does not exist.
    pub fn seat_report(&mut self, position_id: i64) -> Result<SeatReport, PersistenceError> {
        queries::seats::seat_report(&mut self.conn, position_id)
    }

    // ========================================================================
    // Hierarchy resolver
    // ========================================================================

    /// Resolves the supervisor of a position over its manager set.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub fn supervisor_of(
        &mut self,
        position_id: i64,
    ) -> Result<SupervisorLookup, PersistenceError> {
        queries::hierarchy::supervisor_of(&mut self.conn, position_id)
    }

    /// Builds a person's org chart: self, boss, peers, subordinates.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the person has no active-like employment.
    pub fn org_chart_for(&mut self, person_id: i64) -> Result<OrgChart, PersistenceError> {
        queries::hierarchy::org_chart_for(&mut self.conn, person_id)
    }

    /// Finds the occupant of a department's manager seat.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub fn department_manager_occupant(
        &mut self,
        department_id: i64,
    ) -> Result<SupervisorLookup, PersistenceError> {
        queries::hierarchy::department_manager_occupant(&mut self.conn, department_id)
    }

    /// Computes the dashboard KPI aggregation as of `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub fn dashboard_stats(&mut self, today: Date) -> Result<DashboardStats, PersistenceError> {
        queries::dashboard::dashboard_stats(&mut self.conn, today)
    }

    // ========================================================================
    // Department roles
    // ========================================================================

    /// Assigns a person-scoped department role.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ManagerConflict` (wrapped) when another person
    /// holds the department's open Manager role.
    pub fn assign_person_department_role(
        &mut self,
        person_id: i64,
        department_id: i64,
        hierarchical_role: HierarchicalRole,
        start_date: Date,
        notes: Option<String>,
        today: Date,
    ) -> Result<i64, PersistenceError> {
        self.conn.immediate_transaction(|conn| {
            mutations::roles::assign_person_department_role(
                conn,
                person_id,
                department_id,
                hierarchical_role,
                start_date,
                notes,
                today,
            )
        })
    }

    /// Assigns an employment-scoped department role.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ManagerConflict` (wrapped) when another
    /// employment holds the department's open Manager role.
    pub fn assign_employment_department_role(
        &mut self,
        employment_id: i64,
        department_id: i64,
        hierarchical_role: HierarchicalRole,
        start_date: Date,
        notes: Option<String>,
        today: Date,
    ) -> Result<i64, PersistenceError> {
        self.conn.immediate_transaction(|conn| {
            mutations::roles::assign_employment_department_role(
                conn,
                employment_id,
                department_id,
                hierarchical_role,
                start_date,
                notes,
                today,
            )
        })
    }

    /// Lists the currently open person-scoped Manager roles.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn current_person_managers(
        &mut self,
        department_id: Option<i64>,
    ) -> Result<Vec<DepartmentRoleRecord>, PersistenceError> {
        queries::roles::current_person_managers(&mut self.conn, department_id)
    }

    /// Lists all person-scoped roles for one person, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn person_roles(
        &mut self,
        person_id: i64,
    ) -> Result<Vec<DepartmentRoleRecord>, PersistenceError> {
        queries::roles::person_roles(&mut self.conn, person_id)
    }

    /// Lists all employment-scoped roles for one employment, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn employment_roles(
        &mut self,
        employment_id: i64,
    ) -> Result<Vec<DepartmentRoleRecord>, PersistenceError> {
        queries::roles::employment_roles(&mut self.conn, employment_id)
    }
}
