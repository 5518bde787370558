//! Core domain logic for empdesk.
//! This crate owns the employee record rules and their SQLite persistence.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{Employee, EmployeeId, EmployeeValidationError};
pub use repo::employee_repo::{EmployeeRepository, RepoError, RepoResult, SqliteEmployeeRepository};
pub use service::employee_service::{
    EmployeeService, EmployeeServiceError, MatchPolicy, ServiceResult, UPLIFT_DEPARTMENT,
    UPLIFT_FACTOR,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
