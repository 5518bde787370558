//! Employee use-case service.
//!
//! # Responsibility
//! - Apply the IT salary uplift before an employee is first persisted.
//! - Forward list/update/delete to the repository.
//! - Optionally turn zero-row update/delete into `NotFound`.
//!
//! # Invariants
//! - The uplift runs on insert only; reads and salary updates never reapply it.
//! - Service layer remains storage-agnostic.

use crate::model::employee::{Employee, EmployeeId};
use crate::repo::employee_repo::{EmployeeRepository, RepoError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Department that receives the insert-time uplift, matched ignoring case.
pub const UPLIFT_DEPARTMENT: &str = "IT";
/// Multiplier applied to `salary` for `UPLIFT_DEPARTMENT` inserts.
pub const UPLIFT_FACTOR: f64 = 1.10;

pub type ServiceResult<T> = Result<T, EmployeeServiceError>;

/// Service error for employee use-cases.
#[derive(Debug)]
pub enum EmployeeServiceError {
    /// Update/delete matched no row under `MatchPolicy::Strict`.
    NotFound(EmployeeId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for EmployeeServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "employee not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EmployeeServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<RepoError> for EmployeeServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// How update/delete treat an id that matches no row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Zero affected rows is reported as success.
    #[default]
    Lenient,
    /// Zero affected rows is reported as `EmployeeServiceError::NotFound`.
    Strict,
}

/// Use-case service wrapper for employee operations.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: R,
    match_policy: MatchPolicy,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a lenient service over the provided repository.
    pub fn new(repo: R) -> Self {
        Self::with_match_policy(repo, MatchPolicy::default())
    }

    pub fn with_match_policy(repo: R, match_policy: MatchPolicy) -> Self {
        Self { repo, match_policy }
    }

    pub fn match_policy(&self) -> MatchPolicy {
        self.match_policy
    }

    /// Inserts a new employee, applying the IT uplift first.
    ///
    /// Returns the record as it was persisted.
    pub fn add_employee(&self, mut employee: Employee) -> ServiceResult<Employee> {
        if employee.is_in_department(UPLIFT_DEPARTMENT) {
            employee.salary *= UPLIFT_FACTOR;
            info!(
                "event=salary_uplift module=service status=ok id={} factor={}",
                employee.id, UPLIFT_FACTOR
            );
        }
        self.repo.add_employee(&employee)?;
        Ok(employee)
    }

    pub fn get_all_employees(&self) -> ServiceResult<Vec<Employee>> {
        Ok(self.repo.get_all_employees()?)
    }

    pub fn update_employee_salary(&self, id: EmployeeId, new_salary: f64) -> ServiceResult<()> {
        let changed = self.repo.update_employee_salary(id, new_salary)?;
        self.check_matched(id, changed)
    }

    pub fn delete_employee(&self, id: EmployeeId) -> ServiceResult<()> {
        let removed = self.repo.delete_employee(id)?;
        self.check_matched(id, removed)
    }

    fn check_matched(&self, id: EmployeeId, affected: usize) -> ServiceResult<()> {
        if affected == 0 && self.match_policy == MatchPolicy::Strict {
            return Err(EmployeeServiceError::NotFound(id));
        }
        Ok(())
    }
}
