//! Employee repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Translate the four employee operations into parameterized SQL.
//! - Own connection acquisition: one connection per call, dropped before return.
//!
//! # Invariants
//! - Write paths call `Employee::validate()` before SQL mutations.
//! - Every failure is logged here and returned to the caller, never swallowed.
//! - Zero-row update/delete is reported as a row count, not as an error.

use crate::db::{open_db, DbError};
use crate::model::employee::{validate_salary, Employee, EmployeeId, EmployeeValidationError};
use log::{debug, error};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for employee persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(EmployeeValidationError),
    Db(DbError),
    /// Insert hit the primary key constraint.
    DuplicateId(EmployeeId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "employee id {id} already exists"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted employee data: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::DuplicateId(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<EmployeeValidationError> for RepoError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence gateway for employee records.
pub trait EmployeeRepository {
    fn add_employee(&self, employee: &Employee) -> RepoResult<()>;
    /// Returns rows in storage order.
    fn get_all_employees(&self) -> RepoResult<Vec<Employee>>;
    /// Returns the number of rows changed (0 or 1).
    fn update_employee_salary(&self, id: EmployeeId, new_salary: f64) -> RepoResult<usize>;
    /// Returns the number of rows removed (0 or 1).
    fn delete_employee(&self, id: EmployeeId) -> RepoResult<usize>;
}

/// SQLite-backed employee repository.
///
/// Holds only the database location; each operation opens, migrates and
/// drops its own connection.
#[derive(Debug, Clone)]
pub struct SqliteEmployeeRepository {
    db_path: PathBuf,
}

impl SqliteEmployeeRepository {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Opens one connection to verify the database is usable.
    ///
    /// Used at startup so a bad path fails before the menu is shown.
    pub fn check_connection(&self) -> RepoResult<()> {
        self.with_connection("db_check", |_| Ok(()))
    }

    fn with_connection<T>(
        &self,
        event: &'static str,
        op: impl FnOnce(&Connection) -> RepoResult<T>,
    ) -> RepoResult<T> {
        let result = open_db(&self.db_path)
            .map_err(RepoError::from)
            .and_then(|conn| op(&conn));
        match &result {
            Ok(_) => debug!("event={event} module=repo status=ok"),
            Err(err) => error!("event={event} module=repo status=error error={err}"),
        }
        result
    }
}

impl EmployeeRepository for SqliteEmployeeRepository {
    fn add_employee(&self, employee: &Employee) -> RepoResult<()> {
        self.with_connection("employee_add", |conn| {
            employee.validate()?;

            let mut stmt = conn.prepare(
                "INSERT INTO employees (id, name, department, salary) VALUES (?1, ?2, ?3, ?4);",
            )?;
            stmt.execute(params![
                employee.id,
                employee.name.as_str(),
                employee.department.as_str(),
                employee.salary,
            ])
            .map_err(|err| match DbError::from(err) {
                db_err if db_err.is_constraint_violation() => RepoError::DuplicateId(employee.id),
                db_err => RepoError::Db(db_err),
            })?;
            Ok(())
        })
    }

    fn get_all_employees(&self) -> RepoResult<Vec<Employee>> {
        self.with_connection("employee_list", |conn| {
            let mut stmt = conn.prepare("SELECT * FROM employees;")?;
            let mut rows = stmt.query([])?;
            let mut employees = Vec::new();

            while let Some(row) = rows.next()? {
                employees.push(parse_employee_row(row)?);
            }

            Ok(employees)
        })
    }

    fn update_employee_salary(&self, id: EmployeeId, new_salary: f64) -> RepoResult<usize> {
        self.with_connection("employee_update_salary", |conn| {
            validate_salary(new_salary)?;

            let mut stmt = conn.prepare("UPDATE employees SET salary = ?1 WHERE id = ?2;")?;
            let changed = stmt.execute(params![new_salary, id])?;
            Ok(changed)
        })
    }

    fn delete_employee(&self, id: EmployeeId) -> RepoResult<usize> {
        self.with_connection("employee_delete", |conn| {
            let mut stmt = conn.prepare("DELETE FROM employees WHERE id = ?1;")?;
            let removed = stmt.execute([id])?;
            Ok(removed)
        })
    }
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    let id: EmployeeId = row.get("id")?;
    let salary = row.get::<_, Option<f64>>("salary")?.ok_or_else(|| {
        RepoError::InvalidData(format!("null salary for id {id} in employees.salary"))
    })?;

    Ok(Employee {
        id,
        name: row.get("name")?,
        department: row.get("department")?,
        salary,
    })
}
