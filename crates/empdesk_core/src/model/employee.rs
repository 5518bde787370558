//! Employee domain model.
//!
//! # Responsibility
//! - Define the single record shape shared by session, service and repository.
//! - Provide the human-readable rendering used by the console listing.
//!
//! # Invariants
//! - `id` is assigned by the operator and never generated by core.
//! - `salary` must be finite before it reaches storage.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Operator-assigned primary key of an employee row.
pub type EmployeeId = i64;

/// Canonical employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Primary key supplied by the operator.
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
    /// Non-negative by convention; only finiteness is enforced.
    pub salary: f64,
}

/// Validation failures raised before an employee is persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeValidationError {
    /// NaN and infinities cannot round-trip through a REAL column.
    NonFiniteSalary(f64),
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFiniteSalary(value) => {
                write!(f, "salary must be a finite number, got `{value}`")
            }
        }
    }
}

impl Error for EmployeeValidationError {}

impl Employee {
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
            salary,
        }
    }

    /// Checks write-path invariants.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        validate_salary(self.salary)
    }

    /// Returns whether this record belongs to `department`, ignoring ASCII case.
    pub fn is_in_department(&self, department: &str) -> bool {
        self.department.eq_ignore_ascii_case(department)
    }
}

/// Rejects salaries SQLite would not store as a REAL.
pub fn validate_salary(salary: f64) -> Result<(), EmployeeValidationError> {
    if salary.is_finite() {
        Ok(())
    } else {
        Err(EmployeeValidationError::NonFiniteSalary(salary))
    }
}

impl Display for Employee {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Employee(id={}, name={}, department={}, salary={})",
            self.id,
            self.name,
            self.department,
            format_salary(self.salary)
        )
    }
}

// Whole amounts keep one decimal place so `1100` renders as `1100.0`.
fn format_salary(salary: f64) -> String {
    if salary.is_finite() && salary.fract() == 0.0 {
        format!("{salary:.1}")
    } else {
        salary.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{format_salary, Employee, EmployeeValidationError};

    #[test]
    fn format_salary_keeps_one_decimal_for_whole_amounts() {
        assert_eq!(format_salary(1100.0), "1100.0");
        assert_eq!(format_salary(0.0), "0.0");
        assert_eq!(format_salary(2200.5), "2200.5");
    }

    #[test]
    fn department_match_ignores_ascii_case() {
        let employee = Employee::new(1, "Alice", "iT", 1000.0);
        assert!(employee.is_in_department("IT"));
        assert!(!employee.is_in_department("ITS"));
    }

    #[test]
    fn validate_rejects_non_finite_salary() {
        let employee = Employee::new(1, "Alice", "IT", f64::NAN);
        assert!(matches!(
            employee.validate(),
            Err(EmployeeValidationError::NonFiniteSalary(_))
        ));
        assert!(Employee::new(1, "Alice", "IT", -5.0).validate().is_ok());
    }
}
