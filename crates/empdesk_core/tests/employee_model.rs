use empdesk_core::{Employee, EmployeeValidationError};

#[test]
fn employee_new_keeps_fields_as_given() {
    let employee = Employee::new(42, "Alice Smith", "Research", 1234.5);

    assert_eq!(employee.id, 42);
    assert_eq!(employee.name, "Alice Smith");
    assert_eq!(employee.department, "Research");
    assert_eq!(employee.salary, 1234.5);
}

#[test]
fn display_matches_console_listing_format() {
    let employee = Employee::new(1, "Alice", "IT", 1100.0);
    assert_eq!(
        employee.to_string(),
        "Employee(id=1, name=Alice, department=IT, salary=1100.0)"
    );

    let fractional = Employee::new(2, "Bob", "Sales", 2200.75);
    assert_eq!(
        fractional.to_string(),
        "Employee(id=2, name=Bob, department=Sales, salary=2200.75)"
    );
}

#[test]
fn employee_serialization_uses_expected_wire_fields() {
    let employee = Employee::new(9, "Ivy", "Ops", 1500.0);

    let json = serde_json::to_value(&employee).unwrap();
    assert_eq!(json["id"], 9);
    assert_eq!(json["name"], "Ivy");
    assert_eq!(json["department"], "Ops");
    assert_eq!(json["salary"], 1500.0);

    let decoded: Employee = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, employee);
}

#[test]
fn validation_allows_negative_but_rejects_infinite_salary() {
    assert!(Employee::new(1, "Neg", "HR", -1.0).validate().is_ok());

    let err = Employee::new(1, "Inf", "HR", f64::INFINITY)
        .validate()
        .unwrap_err();
    assert_eq!(err, EmployeeValidationError::NonFiniteSalary(f64::INFINITY));
    assert!(err.to_string().contains("finite"));
}
