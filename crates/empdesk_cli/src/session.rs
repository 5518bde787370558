//! Interactive console session.
//!
//! # Responsibility
//! - Print the numbered menu, read choices and fields, dispatch to the service.
//! - Report service failures to the operator and keep the loop alive.
//!
//! # Invariants
//! - All reads are whole lines, so a number prompt never leaves a terminator
//!   behind for the next text prompt.
//! - Malformed numbers and non-UTF-8 lines re-prompt instead of ending the
//!   session.
//! - Option 5 and end of input are the only ways out of the loop.

use empdesk_core::{Employee, EmployeeId, EmployeeRepository, EmployeeService};
use log::{debug, info, warn};
use std::fmt::Display;
use std::io::{self, BufRead, Write};

const MENU: &str = "\n=== Employee Management System ===
1. Add Employee
2. View All Employees
3. Update Employee Salary
4. Delete Employee
5. Exit";
const CHOICE_PROMPT: &str = "Choose an option: ";
const INVALID_CHOICE: &str = "Invalid choice!";
const INVALID_NUMBER: &str = "Invalid number, please try again.";
const INVALID_TEXT: &str = "Input is not valid UTF-8, please try again.";
const FAREWELL: &str = "Exiting...";

/// How a session loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Operator chose option 5.
    Exited,
    /// Input reached end of file.
    InputClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    View,
    UpdateSalary,
    Delete,
    Exit,
}

impl MenuChoice {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().parse::<i64>().ok()? {
            1 => Some(Self::Add),
            2 => Some(Self::View),
            3 => Some(Self::UpdateSalary),
            4 => Some(Self::Delete),
            5 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Console loop bound to one input, one output and one service.
pub struct Session<'svc, I, O, R: EmployeeRepository> {
    input: I,
    output: O,
    service: &'svc EmployeeService<R>,
}

impl<'svc, I: BufRead, O: Write, R: EmployeeRepository> Session<'svc, I, O, R> {
    pub fn new(input: I, output: O, service: &'svc EmployeeService<R>) -> Self {
        Self {
            input,
            output,
            service,
        }
    }

    /// Runs the menu loop until exit or end of input.
    ///
    /// # Errors
    /// Only I/O failures on the console streams; service failures are printed
    /// and the loop continues.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(line) = self.prompt_line(CHOICE_PROMPT)? else {
                return Ok(SessionEnd::InputClosed);
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                writeln!(self.output, "{INVALID_CHOICE}")?;
                continue;
            };
            debug!("event=menu_choice module=session status=ok choice={choice:?}");

            let completed = match choice {
                MenuChoice::Add => self.add_employee()?,
                MenuChoice::View => self.view_employees()?,
                MenuChoice::UpdateSalary => self.update_salary()?,
                MenuChoice::Delete => self.delete_employee()?,
                MenuChoice::Exit => {
                    writeln!(self.output, "{FAREWELL}")?;
                    self.output.flush()?;
                    return Ok(SessionEnd::Exited);
                }
            };
            if !completed {
                return Ok(SessionEnd::InputClosed);
            }
        }
    }

    /// Each command handler returns `false` when input closed mid-command.
    fn add_employee(&mut self) -> io::Result<bool> {
        let Some(id) = self.prompt_id("Enter ID: ")? else {
            return Ok(false);
        };
        let Some(name) = self.prompt_line("Enter Name: ")? else {
            return Ok(false);
        };
        let Some(department) = self.prompt_line("Enter Department: ")? else {
            return Ok(false);
        };
        let Some(salary) = self.prompt_salary("Enter Salary: ")? else {
            return Ok(false);
        };

        let employee = Employee::new(id, name, department, salary);
        if let Err(err) = self.service.add_employee(employee) {
            self.report_failure("employee_add", err)?;
        }
        Ok(true)
    }

    fn view_employees(&mut self) -> io::Result<bool> {
        match self.service.get_all_employees() {
            Ok(employees) => {
                for employee in &employees {
                    writeln!(self.output, "{employee}")?;
                }
            }
            Err(err) => self.report_failure("employee_list", err)?,
        }
        Ok(true)
    }

    fn update_salary(&mut self) -> io::Result<bool> {
        let Some(id) = self.prompt_id("Enter Employee ID: ")? else {
            return Ok(false);
        };
        let Some(new_salary) = self.prompt_salary("Enter New Salary: ")? else {
            return Ok(false);
        };

        if let Err(err) = self.service.update_employee_salary(id, new_salary) {
            self.report_failure("employee_update_salary", err)?;
        }
        Ok(true)
    }

    fn delete_employee(&mut self) -> io::Result<bool> {
        let Some(id) = self.prompt_id("Enter Employee ID: ")? else {
            return Ok(false);
        };

        if let Err(err) = self.service.delete_employee(id) {
            self.report_failure("employee_delete", err)?;
        }
        Ok(true)
    }

    fn report_failure(&mut self, command: &str, err: impl Display) -> io::Result<()> {
        warn!("event=command_failed module=session status=error command={command} error={err}");
        writeln!(self.output, "Error: {err}")
    }

    fn prompt_id(&mut self, prompt: &str) -> io::Result<Option<EmployeeId>> {
        self.prompt_parsed(prompt, |raw| raw.parse::<EmployeeId>().ok())
    }

    fn prompt_salary(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        self.prompt_parsed(prompt, |raw| {
            raw.parse::<f64>().ok().filter(|value| value.is_finite())
        })
    }

    /// Re-prompts until `parse` accepts the trimmed line or input closes.
    fn prompt_parsed<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            if let Some(value) = parse(line.trim()) {
                return Ok(Some(value));
            }
            writeln!(self.output, "{INVALID_NUMBER}")?;
        }
    }

    /// Prints `prompt` without a newline and reads one line without its
    /// terminator. Re-prompts on lines that are not valid UTF-8. Returns
    /// `None` at end of input.
    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                info!("event=session_input module=session status=closed");
                return Ok(None);
            }
            match String::from_utf8(buf) {
                Ok(mut line) => {
                    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
                    line.truncate(trimmed_len);
                    return Ok(Some(line));
                }
                Err(err) => {
                    warn!("event=session_input module=session status=error error={err}");
                    writeln!(self.output, "{INVALID_TEXT}")?;
                }
            }
        }
    }
}
