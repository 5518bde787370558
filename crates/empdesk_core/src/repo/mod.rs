//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the employee data access contract.
//! - Isolate SQLite query details from the service layer.

pub mod employee_repo;
