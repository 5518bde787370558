//! Domain model for employee records.
//!
//! # Responsibility
//! - Define the plain data structure used by business logic and storage.
//!
//! # Invariants
//! - Every record is identified by an operator-assigned `EmployeeId`.
//! - Deletion is a hard delete in storage; the model carries no tombstone.

pub mod employee;
