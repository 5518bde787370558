//! Core use-case services.
//!
//! # Responsibility
//! - Apply business rules on top of repository calls.
//! - Keep the console layer decoupled from storage details.

pub mod employee_service;
