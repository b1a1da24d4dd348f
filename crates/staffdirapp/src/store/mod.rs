//! # Storage Layer
//!
//! This module defines the storage abstraction for staffdir. The [`DataStore`] trait
//! keeps the command layer independent of where records live.
//!
//! Stores are deliberately dumb: they keep records in arrival order and look them up by id.
//! Validation, id assignment and duplicate-email detection happen in the command layer, so
//! every backend enforces the same rules.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: ordered `Vec` of employees, alive for the process lifetime.

use crate::error::Result;
use crate::model::{Employee, EmployeeId};

pub mod memory;

/// Abstract interface for employee storage.
pub trait DataStore {
    /// Insert a new employee at the end, or replace an existing one in place.
    fn save_employee(&mut self, employee: &Employee) -> Result<()>;

    /// Get an employee by id
    fn get_employee(&self, id: EmployeeId) -> Result<Employee>;

    /// All employees in arrival order. The returned vector is a copy.
    fn list_employees(&self) -> Result<Vec<Employee>>;

    /// Remove an employee, returning the removed record
    fn delete_employee(&mut self, id: EmployeeId) -> Result<Employee>;
}
