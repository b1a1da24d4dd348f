//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for record operations, whatever UI sits on top.
//!
//! The facade:
//! - **Owns** the store; there is no global employee list
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>` or plain records)
//!
//! It holds no business logic and does no I/O. `DirectoryApi<S: DataStore>` is generic so
//! tests and alternative backends plug in without touching the commands.

use crate::commands;
use crate::error::Result;
use crate::model::{Employee, EmployeeDraft, EmployeeId};
use crate::query::QueryState;
use crate::store::memory::InMemoryStore;
use crate::store::DataStore;

/// The main API facade for directory operations.
pub struct DirectoryApi<S: DataStore> {
    store: S,
}

impl DirectoryApi<InMemoryStore> {
    /// An in-memory directory preloaded with `employees`, in order.
    pub fn in_memory(employees: Vec<Employee>) -> Self {
        Self::new(InMemoryStore::with_employees(employees))
    }
}

impl<S: DataStore> DirectoryApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add(&mut self, draft: &EmployeeDraft) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, draft)
    }

    pub fn update(&mut self, id: EmployeeId, draft: &EmployeeDraft) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, draft)
    }

    pub fn delete(&mut self, id: EmployeeId) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn get_by_id(&self, id: EmployeeId) -> Result<Option<Employee>> {
        commands::get::find(&self.store, id)
    }

    pub fn view(&self, ids: &[EmployeeId]) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, ids)
    }

    /// Snapshot of every record in arrival order.
    pub fn list(&self) -> Result<Vec<Employee>> {
        self.store.list_employees()
    }

    pub fn query(&self, query: &QueryState) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, query)
    }

    pub fn stats(&self, query: &QueryState) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store, query)
    }
}

pub use crate::commands::{CmdMessage, CmdResult, DirectoryStats, MessageLevel};
