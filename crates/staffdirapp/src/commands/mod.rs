//! # Command Layer
//!
//! This module contains the **core business logic** of staffdir. Each operation lives in
//! its own submodule as plain functions over a [`DataStore`](crate::store::DataStore).
//!
//! Commands:
//! - validate drafts and enforce uniqueness before anything reaches the store
//! - run the query pipeline and paginator for listings
//! - return a structured [`CmdResult`], never strings for a terminal
//!
//! They do no I/O beyond the store and emit `tracing` events instead of printing.
//!
//! ## Testing Strategy
//!
//! **This is where most tests live.** Command tests use `InMemoryStore` fixtures and check
//! both the returned `CmdResult` and the store contents afterwards.
//!
//! ## Command Modules
//!
//! - [`create`]: Add an employee
//! - [`update`]: Replace an employee's fields
//! - [`delete`]: Remove an employee
//! - [`get`]: Look employees up by id
//! - [`list`]: Query + paginate the directory
//! - [`stats`]: Headcounts by department and role
//! - [`helpers`]: Id assignment and email uniqueness

use crate::model::Employee;
use crate::paginate::PageResult;
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod list;
pub mod stats;
pub mod update;

pub use stats::DirectoryStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    /// Employees created, changed or removed by the command
    pub affected_employees: Vec<Employee>,
    /// Employees to display
    pub listed_employees: Vec<Employee>,
    pub page: Option<PageResult<Employee>>,
    pub stats: Option<DirectoryStats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_employees(mut self, employees: Vec<Employee>) -> Self {
        self.listed_employees = employees;
        self
    }

    pub fn with_page(mut self, page: PageResult<Employee>) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_stats(mut self, stats: DirectoryStats) -> Self {
        self.stats = Some(stats);
        self
    }
}
