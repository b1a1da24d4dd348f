use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Department, Role};
use crate::query::{process, QueryState};
use crate::store::DataStore;
use serde::Serialize;
use std::collections::BTreeMap;

/// Headcounts for the whole directory, plus how many records the current query matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryStats {
    pub total: usize,
    pub filtered: usize,
    pub departments: BTreeMap<Department, usize>,
    pub roles: BTreeMap<Role, usize>,
}

impl DirectoryStats {
    /// Number of departments with at least one employee.
    pub fn department_count(&self) -> usize {
        self.departments.len()
    }
}

pub fn run<S: DataStore>(store: &S, query: &QueryState) -> Result<CmdResult> {
    let snapshot = store.list_employees()?;

    let mut stats = DirectoryStats {
        total: snapshot.len(),
        ..Default::default()
    };
    for e in &snapshot {
        *stats.departments.entry(e.department).or_insert(0) += 1;
        *stats.roles.entry(e.role).or_insert(0) += 1;
    }
    stats.filtered = process(snapshot, query).len();

    Ok(CmdResult::default().with_stats(stats))
}
