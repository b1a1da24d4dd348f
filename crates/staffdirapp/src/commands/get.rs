use crate::commands::CmdResult;
use crate::error::{DirectoryError, Result};
use crate::model::{Employee, EmployeeId};
use crate::store::DataStore;

/// Look one employee up; an unknown id is `None`, not an error.
pub fn find<S: DataStore>(store: &S, id: EmployeeId) -> Result<Option<Employee>> {
    match store.get_employee(id) {
        Ok(employee) => Ok(Some(employee)),
        Err(DirectoryError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// List the given employees, in the order asked for. Any unknown id fails the whole call.
pub fn run<S: DataStore>(store: &S, ids: &[EmployeeId]) -> Result<CmdResult> {
    let listed = ids
        .iter()
        .map(|id| store.get_employee(*id))
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_listed_employees(listed))
}
