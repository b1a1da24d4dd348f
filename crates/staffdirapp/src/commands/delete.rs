use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::EmployeeId;
use crate::store::DataStore;
use tracing::{info, warn};

pub fn run<S: DataStore>(store: &mut S, id: EmployeeId) -> Result<CmdResult> {
    let removed = store
        .delete_employee(id)
        .inspect_err(|e| warn!(id, error = %e, "rejected delete"))?;
    info!(id, "employee deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Employee deleted ({}): {}",
        removed.id,
        removed.full_name()
    )));
    result.affected_employees.push(removed);
    Ok(result)
}
