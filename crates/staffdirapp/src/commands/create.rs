use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Employee, EmployeeDraft};
use crate::store::DataStore;
use crate::validation::validate_draft;
use tracing::{info, warn};

use super::helpers::{ensure_unique_email, next_id};

pub fn run<S: DataStore>(store: &mut S, draft: &EmployeeDraft) -> Result<CmdResult> {
    let valid = validate_draft(draft).inspect_err(|e| warn!(error = %e, "rejected new employee"))?;
    ensure_unique_email(store, &valid.email, None)
        .inspect_err(|e| warn!(error = %e, "rejected new employee"))?;

    let employee = Employee {
        id: next_id(store)?,
        first_name: valid.first_name,
        last_name: valid.last_name,
        email: valid.email,
        department: valid.department,
        role: valid.role,
    };
    store.save_employee(&employee)?;
    info!(id = employee.id, email = %employee.email, "employee added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Employee added ({}): {}",
        employee.id,
        employee.full_name()
    )));
    result.affected_employees.push(employee);
    Ok(result)
}
