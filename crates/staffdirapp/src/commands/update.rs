use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{EmployeeDraft, EmployeeId};
use crate::store::DataStore;
use crate::validation::validate_draft;
use tracing::{info, warn};

use super::helpers::ensure_unique_email;

/// Replace every editable field of employee `id`. The id and the record's position are kept.
pub fn run<S: DataStore>(
    store: &mut S,
    id: EmployeeId,
    draft: &EmployeeDraft,
) -> Result<CmdResult> {
    let mut employee = store
        .get_employee(id)
        .inspect_err(|e| warn!(id, error = %e, "rejected update"))?;
    let valid = validate_draft(draft).inspect_err(|e| warn!(id, error = %e, "rejected update"))?;
    ensure_unique_email(store, &valid.email, Some(id))
        .inspect_err(|e| warn!(id, error = %e, "rejected update"))?;

    employee.first_name = valid.first_name;
    employee.last_name = valid.last_name;
    employee.email = valid.email;
    employee.department = valid.department;
    employee.role = valid.role;
    store.save_employee(&employee)?;
    info!(id, "employee updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Employee updated ({}): {}",
        employee.id,
        employee.full_name()
    )));
    result.affected_employees.push(employee);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DirectoryError;
    use crate::model::{Employee, Role};
    use crate::store::memory::fixtures::StoreFixture;

    fn draft_of(e: &Employee) -> EmployeeDraft {
        EmployeeDraft::from(e)
    }

    #[test]
    fn keeps_own_email_and_position() {
        let mut fixture = StoreFixture::new().with_sample_data();
        let mut d = draft_of(&fixture.store.get_employee(2).unwrap());
        d.role = "Manager".into();
        d.email = "JANE.SMITH@company.com".into();

        let result = run(&mut fixture.store, 2, &d).unwrap();
        assert_eq!(result.affected_employees[0].role, Role::Manager);

        let all = fixture.store.list_employees().unwrap();
        assert_eq!(all[1].id, 2);
        assert_eq!(all[1].role, Role::Manager);
        assert_eq!(all[1].email, "jane.smith@company.com");
    }

    #[test]
    fn rejects_another_records_email() {
        let mut fixture = StoreFixture::new().with_sample_data();
        let mut d = draft_of(&fixture.store.get_employee(2).unwrap());
        d.email = "John.Doe@company.com".into();

        let err = run(&mut fixture.store, 2, &d).unwrap_err();
        assert!(matches!(err, DirectoryError::DuplicateEmail(_)));
        assert_eq!(
            fixture.store.get_employee(2).unwrap().email,
            "jane.smith@company.com"
        );
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut fixture = StoreFixture::new().with_sample_data();
        let d = draft_of(&fixture.store.get_employee(1).unwrap());
        assert!(matches!(
            run(&mut fixture.store, 99, &d),
            Err(DirectoryError::NotFound(99))
        ));
    }

    #[test]
    fn invalid_draft_leaves_record_untouched() {
        let mut fixture = StoreFixture::new().with_sample_data();
        let before = fixture.store.get_employee(3).unwrap();
        let mut d = draft_of(&before);
        d.last_name = "".into();

        assert!(matches!(
            run(&mut fixture.store, 3, &d),
            Err(DirectoryError::Validation(_))
        ));
        assert_eq!(fixture.store.get_employee(3).unwrap(), before);
    }
}
