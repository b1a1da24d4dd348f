use crate::error::{DirectoryError, Result};
use crate::model::{Employee, EmployeeId};
use crate::store::DataStore;
use crate::validation::normalize_email;

/// Next id: one past the largest id in use, 1 for an empty store.
///
/// Fails with `IdsExhausted` when the largest id is already `EmployeeId::MAX`.
pub fn next_id<S: DataStore>(store: &S) -> Result<EmployeeId> {
    let max = store
        .list_employees()?
        .iter()
        .map(|e| e.id)
        .max()
        .unwrap_or(0);
    max.checked_add(1).ok_or(DirectoryError::IdsExhausted)
}

/// Finds a record, other than `exclude`, whose normalized email equals `email`'s.
pub fn find_by_email<S: DataStore>(
    store: &S,
    email: &str,
    exclude: Option<EmployeeId>,
) -> Result<Option<Employee>> {
    let wanted = normalize_email(email);
    Ok(store
        .list_employees()?
        .into_iter()
        .find(|e| Some(e.id) != exclude && normalize_email(&e.email) == wanted))
}

/// Fails with `DuplicateEmail` when another record already uses `email`.
pub fn ensure_unique_email<S: DataStore>(
    store: &S,
    email: &str,
    exclude: Option<EmployeeId>,
) -> Result<()> {
    match find_by_email(store, email, exclude)? {
        Some(_) => Err(DirectoryError::DuplicateEmail(normalize_email(email))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Department, Role};
    use crate::store::memory::fixtures::{employee, StoreFixture};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(&InMemoryStore::new()).unwrap(), 1);
    }

    #[test]
    fn next_id_is_max_plus_one_even_after_gaps() {
        let mut fixture = StoreFixture::new().with_sample_data();
        fixture.store.delete_employee(5).unwrap();
        assert_eq!(next_id(&fixture.store).unwrap(), 21);
        fixture.store.delete_employee(20).unwrap();
        assert_eq!(next_id(&fixture.store).unwrap(), 20);
    }

    #[test]
    fn next_id_fails_instead_of_wrapping_at_the_top_id() {
        let store = InMemoryStore::with_employees(vec![employee(
            EmployeeId::MAX,
            "Ann",
            "Lee",
            Department::IT,
            Role::Analyst,
        )]);
        assert!(matches!(next_id(&store), Err(DirectoryError::IdsExhausted)));
    }

    #[test]
    fn email_check_normalizes_and_honors_exclusion() {
        let fixture =
            StoreFixture::new().with_employee("Ann", "Lee", Department::IT, Role::Analyst);

        assert!(matches!(
            ensure_unique_email(&fixture.store, "  ANN.LEE@company.com ", None),
            Err(DirectoryError::DuplicateEmail(e)) if e == "ann.lee@company.com"
        ));
        assert!(ensure_unique_email(&fixture.store, "ann.lee@company.com", Some(1)).is_ok());
        assert!(ensure_unique_email(&fixture.store, "someone@company.com", None).is_ok());
    }
}
