use super::DataStore;
use crate::error::{DirectoryError, Result};
use crate::model::{Employee, EmployeeId};

/// In-memory storage. Records live as long as the store does.
///
/// Backed by a `Vec` so iteration order is arrival order; lookups are linear, which is
/// fine for directory-sized data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    employees: Vec<Employee>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-validated records, keeping their order.
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    fn position(&self, id: EmployeeId) -> Option<usize> {
        self.employees.iter().position(|e| e.id == id)
    }
}

impl DataStore for InMemoryStore {
    fn save_employee(&mut self, employee: &Employee) -> Result<()> {
        match self.position(employee.id) {
            Some(idx) => self.employees[idx] = employee.clone(),
            None => self.employees.push(employee.clone()),
        }
        Ok(())
    }

    fn get_employee(&self, id: EmployeeId) -> Result<Employee> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(DirectoryError::NotFound(id))
    }

    fn list_employees(&self) -> Result<Vec<Employee>> {
        Ok(self.employees.clone())
    }

    fn delete_employee(&mut self, id: EmployeeId) -> Result<Employee> {
        let idx = self.position(id).ok_or(DirectoryError::NotFound(id))?;
        Ok(self.employees.remove(idx))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Department, Role};

    pub fn employee(
        id: EmployeeId,
        first: &str,
        last: &str,
        dept: Department,
        role: Role,
    ) -> Employee {
        Employee {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}.{}@company.com", first, last).to_lowercase(),
            department: dept,
            role,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// The 20 built-in sample employees.
        pub fn with_sample_data(mut self) -> Self {
            for e in crate::seed::sample_employees() {
                self.store.save_employee(&e).unwrap();
            }
            self
        }

        pub fn with_employee(
            mut self,
            first: &str,
            last: &str,
            dept: Department,
            role: Role,
        ) -> Self {
            let id = self.store.len() as EmployeeId + 1;
            self.store
                .save_employee(&employee(id, first, last, dept, role))
                .unwrap();
            self
        }
    }
}
