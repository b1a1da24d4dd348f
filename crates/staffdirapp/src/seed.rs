//! Initial directory contents.
//!
//! The store starts from either the built-in sample employees or a JSON file holding an
//! array of employee records (`[{"id": 1, "firstName": "John", ...}]`). Seed records go
//! through the same validation as `add`, and ids and emails must be unique.

use crate::error::{DirectoryError, Result};
use crate::model::{Department, Employee, EmployeeDraft, EmployeeId, Role};
use crate::validation::{normalize_email, validate_draft};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

const SAMPLE: [(&str, &str, Department, Role); 20] = [
    ("John", "Doe", Department::HR, Role::Manager),
    ("Jane", "Smith", Department::IT, Role::Developer),
    ("Michael", "Johnson", Department::Finance, Role::Analyst),
    ("Emily", "Davis", Department::Marketing, Role::Manager),
    ("David", "Wilson", Department::IT, Role::Developer),
    ("Sarah", "Brown", Department::HR, Role::Analyst),
    ("Robert", "Taylor", Department::Finance, Role::Manager),
    ("Lisa", "Anderson", Department::Marketing, Role::Developer),
    ("James", "Thomas", Department::IT, Role::Analyst),
    ("Jennifer", "Jackson", Department::HR, Role::Manager),
    ("William", "White", Department::Finance, Role::Developer),
    ("Amanda", "Harris", Department::Marketing, Role::Analyst),
    ("Christopher", "Martin", Department::IT, Role::Manager),
    ("Michelle", "Garcia", Department::HR, Role::Developer),
    ("Daniel", "Rodriguez", Department::Finance, Role::Analyst),
    ("Ashley", "Lewis", Department::Marketing, Role::Manager),
    ("Matthew", "Lee", Department::IT, Role::Developer),
    ("Jessica", "Walker", Department::HR, Role::Analyst),
    ("Andrew", "Hall", Department::Finance, Role::Manager),
    ("Stephanie", "Allen", Department::Marketing, Role::Developer),
];

/// The built-in sample directory, ids 1 through 20.
pub fn sample_employees() -> Vec<Employee> {
    SAMPLE
        .iter()
        .enumerate()
        .map(|(i, (first, last, department, role))| Employee {
            id: i as EmployeeId + 1,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}.{}@company.com", first, last).to_lowercase(),
            department: *department,
            role: *role,
        })
        .collect()
}

/// Parse and validate a JSON array of employees.
pub fn parse_seed(json: &str) -> Result<Vec<Employee>> {
    let raw: Vec<Employee> = serde_json::from_str(json)?;
    let mut ids = HashSet::new();
    let mut emails = HashSet::new();
    let mut employees = Vec::with_capacity(raw.len());

    for record in raw {
        if record.id == 0 {
            return Err(DirectoryError::InvalidSeed(
                "Employee ids must be positive".to_string(),
            ));
        }
        if !ids.insert(record.id) {
            return Err(DirectoryError::InvalidSeed(format!(
                "Duplicate employee id {}",
                record.id
            )));
        }
        let valid = validate_draft(&EmployeeDraft::from(&record))?;
        if !emails.insert(normalize_email(&valid.email)) {
            return Err(DirectoryError::InvalidSeed(format!(
                "Duplicate employee email {}",
                valid.email
            )));
        }
        employees.push(Employee {
            id: record.id,
            first_name: valid.first_name,
            last_name: valid.last_name,
            email: valid.email,
            department: valid.department,
            role: valid.role,
        });
    }

    Ok(employees)
}

/// Read a seed file from disk.
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<Vec<Employee>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let employees = parse_seed(&content)?;
    debug!(path = %path.display(), count = employees.len(), "loaded seed file");
    Ok(employees)
}
