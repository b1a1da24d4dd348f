//! Field filtering.
//!
//! Free-text fields (names, email) match when the record value contains the filter value,
//! ignoring case. Enumerated fields (department, role) match only on exact equality with
//! the canonical name, so `IT` does not also select every department with an "it" in it.

use super::FieldFilters;
use crate::model::{Employee, Field};

/// Whether a single field filter matches `employee`. `value` must already be trimmed.
pub fn field_matches(employee: &Employee, field: Field, value: &str) -> bool {
    let actual = employee.field_value(field);
    if field.is_enumerated() {
        actual == value
    } else {
        actual.to_lowercase().contains(&value.to_lowercase())
    }
}

/// Whether `employee` satisfies every active filter.
pub fn matches_all(employee: &Employee, filters: &FieldFilters) -> bool {
    filters
        .active()
        .all(|(field, value)| field_matches(employee, field, value))
}

/// Keep records matching every active filter. No active filters keeps everything.
pub fn filter(records: Vec<Employee>, filters: &FieldFilters) -> Vec<Employee> {
    if filters.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|e| matches_all(e, filters))
        .collect()
}
