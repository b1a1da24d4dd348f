//! # Query Pipeline
//!
//! Turns a snapshot of the store into the ordered sequence a view shows. Three stages run in
//! a fixed order, each narrowing or reordering the output of the previous one:
//!
//! 1. [`search::search`]: free text against first name, last name and email
//! 2. [`filter::filter`]: per-field filters, ANDed together
//! 3. [`sort::sort`]: stable, case-insensitive ordering on one field
//!
//! Sort runs last so it only orders what survived the first two stages.
//!
//! Every stage is a total function over owned records: there is no error path, and a value
//! that cannot match simply does not match.

use crate::model::{Employee, Field};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

pub mod filter;
pub mod search;
pub mod sort;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(format!("Unknown sort direction: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: Field,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: Field) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: Field) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

/// Field → value filters. Blank values are inactive and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldFilters(BTreeMap<Field, String>);

impl FieldFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a filter value; a blank value clears the filter for that field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            self.0.remove(&field);
        } else {
            self.0.insert(field, value);
        }
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Filters that narrow the set, with values trimmed.
    pub fn active(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0
            .iter()
            .map(|(f, v)| (*f, v.trim()))
            .filter(|(_, v)| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }
}

/// Everything that shapes a view of the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryState {
    pub search: String,
    pub filters: FieldFilters,
    pub sort: Option<SortSpec>,
    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: FieldFilters::new(),
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryState {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_filter(mut self, field: Field, value: impl Into<String>) -> Self {
        self.filters.set(field, value);
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }
}

/// Run search, filter and sort over `records`, in that order.
pub fn process(records: Vec<Employee>, query: &QueryState) -> Vec<Employee> {
    let incoming = records.len();
    let searched = search::search(records, &query.search);
    let filtered = filter::filter(searched, &query.filters);
    let sorted = sort::sort(filtered, query.sort);
    trace!(incoming, outgoing = sorted.len(), "processed query");
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Department, Role};
    use crate::seed::sample_employees;

    fn ids(records: &[Employee]) -> Vec<u64> {
        records.iter().map(|e| e.id).collect()
    }

    #[test]
    fn empty_query_is_identity() {
        let records = sample_employees();
        let out = process(records.clone(), &QueryState::default());
        assert_eq!(out, records);
    }

    #[test]
    fn stages_compose() {
        let query = QueryState::default()
            .with_search("a")
            .with_filter(Field::Department, "Finance")
            .with_sort(SortSpec::desc(Field::FirstName));
        let out = process(sample_employees(), &query);

        assert!(out.iter().all(|e| e.department == Department::Finance));
        // Finance: Michael, Robert, William, Daniel, Andrew; all contain "a" somewhere
        let names: Vec<_> = out.iter().map(|e| e.first_name.as_str()).collect();
        assert_eq!(names, vec!["William", "Robert", "Michael", "Daniel", "Andrew"]);
    }

    #[test]
    fn applying_the_same_query_twice_changes_nothing() {
        let query = QueryState::default()
            .with_search("son")
            .with_filter(Field::Role, "Analyst")
            .with_sort(SortSpec::asc(Field::LastName));
        let once = process(sample_employees(), &query);
        let twice = process(once.clone(), &query);
        assert_eq!(once, twice);
    }

    #[test]
    fn managers_sorted_by_last_name() {
        let query = QueryState::default()
            .with_filter(Field::Role, Role::Manager.as_str())
            .with_sort(SortSpec::asc(Field::LastName));
        let out = process(sample_employees(), &query);
        assert_eq!(ids(&out), vec![4, 1, 19, 10, 16, 13, 7]);
    }

    #[test]
    fn blank_filter_values_are_inactive() {
        let mut filters = FieldFilters::new().with(Field::Role, "Manager");
        filters.set(Field::Role, "   ");
        assert!(filters.is_empty());
        assert_eq!(filters.get(Field::Role), None);
    }

    #[test]
    fn query_state_reads_from_json() {
        let json = r#"{
            "search": "john",
            "filters": {"department": "HR", "firstName": ""},
            "sort": {"field": "lastName", "direction": "desc"},
            "page": 2
        }"#;
        let query: QueryState = serde_json::from_str(json).unwrap();
        assert_eq!(query.search, "john");
        assert_eq!(query.filters.get(Field::Department), Some("HR"));
        assert_eq!(query.filters.active().count(), 1);
        assert_eq!(query.sort, Some(SortSpec::desc(Field::LastName)));
        assert_eq!(query.page, 2);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn query_state_accepts_snake_case_field_names() {
        let json = r#"{
            "filters": {"first_name": "jo", "last_name": "son"},
            "sort": {"field": "last_name"}
        }"#;
        let query: QueryState = serde_json::from_str(json).unwrap();
        assert_eq!(query.filters.get(Field::FirstName), Some("jo"));
        assert_eq!(query.filters.get(Field::LastName), Some("son"));
        assert_eq!(query.sort, Some(SortSpec::asc(Field::LastName)));
    }

    #[test]
    fn sort_direction_parses() {
        assert_eq!("DESC".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert_eq!(SortDirection::Asc.reversed(), SortDirection::Desc);
        assert!("up".parse::<SortDirection>().is_err());
    }
}
