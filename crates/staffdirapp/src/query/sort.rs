use super::{SortDirection, SortSpec};
use crate::model::Employee;
use std::cmp::Ordering;

/// Case-insensitive comparison of two records on the sort field, honoring direction.
///
/// `Desc` flips the comparison rather than the output so equal keys keep their
/// incoming order in both directions.
pub fn compare(a: &Employee, b: &Employee, spec: SortSpec) -> Ordering {
    let ka = a.field_value(spec.field).to_lowercase();
    let kb = b.field_value(spec.field).to_lowercase();
    match spec.direction {
        SortDirection::Asc => ka.cmp(&kb),
        SortDirection::Desc => kb.cmp(&ka),
    }
}

/// Stable sort on `spec`. `None` keeps the incoming order.
pub fn sort(mut records: Vec<Employee>, spec: Option<SortSpec>) -> Vec<Employee> {
    if let Some(spec) = spec {
        records.sort_by(|a, b| compare(a, b, spec));
    }
    records
}
