use crate::model::{Employee, Field};

/// Fields free-text search looks at.
pub const SEARCH_FIELDS: [Field; 3] = [Field::FirstName, Field::LastName, Field::Email];

/// Whether `employee` matches an already-lowercased, non-empty search term.
pub fn matches(employee: &Employee, term_lower: &str) -> bool {
    SEARCH_FIELDS
        .iter()
        .any(|f| employee.field_value(*f).to_lowercase().contains(term_lower))
}

/// Keep records whose first name, last name or email contains `term`, ignoring case.
/// A blank term keeps everything.
pub fn search(records: Vec<Employee>, term: &str) -> Vec<Employee> {
    let term_lower = term.trim().to_lowercase();
    if term_lower.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|e| matches(e, &term_lower))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_employees;

    #[test]
    fn blank_term_is_identity() {
        let records = sample_employees();
        assert_eq!(search(records.clone(), ""), records);
        assert_eq!(search(records.clone(), "   "), records);
    }

    #[test]
    fn matches_any_search_field_ignoring_case() {
        let out = search(sample_employees(), "JOHN");
        let ids: Vec<_> = out.iter().map(|e| e.id).collect();
        // John Doe (first name + email), Michael Johnson (last name + email)
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn does_not_search_department_or_role() {
        assert!(search(sample_employees(), "Marketing").is_empty());
        assert!(search(sample_employees(), "developer").is_empty());
    }

    #[test]
    fn result_is_exactly_the_matching_subset() {
        let all = sample_employees();
        for term in ["an", "LEE", "@company", "zzz", "e.w"] {
            let lower = term.to_lowercase();
            let out = search(all.clone(), term);
            for e in &all {
                assert_eq!(out.contains(e), matches(e, &lower), "{term} / {}", e.id);
            }
        }
    }
}
