//! Draft validation.
//!
//! Forms are expected to validate before submitting, but the core re-checks every draft
//! before it touches the store. All problems are collected into a [`FieldErrors`] so a form
//! can annotate every offending input at once.

use crate::error::{DirectoryError, FieldErrors, Result};
use crate::model::{Department, EmployeeDraft, Field, Role};
use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// A draft that passed validation, with values in their stored form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Department,
    pub role: Role,
}

/// The one email rule used everywhere: trim, then lowercase.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

fn check_name(value: &str, label: &str) -> std::result::Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{} is required", label));
    }
    let len = trimmed.chars().count();
    if len < NAME_MIN_CHARS {
        return Err(format!(
            "{} must be at least {} characters long",
            label, NAME_MIN_CHARS
        ));
    }
    if len > NAME_MAX_CHARS {
        return Err(format!(
            "{} must be less than {} characters",
            label, NAME_MAX_CHARS
        ));
    }
    let allowed = trimmed
        .chars()
        .all(|c| c.is_alphabetic() || c.is_whitespace() || c == '-' || c == '\'');
    if !allowed {
        return Err(format!(
            "{} can only contain letters, spaces, hyphens, and apostrophes",
            label
        ));
    }
    Ok(trimmed.to_string())
}

fn check_email(value: &str) -> std::result::Result<String, String> {
    if value.trim().is_empty() {
        return Err("Email is required".to_string());
    }
    if !is_valid_email(value) {
        return Err("Please enter a valid email address".to_string());
    }
    Ok(normalize_email(value))
}

fn check_select<T: std::str::FromStr>(value: &str, label: &str) -> std::result::Result<T, String> {
    if value.trim().is_empty() {
        return Err(format!("Please select a {}", label));
    }
    value
        .parse::<T>()
        .map_err(|_| format!("Unknown {}: {}", label, value.trim()))
}

/// Validates every field of `draft`, returning the normalized values or all field errors.
pub fn validate_draft(draft: &EmployeeDraft) -> Result<ValidDraft> {
    let mut errors = FieldErrors::new();

    let first_name = check_name(&draft.first_name, "First name")
        .map_err(|m| errors.insert(Field::FirstName, m))
        .ok();
    let last_name = check_name(&draft.last_name, "Last name")
        .map_err(|m| errors.insert(Field::LastName, m))
        .ok();
    let email = check_email(&draft.email)
        .map_err(|m| errors.insert(Field::Email, m))
        .ok();
    let department = check_select::<Department>(&draft.department, "department")
        .map_err(|m| errors.insert(Field::Department, m))
        .ok();
    let role = check_select::<Role>(&draft.role, "role")
        .map_err(|m| errors.insert(Field::Role, m))
        .ok();

    match (first_name, last_name, email, department, role) {
        (Some(first_name), Some(last_name), Some(email), Some(department), Some(role)) => {
            Ok(ValidDraft {
                first_name,
                last_name,
                email,
                department,
                role,
            })
        }
        _ => Err(DirectoryError::Validation(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> EmployeeDraft {
        EmployeeDraft::new("Jane", "Smith", "jane.smith@company.com", "IT", "Developer")
    }

    #[test]
    fn accepts_and_normalizes_a_good_draft() {
        let mut d = draft();
        d.first_name = "  Jane ".into();
        d.email = "  Jane.Smith@Company.com ".into();
        d.department = "it".into();

        let valid = validate_draft(&d).unwrap();
        assert_eq!(valid.first_name, "Jane");
        assert_eq!(valid.email, "jane.smith@company.com");
        assert_eq!(valid.department, Department::IT);
        assert_eq!(valid.role, Role::Developer);
    }

    #[test]
    fn collects_every_field_error() {
        let err = validate_draft(&EmployeeDraft::default()).unwrap_err();
        let errors = err.field_errors().unwrap();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(Field::FirstName), Some("First name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Role), Some("Please select a role"));
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let mut d = draft();
        d.last_name = "   ".into();
        let err = validate_draft(&d).unwrap_err();
        assert_eq!(
            err.field_errors().unwrap().get(Field::LastName),
            Some("Last name is required")
        );
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["jane", "jane@company", "jane smith@company.com", "@company.com"] {
            let mut d = draft();
            d.email = bad.into();
            let err = validate_draft(&d).unwrap_err();
            assert!(err.field_errors().unwrap().contains(Field::Email), "{bad}");
        }
    }

    #[test]
    fn enforces_name_length_and_characters() {
        let mut d = draft();
        d.first_name = "J".into();
        assert!(validate_draft(&d).is_err());

        d.first_name = "J".repeat(NAME_MAX_CHARS + 1);
        assert!(validate_draft(&d).is_err());

        d.first_name = "J4ne".into();
        assert!(validate_draft(&d).is_err());

        d.first_name = "Mary-Jo O'Neil".into();
        assert!(validate_draft(&d).is_ok());
    }

    #[test]
    fn rejects_unknown_enumerated_values() {
        let mut d = draft();
        d.department = "Legal".into();
        let err = validate_draft(&d).unwrap_err();
        assert_eq!(
            err.field_errors().unwrap().get(Field::Department),
            Some("Unknown department: Legal")
        );
    }

    #[test]
    fn normalize_email_trims_then_lowercases() {
        assert_eq!(normalize_email("  A@B.Com "), "a@b.com");
    }
}
