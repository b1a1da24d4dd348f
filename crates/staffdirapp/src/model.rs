use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type EmployeeId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Department {
    HR,
    IT,
    Finance,
    Marketing,
    Operations,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::HR,
        Department::IT,
        Department::Finance,
        Department::Marketing,
        Department::Operations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::HR => "HR",
            Department::IT => "IT",
            Department::Finance => "Finance",
            Department::Marketing => "Marketing",
            Department::Operations => "Operations",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Department::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("Unknown department: {}", needle))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    Manager,
    Developer,
    Analyst,
    Specialist,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Manager, Role::Developer, Role::Analyst, Role::Specialist];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Developer => "Developer",
            Role::Analyst => "Analyst",
            Role::Specialist => "Specialist",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Role::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("Unknown role: {}", needle))
    }
}

/// A stored, validated employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: Department,
    pub role: Role,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The textual value of `field`, as the query stages see it.
    pub fn field_value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Department => self.department.as_str(),
            Field::Role => self.role.as_str(),
        }
    }
}

/// Unvalidated field values for an add or update, as a form supplies them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
}

impl EmployeeDraft {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            department: department.into(),
            role: role.into(),
        }
    }
}

impl From<&Employee> for EmployeeDraft {
    fn from(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            department: employee.department.to_string(),
            role: employee.role.to_string(),
        }
    }
}

/// A queryable employee attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    #[serde(alias = "first_name")]
    FirstName,
    #[serde(alias = "last_name")]
    LastName,
    Email,
    Department,
    Role,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Department,
        Field::Role,
    ];

    /// Fields whose values come from a closed set and are matched exactly.
    pub fn is_enumerated(&self) -> bool {
        matches!(self, Field::Department | Field::Role)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Department => "department",
            Field::Role => "role",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    /// Accepts `firstName`, `first_name` and `first-name` spellings, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squashed: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        Field::ALL
            .into_iter()
            .find(|f| f.as_str().to_lowercase() == squashed)
            .ok_or_else(|| format!("Unknown field: {}", s.trim()))
    }
}
