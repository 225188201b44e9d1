//! # Student Model
//!
//! The stored record and the request body used to create or replace one.

use serde::{Deserialize, Serialize};

/// Grade at or above which a student counts as passed
pub const PASSING_GRADE: i32 = 50;

/// A stored student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique, system-assigned identifier (always >= 1)
    pub id: i64,

    /// Display name (never empty)
    pub name: String,

    /// Age in years (never negative)
    pub age: i32,

    /// Grade (never negative, unbounded upward)
    pub grade: i32,
}

impl Student {
    pub fn new(id: i64, name: impl Into<String>, age: i32, grade: i32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            grade,
        }
    }

    /// Whether this student's grade meets the passing threshold
    pub fn has_passed(&self) -> bool {
        self.grade >= PASSING_GRADE
    }

    /// Replace the mutable fields with those of a validated input
    pub(crate) fn apply(&mut self, input: StudentInput) {
        self.name = input.name.unwrap_or_default();
        self.age = input.age;
        self.grade = input.grade;
    }
}

/// Student creation/update request
///
/// A client-supplied `id` is accepted for wire compatibility and ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub age: i32,

    #[serde(default)]
    pub grade: i32,
}

impl StudentInput {
    pub fn new(name: impl Into<String>, age: i32, grade: i32) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            age,
            grade,
        }
    }

    /// A candidate is valid when it has a non-empty name and
    /// non-negative age and grade
    pub fn is_valid(&self) -> bool {
        let has_name = self.name.as_deref().is_some_and(|n| !n.is_empty());
        has_name && self.age >= 0 && self.grade >= 0
    }

    /// Build a stored record from this input under the given id
    pub(crate) fn into_student(self, id: i64) -> Student {
        Student {
            id,
            name: self.name.unwrap_or_default(),
            age: self.age,
            grade: self.grade,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passing_threshold() {
        assert!(Student::new(1, "A", 20, 50).has_passed());
        assert!(Student::new(1, "A", 20, 88).has_passed());
        assert!(!Student::new(1, "A", 20, 49).has_passed());
    }

    #[test]
    fn test_input_validation() {
        assert!(StudentInput::new("Ali", 20, 88).is_valid());
        assert!(StudentInput::new("Ali", 0, 0).is_valid());
        assert!(!StudentInput::new("", 20, 88).is_valid());
        assert!(!StudentInput::new("Ali", -1, 88).is_valid());
        assert!(!StudentInput::new("Ali", 20, -1).is_valid());
        assert!(!StudentInput::default().is_valid());
    }

    #[test]
    fn test_input_missing_fields_default() {
        let input: StudentInput = serde_json::from_str(r#"{"age": 3}"#).unwrap();
        assert_eq!(input.name, None);
        assert_eq!(input.age, 3);
        assert_eq!(input.grade, 0);
        assert!(!input.is_valid());
    }

    #[test]
    fn test_input_ignores_client_id() {
        let input: StudentInput =
            serde_json::from_str(r#"{"id": 77, "name": "Ola", "age": 21, "grade": 66}"#).unwrap();
        let student = input.into_student(5);
        assert_eq!(student, Student::new(5, "Ola", 21, 66));
    }

    #[test]
    fn test_student_serialization() {
        let student = Student::new(2, "Fadi Khalil", 22, 77);
        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 2, "name": "Fadi Khalil", "age": 22, "grade": 77})
        );
    }
}
