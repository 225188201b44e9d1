//! # Student Store
//!
//! Ordered, in-memory sequence of student records. Not persisted.
//!
//! The store does not enforce id uniqueness or field validity; the
//! owning [`StudentService`](super::StudentService) does.

use super::model::Student;

/// In-memory student collection
#[derive(Debug, Clone, Default)]
pub struct StudentStore {
    students: Vec<Student>,
}

impl StudentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the four startup records
    pub fn seeded() -> Self {
        Self::from_records(vec![
            Student::new(1, "Ali Ahmed", 20, 88),
            Student::new(2, "Fadi Khalil", 22, 77),
            Student::new(3, "Ola Jaber", 21, 66),
            Student::new(4, "Alia Maher", 19, 44),
        ])
    }

    /// Create a store from existing records, kept in the given order
    pub fn from_records(students: Vec<Student>) -> Self {
        Self { students }
    }

    /// Append a record at the end
    pub fn append(&mut self, student: Student) {
        self.students.push(student);
    }

    /// Remove the record with the given id, returning it if present
    pub fn remove(&mut self, id: i64) -> Option<Student> {
        let pos = self.students.iter().position(|s| s.id == id)?;
        Some(self.students.remove(pos))
    }

    pub fn find(&self, id: i64) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn find_mut(&mut self, id: i64) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id == id)
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Largest id currently stored
    pub fn max_id(&self) -> Option<i64> {
        self.students.iter().map(|s| s.id).max()
    }
}
