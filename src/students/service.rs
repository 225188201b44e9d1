//! # Student Service
//!
//! Validated operations over the student store. Every operation holds the
//! store lock for its whole duration, so id assignment and
//! read-modify-write sequences never interleave.

use std::sync::{Mutex, MutexGuard};

use super::errors::{StudentError, StudentResult};
use super::model::{Student, StudentInput};
use super::store::StudentStore;

/// Record manager owning the student store
#[derive(Debug, Default)]
pub struct StudentService {
    store: Mutex<StudentStore>,
}

impl StudentService {
    /// Create a service over the given store
    pub fn new(store: StudentStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Create a service holding the four startup records
    pub fn seeded() -> Self {
        Self::new(StudentStore::seeded())
    }

    fn lock(&self) -> StudentResult<MutexGuard<'_, StudentStore>> {
        self.store
            .lock()
            .map_err(|_| StudentError::Storage("Lock poisoned".to_string()))
    }

    /// All students, in insertion order
    pub fn list_all(&self) -> StudentResult<Vec<Student>> {
        let store = self.lock()?;
        if store.is_empty() {
            return Err(StudentError::NotFound("No Students Found".to_string()));
        }
        Ok(store.iter().cloned().collect())
    }

    /// Students whose grade meets the passing threshold
    pub fn list_passed(&self) -> StudentResult<Vec<Student>> {
        let store = self.lock()?;
        let passed: Vec<Student> = store.iter().filter(|s| s.has_passed()).cloned().collect();
        if passed.is_empty() {
            return Err(StudentError::NotFound("Not Students Passed.".to_string()));
        }
        Ok(passed)
    }

    /// Arithmetic mean of all grades
    pub fn average_grade(&self) -> StudentResult<f64> {
        let store = self.lock()?;
        if store.is_empty() {
            return Err(StudentError::NotFound("Not Students found.".to_string()));
        }
        let total: i64 = store.iter().map(|s| i64::from(s.grade)).sum();
        Ok(total as f64 / store.len() as f64)
    }

    pub fn get(&self, id: i64) -> StudentResult<Student> {
        if id < 1 {
            return Err(StudentError::InvalidArgument(format!(
                "Not accepted ID: {}",
                id
            )));
        }
        let store = self.lock()?;
        store
            .find(id)
            .cloned()
            .ok_or_else(|| StudentError::NotFound(format!("Student with ID {} Not Found..", id)))
    }

    /// Validate and store a new student under the next free id
    pub fn add(&self, input: StudentInput) -> StudentResult<Student> {
        if !input.is_valid() {
            return Err(invalid_data());
        }
        let mut store = self.lock()?;
        let id = store.max_id().map_or(1, |max| max + 1);
        let student = input.into_student(id);
        store.append(student.clone());
        Ok(student)
    }

    /// Remove a student, returning a confirmation message
    pub fn delete(&self, id: i64) -> StudentResult<String> {
        if id < 1 {
            return Err(StudentError::InvalidArgument(format!(
                "Not Accepted Id {}",
                id
            )));
        }
        let mut store = self.lock()?;
        store
            .remove(id)
            .ok_or_else(|| StudentError::NotFound(format!("Student With ID {} not found.", id)))?;
        Ok(format!("Student With Id {} has been deleted.", id))
    }

    /// Replace name, age and grade of an existing student
    pub fn update(&self, id: i64, input: StudentInput) -> StudentResult<Student> {
        if id < 1 || !input.is_valid() {
            return Err(invalid_data());
        }
        let mut store = self.lock()?;
        let student = store
            .find_mut(id)
            .ok_or_else(|| StudentError::NotFound(format!("Student with ID {} not found.", id)))?;
        student.apply(input);
        Ok(student.clone())
    }

    /// Number of stored students
    pub fn count(&self) -> StudentResult<usize> {
        Ok(self.lock()?.len())
    }
}

fn invalid_data() -> StudentError {
    StudentError::InvalidArgument("Invalid student data.".to_string())
}
