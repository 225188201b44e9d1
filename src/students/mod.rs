//! # Students Module
//!
//! In-memory student records: the store, its validated service surface,
//! and the error taxonomy reported to HTTP callers.

pub mod errors;
pub mod model;
pub mod service;
pub mod store;

pub use errors::{StudentError, StudentResult};
pub use model::{Student, StudentInput, PASSING_GRADE};
pub use service::StudentService;
pub use store::StudentStore;
