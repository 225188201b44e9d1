//! Observable events of the student service

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    ServiceStart,
    ConfigLoaded,
    StoreSeeded,
    /// Listener bound, ready for requests
    Serving,
    /// Listener failed (FATAL)
    ServerFailed,

    // Reads
    StudentListed,
    StudentFetched,
    AverageComputed,

    // Writes
    StudentCreated,
    StudentUpdated,
    StudentDeleted,

    // Failures
    /// Request failed validation (400)
    RequestRejected,
    /// No matching record or empty result (404)
    RecordNotFound,
    /// Internal failure (500)
    RequestFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ServiceStart => "SERVICE_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::StoreSeeded => "STORE_SEEDED",
            Event::Serving => "SERVING",
            Event::ServerFailed => "SERVER_FAILED",
            Event::StudentListed => "STUDENTS_LISTED",
            Event::StudentFetched => "STUDENT_FETCHED",
            Event::AverageComputed => "AVERAGE_COMPUTED",
            Event::StudentCreated => "STUDENT_CREATED",
            Event::StudentUpdated => "STUDENT_UPDATED",
            Event::StudentDeleted => "STUDENT_DELETED",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::RecordNotFound => "RECORD_NOT_FOUND",
            Event::RequestFailed => "REQUEST_FAILED",
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::ServerFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
