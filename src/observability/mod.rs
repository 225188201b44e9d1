//! Observability for the student service
//!
//! - Structured logging (JSON lines)
//! - Lifecycle and request events
//! - Atomic request counters
//!
//! ```ignore
//! use student_api::observability::{log_event_with_fields, Event, MetricsRegistry};
//!
//! log_event_with_fields(Event::StudentCreated, &[("id", "5")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.increment_created();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log an event with fields
///
/// Rejections and misses are WARN, internal failures ERROR, fatal events
/// FATAL; everything else INFO.
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}

fn severity_for(event: Event) -> Severity {
    match event {
        e if e.is_fatal() => Severity::Fatal,
        Event::RequestFailed => Severity::Error,
        Event::RequestRejected | Event::RecordNotFound => Severity::Warn,
        Event::StudentListed | Event::StudentFetched | Event::AverageComputed => Severity::Debug,
        _ => Severity::Info,
    }
}
