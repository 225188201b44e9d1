//! Request counters for the student service
//!
//! Counters only increase and reset only on process start. The current
//! record count is not a counter; callers pass it in when taking a
//! snapshot, read from the store at that moment.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Atomic operational counters, shared across handlers
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    requests: AtomicU64,
    created: AtomicU64,
    updated: AtomicU64,
    deleted: AtomicU64,
    rejected: AtomicU64,
    not_found: AtomicU64,
    failed: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_requests(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_created(&self) {
        self.created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_updated(&self) {
        self.updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_deleted(&self) {
        self.deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Copy all counters alongside the given record count
    pub fn snapshot(&self, students: u64) -> MetricsSnapshot {
        MetricsSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            created: self.created.load(Ordering::Relaxed),
            updated: self.updated.load(Ordering::Relaxed),
            deleted: self.deleted.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            students,
        }
    }

    pub fn to_json(&self, students: u64) -> serde_json::Value {
        serde_json::to_value(self.snapshot(students)).unwrap_or_default()
    }
}

/// A point-in-time copy of all counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub requests: u64,
    pub created: u64,
    pub updated: u64,
    pub deleted: u64,
    pub rejected: u64,
    pub not_found: u64,
    pub failed: u64,
    pub students: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_is_zero() {
        let snapshot = MetricsRegistry::new().snapshot(0);
        assert_eq!(snapshot.requests, 0);
        assert_eq!(snapshot.created, 0);
        assert_eq!(snapshot.students, 0);
    }

    #[test]
    fn test_counters() {
        let registry = MetricsRegistry::new();
        registry.increment_requests();
        registry.increment_requests();
        registry.increment_created();
        registry.increment_rejected();
        registry.increment_not_found();

        let snapshot = registry.snapshot(5);
        assert_eq!(snapshot.requests, 2);
        assert_eq!(snapshot.created, 1);
        assert_eq!(snapshot.rejected, 1);
        assert_eq!(snapshot.not_found, 1);
        assert_eq!(snapshot.students, 5);
    }

    #[test]
    fn test_to_json() {
        let registry = MetricsRegistry::new();
        registry.increment_deleted();
        let json = registry.to_json(3);
        assert_eq!(json["deleted"], 1);
        assert_eq!(json["updated"], 0);
        assert_eq!(json["students"], 3);
    }

    #[test]
    fn test_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(MetricsRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let reg = Arc::clone(&registry);
                thread::spawn(move || {
                    for _ in 0..100 {
                        reg.increment_requests();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.snapshot(0).requests, 800);
    }
}
