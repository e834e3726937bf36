use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out tickets for page loads so that only the latest one commits.
///
/// A view begins a visit before fetching and checks its ticket before
/// applying the result; navigating again supersedes every older ticket.
#[derive(Clone, Debug, Default)]
pub struct VisitTracker {
    latest: Arc<AtomicU64>,
}

#[derive(Clone, Debug)]
pub struct VisitTicket {
    key: String,
    issued: u64,
    latest: Arc<AtomicU64>,
}

impl VisitTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a visit to `key`, superseding any earlier ticket.
    #[must_use]
    pub fn begin(&self, key: impl Into<String>) -> VisitTicket {
        let issued = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        VisitTicket {
            key: key.into(),
            issued,
            latest: Arc::clone(&self.latest),
        }
    }
}

impl VisitTicket {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_visit_supersedes_older() {
        let tracker = VisitTracker::new();
        let first = tracker.begin("/courses/a");
        assert!(first.is_current());

        let second = tracker.clone().begin("/courses/b");
        assert!(!first.is_current());
        assert!(second.is_current());
        assert_eq!(second.key(), "/courses/b");
    }
}
