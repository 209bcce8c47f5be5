//! Last-request-wins bookkeeping for AI calls.
//!
//! The editor may fire a second request for the same document before the
//! first answer arrives. Every request takes a ticket; when it completes,
//! only the newest ticket for its key is still current and older answers
//! are reported stale.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
pub struct RequestSequencer {
    next: AtomicU64,
    latest: Mutex<HashMap<String, u64>>,
}

/// Held for the duration of one request.
#[derive(Debug, PartialEq, Eq)]
pub struct Ticket {
    key: Option<String>,
    seq: u64,
}

impl RequestSequencer {
    /// Starts a request. Requests without a document id are never stale.
    pub fn begin(&self, scope: &str, document_id: Option<&str>) -> Ticket {
        let seq = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        let key = document_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| format!("{scope}:{id}"));
        if let Some(key) = &key {
            self.lock().insert(key.clone(), seq);
        }
        Ticket { key, seq }
    }

    /// Ends a request and reports whether its answer may be used.
    pub fn finish(&self, ticket: Ticket) -> bool {
        let Some(key) = ticket.key else {
            return true;
        };
        let mut latest = self.lock();
        if latest.get(&key) == Some(&ticket.seq) {
            latest.remove(&key);
            true
        } else {
            false
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, u64>> {
        self.latest.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_request_makes_older_stale() {
        let seq = RequestSequencer::default();
        let first = seq.begin("suggestions", Some("doc-1"));
        let second = seq.begin("suggestions", Some("doc-1"));
        assert!(seq.finish(second));
        assert!(!seq.finish(first));
    }

    #[test]
    fn test_finished_key_does_not_revive_old_tickets() {
        let seq = RequestSequencer::default();
        let a = seq.begin("describe", Some("doc"));
        let b = seq.begin("describe", Some("doc"));
        assert!(seq.finish(b));
        let c = seq.begin("describe", Some("doc"));
        assert!(!seq.finish(a));
        assert!(seq.finish(c));
    }

    #[test]
    fn test_keys_are_independent() {
        let seq = RequestSequencer::default();
        let a = seq.begin("suggestions", Some("doc-1"));
        let _b = seq.begin("suggestions", Some("doc-2"));
        let _c = seq.begin("describe", Some("doc-1"));
        assert!(seq.finish(a));
    }

    #[test]
    fn test_requests_without_document_are_never_stale() {
        let seq = RequestSequencer::default();
        let a = seq.begin("suggestions", None);
        let b = seq.begin("suggestions", Some("  "));
        assert!(seq.finish(a));
        assert!(seq.finish(b));
    }
}
