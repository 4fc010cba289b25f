//! Append-only message log for user-visible operational feedback.
//!
//! # Design
//! The log is an injected handle, not a process global: components that want
//! to share one log clone the same `MessageLog`. Append is the only
//! mutation besides `clear`, and the internal mutex makes concurrent appends
//! from in-flight operations safe without losing entries or reordering a
//! single append.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared, ordered, append-only store of display messages.
///
/// Cloning is cheap and every clone refers to the same underlying log.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    inner: Arc<Mutex<Vec<String>>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock only means another append panicked mid-push; the
    // contents are still a valid message list, so recover the guard.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a message. Messages are kept in arrival order.
    pub fn add(&self, message: impl Into<String>) {
        self.lock().push(message.into());
    }

    /// Remove all messages.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Snapshot of all messages in arrival order.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_keep_arrival_order() {
        let log = MessageLog::new();
        log.add("first");
        log.add("second");
        log.add("third");
        assert_eq!(log.messages(), vec!["first", "second", "third"]);
    }

    #[test]
    fn clones_share_the_same_log() {
        let log = MessageLog::new();
        let other = log.clone();
        log.add("from original");
        other.add("from clone");
        assert_eq!(log.messages(), other.messages());
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn clear_empties_the_log() {
        let log = MessageLog::new();
        log.add("something");
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn concurrent_appends_lose_nothing() {
        let log = MessageLog::new();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let log = log.clone();
                std::thread::spawn(move || {
                    for j in 0..100 {
                        log.add(format!("{i}-{j}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(log.len(), 800);
    }
}
