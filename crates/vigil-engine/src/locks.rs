//! Per-user mutual exclusion around the read-modify-write of one update.

use std::sync::{Arc, Mutex, PoisonError};

use dashmap::DashMap;

/// One mutex per user id, created on first use and removed again once no
/// update for that user is running or waiting.
///
/// Updates for different users never contend; updates for the same user are
/// serialized so none is lost.
#[derive(Debug, Default)]
pub struct UserLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` while holding the lock for `user_id`.
    pub fn with_user_lock<T>(&self, user_id: &str, f: impl FnOnce() -> T) -> T {
        let lock = self.lock_for(user_id);
        let result = {
            // Guards no data; a poisoned lock is still usable.
            let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
            f()
        };
        // Map entry plus our clone: nobody else holds or waits on it.
        self.locks.remove_if(user_id, |_, entry| {
            Arc::ptr_eq(entry, &lock) && Arc::strong_count(entry) == 2
        });
        result
    }

    fn lock_for(&self, user_id: &str) -> Arc<Mutex<()>> {
        if let Some(existing) = self.locks.get(user_id) {
            return Arc::clone(existing.value());
        }
        Arc::clone(
            self.locks
                .entry(user_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .value(),
        )
    }

    /// Drop locks nobody currently holds or waits on. Returns how many were
    /// removed. Entries are normally released by `with_user_lock` itself;
    /// this catches any left behind by a panicking update.
    pub fn prune_idle(&self) -> usize {
        let before = self.locks.len();
        self.locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        before.saturating_sub(self.locks.len())
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
