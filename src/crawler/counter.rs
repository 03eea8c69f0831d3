//! Live-work accounting for the frontier engine
//!
//! The crawl is finished exactly when the number of outstanding work
//! obligations reaches zero. The queue being momentarily empty is not a
//! termination signal: an in-flight task may be about to enqueue more work.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Counter of dispatched-but-not-fully-processed work items.
///
/// Starts at the number of seed items. Incremented before a new item is
/// enqueued, decremented once an item's processing (including enqueueing its
/// children) has completed. The counter can never rise from zero: a zero
/// reading means no task exists that could produce more work.
pub(crate) struct LiveWork {
    count: AtomicUsize,
    notify: Notify,
}

impl LiveWork {
    pub fn new(initial: usize) -> Self {
        Self {
            count: AtomicUsize::new(initial),
            notify: Notify::new(),
        }
    }

    /// Registers one more outstanding obligation. Must happen before the
    /// corresponding item is enqueued.
    pub fn increment(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    /// Releases one obligation. The final decrement wakes the dispatch loop;
    /// `Notify` stores the permit, so the wake is never lost even if the loop
    /// is not waiting at that instant.
    pub fn decrement(&self) {
        let prev = self.count.fetch_sub(1, Ordering::SeqCst);
        debug_assert!(prev > 0, "live-work counter underflow");
        if prev == 1 {
            self.notify.notify_one();
        }
    }

    /// Completes once the counter has reached zero.
    pub async fn zero(&self) {
        self.notify.notified().await;
    }

    #[cfg(test)]
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

/// Releases an already-registered obligation when dropped.
///
/// Each dispatch task adopts a guard for the obligation registered at enqueue
/// time. Dropping at end of scope keeps increments and decrements paired even
/// when a fetcher or recorder panics mid-task.
pub(crate) struct WorkGuard {
    live: Arc<LiveWork>,
}

impl WorkGuard {
    pub fn adopt(live: Arc<LiveWork>) -> Self {
        Self { live }
    }
}

impl Drop for WorkGuard {
    fn drop(&mut self) {
        self.live.decrement();
    }
}
