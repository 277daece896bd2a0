//! Completion counter for joining a known number of tasks

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

struct Inner {
    count: AtomicUsize,
    notify: Notify,
}

/// Blocks waiters until every registered task has signalled `done`.
///
/// Clones share one counter. The caller must pair each registration with
/// exactly one `done`: an extra `done` panics, a missing one leaves `wait`
/// suspended forever.
#[derive(Clone)]
pub struct WaitGroup {
    inner: Arc<Inner>,
}

impl WaitGroup {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                count: AtomicUsize::new(0),
                notify: Notify::new(),
            }),
        }
    }

    /// Register `n` more tasks to wait for
    pub fn add(&self, n: usize) {
        self.inner.count.fetch_add(n, Ordering::AcqRel);
    }

    /// Signal that one registered task has finished
    ///
    /// # Panics
    ///
    /// Panics with "negative WaitGroup counter" when called more often than
    /// tasks were registered.
    pub fn done(&self) {
        let previous = self
            .inner
            .count
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| {
                count.checked_sub(1)
            })
            .unwrap_or_else(|_| panic!("negative WaitGroup counter"));

        if previous == 1 {
            self.inner.notify.notify_waiters();
        }
    }

    /// Guard that calls [`WaitGroup::done`] when dropped, including during unwinding
    pub fn guard(&self) -> WaitGuard {
        WaitGuard { group: self.clone() }
    }

    /// Number of registered tasks that have not yet signalled
    pub fn pending(&self) -> usize {
        self.inner.count.load(Ordering::Acquire)
    }

    /// Suspend until the pending count reaches zero
    pub async fn wait(&self) {
        loop {
            // Register interest before checking so a concurrent final `done` is not missed
            let notified = self.inner.notify.notified();
            if self.pending() == 0 {
                return;
            }
            notified.await;
        }
    }
}

impl Default for WaitGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for WaitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WaitGroup")
            .field("pending", &self.pending())
            .finish()
    }
}

/// Signals `done` on its wait group when dropped
#[derive(Debug)]
pub struct WaitGuard {
    group: WaitGroup,
}

impl Drop for WaitGuard {
    fn drop(&mut self) {
        self.group.done();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_pending, assert_ready, task};

    #[test]
    fn test_wait_with_nothing_registered_is_ready() {
        let group = WaitGroup::new();
        let mut wait = task::spawn(group.wait());
        assert_ready!(wait.poll());
    }

    #[test]
    fn test_wait_wakes_on_last_done() {
        let group = WaitGroup::new();
        group.add(2);

        let mut wait = task::spawn(group.wait());
        assert_pending!(wait.poll());

        group.done();
        assert!(!wait.is_woken());
        assert_pending!(wait.poll());

        group.done();
        assert!(wait.is_woken());
        assert_ready!(wait.poll());
    }

    #[test]
    fn test_guard_signals_on_drop() {
        let group = WaitGroup::new();
        group.add(1);
        let guard = group.guard();
        assert_eq!(group.pending(), 1);
        drop(guard);
        assert_eq!(group.pending(), 0);
    }

    #[test]
    #[should_panic(expected = "negative WaitGroup counter")]
    fn test_extra_done_panics() {
        let group = WaitGroup::new();
        group.add(1);
        group.done();
        group.done();
    }
}
