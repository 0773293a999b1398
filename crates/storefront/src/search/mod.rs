//! Debounced search dispatch.
//!
//! Search-as-you-type fires on every keystroke; dispatching every one of
//! them would race slower in-flight requests against newer ones. The
//! [`Debouncer`] models the fix explicitly as a cancellable delayed task:
//! each `schedule` call cancels any previously scheduled, not-yet-fired
//! task, waits a fixed delay, and then runs only if it is still the latest
//! generation - so a superseded search can never apply its results late.
//!
//! This is a library utility for search-dispatch consumers (a client shell
//! or embedded UI driving `GET /api/products?search=` from keystrokes);
//! the API binary itself answers each request as it arrives and has no
//! keystroke stream to debounce.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::AbortHandle;

/// Delay before a scheduled task fires. Restarted on every keystroke.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(150);

/// Cancellable delayed task scheduler.
///
/// At most one task is pending at a time; scheduling a new one cancels the
/// previous one. Must be used inside a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    latest: AtomicU64,
    pending: Mutex<Option<AbortHandle>>,
}

impl Debouncer {
    /// Create a debouncer with the given delay.
    #[must_use]
    pub fn new(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            delay,
            latest: AtomicU64::new(0),
            pending: Mutex::new(None),
        })
    }

    /// Create a debouncer with the standard keystroke delay.
    #[must_use]
    pub fn standard() -> Arc<Self> {
        Self::new(DEBOUNCE_DELAY)
    }

    /// Schedule a task to run after the delay, cancelling any previously
    /// scheduled task that has not fired yet.
    ///
    /// The task runs only if no newer task was scheduled while it waited;
    /// out-of-order completions are discarded via a generation check, not
    /// just the abort (the task may already be past its sleep when a newer
    /// schedule lands).
    pub fn schedule<F>(self: &Arc<Self>, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let this = Arc::clone(self);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(this.delay).await;
            if this.latest.load(Ordering::SeqCst) == generation {
                task.await;
            }
        });

        let previous = {
            let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
            pending.replace(handle.abort_handle())
        };
        if let Some(previous) = previous {
            previous.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_rapid_fire_schedules_run_latest_only() {
        let debouncer = Debouncer::new(Duration::from_millis(150));
        let log = Arc::new(Mutex::new(Vec::new()));

        for label in ["st", "stu", "stud", "studio"] {
            let log = Arc::clone(&log);
            debouncer.schedule(async move {
                log.lock().expect("lock").push(label);
            });
        }

        tokio::time::sleep(Duration::from_millis(300)).await;

        let log = log.lock().expect("lock").clone();
        assert_eq!(log, ["studio"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_waits_for_the_full_delay() {
        let debouncer = Debouncer::new(Duration::from_millis(150));
        let log = Arc::new(Mutex::new(Vec::new()));

        {
            let log = Arc::clone(&log);
            debouncer.schedule(async move {
                log.lock().expect("lock").push("early");
            });
        }

        tokio::time::sleep(Duration::from_millis(75)).await;
        assert!(log.lock().expect("lock").is_empty());

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(*log.lock().expect("lock"), ["early"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quiet_schedules_all_fire() {
        let debouncer = Debouncer::new(Duration::from_millis(150));
        let log = Arc::new(Mutex::new(Vec::new()));

        for label in ["first", "second"] {
            let log = Arc::clone(&log);
            debouncer.schedule(async move {
                log.lock().expect("lock").push(label);
            });
            tokio::time::sleep(Duration::from_millis(300)).await;
        }

        let log = log.lock().expect("lock").clone();
        assert_eq!(log, ["first", "second"]);
    }
}
