//! Cancellable delayed callbacks.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::wakeup::WakeupHandle;

/// A single-shot timer on the tokio runtime.
///
/// The delay runs on tokio, the callback on the event loop: when the delay
/// ends the callback is posted through the [`WakeupHandle`]. Arming
/// replaces any pending callback. Cancelling or dropping the `Timeout`
/// stops it even if the delay already ended and the callback is queued.
#[derive(Debug, Default)]
pub struct Timeout {
    task: Option<JoinHandle<()>>,
    /// Generation allowed to fire, 0 when idle.
    live: Arc<AtomicU64>,
    generation: u64,
}

impl Timeout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` after `delay`, then wake the runtime so the change is drawn.
    ///
    /// Outside a tokio runtime nothing can be scheduled; the call logs a
    /// warning and the timer stays idle.
    pub fn arm<F>(&mut self, delay: Duration, wakeup: WakeupHandle, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            log::warn!("Timeout::arm called outside a tokio runtime, ignoring");
            return;
        };

        self.generation += 1;
        let generation = self.generation;
        self.live.store(generation, Ordering::SeqCst);
        log::debug!("Timeout::arm delay={:?} generation={}", delay, generation);

        let live = Arc::clone(&self.live);
        self.task = Some(handle.spawn(async move {
            tokio::time::sleep(delay).await;
            wakeup.post(Box::new(move || {
                // A cancel or re-arm since the post wins
                if live
                    .compare_exchange(generation, 0, Ordering::SeqCst, Ordering::SeqCst)
                    .is_ok()
                {
                    f();
                }
            }));
        }));
    }

    /// Stop the pending callback, if any.
    pub fn cancel(&mut self) {
        if self.live.swap(0, Ordering::SeqCst) != 0 {
            log::debug!("Timeout::cancel");
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Whether a callback is scheduled and has not run yet.
    pub fn is_pending(&self) -> bool {
        self.live.load(Ordering::SeqCst) != 0
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.cancel();
    }
}
