//! Render requests and deferred work from outside the input stream.
//!
//! The event loop sleeps while nothing happens. A timer that fires posts
//! its callback here and pokes the handle; the loop runs the callbacks and
//! renders once, however many pokes piled up in between.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

/// Work handed to the event loop.
pub type Job = Box<dyn FnOnce() + Send>;

#[derive(Default)]
struct Shared {
    notify: Notify,
    listening: AtomicBool,
    jobs: Mutex<Vec<Job>>,
}

impl fmt::Debug for Shared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shared")
            .field("listening", &self.listening)
            .finish_non_exhaustive()
    }
}

/// Cloneable handle shared by the runtime, the context and timers.
#[derive(Debug, Default, Clone)]
pub struct WakeupHandle {
    shared: Arc<Shared>,
}

impl WakeupHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start accepting pokes. Until then they are dropped, so code running
    /// without a runtime never leaves a render request behind.
    pub fn listen(&self) {
        self.shared.listening.store(true, Ordering::SeqCst);
    }

    pub fn is_listening(&self) -> bool {
        self.shared.listening.load(Ordering::SeqCst)
    }

    /// Ask for a render.
    pub fn send(&self) {
        if self.is_listening() {
            // Stores at most one permit while nobody waits
            self.shared.notify.notify_one();
        }
    }

    /// Run `job` on the event loop and render after it. Without a
    /// listening loop there is nowhere to hand it to, so it runs at once.
    pub fn post(&self, job: Job) {
        if !self.is_listening() {
            job();
            return;
        }
        self.shared
            .jobs
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(job);
        self.shared.notify.notify_one();
    }

    /// Run every posted job in order. Returns how many ran.
    pub fn run_pending(&self) -> usize {
        let jobs = {
            let mut queue = self.shared.jobs.lock().unwrap_or_else(|p| p.into_inner());
            std::mem::take(&mut *queue)
        };
        let count = jobs.len();
        for job in jobs {
            job();
        }
        count
    }

    /// Resolves on the next poke, or at once if one is pending.
    pub async fn wait(&self) {
        self.shared.notify.notified().await;
    }
}
