//! Outside-click watch.
//!
//! A widget that opens a popup subscribes its bounding region here. Every
//! click is dispatched with the ancestor path of the clicked element, and
//! each watch whose region is not on that path fires. The returned
//! [`Subscription`] is an RAII guard: dropping it unsubscribes.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use crate::handler_context::{Handler, HandlerContext};

struct Entry {
    key: u64,
    region: String,
    callback: Handler,
}

type Entries = Arc<Mutex<Vec<Entry>>>;

#[derive(Clone, Default)]
pub struct PointerWatch {
    entries: Entries,
    next_key: Arc<AtomicU64>,
}

impl PointerWatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `callback` whenever a click lands outside the element `region`
    /// and its descendants.
    pub fn watch(&self, region: impl Into<String>, callback: Handler) -> Subscription {
        let key = self.next_key.fetch_add(1, Ordering::Relaxed);
        let region = region.into();
        log::debug!("PointerWatch::watch region={} key={}", region, key);

        let mut entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        entries.push(Entry {
            key,
            region,
            callback,
        });

        Subscription {
            key,
            entries: Arc::downgrade(&self.entries),
        }
    }

    /// Fire every watch whose region is not on `path`. `path` runs from the
    /// root to the clicked element; an empty path means the click hit
    /// nothing, which is outside everything. Returns how many fired.
    pub fn dispatch(&self, path: &[String], hx: &HandlerContext) -> usize {
        // Callbacks may drop their own subscription, so the lock is
        // released before any of them runs.
        let fired: Vec<Handler> = {
            let entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
            entries
                .iter()
                .filter(|e| !path.iter().any(|id| *id == e.region))
                .map(|e| Arc::clone(&e.callback))
                .collect()
        };

        for callback in &fired {
            callback(hx);
        }
        if !fired.is_empty() {
            log::debug!("PointerWatch::dispatch fired={}", fired.len());
        }
        fired.len()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for PointerWatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerWatch")
            .field("watches", &self.len())
            .finish()
    }
}

/// Keeps an outside-click watch alive. Dropping it unsubscribes.
pub struct Subscription {
    key: u64,
    entries: Weak<Mutex<Vec<Entry>>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(entries) = self.entries.upgrade() {
            let mut entries = entries.lock().unwrap_or_else(|p| p.into_inner());
            entries.retain(|e| e.key != self.key);
            log::debug!("PointerWatch: unsubscribed key={}", self.key);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("key", &self.key).finish()
    }
}
