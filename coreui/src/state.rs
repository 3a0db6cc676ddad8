use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, Weak};

/// Shared widget state with interior mutability.
///
/// `State<T>` is a cheap-to-clone handle over `Arc<RwLock<T>>`. The page
/// that embeds a widget owns the handle, the widget's handlers mutate it,
/// and the dirty flag tells the runtime something changed.
///
/// # Example
///
/// ```ignore
/// let country = State::new(SelectState::new(options));
///
/// Select::new()
///     .state(&country)
///     .placeholder("Choose a country")
///     .build(&registry, &handlers);
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(T::clone)
    }

    /// Read the value in place, for state that is not `Clone`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Set a new value
    pub fn set(&self, value: T) {
        self.update(|v| *v = value);
    }

    /// Update the value using a closure, returning what the closure returns.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = match self.inner.write() {
            Ok(mut guard) => f(&mut guard),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        };
        self.dirty.store(true, Ordering::SeqCst);
        result
    }

    /// Check if the state has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    /// A handle that does not keep the state alive.
    pub fn downgrade(&self) -> WeakState<T> {
        WeakState {
            inner: Arc::downgrade(&self.inner),
            dirty: Arc::downgrade(&self.dirty),
        }
    }

    /// Whether two handles point at the same value.
    pub fn ptr_eq(&self, other: &State<T>) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Weak counterpart of [`State`], held by long-lived callbacks such as
/// outside-click watches and timers.
#[derive(Debug)]
pub struct WeakState<T> {
    inner: Weak<RwLock<T>>,
    dirty: Weak<AtomicBool>,
}

impl<T> WeakState<T> {
    pub fn upgrade(&self) -> Option<State<T>> {
        Some(State {
            inner: self.inner.upgrade()?,
            dirty: self.dirty.upgrade()?,
        })
    }
}

impl<T> Clone for WeakState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
            dirty: Weak::clone(&self.dirty),
        }
    }
}
