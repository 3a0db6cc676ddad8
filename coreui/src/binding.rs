//! Construction-time choice between controlled and uncontrolled values.
//!
//! A widget reads and commits its value through a [`Binding`]. The mode is
//! picked once, when the binding is created, and never inspected again:
//! a controlled binding reads the owner's state and leaves writes to the
//! owner's change handler, an uncontrolled binding keeps its own state.

use std::fmt;
use std::sync::Arc;

use crate::state::State;

/// Where a widget value lives.
pub trait ValueSource<T>: Send + Sync {
    fn get(&self) -> T;
    fn commit(&self, value: T);
    fn is_controlled(&self) -> bool;
}

struct Controlled<T>(State<T>);

impl<T: Clone + Send + Sync> ValueSource<T> for Controlled<T> {
    fn get(&self) -> T {
        self.0.get()
    }

    fn commit(&self, _value: T) {
        // The owner applies the value from its change handler
        log::trace!("controlled binding: commit left to owner");
    }

    fn is_controlled(&self) -> bool {
        true
    }
}

struct Uncontrolled<T>(State<T>);

impl<T: Clone + Send + Sync> ValueSource<T> for Uncontrolled<T> {
    fn get(&self) -> T {
        self.0.get()
    }

    fn commit(&self, value: T) {
        self.0.set(value);
    }

    fn is_controlled(&self) -> bool {
        false
    }
}

/// A widget value, owned either by the caller or by the widget itself.
pub struct Binding<T> {
    source: Arc<dyn ValueSource<T>>,
}

impl<T: Clone + Send + Sync + 'static> Binding<T> {
    /// Read from the caller's state. The widget never writes to it.
    pub fn controlled(state: &State<T>) -> Self {
        Self {
            source: Arc::new(Controlled(state.clone())),
        }
    }

    /// Keep the value inside the widget, starting at `initial`.
    pub fn uncontrolled(initial: T) -> Self {
        Self {
            source: Arc::new(Uncontrolled(State::new(initial))),
        }
    }

    /// Any custom source.
    pub fn from_source(source: Arc<dyn ValueSource<T>>) -> Self {
        Self { source }
    }

    pub fn get(&self) -> T {
        self.source.get()
    }

    pub fn commit(&self, value: T) {
        self.source.commit(value);
    }

    pub fn is_controlled(&self) -> bool {
        self.source.is_controlled()
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<T: Clone + Default + Send + Sync + 'static> Default for Binding<T> {
    fn default() -> Self {
        Self::uncontrolled(T::default())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("controlled", &self.source.is_controlled())
            .field("value", &self.source.get())
            .finish()
    }
}
