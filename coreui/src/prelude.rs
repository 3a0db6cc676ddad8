//! Prelude module for convenient imports.
//!
//! ```ignore
//! use coreui::prelude::*;
//! ```

// Core types
pub use crate::binding::Binding;
pub use crate::context::Context;
pub use crate::handler_context::{
    EventData, Handler, HandlerContext, HandlerRegistry, WidgetHandlers,
};
pub use crate::runtime::{App, Runtime, RuntimeError};
pub use crate::selection::{Filter, SelectOption};
pub use crate::state::State;
pub use crate::style::{ColorScheme, PropDoc};
pub use crate::theme::{ThemeMode, build_theme};
pub use crate::timer::Timeout;
pub use crate::tokens::{Breakpoint, Brand, FontSize, FontWeight, Radius, Spacing};
pub use crate::validation::Validator;

// Widgets
pub use crate::widgets::*;

// Re-export the element model for hand-built trees
pub use coreui_dom::{Element, Key, Modifiers, Size};
