//! Terminal UI components on top of `coreui-dom`.
//!
//! Widgets are builders that produce `coreui_dom::Element` trees and
//! register their callbacks in a `HandlerRegistry`; the `Runtime` renders
//! the tree and routes terminal input back to those callbacks.

pub mod binding;
pub mod context;
pub mod handler_context;
pub mod pointer;
pub mod prelude;
pub mod runtime;
pub mod selection;
pub mod state;
pub mod style;
pub mod theme;
pub mod timer;
pub mod tokens;
pub mod validation;
pub mod wakeup;
pub mod widgets;

pub use coreui_dom as dom;

pub use binding::Binding;
pub use context::Context;
pub use handler_context::{EventData, Handler, HandlerContext, HandlerRegistry, WidgetHandlers};
pub use runtime::{App, Runtime, RuntimeError};
pub use state::State;
