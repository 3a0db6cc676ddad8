//! Handlers and the context bundle passed to them.
//!
//! - `Handler`: closure type for widget callbacks
//! - `EventData`: what triggered the handler
//! - `HandlerRegistry`: widget handlers keyed by (element_id, event_type)
//! - `HandlerContext`: runtime context plus event data, passed to every handler

use std::cell::Cell;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use coreui_dom::{Key, Modifiers};

use crate::context::Context;
use crate::selection::SelectOption;

/// A handler closure that receives a HandlerContext.
pub type Handler = Arc<dyn Fn(&HandlerContext) + Send + Sync>;

/// Map of handler names to handlers, used for passing callbacks to widgets.
///
/// Standard handler names:
/// - `"on_activate"` - button click, enter key, item choice
/// - `"on_change"` - value changed (select, checkbox, input, date)
/// - `"on_input_change"` - autocomplete text changed
/// - `"on_submit"` - enter in an input
/// - `"on_focus"` / `"on_blur"` - focus moved
/// - `"on_close"` - alert dismissed
/// - `"on_select"` - dropdown item chosen
/// - `"on_open_change"` - dropdown opened or closed
pub type WidgetHandlers = HashMap<&'static str, Handler>;

/// Event-specific data passed to handlers via HandlerContext.
#[derive(Debug, Clone, Default)]
pub enum EventData {
    #[default]
    None,
    /// Raw key, delivered to `on_key`.
    Key { key: Key, modifiers: Modifiers },
    /// Text input value changed.
    Change { text: String },
    /// Text input submitted (Enter pressed).
    Submit,
    /// Element lost focus.
    Blur { new_target: Option<String> },
    /// Checkbox toggled.
    Toggle { checked: bool },
    /// A set of plain values changed (checkbox group).
    Values { values: Vec<String> },
    /// Selection committed. Empty `ids` means cleared. A free-form value
    /// carries its text as the id and no option.
    Select {
        ids: Vec<String>,
        options: Vec<SelectOption>,
    },
    /// Date picked or cleared.
    Date { date: Option<NaiveDate> },
    /// Popup opened or closed.
    Open { open: bool },
    /// Menu item chosen.
    Item { id: String },
    /// Mouse wheel.
    Scroll { delta: i16 },
}

impl EventData {
    pub fn text(&self) -> Option<&str> {
        match self {
            EventData::Change { text } => Some(text),
            _ => None,
        }
    }

    pub fn key(&self) -> Option<(Key, Modifiers)> {
        match self {
            EventData::Key { key, modifiers } => Some((*key, *modifiers)),
            _ => None,
        }
    }

    pub fn blur_target(&self) -> Option<&str> {
        match self {
            EventData::Blur { new_target } => new_target.as_deref(),
            _ => None,
        }
    }

    pub fn checked(&self) -> Option<bool> {
        match self {
            EventData::Toggle { checked } => Some(*checked),
            _ => None,
        }
    }

    pub fn values(&self) -> Option<&[String]> {
        match self {
            EventData::Values { values } => Some(values),
            _ => None,
        }
    }

    /// All committed ids of a Select event.
    pub fn selected_ids(&self) -> Option<&[String]> {
        match self {
            EventData::Select { ids, .. } => Some(ids),
            _ => None,
        }
    }

    /// The single committed id, `None` when cleared or not a Select event.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_ids()?.first().map(String::as_str)
    }

    pub fn selected_options(&self) -> Option<&[SelectOption]> {
        match self {
            EventData::Select { options, .. } => Some(options),
            _ => None,
        }
    }

    pub fn selected_option(&self) -> Option<&SelectOption> {
        self.selected_options()?.first()
    }

    /// The date of a Date event. Outer `None` means not a Date event.
    pub fn date(&self) -> Option<Option<NaiveDate>> {
        match self {
            EventData::Date { date } => Some(*date),
            _ => None,
        }
    }

    pub fn open(&self) -> Option<bool> {
        match self {
            EventData::Open { open } => Some(*open),
            _ => None,
        }
    }

    pub fn item_id(&self) -> Option<&str> {
        match self {
            EventData::Item { id } => Some(id),
            _ => None,
        }
    }

    pub fn scroll_delta(&self) -> Option<i16> {
        match self {
            EventData::Scroll { delta } => Some(*delta),
            _ => None,
        }
    }
}

/// Registry for widget event handlers.
///
/// Maps (element_id, event_type) to handler closures. Cleared before each
/// build so handlers from previous renders don't persist.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: Arc<RwLock<HashMap<(String, String), Handler>>>,
    cx: Context,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry whose widgets reach the given runtime context at build
    /// time, for timers and outside-click watches.
    pub fn with_context(cx: Context) -> Self {
        Self {
            handlers: Arc::default(),
            cx,
        }
    }

    /// Register a handler for an element event.
    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.insert((element_id.to_string(), event.to_string()), handler);
        }
    }

    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        self.handlers
            .read()
            .ok()?
            .get(&(element_id.to_string(), event.to_string()))
            .cloned()
    }

    pub fn has(&self, element_id: &str, event: &str) -> bool {
        self.get(element_id, event).is_some()
    }

    pub fn clear(&self) {
        if let Ok(mut handlers) = self.handlers.write() {
            handlers.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.read().map(|h| h.is_empty()).unwrap_or(true)
    }

    pub fn len(&self) -> usize {
        self.handlers.read().map(|h| h.len()).unwrap_or(0)
    }

    pub fn context(&self) -> &Context {
        &self.cx
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handler_count", &self.len())
            .finish()
    }
}

/// Context bundle passed to every handler.
pub struct HandlerContext<'a> {
    cx: &'a Context,
    event_data: EventData,
    ignored: Cell<bool>,
}

impl<'a> HandlerContext<'a> {
    pub fn new(cx: &'a Context) -> Self {
        Self::with_event(cx, EventData::None)
    }

    pub fn with_event(cx: &'a Context, event_data: EventData) -> Self {
        Self {
            cx,
            event_data,
            ignored: Cell::new(false),
        }
    }

    pub fn cx(&self) -> &Context {
        self.cx
    }

    /// The event-specific data, `EventData::None` when there is none.
    pub fn event(&self) -> &EventData {
        &self.event_data
    }

    /// Mark a key as not handled so the runtime passes it on.
    pub fn ignore(&self) {
        self.ignored.set(true);
    }

    pub fn is_ignored(&self) -> bool {
        self.ignored.get()
    }

    /// Call `handler` with the same runtime context and new event data.
    pub fn emit(&self, handler: &Handler, event_data: EventData) {
        handler(&HandlerContext::with_event(self.cx, event_data));
    }
}
