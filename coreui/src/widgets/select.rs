//! Select widget - a single-value dropdown built on the shared combobox.

use std::sync::Arc;

use coreui_dom::{Element, Key};

use super::field::{FieldLook, FieldSize, FieldVariant, field_text};
use super::popup::{self, OptionRow};
use super::{HasState, NeedsState, handler};
use crate::binding::Binding;
use crate::handler_context::{EventData, Handler, HandlerRegistry, WidgetHandlers};
use crate::pointer::Subscription;
use crate::selection::{Combobox, Filter, Nav, SelectOption};
use crate::state::{State, WeakState};
use crate::style::{ColorScheme, PropDoc};

/// State for a select widget.
///
/// Holds the option list with its open/query/highlight state and the
/// value binding. The value is an option id.
///
/// # Example
///
/// ```ignore
/// let fruit = State::new(SelectState::new([
///     SelectOption::new("apple", "Apple"),
///     SelectOption::new("banana", "Banana"),
/// ]));
/// ```
#[derive(Debug, Default)]
pub struct SelectState {
    combobox: Combobox,
    value: Binding<Option<String>>,
    outside: Option<Subscription>,
}

impl SelectState {
    pub fn new(options: impl IntoIterator<Item = SelectOption>) -> Self {
        Self {
            combobox: Combobox::new(options),
            ..Default::default()
        }
    }

    /// Start uncontrolled with `id` selected.
    pub fn with_value(mut self, id: impl Into<String>) -> Self {
        self.value = Binding::uncontrolled(Some(id.into()));
        self
    }

    pub fn with_binding(mut self, value: Binding<Option<String>>) -> Self {
        self.value = value;
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.combobox.set_filter(filter);
        self
    }

    pub fn value(&self) -> Option<String> {
        self.value.get()
    }

    /// The option behind the current value.
    pub fn selected(&self) -> Option<&SelectOption> {
        let id = self.value.get()?;
        self.combobox.option(&id)
    }

    pub fn combobox(&self) -> &Combobox {
        &self.combobox
    }

    pub fn is_open(&self) -> bool {
        self.combobox.is_open()
    }

    pub fn open(&mut self) -> bool {
        self.combobox.open()
    }

    /// Close the list and drop the search text.
    pub fn close(&mut self) {
        self.combobox.close();
        self.combobox.clear_query();
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.combobox.set_query(text);
    }

    /// Commit the option `id`. Disabled and unknown ids are a no-op.
    /// Returns the committed option.
    pub fn choose(&mut self, id: &str) -> Option<SelectOption> {
        let option = self.combobox.option(id).filter(|o| !o.disabled)?.clone();
        log::debug!("SelectState::choose id={}", option.id);
        self.value.commit(Some(option.id.clone()));
        self.close();
        Some(option)
    }

    /// Clear the value. Returns false when there was nothing to clear.
    pub fn clear(&mut self) -> bool {
        if self.value.get().is_none() {
            return false;
        }
        self.value.commit(None);
        true
    }

    /// Keyboard transitions. With `searchable`, printable keys edit the
    /// search text while the list is open. `Nav::Commit` means the option
    /// has already been committed.
    pub fn handle_key(&mut self, key: Key, searchable: bool) -> Nav {
        if searchable && self.is_open() {
            match key {
                Key::Char(c) => {
                    let mut query = self.combobox.query().to_string();
                    query.push(c);
                    self.combobox.set_query(query);
                    return Nav::Handled;
                }
                Key::Backspace => {
                    let mut query = self.combobox.query().to_string();
                    query.pop();
                    self.combobox.set_query(query);
                    return Nav::Handled;
                }
                _ => {}
            }
        }

        match self.combobox.handle_key(key) {
            Nav::Commit(option) => match self.choose(&option.id) {
                Some(option) => Nav::Commit(option),
                None => Nav::Handled,
            },
            Nav::Closed => {
                self.close();
                Nav::Closed
            }
            other => other,
        }
    }
}

fn select_event(option: Option<SelectOption>) -> EventData {
    match option {
        Some(option) => EventData::Select {
            ids: vec![option.id.clone()],
            options: vec![option],
        },
        None => EventData::Select {
            ids: Vec::new(),
            options: Vec::new(),
        },
    }
}

/// A select widget builder.
///
/// Uses typestate pattern to enforce `state()` is called before `build()`.
#[derive(Debug)]
pub struct Select<S = NeedsState> {
    state_marker: S,
    id: Option<String>,
    placeholder: Option<String>,
    look: FieldLook,
    readonly: bool,
    searchable: bool,
    clearable: bool,
}

impl Default for Select<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl Select<NeedsState> {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("options", "SelectOption[]", "[]", "Options with label, group, description, disabled"),
        PropDoc::new("value", "Binding<Option<String>>", "uncontrolled", "Selected option id"),
        PropDoc::new("placeholder", "string", "\"Select...\"", "Shown with no value"),
        PropDoc::new("size", "sm | md | lg", "md", "Field size"),
        PropDoc::new("variant", "outline | filled | flushed", "outline", "Field style"),
        PropDoc::new("color", "Color", "primary", "Focus color"),
        PropDoc::new("searchable", "bool", "false", "Type to filter the open list"),
        PropDoc::new("clearable", "bool", "false", "Show × to clear the value"),
        PropDoc::new("disabled", "bool", "false", "Ignore all input"),
        PropDoc::new("readonly", "bool", "false", "Show the value, block changes"),
        PropDoc::new("invalid", "bool", "false", "Error styling"),
        PropDoc::new("on_change", "handler", "-", "Fires with the selected id and option"),
    ];

    pub fn new() -> Self {
        Self {
            state_marker: NeedsState,
            id: None,
            placeholder: None,
            look: FieldLook::default(),
            readonly: false,
            searchable: false,
            clearable: false,
        }
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(self, s: &State<SelectState>) -> Select<HasState<'_, SelectState>> {
        Select {
            state_marker: HasState(s),
            id: self.id,
            placeholder: self.placeholder,
            look: self.look,
            readonly: self.readonly,
            searchable: self.searchable,
            clearable: self.clearable,
        }
    }
}

impl<S> Select<S> {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn size(mut self, size: FieldSize) -> Self {
        self.look.size = size;
        self
    }

    pub fn variant(mut self, variant: FieldVariant) -> Self {
        self.look.variant = variant;
        self
    }

    pub fn color(mut self, color: ColorScheme) -> Self {
        self.look.color = color;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.look.disabled = disabled;
        self
    }

    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.look.invalid = invalid;
        self
    }

    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub fn clearable(mut self) -> Self {
        self.clearable = true;
        self
    }

    pub fn full_width(mut self) -> Self {
        self.look.full_width = true;
        self
    }
}

impl<'a> Select<HasState<'a, SelectState>> {
    /// Build the select element.
    ///
    /// Registers the trigger, clear and option handlers unless disabled
    /// or read-only.
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let id = self.id.clone().unwrap_or_else(|| "select".into());
        let root_id = format!("{}-root", id);
        let interactive = !self.look.disabled && !self.readonly;

        // Hold the outside-click watch only while open
        let weak = state.downgrade();
        let open = state.with(|s| s.is_open());
        let watch = open && interactive;
        if watch != state.with(|s| s.outside.is_some()) {
            state.update(|s| {
                popup::sync_outside(
                    &mut s.outside,
                    watch,
                    registry.context().pointer(),
                    &root_id,
                    || close_handler(weak.clone()),
                )
            });
        }

        let (label, query, has_value) = state.with(|s| {
            (
                s.selected().map(|o| o.label.clone()),
                s.combobox.query().to_string(),
                s.value().is_some(),
            )
        });
        log::debug!(
            "Select::build id={} open={} has_value={} query={:?}",
            id,
            open,
            has_value,
            query
        );

        let text = if self.searchable && open {
            if query.is_empty() {
                field_text("Search...", true)
            } else {
                field_text(&query, false)
            }
        } else {
            match &label {
                Some(label) => field_text(label, false),
                None => field_text(
                    self.placeholder.as_deref().unwrap_or("Select..."),
                    true,
                ),
            }
        };

        let mut frame = self.look.frame(&id, !self.look.disabled).child(text);
        if self.clearable && has_value && interactive {
            let clear_id = format!("{}-clear", id);
            frame = frame.child(Element::text("×").id(&clear_id).clickable(true));
            registry.register(&clear_id, "on_activate", clear_handler(weak.clone(), handlers));
        }
        frame = frame.child(Element::text(if open { "▴" } else { "▾" }));

        let mut root = Element::col().id(&root_id).child(frame);
        if self.look.full_width {
            root = root.width(coreui_dom::Size::Fill);
        }

        if !interactive {
            return root;
        }

        registry.register(&id, "on_activate", {
            let weak = weak.clone();
            Arc::new(move |_hx| {
                if let Some(state) = weak.upgrade() {
                    state.update(|s| s.toggle());
                }
            })
        });
        registry.register(&id, "on_blur", close_handler(weak.clone()));
        registry.register(&id, "on_key", {
            let weak = weak.clone();
            let on_change = handler(handlers, "on_change");
            let searchable = self.searchable;
            Arc::new(move |hx| {
                let Some((key, _)) = hx.event().key() else {
                    return;
                };
                let Some(state) = weak.upgrade() else {
                    return;
                };
                match state.update(|s| s.handle_key(key, searchable)) {
                    Nav::Commit(option) => {
                        if let Some(on_change) = &on_change {
                            hx.emit(on_change, select_event(Some(option)));
                        }
                    }
                    Nav::Ignored => hx.ignore(),
                    Nav::Handled | Nav::Closed => {}
                }
            })
        });

        if open {
            let (list, rows) = state.with(|s| {
                let value = s.value();
                popup::option_list(
                    &id,
                    &s.combobox,
                    &|option_id| value.as_deref() == Some(option_id),
                    "No options found",
                    None,
                    self.look.height(),
                )
            });
            register_rows(registry, handlers, &weak, rows);
            root = root.child(list);
        }

        root
    }
}

fn close_handler(weak: WeakState<SelectState>) -> Handler {
    Arc::new(move |_hx| {
        if let Some(state) = weak.upgrade() {
            state.update(|s| s.close());
        }
    })
}

fn clear_handler(weak: WeakState<SelectState>, handlers: &WidgetHandlers) -> Handler {
    let on_change = handler(handlers, "on_change");
    Arc::new(move |hx| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        if state.update(|s| s.clear())
            && let Some(on_change) = &on_change
        {
            hx.emit(on_change, select_event(None));
        }
    })
}

fn register_rows(
    registry: &HandlerRegistry,
    handlers: &WidgetHandlers,
    weak: &WeakState<SelectState>,
    rows: Vec<OptionRow>,
) {
    let on_change = handler(handlers, "on_change");
    for row in rows {
        let weak = weak.clone();
        let on_change = on_change.clone();
        let option_id = row.option.id;
        registry.register(
            &row.element_id,
            "on_activate",
            Arc::new(move |hx| {
                let Some(state) = weak.upgrade() else {
                    return;
                };
                if let Some(option) = state.update(|s| s.choose(&option_id))
                    && let Some(on_change) = &on_change
                {
                    hx.emit(on_change, select_event(Some(option)));
                }
            }),
        );
    }
}
