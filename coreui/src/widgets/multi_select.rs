//! MultiSelect widget - a set of option ids shown as removable tags.

use std::sync::Arc;

use coreui_dom::{Color, Edges, Element, Key, Size, Style, Wrap};

use super::field::{FieldLook, FieldSize, FieldVariant, field_text};
use super::popup::{self, OptionRow};
use super::{HasState, NeedsState, handler};
use crate::binding::Binding;
use crate::handler_context::{
    EventData, Handler, HandlerContext, HandlerRegistry, WidgetHandlers,
};
use crate::pointer::Subscription;
use crate::selection::{Combobox, Filter, Nav, SelectOption};
use crate::state::{State, WeakState};
use crate::style::{ColorScheme, PropDoc};

/// State for a multi-select widget. Values are kept in the order they
/// were added.
#[derive(Debug, Default)]
pub struct MultiSelectState {
    combobox: Combobox,
    values: Binding<Vec<String>>,
    max: Option<usize>,
    outside: Option<Subscription>,
}

impl MultiSelectState {
    pub fn new(options: impl IntoIterator<Item = SelectOption>) -> Self {
        Self {
            combobox: Combobox::new(options),
            ..Default::default()
        }
    }

    pub fn with_values(mut self, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.values = Binding::uncontrolled(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_binding(mut self, values: Binding<Vec<String>>) -> Self {
        self.values = values;
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.combobox.set_filter(filter);
        self
    }

    /// Reject additions once `max` values are selected.
    pub fn with_max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    pub fn values(&self) -> Vec<String> {
        self.values.get()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.values.get().iter().any(|v| v == id)
    }

    /// Options behind the current values, in value order.
    pub fn selected(&self) -> Vec<SelectOption> {
        self.values
            .get()
            .iter()
            .filter_map(|id| self.combobox.option(id).cloned())
            .collect()
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    pub fn is_full(&self) -> bool {
        self.max.is_some_and(|max| self.values.get().len() >= max)
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

    pub fn close(&mut self) {
        self.combobox.close();
        self.combobox.clear_query();
    }

    pub fn toggle_open(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.combobox.set_query(text);
    }

    /// Add or remove `id`. Disabled options and additions past `max` are
    /// a no-op. Returns whether the set changed.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.combobox.option(id).is_none_or(|o| o.disabled) {
            return false;
        }
        let mut values = self.values.get();
        if let Some(pos) = values.iter().position(|v| v == id) {
            values.remove(pos);
        } else if self.is_full() {
            log::debug!("MultiSelectState::toggle rejected id={} max={:?}", id, self.max);
            return false;
        } else {
            values.push(id.to_string());
        }
        log::debug!("MultiSelectState::toggle id={} count={}", id, values.len());
        self.values.commit(values);
        true
    }

    /// Remove `id`. Returns false when it was not selected.
    pub fn remove(&mut self, id: &str) -> bool {
        let mut values = self.values.get();
        let before = values.len();
        values.retain(|v| v != id);
        if values.len() == before {
            return false;
        }
        self.values.commit(values);
        true
    }

    /// Remove every value. Returns false when there was nothing to clear.
    pub fn clear(&mut self) -> bool {
        if self.values.get().is_empty() {
            return false;
        }
        self.values.commit(Vec::new());
        true
    }

    /// Keyboard transitions. Enter toggles the highlighted option and
    /// keeps the list open. `Nav::Commit` means the set changed.
    pub fn handle_key(&mut self, key: Key, searchable: bool) -> Nav {
        if searchable && self.is_open() {
            match key {
                Key::Char(c) => {
                    let mut query = self.combobox.query().to_string();
                    query.push(c);
                    self.combobox.set_query(query);
                    return Nav::Handled;
                }
                Key::Backspace if !self.combobox.query().is_empty() => {
                    let mut query = self.combobox.query().to_string();
                    query.pop();
                    self.combobox.set_query(query);
                    return Nav::Handled;
                }
                _ => {}
            }
        }

        // Backspace on an empty search drops the last tag
        if key == Key::Backspace
            && let Some(last) = self.values.get().last().cloned()
        {
            self.remove(&last);
            return Nav::Commit(
                self.combobox
                    .option(&last)
                    .cloned()
                    .unwrap_or_else(|| SelectOption::new(last.clone(), last)),
            );
        }

        match self.combobox.handle_key(key) {
            Nav::Commit(option) => {
                if self.toggle(&option.id) {
                    Nav::Commit(option)
                } else {
                    Nav::Handled
                }
            }
            Nav::Closed => {
                self.close();
                Nav::Closed
            }
            other => other,
        }
    }

    fn change_event(&self) -> EventData {
        EventData::Select {
            ids: self.values.get(),
            options: self.selected(),
        }
    }
}

/// A multi-select widget builder.
#[derive(Debug)]
pub struct MultiSelect<S = NeedsState> {
    state_marker: S,
    id: Option<String>,
    placeholder: Option<String>,
    look: FieldLook,
    readonly: bool,
    searchable: bool,
    clearable: bool,
}

impl Default for MultiSelect<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiSelect<NeedsState> {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("options", "SelectOption[]", "[]", "Options with label, group, description, disabled"),
        PropDoc::new("values", "Binding<Vec<String>>", "uncontrolled", "Selected option ids"),
        PropDoc::new("max", "usize", "none", "Most values that can be selected"),
        PropDoc::new("placeholder", "string", "\"Select...\"", "Shown with no values"),
        PropDoc::new("size", "sm | md | lg", "md", "Field size"),
        PropDoc::new("variant", "outline | filled | flushed", "outline", "Field style"),
        PropDoc::new("searchable", "bool", "false", "Type to filter the open list"),
        PropDoc::new("clearable", "bool", "false", "Show × to remove every value"),
        PropDoc::new("disabled", "bool", "false", "Ignore all input"),
        PropDoc::new("on_change", "handler", "-", "Fires with every selected id and option"),
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

    pub fn state(self, s: &State<MultiSelectState>) -> MultiSelect<HasState<'_, MultiSelectState>> {
        MultiSelect {
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

impl<S> MultiSelect<S> {
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

fn tag(label: &str, remove_id: Option<&str>) -> Element {
    let mut tag = Element::row()
        .gap(1)
        .padding(Edges::horizontal(1))
        .style(Style::new().background(Color::var("overlay")))
        .child(Element::text(label));
    if let Some(remove_id) = remove_id {
        tag = tag.child(Element::text("×").id(remove_id).clickable(true));
    }
    tag
}

impl<'a> MultiSelect<HasState<'a, MultiSelectState>> {
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let id = self.id.clone().unwrap_or_else(|| "multi-select".into());
        let root_id = format!("{}-root", id);
        let interactive = !self.look.disabled && !self.readonly;
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

        let (selected, query) =
            state.with(|s| (s.selected(), s.combobox.query().to_string()));
        log::debug!(
            "MultiSelect::build id={} open={} selected={}",
            id,
            open,
            selected.len()
        );

        let mut tags = Element::row().gap(1).wrap(Wrap::Wrap).flex_grow(1);
        for (i, option) in selected.iter().enumerate() {
            let remove_id = format!("{}-tag-{}", id, i);
            tags = tags.child(tag(&option.label, interactive.then_some(remove_id.as_str())));
            if interactive {
                registry.register(
                    &remove_id,
                    "on_activate",
                    remove_handler(weak.clone(), handlers, option.id.clone()),
                );
            }
        }
        if self.searchable && open {
            tags = tags.child(if query.is_empty() {
                field_text("Search...", true)
            } else {
                field_text(&query, false)
            });
        } else if selected.is_empty() {
            tags = tags.child(field_text(
                self.placeholder.as_deref().unwrap_or("Select..."),
                true,
            ));
        }

        let mut frame = self.look.frame(&id, !self.look.disabled).child(tags);
        if self.clearable && !selected.is_empty() && interactive {
            let clear_id = format!("{}-clear", id);
            frame = frame.child(Element::text("×").id(&clear_id).clickable(true));
            registry.register(&clear_id, "on_activate", clear_handler(weak.clone(), handlers));
        }
        frame = frame.child(Element::text(if open { "▴" } else { "▾" }));

        let mut root = Element::col().id(&root_id).child(frame);
        if self.look.full_width {
            root = root.width(Size::Fill);
        }
        if !interactive {
            return root;
        }

        registry.register(&id, "on_activate", {
            let weak = weak.clone();
            Arc::new(move |_hx| {
                if let Some(state) = weak.upgrade() {
                    state.update(|s| s.toggle_open());
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
                    Nav::Commit(_) => emit_change(&state, &on_change, hx),
                    Nav::Ignored => hx.ignore(),
                    Nav::Handled | Nav::Closed => {}
                }
            })
        });

        if open {
            let (list, rows) = state.with(|s| {
                let values = s.values();
                popup::option_list(
                    &id,
                    &s.combobox,
                    &|option_id| values.iter().any(|v| v == option_id),
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

fn close_handler(weak: WeakState<MultiSelectState>) -> Handler {
    Arc::new(move |_hx| {
        if let Some(state) = weak.upgrade() {
            state.update(|s| s.close());
        }
    })
}

fn emit_change(
    state: &State<MultiSelectState>,
    on_change: &Option<Handler>,
    hx: &HandlerContext,
) {
    if let Some(on_change) = on_change {
        hx.emit(on_change, state.with(|s| s.change_event()));
    }
}

fn remove_handler(
    weak: WeakState<MultiSelectState>,
    handlers: &WidgetHandlers,
    option_id: String,
) -> Handler {
    let on_change = handler(handlers, "on_change");
    Arc::new(move |hx| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        if state.update(|s| s.remove(&option_id)) {
            emit_change(&state, &on_change, hx);
        }
    })
}

fn clear_handler(weak: WeakState<MultiSelectState>, handlers: &WidgetHandlers) -> Handler {
    let on_change = handler(handlers, "on_change");
    Arc::new(move |hx| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        if state.update(|s| s.clear()) {
            emit_change(&state, &on_change, hx);
        }
    })
}

fn register_rows(
    registry: &HandlerRegistry,
    handlers: &WidgetHandlers,
    weak: &WeakState<MultiSelectState>,
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
                if state.update(|s| s.toggle(&option_id)) {
                    emit_change(&state, &on_change, hx);
                }
            }),
        );
    }
}
