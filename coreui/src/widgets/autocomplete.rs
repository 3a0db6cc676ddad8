//! Autocomplete widget - a text field that filters a list of suggestions.

use std::sync::Arc;

use coreui_dom::{Element, Key, Modifiers, Size};

use super::field::{FieldLook, FieldSize, FieldVariant, field_text};
use super::input::{Edit, InputState, text_with_cursor};
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

/// What a key did to an autocomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutocompleteKey {
    Ignored,
    Handled,
    /// The text changed. In free-form mode the text is also the new value.
    Input,
    /// An option was committed.
    Commit(SelectOption),
}

/// State for an autocomplete: the options, the typed text and the
/// committed value. With `free_solo` any typed text is a value.
#[derive(Debug, Default)]
pub struct AutocompleteState {
    combobox: Combobox,
    value: Binding<Option<String>>,
    input: InputState,
    free_solo: bool,
    outside: Option<Subscription>,
}

impl AutocompleteState {
    pub fn new(options: impl IntoIterator<Item = SelectOption>) -> Self {
        Self {
            combobox: Combobox::new(options),
            ..Default::default()
        }
    }

    /// Start uncontrolled with `id` selected, showing its label.
    pub fn with_value(mut self, id: impl Into<String>) -> Self {
        self.value = Binding::uncontrolled(Some(id.into()));
        self.show_value();
        self
    }

    pub fn with_binding(mut self, value: Binding<Option<String>>) -> Self {
        self.value = value;
        self.show_value();
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.combobox.set_filter(filter);
        self
    }

    /// Characters needed before the list opens and filters.
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.combobox = self.combobox.with_min_chars(min_chars);
        self
    }

    /// Accept typed text that matches no option as the value.
    pub fn free_solo(mut self) -> Self {
        self.free_solo = true;
        self
    }

    pub fn is_free_solo(&self) -> bool {
        self.free_solo
    }

    /// Replace the options, e.g. when a search finishes loading.
    pub fn set_options(&mut self, options: impl IntoIterator<Item = SelectOption>) {
        self.combobox.set_options(options);
    }

    pub fn value(&self) -> Option<String> {
        self.value.get()
    }

    pub fn selected(&self) -> Option<&SelectOption> {
        let id = self.value.get()?;
        self.combobox.option(&id)
    }

    pub fn text(&self) -> &str {
        self.input.text()
    }

    pub fn combobox(&self) -> &Combobox {
        &self.combobox
    }

    pub fn is_open(&self) -> bool {
        self.combobox.is_open()
    }

    /// Open the list if enough text was typed.
    pub fn open(&mut self) -> bool {
        self.combobox.open()
    }

    pub fn close(&mut self) {
        self.combobox.close();
    }

    /// Label of the committed option, if the value names one.
    fn committed_label(&self) -> Option<String> {
        let id = self.value.get()?;
        self.combobox.option(&id).map(|option| option.label.clone())
    }

    /// Show the starting value: its label, or the text itself in
    /// free-form mode.
    fn show_value(&mut self) {
        let text = match (self.committed_label(), self.value.get()) {
            (Some(label), _) => label,
            (None, Some(text)) if self.free_solo => text,
            _ => String::new(),
        };
        self.input.set_text(text);
    }

    /// Focus left: close the list and drop uncommitted typing. The text
    /// goes back to the selected option's label, or empties when no
    /// option is selected, free-form text included.
    pub fn revert(&mut self) {
        let text = self.committed_label().unwrap_or_default();
        if text != self.input.text() {
            log::debug!("AutocompleteState::revert text={:?}", text);
            self.input.set_text(text);
        }
        self.combobox.close();
        self.combobox.clear_query();
    }

    /// Replace the typed text as if the user typed it.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.input.set_text(text);
        self.text_changed();
    }

    fn text_changed(&mut self) {
        let text = self.input.text().to_string();
        self.combobox.set_query(text.clone());
        if self.free_solo {
            self.value.commit((!text.is_empty()).then_some(text));
        }
    }

    /// Commit the option `id` and show its label. Disabled and unknown
    /// ids are a no-op.
    pub fn choose(&mut self, id: &str) -> Option<SelectOption> {
        let option = self.combobox.option(id).filter(|o| !o.disabled)?.clone();
        log::debug!("AutocompleteState::choose id={}", option.id);
        self.value.commit(Some(option.id.clone()));
        self.input.set_text(option.label.clone());
        self.combobox.close();
        self.combobox.clear_query();
        Some(option)
    }

    /// Clear the value and the text. Returns false when both were empty.
    pub fn clear(&mut self) -> bool {
        if self.value.get().is_none() && self.input.is_empty() {
            return false;
        }
        self.value.commit(None);
        self.input.clear();
        self.combobox.clear_query();
        true
    }

    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> AutocompleteKey {
        let list_key = matches!(
            key,
            Key::Up | Key::Down | Key::Home | Key::End | Key::Enter | Key::Escape
        );

        if !self.is_open() && matches!(key, Key::Enter | Key::Down) {
            return if self.open() {
                AutocompleteKey::Handled
            } else {
                AutocompleteKey::Ignored
            };
        }

        if self.is_open() && list_key {
            return match self.combobox.handle_key(key) {
                Nav::Commit(option) => match self.choose(&option.id) {
                    Some(option) => AutocompleteKey::Commit(option),
                    None => AutocompleteKey::Handled,
                },
                Nav::Ignored => AutocompleteKey::Ignored,
                Nav::Handled | Nav::Closed => AutocompleteKey::Handled,
            };
        }

        match self.input.edit(key, modifiers) {
            Edit::Changed => {
                self.text_changed();
                AutocompleteKey::Input
            }
            Edit::Moved => AutocompleteKey::Handled,
            Edit::Ignored => AutocompleteKey::Ignored,
        }
    }
}

/// An autocomplete widget builder.
#[derive(Debug)]
pub struct Autocomplete<S = NeedsState> {
    state_marker: S,
    id: Option<String>,
    placeholder: Option<String>,
    no_options_message: Option<String>,
    loading_message: Option<String>,
    look: FieldLook,
    readonly: bool,
    loading: bool,
    clearable: bool,
}

impl Default for Autocomplete<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl Autocomplete<NeedsState> {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("options", "SelectOption[]", "[]", "Suggestions"),
        PropDoc::new("value", "Binding<Option<String>>", "uncontrolled", "Committed option id or text"),
        PropDoc::new("placeholder", "string", "\"Type to search...\"", "Shown while empty"),
        PropDoc::new("min_chars", "usize", "0", "Characters typed before suggesting"),
        PropDoc::new("free_solo", "bool", "false", "Accept any typed text"),
        PropDoc::new("filter", "Filter", "substring", "Which options match the text"),
        PropDoc::new("no_options_message", "string", "\"No options found\"", "Shown with no matches"),
        PropDoc::new("loading", "bool", "false", "Show the loading message instead of options"),
        PropDoc::new("loading_message", "string", "\"Loading...\"", "Shown while loading"),
        PropDoc::new("clearable", "bool", "false", "Show × to clear"),
        PropDoc::new("disabled", "bool", "false", "Ignore all input"),
        PropDoc::new("readonly", "bool", "false", "Show the value, block changes"),
        PropDoc::new("on_change", "handler", "-", "Fires with the value and option"),
        PropDoc::new("on_input_change", "handler", "-", "Fires with the typed text"),
    ];

    pub fn new() -> Self {
        Self {
            state_marker: NeedsState,
            id: None,
            placeholder: None,
            no_options_message: None,
            loading_message: None,
            look: FieldLook::default(),
            readonly: false,
            loading: false,
            clearable: false,
        }
    }

    pub fn state(
        self,
        s: &State<AutocompleteState>,
    ) -> Autocomplete<HasState<'_, AutocompleteState>> {
        Autocomplete {
            state_marker: HasState(s),
            id: self.id,
            placeholder: self.placeholder,
            no_options_message: self.no_options_message,
            loading_message: self.loading_message,
            look: self.look,
            readonly: self.readonly,
            loading: self.loading,
            clearable: self.clearable,
        }
    }
}

impl<S> Autocomplete<S> {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn no_options_message(mut self, message: impl Into<String>) -> Self {
        self.no_options_message = Some(message.into());
        self
    }

    pub fn loading_message(mut self, message: impl Into<String>) -> Self {
        self.loading_message = Some(message.into());
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn clearable(mut self) -> Self {
        self.clearable = true;
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

    pub fn full_width(mut self) -> Self {
        self.look.full_width = true;
        self
    }
}

fn select_event(value: Option<String>, option: Option<SelectOption>) -> EventData {
    EventData::Select {
        ids: value.into_iter().collect(),
        options: option.into_iter().collect(),
    }
}

/// Callbacks shared by the key, clear and option handlers.
#[derive(Clone)]
struct Callbacks {
    on_change: Option<Handler>,
    on_input_change: Option<Handler>,
}

impl Callbacks {
    fn new(handlers: &WidgetHandlers) -> Self {
        Self {
            on_change: handler(handlers, "on_change"),
            on_input_change: handler(handlers, "on_input_change"),
        }
    }

    fn input(&self, hx: &HandlerContext, state: &State<AutocompleteState>) {
        let (text, free_solo, value) =
            state.with(|s| (s.text().to_string(), s.free_solo, s.value()));
        if let Some(on_input_change) = &self.on_input_change {
            hx.emit(on_input_change, EventData::Change { text });
        }
        if free_solo && let Some(on_change) = &self.on_change {
            hx.emit(on_change, select_event(value, None));
        }
    }

    fn commit(&self, hx: &HandlerContext, option: SelectOption) {
        if let Some(on_change) = &self.on_change {
            hx.emit(on_change, select_event(Some(option.id.clone()), Some(option)));
        }
    }
}

impl<'a> Autocomplete<HasState<'a, AutocompleteState>> {
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let id = self.id.clone().unwrap_or_else(|| "autocomplete".into());
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
                    || revert_handler(weak.clone()),
                )
            });
        }

        let (text, cursor) = state.with(|s| (s.text().to_string(), s.input.cursor()));
        let focused = registry.context().is_focused(&id);
        log::debug!(
            "Autocomplete::build id={} open={} text={:?} focused={}",
            id,
            open,
            text,
            focused
        );

        let mut frame = self
            .look
            .frame(&id, !self.look.disabled)
            .captures_input(interactive);
        frame = if focused && interactive {
            frame.child(text_with_cursor(&text, cursor))
        } else if text.is_empty() {
            frame.child(field_text(
                self.placeholder.as_deref().unwrap_or("Type to search..."),
                true,
            ))
        } else {
            frame.child(field_text(&text, false))
        };

        let callbacks = Callbacks::new(handlers);
        if self.clearable && !text.is_empty() && interactive {
            let clear_id = format!("{}-clear", id);
            frame = frame.child(Element::text("×").id(&clear_id).clickable(true));
            let weak = weak.clone();
            let callbacks = callbacks.clone();
            registry.register(
                &clear_id,
                "on_activate",
                Arc::new(move |hx| {
                    let Some(state) = weak.upgrade() else {
                        return;
                    };
                    if state.update(|s| s.clear()) {
                        if let Some(on_input_change) = &callbacks.on_input_change {
                            hx.emit(on_input_change, EventData::Change { text: String::new() });
                        }
                        if let Some(on_change) = &callbacks.on_change {
                            hx.emit(on_change, select_event(None, None));
                        }
                    }
                }),
            );
        }

        let mut root = Element::col().id(&root_id).child(frame);
        if self.look.full_width {
            root = root.width(Size::Fill);
        }
        if !interactive {
            return root;
        }

        let open_handler: Handler = {
            let weak = weak.clone();
            Arc::new(move |_hx| {
                if let Some(state) = weak.upgrade() {
                    state.update(|s| s.open());
                }
            })
        };
        registry.register(&id, "on_activate", open_handler.clone());
        registry.register(&id, "on_focus", open_handler);
        registry.register(&id, "on_blur", revert_handler(weak.clone()));
        registry.register(&id, "on_key", {
            let weak = weak.clone();
            let callbacks = callbacks.clone();
            Arc::new(move |hx| {
                let Some((key, modifiers)) = hx.event().key() else {
                    return;
                };
                let Some(state) = weak.upgrade() else {
                    return;
                };
                match state.update(|s| s.handle_key(key, modifiers)) {
                    AutocompleteKey::Input => callbacks.input(hx, &state),
                    AutocompleteKey::Commit(option) => callbacks.commit(hx, option),
                    AutocompleteKey::Ignored => hx.ignore(),
                    AutocompleteKey::Handled => {}
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
                    self.no_options_message
                        .as_deref()
                        .unwrap_or("No options found"),
                    self.loading
                        .then(|| self.loading_message.as_deref().unwrap_or("Loading...")),
                    self.look.height(),
                )
            });
            register_rows(registry, &callbacks, &weak, rows);
            root = root.child(list);
        }

        root
    }
}

fn revert_handler(weak: WeakState<AutocompleteState>) -> Handler {
    Arc::new(move |_hx| {
        if let Some(state) = weak.upgrade() {
            state.update(|s| s.revert());
        }
    })
}

fn register_rows(
    registry: &HandlerRegistry,
    callbacks: &Callbacks,
    weak: &WeakState<AutocompleteState>,
    rows: Vec<OptionRow>,
) {
    for row in rows {
        let weak = weak.clone();
        let callbacks = callbacks.clone();
        let option_id = row.option.id;
        registry.register(
            &row.element_id,
            "on_activate",
            Arc::new(move |hx| {
                let Some(state) = weak.upgrade() else {
                    return;
                };
                if let Some(option) = state.update(|s| s.choose(&option_id)) {
                    callbacks.commit(hx, option);
                }
            }),
        );
    }
}
