//! Text input widget - a single-line editable field with validation.

use std::sync::Arc;

use coreui_dom::{Border, Color, Edges, Element, Key, Modifiers, Size, Style, TextWrap};

use super::field::{FieldLook, FieldSize, FieldVariant, field_text, helper_text};
use super::icon::glyph;
use super::{HasState, NeedsState, handler};
use crate::handler_context::{EventData, HandlerRegistry, WidgetHandlers};
use crate::state::State;
use crate::style::{ColorScheme, PropDoc};
use crate::validation::Validator;

/// What an editing key did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// The text changed.
    Changed,
    /// Only the cursor moved.
    Moved,
    /// Not an editing key.
    Ignored,
}

/// Text and cursor of an input. The cursor is a char index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    text: String,
    cursor: usize,
    error: Option<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `text`, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut state = Self::default();
        state.set_text(text);
        state
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Validation message from the last check.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Replace the text and move the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the char before the cursor.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    /// Delete the char under the cursor.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.len();
    }

    /// Apply an editing key. Ctrl and Alt chords are left alone.
    pub fn edit(&mut self, key: Key, modifiers: Modifiers) -> Edit {
        if modifiers.ctrl || modifiers.alt {
            return Edit::Ignored;
        }
        match key {
            Key::Char(c) => {
                self.insert(c);
                Edit::Changed
            }
            Key::Backspace if self.backspace() => Edit::Changed,
            Key::Delete if self.delete() => Edit::Changed,
            Key::Backspace | Key::Delete => Edit::Moved,
            Key::Left => {
                self.left();
                Edit::Moved
            }
            Key::Right => {
                self.right();
                Edit::Moved
            }
            Key::Home => {
                self.home();
                Edit::Moved
            }
            Key::End => {
                self.end();
                Edit::Moved
            }
            _ => Edit::Ignored,
        }
    }

    /// Run `validator` and store its message. Returns true when valid.
    pub fn validate(&mut self, validator: &Validator) -> bool {
        self.error = validator.validate(&self.text).err();
        self.error.is_none()
    }
}

/// Inline content at either end of an input, or a bordered addon segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAddon {
    Text(String),
    /// An icon name from the icon table.
    Icon(String),
}

impl InputAddon {
    pub fn text(text: impl Into<String>) -> Self {
        InputAddon::Text(text.into())
    }

    pub fn icon(name: impl Into<String>) -> Self {
        InputAddon::Icon(name.into())
    }

    fn content(&self) -> Element {
        match self {
            InputAddon::Text(text) => Element::text(text),
            InputAddon::Icon(name) => Element::text(glyph(name).unwrap_or('?')),
        }
    }

    fn element(&self) -> Element {
        self.content()
            .style(Style::new().foreground(Color::var("muted")))
    }

    /// The addon as a bordered segment beside the field.
    fn segment(&self, height: u16) -> Element {
        let mut segment = Element::row()
            .padding(Edges::horizontal(1))
            .style(Style::new().background(Color::var("subtle")))
            .child(self.content());
        if height > 1 {
            segment = segment.style(
                Style::new()
                    .background(Color::var("subtle"))
                    .border(Border::Rounded)
                    .border_color(Color::var("border")),
            );
        }
        segment
    }
}

/// A text input widget builder.
///
/// Uses typestate pattern to enforce `state()` is called before `build()`.
///
/// # Example
///
/// ```ignore
/// Input::new()
///     .state(&email)
///     .id("email")
///     .placeholder("you@example.com")
///     .validator(Validator::new().required("Required").email("Invalid email"))
///     .build(&registry, &handlers);
/// ```
#[derive(Debug)]
pub struct Input<S = NeedsState> {
    state_marker: S,
    id: Option<String>,
    placeholder: Option<String>,
    look: FieldLook,
    readonly: bool,
    required: bool,
    password: bool,
    left_element: Option<InputAddon>,
    right_element: Option<InputAddon>,
    left_addon: Option<InputAddon>,
    right_addon: Option<InputAddon>,
    helper: Option<String>,
    validator: Option<Validator>,
}

impl Default for Input<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl Input<NeedsState> {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("size", "sm | md | lg", "md", "Field size"),
        PropDoc::new("variant", "outline | filled | flushed", "outline", "Field style"),
        PropDoc::new("focus_color", "Color", "primary", "Border color while focused"),
        PropDoc::new("placeholder", "string", "\"\"", "Shown while empty"),
        PropDoc::new("password", "bool", "false", "Mask the text"),
        PropDoc::new("left_element / right_element", "text | icon", "none", "Inline content"),
        PropDoc::new("left_addon / right_addon", "text | icon", "none", "Bordered segment"),
        PropDoc::new("validator", "Validator", "none", "Rules checked on change and blur"),
        PropDoc::new("required", "bool", "false", "Blank value is an error"),
        PropDoc::new("invalid", "bool", "false", "Error styling"),
        PropDoc::new("disabled", "bool", "false", "Ignore all input"),
        PropDoc::new("readonly", "bool", "false", "Focusable, not editable"),
        PropDoc::new("on_change / on_submit", "handler", "-", "Text changed / Enter pressed"),
    ];

    pub fn new() -> Self {
        Self {
            state_marker: NeedsState,
            id: None,
            placeholder: None,
            look: FieldLook::default(),
            readonly: false,
            required: false,
            password: false,
            left_element: None,
            right_element: None,
            left_addon: None,
            right_addon: None,
            helper: None,
            validator: None,
        }
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(self, s: &State<InputState>) -> Input<HasState<'_, InputState>> {
        Input {
            state_marker: HasState(s),
            id: self.id,
            placeholder: self.placeholder,
            look: self.look,
            readonly: self.readonly,
            required: self.required,
            password: self.password,
            left_element: self.left_element,
            right_element: self.right_element,
            left_addon: self.left_addon,
            right_addon: self.right_addon,
            helper: self.helper,
            validator: self.validator,
        }
    }
}

impl<S> Input<S> {
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

    pub fn focus_color(mut self, color: ColorScheme) -> Self {
        self.look.color = color;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.look.invalid = invalid;
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

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn password(mut self) -> Self {
        self.password = true;
        self
    }

    pub fn full_width(mut self) -> Self {
        self.look.full_width = true;
        self
    }

    pub fn left_element(mut self, addon: InputAddon) -> Self {
        self.left_element = Some(addon);
        self
    }

    pub fn right_element(mut self, addon: InputAddon) -> Self {
        self.right_element = Some(addon);
        self
    }

    pub fn left_addon(mut self, addon: InputAddon) -> Self {
        self.left_addon = Some(addon);
        self
    }

    pub fn right_addon(mut self, addon: InputAddon) -> Self {
        self.right_addon = Some(addon);
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper = Some(text.into());
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }
}

/// The text with a block cursor drawn at `cursor`.
pub(crate) fn text_with_cursor(text: &str, cursor: usize) -> Element {
    let before: String = text.chars().take(cursor).collect();
    let under = text.chars().nth(cursor).unwrap_or(' ');
    let after: String = text.chars().skip(cursor + 1).collect();
    Element::row()
        .flex_grow(1)
        .child(Element::text(before))
        .child(
            Element::text(under.to_string())
                .style(Style::new().background(Color::var("fg")).foreground(Color::var("bg"))),
        )
        .child(Element::text(after).text_wrap(TextWrap::Truncate))
}

impl<'a> Input<HasState<'a, InputState>> {
    /// Build the input element.
    ///
    /// Editing goes through `on_key`, which updates the state and then
    /// fires `on_change`. Enter fires `on_submit`.
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let id = self.id.clone().unwrap_or_else(|| "input".into());
        let (text, cursor, error) =
            state.with(|s| (s.text.clone(), s.cursor, s.error.clone()));
        let focused = registry.context().is_focused(&id);
        let editable = !self.look.disabled && !self.readonly;

        log::debug!(
            "Input::build id={} len={} focused={} error={:?}",
            id,
            text.len(),
            focused,
            error
        );

        let shown = if self.password {
            "•".repeat(text.chars().count())
        } else {
            text.clone()
        };

        let mut look = self.look;
        look.invalid |= error.is_some();

        let mut frame = look
            .frame(&id, !self.look.disabled)
            .captures_input(editable);
        if let Some(addon) = &self.left_element {
            frame = frame.child(addon.element());
        }
        frame = if focused && editable {
            frame.child(text_with_cursor(&shown, cursor))
        } else if shown.is_empty() {
            frame.child(field_text(self.placeholder.as_deref().unwrap_or(""), true))
        } else {
            frame.child(field_text(&shown, false))
        };
        if let Some(addon) = &self.right_element {
            frame = frame.child(addon.element());
        }
        if self.look.full_width {
            frame = frame.flex_grow(1);
        }

        let mut field = Element::row();
        if let Some(addon) = &self.left_addon {
            field = field.child(addon.segment(look.height()));
        }
        field = field.child(frame);
        if let Some(addon) = &self.right_addon {
            field = field.child(addon.segment(look.height()));
        }

        let mut root = Element::col().child(field);
        if self.look.full_width {
            root = root.width(Size::Fill);
        }
        match (&error, &self.helper) {
            (Some(error), _) => root = root.child(helper_text(error, true)),
            (None, Some(helper)) => root = root.child(helper_text(helper, false)),
            (None, None) => {}
        }

        if !editable {
            return root;
        }

        let validator = match (&self.validator, self.required) {
            (Some(v), true) => Some(v.clone().required("This field is required")),
            (Some(v), false) => Some(v.clone()),
            (None, true) => Some(Validator::new().required("This field is required")),
            (None, false) => None,
        };

        registry.register(&id, "on_key", {
            let weak = state.downgrade();
            let on_change = handler(handlers, "on_change");
            let on_submit = handler(handlers, "on_submit");
            let validator = validator.clone();
            Arc::new(move |hx| {
                let Some((key, modifiers)) = hx.event().key() else {
                    return;
                };
                let Some(state) = weak.upgrade() else {
                    return;
                };
                if key == Key::Enter {
                    if let Some(validator) = &validator {
                        state.update(|s| s.validate(validator));
                    }
                    match &on_submit {
                        Some(on_submit) => hx.emit(on_submit, EventData::Submit),
                        None => hx.ignore(),
                    }
                    return;
                }
                let (edit, text) = state.update(|s| {
                    let edit = s.edit(key, modifiers);
                    // Re-check only once a message is showing
                    if edit == Edit::Changed
                        && s.error.is_some()
                        && let Some(validator) = &validator
                    {
                        s.validate(validator);
                    }
                    (edit, s.text.clone())
                });
                match edit {
                    Edit::Changed => {
                        if let Some(on_change) = &on_change {
                            hx.emit(on_change, EventData::Change { text });
                        }
                    }
                    Edit::Moved => {}
                    Edit::Ignored => hx.ignore(),
                }
            })
        });

        if let Some(validator) = validator {
            let weak = state.downgrade();
            let on_blur = handler(handlers, "on_blur");
            registry.register(
                &id,
                "on_blur",
                Arc::new(move |hx| {
                    if let Some(state) = weak.upgrade() {
                        state.update(|s| s.validate(&validator));
                    }
                    if let Some(on_blur) = &on_blur {
                        on_blur(hx);
                    }
                }),
            );
        } else if let Some(on_blur) = handler(handlers, "on_blur") {
            registry.register(&id, "on_blur", on_blur);
        }
        if let Some(on_focus) = handler(handlers, "on_focus") {
            registry.register(&id, "on_focus", on_focus);
        }

        root
    }
}
