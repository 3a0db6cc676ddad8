//! Checkbox widget - a toggleable checkbox with optional label, plus a
//! group of checkboxes over a set of values.

use std::sync::Arc;

use coreui_dom::{Color, Element, Style};

use super::field::helper_text;
use super::stack::StackDirection;
use super::{HasState, NeedsState, handler};
use crate::binding::Binding;
use crate::handler_context::{EventData, HandlerRegistry, WidgetHandlers};
use crate::selection::SelectOption;
use crate::state::State;
use crate::style::{ColorScheme, PropDoc, named_enum};
use crate::tokens::Spacing;

named_enum! {
    pub enum CheckboxSize ("checkbox size") {
        Sm = "sm",
        Md = "md",
        Lg = "lg",
    }
    default Md
}

impl CheckboxSize {
    /// Box glyphs: checked, unchecked, indeterminate.
    pub const fn glyphs(self) -> [&'static str; 3] {
        match self {
            CheckboxSize::Sm => ["▣", "□", "⊟"],
            CheckboxSize::Md => ["[✓]", "[ ]", "[-]"],
            CheckboxSize::Lg => ["[ ✓ ]", "[   ]", "[ - ]"],
        }
    }
}

/// State for a checkbox: its checked value.
#[derive(Debug, Clone, Default)]
pub struct CheckboxState {
    checked: Binding<bool>,
}

impl CheckboxState {
    pub fn new(checked: bool) -> Self {
        Self {
            checked: Binding::uncontrolled(checked),
        }
    }

    pub fn with_binding(checked: Binding<bool>) -> Self {
        Self { checked }
    }

    pub fn checked(&self) -> bool {
        self.checked.get()
    }

    /// Flip the value and return the new one.
    pub fn toggle(&mut self) -> bool {
        let checked = !self.checked.get();
        self.checked.commit(checked);
        checked
    }
}

/// Look shared by a single checkbox and the members of a group.
#[derive(Debug, Clone, Copy, Default)]
struct BoxLook {
    size: CheckboxSize,
    color: ColorScheme,
    disabled: bool,
    invalid: bool,
}

impl BoxLook {
    fn row(
        &self,
        id: &str,
        checked: bool,
        indeterminate: bool,
        label: Option<&str>,
        required: bool,
    ) -> Element {
        let [on, off, mixed] = self.size.glyphs();
        let (glyph, marked) = match (indeterminate, checked) {
            (true, _) => (mixed, true),
            (false, true) => (on, true),
            (false, false) => (off, false),
        };
        let box_color = if self.invalid {
            ColorScheme::Error.base()
        } else if marked {
            self.color.base()
        } else {
            Color::var("border")
        };

        let mut row = Element::row()
            .id(id)
            .gap(1)
            .focusable(!self.disabled)
            .clickable(!self.disabled)
            .disabled(self.disabled)
            .style_focused(Style::new().bold().foreground(self.color.base()))
            .style_disabled(Style::new().dim())
            .child(Element::text(glyph).style(Style::new().foreground(box_color)));
        if let Some(label) = label {
            row = row.child(Element::text(label));
        }
        if required {
            row = row.child(
                Element::text("*").style(Style::new().foreground(ColorScheme::Error.base())),
            );
        }
        row
    }
}

/// A checkbox widget builder.
///
/// Uses typestate pattern to enforce `state()` is called before `build()`.
///
/// # Example
///
/// ```ignore
/// Checkbox::new()
///     .state(&terms)
///     .id("terms")
///     .label("I accept the terms")
///     .required()
///     .build(&registry, &handlers);
/// ```
#[derive(Debug)]
pub struct Checkbox<S = NeedsState> {
    state_marker: S,
    id: Option<String>,
    label: Option<String>,
    helper: Option<String>,
    look: BoxLook,
    indeterminate: bool,
    readonly: bool,
    required: bool,
}

impl Default for Checkbox<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl Checkbox<NeedsState> {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("checked", "Binding<bool>", "uncontrolled false", "Checked value"),
        PropDoc::new("indeterminate", "bool", "false", "Draw the mixed mark"),
        PropDoc::new("label", "string", "-", "Text after the box"),
        PropDoc::new("helper_text", "string", "-", "Hint under the checkbox"),
        PropDoc::new("size", "sm | md | lg", "md", "Box glyphs"),
        PropDoc::new("color", "primary | secondary | success | warning | error | info", "primary", "Mark color"),
        PropDoc::new("disabled", "bool", "false", "Ignore all input"),
        PropDoc::new("readonly", "bool", "false", "Focusable, not toggleable"),
        PropDoc::new("invalid", "bool", "false", "Error styling"),
        PropDoc::new("required", "bool", "false", "Mark with *"),
        PropDoc::new("on_change", "handler", "-", "Fires with the new checked value"),
    ];

    pub fn new() -> Self {
        Self {
            state_marker: NeedsState,
            id: None,
            label: None,
            helper: None,
            look: BoxLook::default(),
            indeterminate: false,
            readonly: false,
            required: false,
        }
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(self, s: &State<CheckboxState>) -> Checkbox<HasState<'_, CheckboxState>> {
        Checkbox {
            state_marker: HasState(s),
            id: self.id,
            label: self.label,
            helper: self.helper,
            look: self.look,
            indeterminate: self.indeterminate,
            readonly: self.readonly,
            required: self.required,
        }
    }
}

impl<S> Checkbox<S> {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper = Some(text.into());
        self
    }

    pub fn size(mut self, size: CheckboxSize) -> Self {
        self.look.size = size;
        self
    }

    /// Mark color. Palette colors fall back to primary.
    pub fn color(mut self, color: ColorScheme) -> Self {
        self.look.color = if color.semantic().is_some() {
            color
        } else {
            log::warn!("checkbox color `{}` is not semantic, using primary", color);
            ColorScheme::Primary
        };
        self
    }

    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
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

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

impl<'a> Checkbox<HasState<'a, CheckboxState>> {
    /// Build the checkbox element.
    ///
    /// Registers the toggle handler unless disabled or read-only.
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let id = self.id.clone().unwrap_or_else(|| "checkbox".into());
        let checked = state.with(|s| s.checked());

        log::debug!(
            "Checkbox::build id={} checked={} indeterminate={}",
            id,
            checked,
            self.indeterminate
        );

        let row = self.look.row(
            &id,
            checked,
            self.indeterminate,
            self.label.as_deref(),
            self.required,
        );

        if !self.look.disabled && !self.readonly {
            let weak = state.downgrade();
            let on_change = handler(handlers, "on_change");
            registry.register(
                &id,
                "on_activate",
                Arc::new(move |hx| {
                    let Some(state) = weak.upgrade() else {
                        return;
                    };
                    let checked = state.update(|s| s.toggle());
                    log::debug!("Checkbox toggled checked={}", checked);
                    if let Some(on_change) = &on_change {
                        hx.emit(on_change, EventData::Toggle { checked });
                    }
                }),
            );
        }

        match &self.helper {
            Some(helper) => Element::col()
                .child(row)
                .child(helper_text(helper, self.look.invalid)),
            None => row,
        }
    }
}

/// State for a checkbox group: its options and the checked values.
#[derive(Debug, Clone, Default)]
pub struct CheckboxGroupState {
    options: Vec<SelectOption>,
    values: Binding<Vec<String>>,
}

impl CheckboxGroupState {
    pub fn new(options: impl IntoIterator<Item = SelectOption>) -> Self {
        Self {
            options: options.into_iter().collect(),
            values: Binding::default(),
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

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn values(&self) -> Vec<String> {
        self.values.get()
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.values.get().iter().any(|v| v == id)
    }

    /// Add or remove `id`, keeping values in option order. Disabled and
    /// unknown ids are a no-op. Returns the new values when they changed.
    pub fn toggle(&mut self, id: &str) -> Option<Vec<String>> {
        if self
            .options
            .iter()
            .find(|o| o.id == id)
            .is_none_or(|o| o.disabled)
        {
            return None;
        }
        let current = self.values.get();
        let adding = !current.iter().any(|v| v == id);
        let values: Vec<String> = self
            .options
            .iter()
            .filter(|o| {
                if o.id == id {
                    adding
                } else {
                    current.contains(&o.id)
                }
            })
            .map(|o| o.id.clone())
            .collect();
        log::debug!("CheckboxGroupState::toggle id={} values={:?}", id, values);
        self.values.commit(values.clone());
        Some(values)
    }
}

/// A group of checkboxes, one per option.
#[derive(Debug)]
pub struct CheckboxGroup<S = NeedsState> {
    state_marker: S,
    id: Option<String>,
    direction: StackDirection,
    spacing: Spacing,
    look: BoxLook,
    readonly: bool,
}

impl Default for CheckboxGroup<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckboxGroup<NeedsState> {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("options", "SelectOption[]", "[]", "One checkbox per option"),
        PropDoc::new("values", "Binding<Vec<String>>", "uncontrolled []", "Checked option ids"),
        PropDoc::new("direction", "row | column", "column", "Layout direction"),
        PropDoc::new("spacing", "Spacing", "sm", "Gap between checkboxes"),
        PropDoc::new("size", "sm | md | lg", "md", "Box glyphs"),
        PropDoc::new("color", "Color", "primary", "Mark color"),
        PropDoc::new("on_change", "handler", "-", "Fires with every checked id"),
    ];

    pub fn new() -> Self {
        Self {
            state_marker: NeedsState,
            id: None,
            direction: StackDirection::Column,
            spacing: Spacing::Sm,
            look: BoxLook::default(),
            readonly: false,
        }
    }

    pub fn state(
        self,
        s: &State<CheckboxGroupState>,
    ) -> CheckboxGroup<HasState<'_, CheckboxGroupState>> {
        CheckboxGroup {
            state_marker: HasState(s),
            id: self.id,
            direction: self.direction,
            spacing: self.spacing,
            look: self.look,
            readonly: self.readonly,
        }
    }
}

impl<S> CheckboxGroup<S> {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn direction(mut self, direction: StackDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn size(mut self, size: CheckboxSize) -> Self {
        self.look.size = size;
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
}

impl<'a> CheckboxGroup<HasState<'a, CheckboxGroupState>> {
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let id = self.id.clone().unwrap_or_else(|| "checkbox-group".into());
        let (options, values) = state.with(|s| (s.options.clone(), s.values()));

        log::debug!(
            "CheckboxGroup::build id={} options={} checked={}",
            id,
            options.len(),
            values.len()
        );

        let gap = if self.direction.direction().is_row() {
            self.spacing.cells()
        } else {
            self.spacing.rows()
        };
        let mut group = Element::box_()
            .id(&id)
            .direction(self.direction.direction())
            .gap(gap);

        let on_change = handler(handlers, "on_change");
        for (i, option) in options.iter().enumerate() {
            let opt_id = format!("{}-opt-{}", id, i);
            let look = BoxLook {
                disabled: self.look.disabled || option.disabled,
                ..self.look
            };
            group = group.child(look.row(
                &opt_id,
                values.contains(&option.id),
                false,
                Some(&option.label),
                false,
            ));

            if look.disabled || self.readonly {
                continue;
            }
            let weak = state.downgrade();
            let on_change = on_change.clone();
            let option_id = option.id.clone();
            registry.register(
                &opt_id,
                "on_activate",
                Arc::new(move |hx| {
                    let Some(state) = weak.upgrade() else {
                        return;
                    };
                    if let Some(values) = state.update(|s| s.toggle(&option_id))
                        && let Some(on_change) = &on_change
                    {
                        hx.emit(on_change, EventData::Values { values });
                    }
                }),
            );
        }

        group
    }
}
