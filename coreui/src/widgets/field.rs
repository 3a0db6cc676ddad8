//! Shared look of text-like fields: Input, Select, MultiSelect,
//! Autocomplete and DatePicker.

use coreui_dom::{Border, Color, Edges, Element, Size, Style};

use crate::style::{ColorScheme, named_enum};

named_enum! {
    pub enum FieldSize ("size") {
        Sm = "sm",
        Md = "md",
        Lg = "lg",
    }
    default Md
}

impl FieldSize {
    pub const fn padding(self) -> Edges {
        match self {
            FieldSize::Sm => Edges::horizontal(1),
            FieldSize::Md => Edges::horizontal(1),
            FieldSize::Lg => Edges::horizontal(2),
        }
    }

    pub const fn min_width(self) -> u16 {
        match self {
            FieldSize::Sm => 16,
            FieldSize::Md => 24,
            FieldSize::Lg => 32,
        }
    }
}

named_enum! {
    pub enum FieldVariant ("variant") {
        Outline = "outline",
        Filled = "filled",
        Flushed = "flushed",
    }
    default Outline
}

impl FieldVariant {
    pub fn style(self, invalid: bool) -> Style {
        let accent = ColorScheme::Error.base();
        match self {
            FieldVariant::Outline => Style::new().border(Border::Rounded).border_color(if invalid {
                accent
            } else {
                Color::var("border")
            }),
            FieldVariant::Filled => Style::new().background(if invalid {
                ColorScheme::Error.tint()
            } else {
                Color::var("subtle")
            }),
            FieldVariant::Flushed => {
                let style = Style::new().underline();
                if invalid {
                    style.foreground(accent)
                } else {
                    style
                }
            }
        }
    }

    pub fn focused_style(self, color: ColorScheme) -> Style {
        match self {
            FieldVariant::Outline => Style::new()
                .border(Border::Rounded)
                .border_color(color.base()),
            FieldVariant::Filled => Style::new().background(Color::var("overlay")),
            FieldVariant::Flushed => Style::new().underline().foreground(color.base()),
        }
    }

    /// Rows taken by the field, border included.
    pub const fn height(self) -> u16 {
        match self {
            FieldVariant::Outline => 3,
            FieldVariant::Filled | FieldVariant::Flushed => 1,
        }
    }
}

/// The look shared by every field.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct FieldLook {
    pub size: FieldSize,
    pub variant: FieldVariant,
    pub color: ColorScheme,
    pub invalid: bool,
    pub disabled: bool,
    pub full_width: bool,
}

impl FieldLook {
    /// The bordered row a field draws its content into.
    pub(crate) fn frame(&self, id: &str, interactive: bool) -> Element {
        let mut frame = Element::row()
            .id(id)
            .gap(1)
            .padding(self.size.padding())
            .min_width(self.size.min_width())
            .style(self.variant.style(self.invalid))
            .style_focused(self.variant.focused_style(if self.invalid {
                ColorScheme::Error
            } else {
                self.color
            }))
            .style_disabled(Style::new().dim())
            .focusable(interactive)
            .clickable(interactive)
            .disabled(self.disabled);
        if self.full_width {
            frame = frame.width(Size::Fill);
        }
        frame
    }

    pub(crate) fn height(&self) -> u16 {
        self.variant.height()
    }
}

/// Placeholder or value text inside a field. Grows to push trailing
/// adornments to the right edge.
pub(crate) fn field_text(text: &str, placeholder: bool) -> Element {
    let style = if placeholder {
        Style::new().foreground(Color::var("muted"))
    } else {
        Style::new()
    };
    Element::text(text)
        .style(style)
        .flex_grow(1)
        .text_wrap(coreui_dom::TextWrap::Truncate)
}

pub(crate) fn helper_text(text: &str, error: bool) -> Element {
    let color = if error {
        ColorScheme::Error.base()
    } else {
        Color::var("muted")
    };
    Element::text(text).style(Style::new().foreground(color))
}
