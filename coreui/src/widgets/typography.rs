//! Text, Heading, Label and Code.

use coreui_dom::{Color, Edges, Element, Size, Style, TextAlign, TextStyle, TextWrap};

use super::field::FieldSize;
use crate::handler_context::{HandlerRegistry, WidgetHandlers};
use crate::style::{ColorScheme, PropDoc, named_enum};
use crate::tokens::{FontSize, FontWeight};

named_enum! {
    pub enum TextAlignment ("text align") {
        Left = "left",
        Center = "center",
        Right = "right",
    }
    default Left
}

impl TextAlignment {
    pub const fn align(self) -> TextAlign {
        match self {
            TextAlignment::Left => TextAlign::Left,
            TextAlignment::Center => TextAlign::Center,
            TextAlignment::Right => TextAlign::Right,
        }
    }
}

fn text_style(size: FontSize, weight: FontWeight) -> TextStyle {
    size.text_style().merge(weight.text_style())
}

/// Body text.
#[derive(Debug, Clone, Default)]
pub struct Text {
    content: String,
    size: FontSize,
    weight: FontWeight,
    color: Option<ColorScheme>,
    muted: bool,
    align: TextAlignment,
    truncate: bool,
}

impl Text {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("size", "xs | sm | base | lg | xl | 2xl | 3xl | 4xl | 5xl", "base", "Emphasis"),
        PropDoc::new("weight", "normal | medium | semibold | bold", "normal", "Boldness"),
        PropDoc::new("color", "Color", "default", "Text color"),
        PropDoc::new("align", "left | center | right", "left", "Horizontal alignment"),
        PropDoc::new("truncate", "bool", "false", "Cut overflow with an ellipsis"),
    ];

    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn size(mut self, size: FontSize) -> Self {
        self.size = size;
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn color(mut self, color: ColorScheme) -> Self {
        self.color = Some(color);
        self
    }

    pub fn muted(mut self) -> Self {
        self.muted = true;
        self
    }

    pub fn align(mut self, align: TextAlignment) -> Self {
        self.align = align;
        self
    }

    pub fn truncate(mut self) -> Self {
        self.truncate = true;
        self
    }

    pub fn build(self, _registry: &HandlerRegistry, _handlers: &WidgetHandlers) -> Element {
        log::debug!("Text::build size={} weight={}", self.size, self.weight);
        let mut style = Style::new().text_style(text_style(self.size, self.weight));
        if let Some(color) = self.color {
            style = style.foreground(color.base());
        } else if self.muted {
            style = style.foreground(Color::var("muted"));
        }

        let wrap = if self.truncate {
            TextWrap::Truncate
        } else {
            TextWrap::Wrap
        };
        let mut text = Element::text(self.content)
            .style(style)
            .text_wrap(wrap)
            .text_align(self.align.align());
        if self.truncate || self.align != TextAlignment::Left {
            text = text.width(Size::Fill);
        }

        if self.size.has_rule() {
            Element::col().child(text).child(
                Element::fill('━')
                    .width(Size::Fill)
                    .height(Size::Fixed(1))
                    .style(Style::new().foreground(Color::var("border"))),
            )
        } else {
            text
        }
    }
}

named_enum! {
    pub enum HeadingLevel ("heading level") {
        H1 = "h1",
        H2 = "h2",
        H3 = "h3",
        H4 = "h4",
        H5 = "h5",
        H6 = "h6",
    }
    default H2
}

impl HeadingLevel {
    pub const fn size(self) -> FontSize {
        match self {
            HeadingLevel::H1 => FontSize::Xxxxl,
            HeadingLevel::H2 => FontSize::Xxxl,
            HeadingLevel::H3 => FontSize::Xxl,
            HeadingLevel::H4 => FontSize::Xl,
            HeadingLevel::H5 => FontSize::Lg,
            HeadingLevel::H6 => FontSize::Base,
        }
    }

    /// Headings are bold; h1 and h2 are also underlined.
    pub const fn text_style(self) -> TextStyle {
        match self {
            HeadingLevel::H1 | HeadingLevel::H2 => TextStyle::new().bold().underline(),
            _ => TextStyle::new().bold(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Heading {
    content: String,
    level: HeadingLevel,
    color: Option<ColorScheme>,
    truncate: bool,
}

impl Heading {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("level", "h1 | h2 | h3 | h4 | h5 | h6", "h2", "Heading rank"),
        PropDoc::new("color", "Color", "default", "Text color"),
        PropDoc::new("truncate", "bool", "false", "Cut overflow with an ellipsis"),
    ];

    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn level(mut self, level: HeadingLevel) -> Self {
        self.level = level;
        self
    }

    pub fn color(mut self, color: ColorScheme) -> Self {
        self.color = Some(color);
        self
    }

    pub fn truncate(mut self) -> Self {
        self.truncate = true;
        self
    }

    pub fn build(self, _registry: &HandlerRegistry, _handlers: &WidgetHandlers) -> Element {
        log::debug!("Heading::build level={}", self.level);
        let size = self.level.size();
        let mut style = Style::new().text_style(self.level.text_style());
        if let Some(color) = self.color {
            style = style.foreground(color.base());
        }

        let mut text = Element::text(self.content).style(style);
        if self.truncate {
            text = text.text_wrap(TextWrap::Truncate).width(Size::Fill);
        }

        if size.has_rule() {
            Element::col().child(text).child(
                Element::fill('━')
                    .width(Size::Fill)
                    .height(Size::Fixed(1))
                    .style(Style::new().foreground(Color::var("border"))),
            )
        } else {
            text
        }
    }
}

/// Form label with an optional required marker.
#[derive(Debug, Clone, Default)]
pub struct Label {
    content: String,
    size: FieldSize,
    required: bool,
    disabled: bool,
}

impl Label {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("size", "sm | md | lg", "md", "Emphasis"),
        PropDoc::new("required", "bool", "false", "Append a red *"),
        PropDoc::new("disabled", "bool", "false", "Dim the label"),
    ];

    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn size(mut self, size: FieldSize) -> Self {
        self.size = size;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn build(self, _registry: &HandlerRegistry, _handlers: &WidgetHandlers) -> Element {
        log::debug!("Label::build required={}", self.required);
        let mut style = match self.size {
            FieldSize::Sm => Style::new(),
            FieldSize::Md | FieldSize::Lg => Style::new().bold(),
        };
        if self.disabled {
            style = style.dim();
        }

        let mut row = Element::row().style(style).child(Element::text(self.content));
        if self.required {
            row = row.child(
                Element::text(" *")
                    .style(Style::new().foreground(ColorScheme::Error.base())),
            );
        }
        row
    }
}

/// Inline code on a muted background.
#[derive(Debug, Clone, Default)]
pub struct Code {
    content: String,
}

impl Code {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn build(self, _registry: &HandlerRegistry, _handlers: &WidgetHandlers) -> Element {
        log::debug!("Code::build len={}", self.content.len());
        Element::text(self.content)
            .padding(Edges::horizontal(1))
            .style(
                Style::new()
                    .background(Color::var("subtle"))
                    .foreground(ColorScheme::Pink.shade(crate::tokens::Shade::S300)),
            )
    }
}
