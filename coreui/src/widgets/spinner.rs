use std::time::Duration;

use coreui_dom::{Color, Element, Style};

use crate::handler_context::{HandlerRegistry, WidgetHandlers};
use crate::style::{ColorScheme, PropDoc, named_enum};

const FRAME_INTERVAL: Duration = Duration::from_millis(80);

named_enum! {
    pub enum SpinnerSize ("spinner size") {
        Xs = "xs",
        Sm = "sm",
        Md = "md",
        Lg = "lg",
        Xl = "xl",
    }
    default Md
}

impl SpinnerSize {
    /// Animation frames, one glyph each.
    pub const fn frames(self) -> &'static [&'static str] {
        match self {
            SpinnerSize::Xs => &["⠁", "⠂", "⠄", "⡀", "⢀", "⠠", "⠐", "⠈"],
            SpinnerSize::Sm => &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            SpinnerSize::Md => &["◐", "◓", "◑", "◒"],
            SpinnerSize::Lg => &["◜", "◝", "◞", "◟"],
            SpinnerSize::Xl => &["▁", "▃", "▅", "▇", "█", "▇", "▅", "▃"],
        }
    }
}

named_enum! {
    pub enum SpinnerColor ("spinner color") {
        Current = "current",
        Primary = "primary",
        Secondary = "secondary",
        White = "white",
    }
    default Current
}

impl SpinnerColor {
    pub fn style(self) -> Style {
        match self {
            SpinnerColor::Current => Style::new().bold(),
            SpinnerColor::Primary => Style::new().foreground(ColorScheme::Primary.base()),
            SpinnerColor::Secondary => Style::new().foreground(ColorScheme::Secondary.base()),
            SpinnerColor::White => Style::new().foreground(Color::var("white")),
        }
    }
}

/// Just the animated glyph, for embedding in other widgets.
pub(crate) fn frames(size: SpinnerSize, style: Style) -> Element {
    Element::frames(
        size.frames()
            .iter()
            .map(|glyph| Element::text(*glyph).style(style.clone()))
            .collect(),
        FRAME_INTERVAL,
    )
}

#[derive(Debug, Clone)]
pub struct Spinner {
    size: SpinnerSize,
    color: SpinnerColor,
    label: Option<String>,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spinner {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("size", "xs | sm | md | lg | xl", "md", "Glyph set"),
        PropDoc::new("color", "current | primary | secondary | white", "current", "Glyph color"),
        PropDoc::new("label", "string", "\"Loading...\"", "Text beside the spinner"),
    ];

    pub fn new() -> Self {
        Self {
            size: SpinnerSize::default(),
            color: SpinnerColor::default(),
            label: Some("Loading...".into()),
        }
    }

    pub fn size(mut self, size: SpinnerSize) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: SpinnerColor) -> Self {
        self.color = color;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Draw the glyph alone.
    pub fn hide_label(mut self) -> Self {
        self.label = None;
        self
    }

    pub fn build(self, _registry: &HandlerRegistry, _handlers: &WidgetHandlers) -> Element {
        log::debug!("Spinner::build size={} color={}", self.size, self.color);
        let spinner = frames(self.size, self.color.style());
        match self.label {
            Some(label) => Element::row()
                .gap(1)
                .child(spinner)
                .child(Element::text(label).style(Style::new().foreground(Color::var("muted")))),
            None => spinner,
        }
    }
}
