//! Named glyph table.

use coreui_dom::{Element, Style};

use crate::handler_context::{HandlerRegistry, WidgetHandlers};
use crate::style::{ColorScheme, PropDoc, named_enum};

/// Every known icon name and its glyph.
pub const ICONS: &[(&str, char)] = &[
    ("check", '✓'),
    ("x", '✕'),
    ("chevron-up", '⌃'),
    ("chevron-down", '⌄'),
    ("chevron-left", '‹'),
    ("chevron-right", '›'),
    ("arrow-up", '↑'),
    ("arrow-down", '↓'),
    ("arrow-left", '←'),
    ("arrow-right", '→'),
    ("search", '⌕'),
    ("plus", '+'),
    ("minus", '−'),
    ("info", 'ℹ'),
    ("warning", '⚠'),
    ("error", '⊗'),
    ("success", '✔'),
    ("user", '☺'),
    ("users", '⚇'),
    ("calendar", '▦'),
    ("clock", '◷'),
    ("copy", '⧉'),
    ("menu", '☰'),
    ("more", '⋯'),
    ("star", '★'),
    ("heart", '♥'),
    ("settings", '⚙'),
    ("home", '⌂'),
    ("mail", '✉'),
    ("bell", '♪'),
    ("lock", '⚿'),
    ("trash", '⌫'),
    ("edit", '✎'),
    ("eye", '◉'),
    ("download", '⤓'),
    ("upload", '⤒'),
    ("external-link", '↗'),
    ("filter", '⧩'),
    ("refresh", '↻'),
    ("logout", '⏻'),
];

/// Look up an icon glyph by name.
pub fn glyph(name: &str) -> Option<char> {
    ICONS.iter().find(|(n, _)| *n == name).map(|(_, g)| *g)
}

/// Like [`glyph`], but an unknown name warns and draws `?`.
pub(crate) fn glyph_or_unknown(name: &str) -> char {
    glyph(name).unwrap_or_else(|| {
        log::warn!("unknown icon `{}`, rendering `?`", name);
        '?'
    })
}

named_enum! {
    pub enum IconSize ("icon size") {
        Xs = "xs",
        Sm = "sm",
        Md = "md",
        Lg = "lg",
        Xl = "xl",
    }
    default Md
}

impl IconSize {
    pub fn style(self) -> Style {
        match self {
            IconSize::Xs | IconSize::Sm => Style::new().dim(),
            IconSize::Md => Style::new(),
            IconSize::Lg | IconSize::Xl => Style::new().bold(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Icon {
    name: String,
    size: IconSize,
    color: Option<ColorScheme>,
    label: Option<String>,
}

impl Icon {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("name", "icon name", "-", "Which glyph to draw"),
        PropDoc::new("size", "xs | sm | md | lg | xl", "md", "Glyph emphasis"),
        PropDoc::new("color", "Color", "inherit", "Glyph color"),
        PropDoc::new("label", "string", "-", "Text shown after the glyph"),
    ];

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: ColorScheme) -> Self {
        self.color = Some(color);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn build(self, _registry: &HandlerRegistry, _handlers: &WidgetHandlers) -> Element {
        log::debug!("Icon::build name={} size={}", self.name, self.size);
        let glyph = glyph_or_unknown(&self.name);

        let mut style = self.size.style();
        if let Some(color) = self.color {
            style = style.foreground(color.base());
        }

        let text = match &self.label {
            Some(label) => format!("{} {}", glyph, label),
            None => glyph.to_string(),
        };
        Element::text(text).style(style)
    }
}
