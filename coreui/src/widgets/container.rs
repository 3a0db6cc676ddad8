//! Box: padding, margin, border and background around children.

use coreui_dom::{Align, Color, Edges, Element, Justify, Size, Style};

use crate::handler_context::{HandlerRegistry, WidgetHandlers};
use crate::style::PropDoc;
use crate::tokens::{Radius, Spacing};

fn spacing_edges(spacing: Spacing) -> Edges {
    Edges::symmetric(spacing.rows(), spacing.cells())
}

/// The `Box` layout primitive. Named `Container` so it does not shadow
/// `std::boxed::Box` in glob imports.
#[derive(Debug, Clone, Default)]
pub struct Container {
    id: Option<String>,
    padding: Spacing,
    margin: Spacing,
    gap: Spacing,
    border: bool,
    radius: Radius,
    background: Option<Color>,
    width: Size,
    height: Size,
    center: bool,
    row: bool,
    children: Vec<Element>,
}

impl Container {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("padding", "Spacing", "none", "Inner spacing"),
        PropDoc::new("margin", "Spacing", "none", "Outer spacing"),
        PropDoc::new("gap", "Spacing", "none", "Space between children"),
        PropDoc::new("border", "bool", "false", "Draw a border"),
        PropDoc::new("radius", "none | sm | md | lg | full", "md", "Border corners"),
        PropDoc::new("background", "Color", "-", "Fill color"),
        PropDoc::new("width / height", "Size", "auto", "Box dimensions"),
        PropDoc::new("center", "bool", "false", "Center children on both axes"),
    ];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn padding(mut self, padding: Spacing) -> Self {
        self.padding = padding;
        self
    }

    pub fn margin(mut self, margin: Spacing) -> Self {
        self.margin = margin;
        self
    }

    pub fn gap(mut self, gap: Spacing) -> Self {
        self.gap = gap;
        self
    }

    pub fn border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    pub fn radius(mut self, radius: Radius) -> Self {
        self.radius = radius;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn center(mut self) -> Self {
        self.center = true;
        self
    }

    /// Lay children out left to right instead of top to bottom.
    pub fn row(mut self) -> Self {
        self.row = true;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn build(self, _registry: &HandlerRegistry, _handlers: &WidgetHandlers) -> Element {
        let mut element = if self.row { Element::row() } else { Element::col() };
        if let Some(id) = &self.id {
            element = element.id(id);
        }
        log::debug!(
            "Container::build id={} children={}",
            element.id,
            self.children.len()
        );

        let gap = if self.row {
            self.gap.cells()
        } else {
            self.gap.rows()
        };

        let mut style = Style::new();
        if self.border {
            style = style
                .border(self.radius.border())
                .border_color(Color::var("border"));
        }
        if let Some(bg) = self.background {
            style = style.background(bg);
        }

        element = element
            .padding(spacing_edges(self.padding))
            .margin(spacing_edges(self.margin))
            .gap(gap)
            .width(self.width)
            .height(self.height)
            .style(style)
            .children(self.children);

        if self.center {
            element = element.justify(Justify::Center).align(Align::Center);
        }
        element
    }
}
