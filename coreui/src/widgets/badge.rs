use coreui_dom::{Edges, Element, Style};

use crate::handler_context::{HandlerRegistry, WidgetHandlers};
use crate::style::{ColorScheme, PropDoc, named_enum};
use crate::tokens::Radius;

named_enum! {
    pub enum BadgeVariant ("badge variant") {
        Solid = "solid",
        Soft = "soft",
        Outline = "outline",
    }
    default Soft
}

impl BadgeVariant {
    pub fn style(self, color: ColorScheme, radius: Radius) -> Style {
        match self {
            BadgeVariant::Solid => Style::new()
                .background(color.base())
                .foreground(color.on_solid()),
            BadgeVariant::Soft => Style::new()
                .background(color.tint())
                .foreground(color.on_tint()),
            BadgeVariant::Outline => Style::new()
                .border(radius.border())
                .border_color(color.base())
                .foreground(color.base()),
        }
    }
}

named_enum! {
    pub enum BadgeSize ("badge size") {
        Sm = "sm",
        Md = "md",
        Lg = "lg",
    }
    default Md
}

impl BadgeSize {
    pub fn style(self) -> Style {
        match self {
            BadgeSize::Sm => Style::new().dim(),
            BadgeSize::Md => Style::new(),
            BadgeSize::Lg => Style::new().bold(),
        }
    }

    pub const fn padding(self) -> Edges {
        match self {
            BadgeSize::Sm => Edges::horizontal(0),
            BadgeSize::Md => Edges::horizontal(1),
            BadgeSize::Lg => Edges::horizontal(2),
        }
    }
}

/// A short status label.
#[derive(Debug, Clone)]
pub struct Badge {
    label: String,
    variant: BadgeVariant,
    color: ColorScheme,
    size: BadgeSize,
    radius: Radius,
    dot: bool,
}

impl Badge {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("variant", "solid | soft | outline", "soft", "Visual style"),
        PropDoc::new("color", "Color", "gray", "Any of the 28 colors"),
        PropDoc::new("size", "sm | md | lg", "md", "Padding and weight"),
        PropDoc::new("radius", "none | sm | md | lg | full", "md", "Outline corners"),
        PropDoc::new("dot", "bool", "false", "Lead with a colored dot"),
    ];

    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: BadgeVariant::default(),
            color: ColorScheme::Gray,
            size: BadgeSize::default(),
            radius: Radius::default(),
            dot: false,
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn color(mut self, color: ColorScheme) -> Self {
        self.color = color;
        self
    }

    pub fn size(mut self, size: BadgeSize) -> Self {
        self.size = size;
        self
    }

    pub fn radius(mut self, radius: Radius) -> Self {
        self.radius = radius;
        self
    }

    pub fn dot(mut self) -> Self {
        self.dot = true;
        self
    }

    pub fn build(self, _registry: &HandlerRegistry, _handlers: &WidgetHandlers) -> Element {
        log::debug!(
            "Badge::build label={} variant={} color={}",
            self.label,
            self.variant,
            self.color
        );
        let style = self
            .size
            .style()
            .merge(&self.variant.style(self.color, self.radius));

        let mut badge = Element::row()
            .gap(1)
            .padding(self.size.padding())
            .style(style);
        if self.dot {
            let dot_color = match self.variant {
                BadgeVariant::Solid => self.color.on_solid(),
                _ => self.color.base(),
            };
            badge = badge.child(Element::text("●").style(Style::new().foreground(dot_color)));
        }
        badge.child(Element::text(self.label))
    }
}
