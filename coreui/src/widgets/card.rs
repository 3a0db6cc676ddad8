//! Card with header, body and footer sections.

use coreui_dom::{Color, Edges, Element, Justify, Size, Style};

use super::handler;
use crate::handler_context::{HandlerRegistry, WidgetHandlers};
use crate::style::{ColorScheme, PropDoc, named_enum};
use crate::tokens::Radius;

named_enum! {
    pub enum CardVariant ("card variant") {
        Elevated = "elevated",
        Outline = "outline",
        Filled = "filled",
        Ghost = "ghost",
    }
    default Elevated
}

impl CardVariant {
    pub fn style(self, radius: Radius) -> Style {
        match self {
            // No shadows in a terminal: a heavier border on the raised surface.
            CardVariant::Elevated => Style::new()
                .background(Color::var("surface"))
                .border(radius.border())
                .border_color(Color::var("muted")),
            CardVariant::Outline => Style::new()
                .border(radius.border())
                .border_color(Color::var("border")),
            CardVariant::Filled => Style::new().background(Color::var("subtle")),
            CardVariant::Ghost => Style::new().background(Color::var("bg")),
        }
    }
}

named_enum! {
    pub enum CardPadding ("card padding") {
        None = "none",
        Sm = "sm",
        Md = "md",
        Lg = "lg",
    }
    default Md
}

impl CardPadding {
    pub const fn edges(self) -> Edges {
        match self {
            CardPadding::None => Edges::all(0),
            CardPadding::Sm => Edges::horizontal(1),
            CardPadding::Md => Edges::symmetric(1, 2),
            CardPadding::Lg => Edges::symmetric(1, 3),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Card {
    id: Option<String>,
    variant: CardVariant,
    padding: CardPadding,
    radius: Radius,
    hoverable: bool,
    pressable: bool,
    width: Size,
    children: Vec<Element>,
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl Card {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("variant", "elevated | outline | filled | ghost", "elevated", "Surface style"),
        PropDoc::new("padding", "none | sm | md | lg", "md", "Inner spacing"),
        PropDoc::new("radius", "none | sm | md | lg | full", "lg", "Border corners"),
        PropDoc::new("hoverable", "bool", "false", "Highlight the border under focus"),
        PropDoc::new("pressable", "bool", "false", "Focusable; Enter, Space or click activates"),
        PropDoc::new("on_activate", "handler", "-", "Fires when a pressable card is pressed"),
    ];

    pub fn new() -> Self {
        Self {
            id: None,
            variant: CardVariant::default(),
            padding: CardPadding::default(),
            radius: Radius::Lg,
            hoverable: false,
            pressable: false,
            width: Size::Auto,
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn padding(mut self, padding: CardPadding) -> Self {
        self.padding = padding;
        self
    }

    pub fn radius(mut self, radius: Radius) -> Self {
        self.radius = radius;
        self
    }

    pub fn hoverable(mut self) -> Self {
        self.hoverable = true;
        self
    }

    pub fn pressable(mut self) -> Self {
        self.pressable = true;
        self
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
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

    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let mut card = Element::col();
        if let Some(id) = self.id {
            card = card.id(id);
        }
        log::debug!(
            "Card::build id={} variant={} pressable={}",
            card.id,
            self.variant,
            self.pressable
        );

        let style = self.variant.style(self.radius);
        let mut focused = Style::new();
        if self.hoverable || self.pressable {
            focused = focused.border_color(ColorScheme::Primary.base());
            if style.border == coreui_dom::Border::None {
                focused = focused.background(Color::var("overlay"));
            }
        }

        card = card
            .gap(1)
            .padding(self.padding.edges())
            .width(self.width)
            .focusable(self.hoverable || self.pressable)
            .clickable(self.pressable)
            .style(style)
            .style_focused(focused)
            .children(self.children);

        if self.pressable
            && let Some(on_activate) = handler(handlers, "on_activate")
        {
            registry.register(&card.id, "on_activate", on_activate);
        }
        card
    }
}

/// Title row of a card, with an optional subtitle and trailing action.
#[derive(Debug, Clone, Default)]
pub struct CardHeader {
    title: String,
    subtitle: Option<String>,
    action: Option<Element>,
}

impl CardHeader {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn action(mut self, action: Element) -> Self {
        self.action = Some(action);
        self
    }

    pub fn build(self, _registry: &HandlerRegistry, _handlers: &WidgetHandlers) -> Element {
        log::debug!("CardHeader::build title={}", self.title);
        let mut text = Element::col().flex_grow(1).child(
            Element::text(self.title).style(Style::new().bold()),
        );
        if let Some(subtitle) = self.subtitle {
            text = text.child(
                Element::text(subtitle).style(Style::new().foreground(Color::var("muted"))),
            );
        }
        let mut header = Element::row().width(Size::Fill).gap(1).child(text);
        if let Some(action) = self.action {
            header = header.child(action);
        }
        header
    }
}

#[derive(Debug, Clone, Default)]
pub struct CardBody {
    children: Vec<Element>,
}

impl CardBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn build(self, _registry: &HandlerRegistry, _handlers: &WidgetHandlers) -> Element {
        log::debug!("CardBody::build children={}", self.children.len());
        Element::col().width(Size::Fill).children(self.children)
    }
}

/// Action row at the bottom of a card, right-aligned.
#[derive(Debug, Clone, Default)]
pub struct CardFooter {
    children: Vec<Element>,
}

impl CardFooter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn build(self, _registry: &HandlerRegistry, _handlers: &WidgetHandlers) -> Element {
        log::debug!("CardFooter::build children={}", self.children.len());
        Element::row()
            .width(Size::Fill)
            .gap(1)
            .justify(Justify::End)
            .children(self.children)
    }
}
