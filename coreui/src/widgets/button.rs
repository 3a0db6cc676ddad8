//! Button.

use std::sync::Arc;

use coreui_dom::{Edges, Element, Justify, Size, Style};

use super::icon::glyph_or_unknown;
use super::spinner::{self, SpinnerSize};
use super::handler;
use crate::handler_context::{HandlerRegistry, WidgetHandlers};
use crate::style::{ColorScheme, PropDoc, named_enum};
use crate::tokens::{Radius, Shade};

named_enum! {
    pub enum ButtonVariant ("button variant") {
        Solid = "solid",
        Outline = "outline",
        Ghost = "ghost",
        Soft = "soft",
        Link = "link",
    }
    default Solid
}

impl ButtonVariant {
    pub fn style(self, color: ColorScheme, radius: Radius) -> Style {
        match self {
            ButtonVariant::Solid => Style::new()
                .background(color.base())
                .foreground(color.on_solid())
                .bold(),
            ButtonVariant::Outline => Style::new()
                .border(radius.border())
                .border_color(color.base())
                .foreground(color.base()),
            ButtonVariant::Ghost => Style::new().foreground(color.base()),
            ButtonVariant::Soft => Style::new()
                .background(color.tint())
                .foreground(color.on_tint()),
            ButtonVariant::Link => Style::new().foreground(color.base()).underline(),
        }
    }

    pub fn focused_style(self, color: ColorScheme) -> Style {
        match self {
            ButtonVariant::Solid => Style::new().background(color.shade(Shade::S700)),
            ButtonVariant::Outline | ButtonVariant::Ghost => {
                Style::new().background(color.tint())
            }
            ButtonVariant::Soft => Style::new().background(color.shade(Shade::S200)),
            ButtonVariant::Link => Style::new().bold(),
        }
    }
}

named_enum! {
    pub enum ButtonSize ("button size") {
        Xs = "xs",
        Sm = "sm",
        Md = "md",
        Lg = "lg",
        Xl = "xl",
    }
    default Md
}

impl ButtonSize {
    pub const fn padding(self) -> Edges {
        match self {
            ButtonSize::Xs => Edges::horizontal(1),
            ButtonSize::Sm => Edges::horizontal(1),
            ButtonSize::Md => Edges::horizontal(2),
            ButtonSize::Lg => Edges::horizontal(3),
            ButtonSize::Xl => Edges::symmetric(1, 4),
        }
    }

    const fn spinner(self) -> SpinnerSize {
        match self {
            ButtonSize::Xs => SpinnerSize::Xs,
            ButtonSize::Sm => SpinnerSize::Sm,
            ButtonSize::Md => SpinnerSize::Md,
            ButtonSize::Lg => SpinnerSize::Lg,
            ButtonSize::Xl => SpinnerSize::Xl,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Button {
    id: Option<String>,
    label: String,
    variant: ButtonVariant,
    color: ColorScheme,
    size: ButtonSize,
    radius: Radius,
    full_width: bool,
    loading: bool,
    loading_text: Option<String>,
    left_icon: Option<String>,
    right_icon: Option<String>,
    icon_only: bool,
    disabled: bool,
}

impl Button {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("variant", "solid | outline | ghost | soft | link", "solid", "Visual style"),
        PropDoc::new("color", "Color", "primary", "Semantic or palette color"),
        PropDoc::new("size", "xs | sm | md | lg | xl", "md", "Padding"),
        PropDoc::new("rounded", "none | sm | md | lg | full", "md", "Outline corners"),
        PropDoc::new("full_width", "bool", "false", "Stretch to the container"),
        PropDoc::new("loading", "bool", "false", "Show a spinner and ignore presses"),
        PropDoc::new("loading_text", "string", "label", "Text shown while loading"),
        PropDoc::new("left_icon / right_icon", "icon name", "-", "Icons around the label"),
        PropDoc::new("icon_only", "bool", "false", "Draw only the icon"),
        PropDoc::new("disabled", "bool", "false", "Ignore presses"),
        PropDoc::new("on_activate", "handler", "-", "Click, Enter or Space"),
    ];

    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            variant: ButtonVariant::default(),
            color: ColorScheme::Primary,
            size: ButtonSize::default(),
            radius: Radius::default(),
            full_width: false,
            loading: false,
            loading_text: None,
            left_icon: None,
            right_icon: None,
            icon_only: false,
            disabled: false,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn color(mut self, color: ColorScheme) -> Self {
        self.color = color;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn rounded(mut self, radius: Radius) -> Self {
        self.radius = radius;
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn loading_text(mut self, text: impl Into<String>) -> Self {
        self.loading_text = Some(text.into());
        self
    }

    pub fn left_icon(mut self, name: impl Into<String>) -> Self {
        self.left_icon = Some(name.into());
        self
    }

    pub fn right_icon(mut self, name: impl Into<String>) -> Self {
        self.right_icon = Some(name.into());
        self
    }

    /// Draw only the icon. The label still names the default id.
    pub fn icon_only(mut self) -> Self {
        self.icon_only = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn default_id(&self) -> String {
        let slug: String = self
            .label
            .chars()
            .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
            .collect();
        format!("button-{}", slug)
    }

    fn content(&self) -> Vec<Element> {
        let icon = |name: &str| Element::text(glyph_or_unknown(name).to_string());

        if self.loading {
            let text = self.loading_text.as_deref().unwrap_or(&self.label);
            let mut content = vec![spinner::frames(self.size.spinner(), Style::new())];
            if !self.icon_only && !text.is_empty() {
                content.push(Element::text(text));
            }
            return content;
        }

        if self.icon_only {
            let name = self.left_icon.as_deref().or(self.right_icon.as_deref());
            return match name {
                Some(name) => vec![icon(name)],
                None => {
                    log::warn!("icon-only button `{}` has no icon", self.label);
                    vec![Element::text(&self.label)]
                }
            };
        }

        let mut content = Vec::new();
        if let Some(name) = &self.left_icon {
            content.push(icon(name));
        }
        content.push(Element::text(&self.label));
        if let Some(name) = &self.right_icon {
            content.push(icon(name));
        }
        content
    }

    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let id = self.id.clone().unwrap_or_else(|| self.default_id());
        log::debug!(
            "Button::build id={} variant={} color={} loading={}",
            id,
            self.variant,
            self.color,
            self.loading
        );

        let interactive = !self.disabled && !self.loading;
        let padding = match (self.variant, self.icon_only) {
            (ButtonVariant::Link, _) => Edges::default(),
            (_, true) => Edges::horizontal(1),
            _ => self.size.padding(),
        };

        let mut button = Element::row()
            .id(&id)
            .gap(1)
            .padding(padding)
            .justify(Justify::Center)
            .focusable(!self.disabled)
            .clickable(interactive)
            .disabled(self.disabled)
            .style(self.variant.style(self.color, self.radius))
            .style_focused(self.variant.focused_style(self.color))
            .style_disabled(Style::new().dim())
            .children(self.content());
        if self.full_width {
            button = button.width(Size::Fill);
        }

        if interactive && let Some(on_activate) = handler(handlers, "on_activate") {
            let button_id = id.clone();
            registry.register(
                &id,
                "on_activate",
                Arc::new(move |hx| {
                    log::debug!("Button activate id={}", button_id);
                    on_activate(hx);
                }),
            );
        }
        button
    }
}
