//! Horizontal or vertical rule, optionally labelled.

use coreui_dom::{Align, Color, Edges, Element, Size, Style};

use crate::handler_context::{HandlerRegistry, WidgetHandlers};
use crate::style::{PropDoc, named_enum};
use crate::tokens::Spacing;

named_enum! {
    pub enum Orientation ("orientation") {
        Horizontal = "horizontal",
        Vertical = "vertical",
    }
    default Horizontal
}

named_enum! {
    pub enum DividerVariant ("divider variant") {
        Solid = "solid",
        Dashed = "dashed",
        Dotted = "dotted",
    }
    default Solid
}

named_enum! {
    pub enum DividerColor ("divider color") {
        Light = "light",
        Default = "default",
        Dark = "dark",
    }
    default Default
}

impl DividerColor {
    pub fn color(self) -> Color {
        match self {
            DividerColor::Light => Color::var("subtle"),
            DividerColor::Default => Color::var("border"),
            DividerColor::Dark => Color::var("muted"),
        }
    }
}

named_enum! {
    pub enum DividerThickness ("thickness") {
        Thin = "thin",
        Thick = "thick",
    }
    default Thin
}

named_enum! {
    pub enum LabelPosition ("label position") {
        Start = "start",
        Center = "center",
        End = "end",
    }
    default Center
}

/// Rule glyph for one orientation, variant and thickness.
pub const fn rule_glyph(
    orientation: Orientation,
    variant: DividerVariant,
    thickness: DividerThickness,
) -> char {
    use DividerThickness::{Thick, Thin};
    use DividerVariant::{Dashed, Dotted, Solid};
    match orientation {
        Orientation::Horizontal => match (variant, thickness) {
            (Solid, Thin) => '─',
            (Solid, Thick) => '━',
            (Dashed, Thin) => '╌',
            (Dashed, Thick) => '╍',
            (Dotted, Thin) => '┈',
            (Dotted, Thick) => '┉',
        },
        Orientation::Vertical => match (variant, thickness) {
            (Solid, Thin) => '│',
            (Solid, Thick) => '┃',
            (Dashed, Thin) => '╎',
            (Dashed, Thick) => '╏',
            (Dotted, Thin) => '┊',
            (Dotted, Thick) => '┋',
        },
    }
}

#[derive(Debug, Clone)]
pub struct Divider {
    id: Option<String>,
    orientation: Orientation,
    variant: DividerVariant,
    color: DividerColor,
    thickness: DividerThickness,
    label: Option<String>,
    label_position: LabelPosition,
    spacing: Spacing,
}

impl Default for Divider {
    fn default() -> Self {
        Self::new()
    }
}

impl Divider {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("orientation", "horizontal | vertical", "horizontal", "Rule direction"),
        PropDoc::new("variant", "solid | dashed | dotted", "solid", "Line pattern"),
        PropDoc::new("color", "light | default | dark", "default", "Line color"),
        PropDoc::new("thickness", "thin | thick", "thin", "Line weight"),
        PropDoc::new("label", "string", "-", "Text set into a horizontal rule"),
        PropDoc::new("label_position", "start | center | end", "center", "Where the label sits"),
        PropDoc::new("spacing", "Spacing", "md", "Margin around the rule"),
    ];

    pub fn new() -> Self {
        Self {
            id: None,
            orientation: Orientation::Horizontal,
            variant: DividerVariant::Solid,
            color: DividerColor::Default,
            thickness: DividerThickness::Thin,
            label: None,
            label_position: LabelPosition::Center,
            spacing: Spacing::Md,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn vertical(self) -> Self {
        self.orientation(Orientation::Vertical)
    }

    pub fn variant(mut self, variant: DividerVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn color(mut self, color: DividerColor) -> Self {
        self.color = color;
        self
    }

    pub fn thickness(mut self, thickness: DividerThickness) -> Self {
        self.thickness = thickness;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label_position(mut self, position: LabelPosition) -> Self {
        self.label_position = position;
        self
    }

    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn build(self, _registry: &HandlerRegistry, _handlers: &WidgetHandlers) -> Element {
        let glyph = rule_glyph(self.orientation, self.variant, self.thickness);
        let style = Style::new().foreground(self.color.color());
        log::debug!(
            "Divider::build orientation={} variant={} label={:?}",
            self.orientation,
            self.variant,
            self.label
        );

        let mut element = match self.orientation {
            Orientation::Vertical => Element::fill(glyph)
                .width(Size::Fixed(1))
                .height(Size::Fill)
                .margin(Edges::horizontal(self.spacing.cells()))
                .style(style),
            Orientation::Horizontal => {
                let margin = Edges::vertical(self.spacing.rows());
                match self.label {
                    None => Element::fill(glyph)
                        .width(Size::Fill)
                        .height(Size::Fixed(1))
                        .margin(margin)
                        .style(style),
                    Some(label) => {
                        let rule = |fixed: bool| {
                            let line = Element::fill(glyph).height(Size::Fixed(1));
                            if fixed {
                                line.width(Size::Fixed(2))
                            } else {
                                line.width(Size::Fill)
                            }
                        };
                        let text = Element::text(format!(" {} ", label))
                            .style(Style::new().foreground(Color::var("muted")));
                        let children = match self.label_position {
                            LabelPosition::Start => vec![rule(true), text, rule(false)],
                            LabelPosition::Center => vec![rule(false), text, rule(false)],
                            LabelPosition::End => vec![rule(false), text, rule(true)],
                        };
                        Element::row()
                            .width(Size::Fill)
                            .align(Align::Center)
                            .margin(margin)
                            .style(style)
                            .children(children)
                    }
                }
            }
        };

        if let Some(id) = self.id {
            element = element.id(id);
        }
        element
    }
}
