//! Loading placeholders.

use std::time::Duration;

use coreui_dom::{Color, Element, Size, Style};

use crate::handler_context::{HandlerRegistry, WidgetHandlers};
use crate::style::{PropDoc, named_enum};
use crate::tokens::{Radius, Spacing};

const PULSE_INTERVAL: Duration = Duration::from_millis(600);
const WAVE_INTERVAL: Duration = Duration::from_millis(120);

named_enum! {
    pub enum SkeletonAnimation ("skeleton animation") {
        Pulse = "pulse",
        Wave = "wave",
        None = "none",
    }
    default Pulse
}

fn block(width: Size, height: Size, style: Style) -> Element {
    Element::fill('█').width(width).height(height).style(style)
}

fn base_style() -> Style {
    Style::new().foreground(Color::var("subtle"))
}

/// Fill of `width` x `height` animated per `animation`. Waves need a fixed
/// width to sweep across; other widths pulse instead.
fn animated(width: Size, height: Size, radius: Radius, animation: SkeletonAnimation) -> Element {
    let shape = |style: Style| {
        let element = block(width, height, style);
        if radius == Radius::Full {
            // Rounded ends on a single row.
            Element::row()
                .child(Element::text("◖").style(base_style()))
                .child(element.flex_grow(1))
                .child(Element::text("◗").style(base_style()))
                .width(width)
        } else {
            element
        }
    };

    match (animation, width) {
        (SkeletonAnimation::None, _) => shape(base_style()),
        (SkeletonAnimation::Wave, Size::Fixed(cells)) if cells > 0 => {
            let frames = (0..cells)
                .map(|pos| {
                    Element::row()
                        .width(width)
                        .height(height)
                        .child(block(Size::Fixed(pos), height, base_style()))
                        .child(block(
                            Size::Fixed(1),
                            height,
                            Style::new().foreground(Color::var("muted")),
                        ))
                        .child(block(Size::Fill, height, base_style()))
                })
                .collect();
            Element::frames(frames, WAVE_INTERVAL)
        }
        _ => Element::frames(
            vec![
                shape(base_style()),
                shape(Style::new().foreground(Color::var("overlay"))),
            ],
            PULSE_INTERVAL,
        ),
    }
}

/// A rectangular placeholder.
#[derive(Debug, Clone)]
pub struct Skeleton {
    width: Size,
    height: u16,
    radius: Radius,
    animation: SkeletonAnimation,
    circle: bool,
    text: bool,
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::new()
    }
}

impl Skeleton {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("width", "Size", "fill", "Placeholder width"),
        PropDoc::new("height", "rows", "1", "Placeholder height"),
        PropDoc::new("radius", "none | sm | md | lg | full", "sm", "Full rounds the ends"),
        PropDoc::new("animation", "pulse | wave | none", "pulse", "Motion"),
        PropDoc::new("circle", "bool", "false", "Square-ish avatar placeholder"),
        PropDoc::new("text", "bool", "false", "Single text line"),
    ];

    pub fn new() -> Self {
        Self {
            width: Size::Fill,
            height: 1,
            radius: Radius::Sm,
            animation: SkeletonAnimation::default(),
            circle: false,
            text: false,
        }
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }

    pub fn radius(mut self, radius: Radius) -> Self {
        self.radius = radius;
        self
    }

    pub fn animation(mut self, animation: SkeletonAnimation) -> Self {
        self.animation = animation;
        self
    }

    pub fn circle(mut self) -> Self {
        self.circle = true;
        self
    }

    pub fn text(mut self) -> Self {
        self.text = true;
        self
    }

    pub fn build(self, _registry: &HandlerRegistry, _handlers: &WidgetHandlers) -> Element {
        log::debug!(
            "Skeleton::build width={:?} height={} animation={}",
            self.width,
            self.height,
            self.animation
        );
        if self.circle {
            // Two cells per row keeps it roughly round.
            let rows = self.height.max(1);
            return animated(
                Size::Fixed(rows * 2),
                Size::Fixed(rows),
                Radius::None,
                self.animation,
            );
        }
        let height = if self.text { 1 } else { self.height.max(1) };
        animated(self.width, Size::Fixed(height), self.radius, self.animation)
    }
}

/// Paragraph placeholder: `lines` rows, the last one shorter.
#[derive(Debug, Clone)]
pub struct SkeletonText {
    lines: usize,
    spacing: Spacing,
    animation: SkeletonAnimation,
}

impl Default for SkeletonText {
    fn default() -> Self {
        Self::new()
    }
}

impl SkeletonText {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("lines", "number", "3", "Rows of placeholder text"),
        PropDoc::new("spacing", "Spacing", "sm", "Gap between rows"),
        PropDoc::new("animation", "pulse | wave | none", "pulse", "Motion"),
    ];

    pub fn new() -> Self {
        Self {
            lines: 3,
            spacing: Spacing::Sm,
            animation: SkeletonAnimation::default(),
        }
    }

    pub fn lines(mut self, lines: usize) -> Self {
        self.lines = lines;
        self
    }

    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn animation(mut self, animation: SkeletonAnimation) -> Self {
        self.animation = animation;
        self
    }

    pub fn build(self, _registry: &HandlerRegistry, _handlers: &WidgetHandlers) -> Element {
        log::debug!("SkeletonText::build lines={}", self.lines);
        let lines = (0..self.lines).map(|i| {
            let width = if i + 1 == self.lines && self.lines > 1 {
                Size::Percent(0.8)
            } else {
                Size::Fill
            };
            animated(width, Size::Fixed(1), Radius::Sm, self.animation)
        });
        Element::col()
            .width(Size::Fill)
            .gap(self.spacing.rows())
            .children(lines)
    }
}

/// Round placeholder sized like an avatar.
#[derive(Debug, Clone)]
pub struct SkeletonCircle {
    size: u16,
    animation: SkeletonAnimation,
}

impl Default for SkeletonCircle {
    fn default() -> Self {
        Self::new()
    }
}

impl SkeletonCircle {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("size", "rows", "2", "Height; width is twice as many cells"),
        PropDoc::new("animation", "pulse | wave | none", "pulse", "Motion"),
    ];

    pub fn new() -> Self {
        Self {
            size: 2,
            animation: SkeletonAnimation::default(),
        }
    }

    pub fn size(mut self, size: u16) -> Self {
        self.size = size;
        self
    }

    pub fn animation(mut self, animation: SkeletonAnimation) -> Self {
        self.animation = animation;
        self
    }

    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        Skeleton::new()
            .circle()
            .height(self.size)
            .animation(self.animation)
            .build(registry, handlers)
    }
}
