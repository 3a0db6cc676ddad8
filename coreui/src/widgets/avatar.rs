//! Avatar and AvatarGroup.

use coreui_dom::{Align, Color, Element, Justify, Size, Style};

use super::icon::glyph_or_unknown;
use crate::handler_context::{HandlerRegistry, WidgetHandlers};
use crate::style::{ColorScheme, PropDoc, named_enum};
use crate::tokens::Radius;

/// First letters of the first and last words, uppercased. A single word
/// gives one letter, a blank name none.
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next().and_then(|w| w.chars().next());
    let last = words.last().and_then(|w| w.chars().next());
    first
        .into_iter()
        .chain(last)
        .flat_map(char::to_uppercase)
        .collect()
}

named_enum! {
    pub enum AvatarSize ("avatar size") {
        Xs = "xs",
        Sm = "sm",
        Md = "md",
        Lg = "lg",
        Xl = "xl",
        Xxl = "2xl",
    }
    default Md
}

impl AvatarSize {
    /// Cells wide and rows tall, border included.
    pub const fn dimensions(self) -> (u16, u16) {
        match self {
            AvatarSize::Xs => (2, 1),
            AvatarSize::Sm => (4, 1),
            AvatarSize::Md => (6, 1),
            AvatarSize::Lg => (6, 3),
            AvatarSize::Xl => (8, 3),
            AvatarSize::Xxl => (10, 5),
        }
    }
}

named_enum! {
    pub enum AvatarStatus ("avatar status") {
        Online = "online",
        Offline = "offline",
        Busy = "busy",
        Away = "away",
    }
    default Offline
}

impl AvatarStatus {
    pub const fn color(self) -> ColorScheme {
        match self {
            AvatarStatus::Online => ColorScheme::Success,
            AvatarStatus::Offline => ColorScheme::Gray,
            AvatarStatus::Busy => ColorScheme::Error,
            AvatarStatus::Away => ColorScheme::Warning,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Avatar {
    name: Option<String>,
    src: Option<String>,
    size: AvatarSize,
    radius: Radius,
    color: ColorScheme,
    status: Option<AvatarStatus>,
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new()
    }
}

impl Avatar {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("name", "string", "-", "Source of the initials"),
        PropDoc::new("src", "string", "-", "Image URL, kept for reference; terminals draw initials"),
        PropDoc::new("size", "xs | sm | md | lg | xl | 2xl", "md", "Dimensions"),
        PropDoc::new("radius", "none | sm | md | lg | full", "full", "Corners of bordered sizes"),
        PropDoc::new("color", "Color", "gray", "Background color"),
        PropDoc::new("status", "online | offline | busy | away", "-", "Presence dot"),
    ];

    pub fn new() -> Self {
        Self {
            name: None,
            src: None,
            size: AvatarSize::default(),
            radius: Radius::Full,
            color: ColorScheme::Gray,
            status: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn size(mut self, size: AvatarSize) -> Self {
        self.size = size;
        self
    }

    pub fn radius(mut self, radius: Radius) -> Self {
        self.radius = radius;
        self
    }

    pub fn color(mut self, color: ColorScheme) -> Self {
        self.color = color;
        self
    }

    pub fn status(mut self, status: AvatarStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// The text drawn inside the avatar.
    fn face(&self) -> String {
        let letters = self.name.as_deref().map(initials).unwrap_or_default();
        if letters.is_empty() {
            glyph_or_unknown("user").to_string()
        } else {
            letters
        }
    }

    pub fn build(self, _registry: &HandlerRegistry, _handlers: &WidgetHandlers) -> Element {
        if let Some(src) = &self.src {
            log::debug!("Avatar src {} not drawable, using initials", src);
        }
        let face = self.face();
        log::debug!("Avatar::build face={} size={}", face, self.size);

        let (width, height) = self.size.dimensions();
        let mut style = Style::new()
            .background(self.color.base())
            .foreground(self.color.on_solid())
            .bold();
        if height >= 3 {
            style = style
                .border(self.radius.border())
                .border_color(self.color.shade(crate::tokens::Shade::S700));
        }
        let avatar = Element::row()
            .width(Size::Fixed(width))
            .height(Size::Fixed(height))
            .justify(Justify::Center)
            .align(Align::Center)
            .style(style)
            .child(Element::text(face));

        match self.status {
            Some(status) => Element::row().child(avatar).child(
                Element::text("●")
                    .style(Style::new().foreground(status.color().base())),
            ),
            None => avatar,
        }
    }
}

/// A row of avatars, capped at `max` with a `+N` avatar for the rest.
#[derive(Debug, Clone)]
pub struct AvatarGroup {
    avatars: Vec<Avatar>,
    max: usize,
    size: AvatarSize,
}

impl Default for AvatarGroup {
    fn default() -> Self {
        Self::new()
    }
}

impl AvatarGroup {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("max", "number", "5", "Avatars shown before the +N overflow"),
        PropDoc::new("size", "xs | sm | md | lg | xl | 2xl", "md", "Size of every avatar"),
    ];

    pub fn new() -> Self {
        Self {
            avatars: Vec::new(),
            max: 5,
            size: AvatarSize::default(),
        }
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max = max;
        self
    }

    pub fn size(mut self, size: AvatarSize) -> Self {
        self.size = size;
        self
    }

    pub fn avatar(mut self, avatar: Avatar) -> Self {
        self.avatars.push(avatar);
        self
    }

    pub fn avatars(mut self, avatars: impl IntoIterator<Item = Avatar>) -> Self {
        self.avatars.extend(avatars);
        self
    }

    /// How many avatars the `+N` avatar stands for.
    pub fn overflow(&self) -> usize {
        self.avatars.len().saturating_sub(self.max)
    }

    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let overflow = self.overflow();
        log::debug!(
            "AvatarGroup::build avatars={} max={} overflow={}",
            self.avatars.len(),
            self.max,
            overflow
        );

        let size = self.size;
        let mut group = Element::row().gap(1);
        for avatar in self.avatars.into_iter().take(self.max) {
            group = group.child(avatar.size(size).build(registry, handlers));
        }
        if overflow > 0 {
            let (width, height) = size.dimensions();
            group = group.child(
                Element::row()
                    .width(Size::Fixed(width.max(3)))
                    .height(Size::Fixed(height))
                    .justify(Justify::Center)
                    .align(Align::Center)
                    .style(
                        Style::new()
                            .background(Color::var("subtle"))
                            .foreground(Color::var("fg")),
                    )
                    .child(Element::text(format!("+{}", overflow))),
            );
        }
        group
    }
}
