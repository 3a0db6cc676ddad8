use coreui_dom::Color;

use crate::tokens::{Hue, Semantic, Shade};

named_enum! {
    /// Color prop accepted by widgets: the six semantic colors followed by
    /// the palette hues. `gray` and `neutral` belong to both sets.
    pub enum ColorScheme ("color") {
        Primary = "primary",
        Secondary = "secondary",
        Success = "success",
        Warning = "warning",
        Error = "error",
        Info = "info",
        Slate = "slate",
        Gray = "gray",
        Zinc = "zinc",
        Neutral = "neutral",
        Stone = "stone",
        Red = "red",
        Orange = "orange",
        Amber = "amber",
        Yellow = "yellow",
        Lime = "lime",
        Green = "green",
        Emerald = "emerald",
        Teal = "teal",
        Cyan = "cyan",
        Sky = "sky",
        Blue = "blue",
        Indigo = "indigo",
        Violet = "violet",
        Purple = "purple",
        Fuchsia = "fuchsia",
        Pink = "pink",
        Rose = "rose",
    }
    default Primary
}

impl ColorScheme {
    pub fn semantic(self) -> Option<Semantic> {
        Semantic::parse(self.name()).ok()
    }

    pub fn hue(self) -> Option<Hue> {
        Hue::parse(self.name()).ok()
    }

    pub fn is_semantic(self) -> bool {
        self.semantic().is_some() || matches!(self, ColorScheme::Gray | ColorScheme::Neutral)
    }

    /// Theme variable for one shade, e.g. `primary-600`.
    pub fn shade(self, shade: Shade) -> Color {
        Color::var(format!("{}-{}", self.name(), shade.name()))
    }

    /// The 500 shade, used for solid fills and accents.
    pub fn base(self) -> Color {
        self.shade(Shade::S500)
    }

    /// A faint tint of the color over the surface, for soft and subtle
    /// variants.
    pub fn tint(self) -> Color {
        self.base().mix(Color::var("surface"), 0.78)
    }

    /// Readable text on a solid fill of this color.
    pub fn on_solid(self) -> Color {
        match self {
            ColorScheme::Warning
            | ColorScheme::Amber
            | ColorScheme::Yellow
            | ColorScheme::Lime => Color::var("black"),
            _ => Color::var("white"),
        }
    }

    /// Readable text on a tint of this color.
    pub fn on_tint(self) -> Color {
        self.base().mix(Color::var("fg"), 0.25)
    }
}
