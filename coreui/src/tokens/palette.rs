use coreui_dom::Color;

use crate::style::named_enum;

named_enum! {
    /// Palette hues.
    pub enum Hue ("hue") {
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
    default Gray
}

impl Hue {
    /// Hue angle in degrees and peak chroma, reached at shade 500.
    pub const fn params(self) -> (f32, f32) {
        match self {
            Hue::Slate => (257.4, 0.046),
            Hue::Gray => (264.7, 0.030),
            Hue::Zinc => (285.9, 0.016),
            Hue::Neutral => (0.0, 0.0),
            Hue::Stone => (58.1, 0.012),
            Hue::Red => (25.3, 0.237),
            Hue::Orange => (41.1, 0.213),
            Hue::Amber => (70.1, 0.188),
            Hue::Yellow => (86.0, 0.184),
            Hue::Lime => (131.7, 0.219),
            Hue::Green => (149.6, 0.194),
            Hue::Emerald => (163.2, 0.170),
            Hue::Teal => (182.5, 0.140),
            Hue::Cyan => (215.2, 0.143),
            Hue::Sky => (237.3, 0.169),
            Hue::Blue => (259.8, 0.214),
            Hue::Indigo => (277.1, 0.233),
            Hue::Violet => (293.0, 0.243),
            Hue::Purple => (303.9, 0.265),
            Hue::Fuchsia => (322.2, 0.293),
            Hue::Pink => (354.3, 0.241),
            Hue::Rose => (16.4, 0.246),
        }
    }

    /// Concrete OKLCH value of one shade.
    pub fn color(self, shade: Shade) -> Color {
        let (angle, chroma) = self.params();
        let (lightness, chroma_scale) = shade.curve();
        Color::oklch(lightness, chroma * chroma_scale, angle)
    }
}

named_enum! {
    pub enum Shade ("shade") {
        S50 = "50",
        S100 = "100",
        S200 = "200",
        S300 = "300",
        S400 = "400",
        S500 = "500",
        S600 = "600",
        S700 = "700",
        S800 = "800",
        S900 = "900",
        S950 = "950",
    }
    default S500
}

impl Shade {
    /// OKLCH lightness and the fraction of the hue's peak chroma.
    pub const fn curve(self) -> (f32, f32) {
        match self {
            Shade::S50 => (0.970, 0.08),
            Shade::S100 => (0.936, 0.20),
            Shade::S200 => (0.885, 0.40),
            Shade::S300 => (0.808, 0.66),
            Shade::S400 => (0.704, 0.88),
            Shade::S500 => (0.637, 1.00),
            Shade::S600 => (0.577, 0.96),
            Shade::S700 => (0.505, 0.85),
            Shade::S800 => (0.444, 0.72),
            Shade::S900 => (0.396, 0.60),
            Shade::S950 => (0.258, 0.42),
        }
    }
}

named_enum! {
    pub enum Semantic ("semantic color") {
        Primary = "primary",
        Secondary = "secondary",
        Success = "success",
        Warning = "warning",
        Error = "error",
        Info = "info",
    }
    default Primary
}

/// Which palette hue each semantic color stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brand {
    pub primary: Hue,
    pub secondary: Hue,
    pub success: Hue,
    pub warning: Hue,
    pub error: Hue,
    pub info: Hue,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            primary: Hue::Blue,
            secondary: Hue::Violet,
            success: Hue::Green,
            warning: Hue::Amber,
            error: Hue::Red,
            info: Hue::Sky,
        }
    }
}

impl Brand {
    pub fn hue(&self, semantic: Semantic) -> Hue {
        match semantic {
            Semantic::Primary => self.primary,
            Semantic::Secondary => self.secondary,
            Semantic::Success => self.success,
            Semantic::Warning => self.warning,
            Semantic::Error => self.error,
            Semantic::Info => self.info,
        }
    }

    pub fn with(mut self, semantic: Semantic, hue: Hue) -> Self {
        match semantic {
            Semantic::Primary => self.primary = hue,
            Semantic::Secondary => self.secondary = hue,
            Semantic::Success => self.success = hue,
            Semantic::Warning => self.warning = hue,
            Semantic::Error => self.error = hue,
            Semantic::Info => self.info = hue,
        }
        self
    }
}
