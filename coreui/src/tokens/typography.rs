use coreui_dom::TextStyle;

use crate::style::named_enum;

named_enum! {
    pub enum FontSize ("font size") {
        Xs = "xs",
        Sm = "sm",
        Base = "base",
        Lg = "lg",
        Xl = "xl",
        Xxl = "2xl",
        Xxxl = "3xl",
        Xxxxl = "4xl",
        Xxxxxl = "5xl",
    }
    default Base
}

impl FontSize {
    /// Glyph size is fixed in a terminal, so size becomes emphasis.
    pub const fn text_style(self) -> TextStyle {
        match self {
            FontSize::Xs | FontSize::Sm => TextStyle::new().dim(),
            FontSize::Base | FontSize::Lg => TextStyle::new(),
            FontSize::Xl | FontSize::Xxl => TextStyle::new().bold(),
            FontSize::Xxxl | FontSize::Xxxxl | FontSize::Xxxxxl => {
                TextStyle::new().bold().underline()
            }
        }
    }

    /// The largest sizes draw a rule under the text.
    pub const fn has_rule(self) -> bool {
        matches!(self, FontSize::Xxxxl | FontSize::Xxxxxl)
    }
}

named_enum! {
    pub enum FontWeight ("font weight") {
        Normal = "normal",
        Medium = "medium",
        Semibold = "semibold",
        Bold = "bold",
    }
    default Normal
}

impl FontWeight {
    pub const fn text_style(self) -> TextStyle {
        match self {
            FontWeight::Normal | FontWeight::Medium => TextStyle::new(),
            FontWeight::Semibold | FontWeight::Bold => TextStyle::new().bold(),
        }
    }
}
