use coreui_dom::Border;

use crate::style::named_enum;

named_enum! {
    pub enum Radius ("radius") {
        None = "none",
        Sm = "sm",
        Md = "md",
        Lg = "lg",
        Full = "full",
    }
    default Md
}

impl Radius {
    /// Border glyph family: square corners for `none`, rounded otherwise.
    pub const fn border(self) -> Border {
        match self {
            Radius::None => Border::Single,
            _ => Border::Rounded,
        }
    }
}
