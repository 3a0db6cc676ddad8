use crate::style::named_enum;

named_enum! {
    /// Semantic spacing scale for padding, margins and gaps.
    pub enum Spacing ("spacing") {
        None = "none",
        Xxs = "2xs",
        Xs = "xs",
        Sm = "sm",
        Md = "md",
        Lg = "lg",
        Xl = "xl",
        Xxl = "2xl",
        Xxxl = "3xl",
        Xxxxl = "4xl",
    }
    default None
}

impl Spacing {
    /// Horizontal cells. A terminal cell is about twice as tall as wide,
    /// see [`Spacing::rows`] for vertical spacing.
    pub const fn cells(self) -> u16 {
        match self {
            Spacing::None => 0,
            Spacing::Xxs => 1,
            Spacing::Xs => 1,
            Spacing::Sm => 1,
            Spacing::Md => 2,
            Spacing::Lg => 2,
            Spacing::Xl => 3,
            Spacing::Xxl => 4,
            Spacing::Xxxl => 6,
            Spacing::Xxxxl => 8,
        }
    }

    pub const fn rows(self) -> u16 {
        match self {
            Spacing::None | Spacing::Xxs | Spacing::Xs => 0,
            Spacing::Sm | Spacing::Md | Spacing::Lg => 1,
            Spacing::Xl | Spacing::Xxl => 2,
            Spacing::Xxxl => 3,
            Spacing::Xxxxl => 4,
        }
    }
}
