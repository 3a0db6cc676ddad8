use crate::style::named_enum;

named_enum! {
    pub enum Breakpoint ("breakpoint") {
        Sm = "sm",
        Md = "md",
        Lg = "lg",
        Xl = "xl",
    }
    default Md
}

impl Breakpoint {
    /// Minimum terminal width in columns.
    pub const fn columns(self) -> u16 {
        match self {
            Breakpoint::Sm => 40,
            Breakpoint::Md => 64,
            Breakpoint::Lg => 96,
            Breakpoint::Xl => 128,
        }
    }

    /// The largest breakpoint a terminal `width` reaches.
    pub fn at(width: u16) -> Option<Breakpoint> {
        Self::ALL.iter().rev().copied().find(|bp| width >= bp.columns())
    }

    pub fn reached(self, width: u16) -> bool {
        width >= self.columns()
    }
}
