use crate::types::{Rgb, TextStyle};

/// One terminal column: a glyph with its colors and attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    /// Right half of a double-width glyph. Never printed.
    pub continuation: bool,
}

impl Cell {
    /// What a cleared screen holds.
    pub const BLANK: Cell = Cell::background(Rgb::new(0, 0, 0));

    /// Differs from every painted cell, so a diff against it repaints.
    pub const STALE: Cell = Cell {
        glyph: '\0',
        ..Cell::BLANK
    };

    /// An empty cell on `bg`.
    pub const fn background(bg: Rgb) -> Self {
        Self {
            glyph: ' ',
            fg: Rgb::new(255, 255, 255),
            bg,
            style: TextStyle::new(),
            continuation: false,
        }
    }

    /// `glyph` in `fg`, keeping the background already under it.
    pub const fn ink(glyph: char, fg: Rgb, style: TextStyle, under: &Cell) -> Self {
        Self {
            glyph,
            fg,
            bg: under.bg,
            style,
            continuation: false,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}
