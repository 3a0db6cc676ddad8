use super::Cell;
use crate::layout::Rect;
use crate::types::{Rgb, TextStyle};

/// A screen-sized grid of cells, row-major.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self::filled(width, height, Cell::BLANK)
    }

    /// A buffer that differs from any rendered frame everywhere.
    pub fn stale(width: u16, height: u16) -> Self {
        Self::filled(width, height, Cell::STALE)
    }

    fn filled(width: u16, height: u16, cell: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![cell; usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Paint `bg` over every cell of `rect` that is on screen.
    pub fn fill(&mut self, rect: Rect, bg: Rgb) {
        let area = rect.intersection(&self.area());
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    *cell = Cell::background(bg);
                }
            }
        }
    }

    /// Write `glyph` at (x, y) over the existing background. A glyph of
    /// `width` 2 also claims the next column.
    pub fn put(&mut self, x: u16, y: u16, glyph: char, width: u16, fg: Rgb, style: TextStyle) {
        let Some(cell) = self.get_mut(x, y) else {
            return;
        };
        *cell = Cell::ink(glyph, fg, style, cell);
        if width == 2 {
            if let Some(next) = self.get_mut(x + 1, y) {
                next.continuation = true;
            }
        }
    }

    /// Cells of `self` that differ from `previous`, with their positions.
    pub fn changes<'a>(&'a self, previous: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let width = usize::from(self.width.max(1));
        self.cells
            .iter()
            .zip(&previous.cells)
            .enumerate()
            .filter(|(_, (now, before))| now != before)
            .map(move |(i, (cell, _))| ((i % width) as u16, (i / width) as u16, cell))
    }

    pub fn reset(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Text of one row, continuation cells skipped and trailing blanks
    /// trimmed.
    pub fn row_text(&self, y: u16) -> String {
        let Some(start) = self.index(0, y) else {
            return String::new();
        };
        let row: String = self.cells[start..start + usize::from(self.width)]
            .iter()
            .filter(|c| !c.continuation)
            .map(|c| c.glyph)
            .collect();
        row.trim_end().to_string()
    }

    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| self.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
