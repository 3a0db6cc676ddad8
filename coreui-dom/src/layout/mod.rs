mod flex;
mod rect;

pub use flex::{estimate_size, layout, LayoutResult};
pub use rect::Rect;
