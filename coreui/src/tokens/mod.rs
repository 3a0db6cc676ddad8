//! Design tokens: palette, spacing, typography, radii and breakpoints.

mod breakpoints;
mod palette;
mod radius;
mod spacing;
mod typography;

pub use breakpoints::Breakpoint;
pub use palette::{Brand, Hue, Semantic, Shade};
pub use radius::Radius;
pub use spacing::Spacing;
pub use typography::{FontSize, FontWeight};
