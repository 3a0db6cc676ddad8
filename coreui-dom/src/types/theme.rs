use std::collections::HashMap;

use super::{Color, ColorOp, Oklch, Rgb};

/// A theme provides named color variables.
pub trait Theme: Send + Sync {
    /// Resolve a color variable name to a color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<&Color>;
}

/// Theme that resolves nothing. Variables render black.
pub struct EmptyTheme;

impl Theme for EmptyTheme {
    fn resolve(&self, _name: &str) -> Option<&Color> {
        None
    }
}

/// Theme backed by a flat name → color map.
#[derive(Debug, Clone, Default)]
pub struct MapTheme {
    colors: HashMap<String, Color>,
}

impl MapTheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, color: Color) {
        self.colors.insert(name.into(), color);
    }

    pub fn with(mut self, name: impl Into<String>, color: Color) -> Self {
        self.set(name, color);
        self
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Theme for MapTheme {
    fn resolve(&self, name: &str) -> Option<&Color> {
        self.colors.get(name)
    }
}

/// Limit on Var → Var indirection, guards against cycles in a theme.
const MAX_DEPTH: u8 = 8;

/// Resolves variables and derived colors against a theme.
pub struct ColorContext<'a> {
    theme: &'a dyn Theme,
}

impl<'a> ColorContext<'a> {
    pub fn new(theme: &'a dyn Theme) -> Self {
        Self { theme }
    }

    pub fn rgb(&self, color: &Color) -> Rgb {
        self.resolve(color).to_rgb()
    }

    /// Resolve to a concrete color (no Var or Derived variants).
    pub fn resolve(&self, color: &Color) -> Color {
        self.resolve_depth(color, 0)
    }

    fn resolve_depth(&self, color: &Color, depth: u8) -> Color {
        match color {
            Color::Var(name) => match self.theme.resolve(name) {
                Some(resolved) if depth < MAX_DEPTH => self.resolve_depth(resolved, depth + 1),
                _ => {
                    log::trace!("unresolved color variable {name}");
                    Color::Rgb { r: 0, g: 0, b: 0 }
                }
            },
            Color::Derived { base, ops } => {
                let base = self.resolve_depth(base, depth + 1);
                let mut oklch = to_oklch(&base);
                for op in ops {
                    match op {
                        ColorOp::Lighten(amount) => oklch.l = (oklch.l + amount).clamp(0.0, 1.0),
                        ColorOp::Darken(amount) => oklch.l = (oklch.l - amount).clamp(0.0, 1.0),
                        ColorOp::Desaturate(amount) => {
                            oklch.c = (oklch.c - amount).clamp(0.0, 0.4)
                        }
                        ColorOp::Mix(other, amount) => {
                            let other = to_oklch(&self.resolve_depth(other, depth + 1));
                            oklch = mix(oklch, other, *amount);
                        }
                    }
                }
                Color::oklch(oklch.l, oklch.c, oklch.h)
            }
            Color::Oklch { .. } | Color::Rgb { .. } => color.clone(),
        }
    }
}

fn to_oklch(color: &Color) -> Oklch {
    match color {
        Color::Oklch { l, c, h, .. } => Oklch::new(*l, *c, *h),
        Color::Rgb { r, g, b } => Oklch::from_rgb(Rgb::new(*r, *g, *b)),
        Color::Var(_) | Color::Derived { .. } => Oklch::default(),
    }
}

fn mix(a: Oklch, b: Oklch, amount: f32) -> Oklch {
    let amount = amount.clamp(0.0, 1.0);
    // shortest way around the hue circle
    let mut dh = b.h - a.h;
    if dh > 180.0 {
        dh -= 360.0;
    } else if dh < -180.0 {
        dh += 360.0;
    }
    Oklch::new(
        a.l + (b.l - a.l) * amount,
        a.c + (b.c - a.c) * amount,
        (a.h + dh * amount).rem_euclid(360.0),
    )
}
