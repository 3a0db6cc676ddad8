use std::collections::HashMap;

use super::Rect;
use crate::element::{visible_children, Content, Element};
use crate::text::display_width;
use crate::types::{Align, Justify, Position, Size, Wrap};

pub type LayoutResult = HashMap<String, Rect>;

struct Ctx {
    viewport: Rect,
    result: LayoutResult,
}

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut ctx = Ctx {
        viewport: available,
        result: LayoutResult::new(),
    };

    if element.position == Position::Absolute {
        place_absolute(element, available, &mut ctx);
        return ctx.result;
    }

    let margin = &element.margin;
    let after_margin = available.shrink(margin.top, margin.right, margin.bottom, margin.left);
    let width = resolve_size(element.width, after_margin.width, element, true);
    let height = resolve_size(element.height, after_margin.height, element, false);
    let rect = Rect::new(after_margin.x, after_margin.y, width, height);
    ctx.result.insert(element.id.clone(), rect);
    layout_children(element, rect, &mut ctx);

    ctx.result
}

fn inner_rect(element: &Element, rect: Rect) -> Rect {
    let border = element.style.border.width();
    rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    )
}

fn layout_children(element: &Element, rect: Rect, ctx: &mut Ctx) {
    let children = visible_children(element);
    if children.is_empty() {
        return;
    }

    let inner = inner_rect(element, rect);
    let mut flow: Vec<&Element> = children
        .iter()
        .filter(|c| c.position != Position::Absolute)
        .collect();

    if element.direction.is_reverse() {
        flow.reverse();
    }

    if element.wrap == Wrap::Wrap && element.direction.is_row() {
        layout_wrapped_row(element, &flow, inner, ctx);
    } else {
        layout_line(element, &flow, inner, ctx);
    }

    for child in children.iter().filter(|c| c.position == Position::Absolute) {
        place_absolute(child, rect, ctx);
    }
}

/// Lay out flow children along a single main-axis line.
fn layout_line(element: &Element, flow: &[&Element], inner: Rect, ctx: &mut Ctx) {
    let is_row = element.direction.is_row();
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };
    let gap_total = element.gap * flow.len().saturating_sub(1) as u16;

    // First pass: base sizes and flex weights
    let mut bases = Vec::with_capacity(flow.len());
    let mut weights = Vec::with_capacity(flow.len());
    let mut used = gap_total;

    for child in flow {
        let (margin_before, margin_after) = main_margins(child, is_row);
        let size = if is_row { child.width } else { child.height };
        let (base, weight) = match size {
            Size::Fixed(n) => (n, child.flex_grow),
            Size::Auto => (estimate_size(child, is_row), child.flex_grow),
            Size::Percent(p) => ((main_size as f32 * p) as u16, child.flex_grow),
            Size::Fill => (0, child.flex_grow.max(1)),
            Size::Flex(n) => (0, n.max(1)),
        };
        used = used.saturating_add(base + margin_before + margin_after);
        bases.push(base);
        weights.push(weight);
    }

    // Distribute what's left by weight; the last weighted child absorbs rounding
    let remaining = main_size.saturating_sub(used);
    let total_weight: u32 = weights.iter().map(|w| *w as u32).sum();
    let mut sizes = bases.clone();
    if total_weight > 0 {
        let mut handed_out = 0u16;
        let last_weighted = weights.iter().rposition(|w| *w > 0);
        for (i, weight) in weights.iter().enumerate() {
            if *weight == 0 {
                continue;
            }
            let share = if Some(i) == last_weighted {
                remaining - handed_out
            } else {
                (remaining as u32 * *weight as u32 / total_weight) as u16
            };
            handed_out += share;
            sizes[i] = sizes[i].saturating_add(share);
        }
    }

    for (size, child) in sizes.iter_mut().zip(flow) {
        let (min, max) = if is_row {
            (child.min_width, child.max_width)
        } else {
            (child.min_height, child.max_height)
        };
        *size = clamp_opt(*size, min, max);
    }

    let content_total = sizes
        .iter()
        .zip(flow)
        .map(|(s, c)| {
            let (b, a) = main_margins(c, is_row);
            s + b + a
        })
        .fold(gap_total, |acc, s| acc.saturating_add(s));
    let extra = main_size.saturating_sub(content_total);

    let (start_offset, between) = match element.justify {
        Justify::Start => (0, element.gap),
        Justify::End => (extra, element.gap),
        Justify::Center => (extra / 2, element.gap),
        Justify::SpaceBetween if flow.len() > 1 => {
            (0, extra / (flow.len() - 1) as u16 + element.gap)
        }
        Justify::SpaceBetween => (0, element.gap),
        Justify::SpaceAround => {
            let spacing = extra / flow.len().max(1) as u16;
            (spacing / 2, spacing + element.gap)
        }
    };

    // Second pass: assign rects
    let mut offset = start_offset;
    for (child, main) in flow.iter().zip(sizes) {
        let (margin_before, margin_after) = main_margins(child, is_row);
        let (cross_before, cross_after) = if is_row {
            (child.margin.top, child.margin.bottom)
        } else {
            (child.margin.left, child.margin.right)
        };
        let available_cross = cross_size.saturating_sub(cross_before + cross_after);
        let align = child.align_self.unwrap_or(element.align);

        let cross_spec = if is_row { child.height } else { child.width };
        let cross = match cross_spec {
            Size::Fixed(n) => n,
            Size::Fill | Size::Flex(_) => available_cross,
            Size::Auto if align == Align::Stretch => available_cross,
            Size::Auto => estimate_size(child, !is_row),
            Size::Percent(p) => (cross_size as f32 * p) as u16,
        };
        let (min_cross, max_cross) = if is_row {
            (child.min_height, child.max_height)
        } else {
            (child.min_width, child.max_width)
        };
        let cross = clamp_opt(cross, min_cross, max_cross).min(available_cross);
        let main = main.min(main_size.saturating_sub(offset.saturating_add(margin_before)));

        let cross_offset = cross_before
            + match align {
                Align::Start | Align::Stretch => 0,
                Align::Center => available_cross.saturating_sub(cross) / 2,
                Align::End => available_cross.saturating_sub(cross),
            };

        let child_rect = if is_row {
            Rect::new(
                inner.x.saturating_add(offset.saturating_add(margin_before)),
                inner.y + cross_offset,
                main,
                cross,
            )
        } else {
            Rect::new(
                inner.x + cross_offset,
                inner.y.saturating_add(offset.saturating_add(margin_before)),
                cross,
                main,
            )
        };

        ctx.result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, ctx);

        offset = offset.saturating_add(margin_before + main + margin_after + between);
    }
}

/// Row layout that starts a new line when the next child would overflow.
fn layout_wrapped_row(element: &Element, flow: &[&Element], inner: Rect, ctx: &mut Ctx) {
    let mut x = 0u16;
    let mut y = 0u16;
    let mut line_height = 0u16;

    for child in flow {
        let width = match child.width {
            Size::Fixed(n) => n,
            Size::Fill | Size::Flex(_) => inner.width,
            Size::Percent(p) => (inner.width as f32 * p) as u16,
            Size::Auto => estimate_size(child, true),
        }
        .min(inner.width);
        let height = match child.height {
            Size::Fixed(n) => n,
            _ => estimate_size(child, false),
        };
        let outer_width = width + child.margin.horizontal_total();

        if x > 0 && x + outer_width > inner.width {
            x = 0;
            y = y.saturating_add(line_height + element.gap);
            line_height = 0;
        }

        let rect = Rect::new(
            inner.x + x + child.margin.left,
            inner.y + y + child.margin.top,
            width,
            height.min(inner.height.saturating_sub(y)),
        );
        ctx.result.insert(child.id.clone(), rect);
        layout_children(child, rect, ctx);

        x = x.saturating_add(outer_width + element.gap);
        line_height = line_height.max(height + child.margin.vertical_total());
    }
}

/// Place an out-of-flow element relative to `parent`, kept on screen.
fn place_absolute(element: &Element, parent: Rect, ctx: &mut Ctx) {
    let viewport = ctx.viewport;
    let width = match element.width {
        Size::Fixed(n) => n,
        Size::Fill | Size::Flex(_) => parent.width,
        Size::Percent(p) => (parent.width as f32 * p) as u16,
        Size::Auto => estimate_size(element, true),
    };
    let height = match element.height {
        Size::Fixed(n) => n,
        Size::Fill | Size::Flex(_) => parent.height,
        Size::Percent(p) => (parent.height as f32 * p) as u16,
        Size::Auto => estimate_size(element, false),
    };
    let width = clamp_opt(width, element.min_width, element.max_width).min(viewport.width);
    let height = clamp_opt(height, element.min_height, element.max_height).min(viewport.height);

    let x = match (element.left, element.right) {
        (Some(left), _) => parent.x as i32 + left as i32,
        (None, Some(right)) => parent.right() as i32 - right as i32 - width as i32,
        (None, None) => parent.x as i32,
    };
    let y = match (element.top, element.bottom) {
        (Some(top), _) => parent.y as i32 + top as i32,
        (None, Some(bottom)) => parent.bottom() as i32 - bottom as i32 - height as i32,
        (None, None) => parent.y as i32,
    };

    let max_x = (viewport.right() as i32 - width as i32).max(viewport.x as i32);
    let max_y = (viewport.bottom() as i32 - height as i32).max(viewport.y as i32);
    let x = x.clamp(viewport.x as i32, max_x) as u16;
    let y = y.clamp(viewport.y as i32, max_y) as u16;

    let rect = Rect::new(x, y, width, height);
    ctx.result.insert(element.id.clone(), rect);
    layout_children(element, rect, ctx);
}

fn main_margins(child: &Element, is_row: bool) -> (u16, u16) {
    if is_row {
        (child.margin.left, child.margin.right)
    } else {
        (child.margin.top, child.margin.bottom)
    }
}

fn clamp_opt(value: u16, min: Option<u16>, max: Option<u16>) -> u16 {
    let value = min.map_or(value, |m| value.max(m));
    max.map_or(value, |m| value.min(m))
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    let base = match size {
        Size::Fixed(n) => n,
        Size::Fill | Size::Flex(_) => available,
        Size::Auto => estimate_size(element, is_width),
        Size::Percent(p) => (available as f32 * p) as u16,
    };

    let (min, max) = if is_width {
        (element.min_width, element.max_width)
    } else {
        (element.min_height, element.max_height)
    };

    clamp_opt(base, min, max).min(available)
}

/// Intrinsic size of an element along one axis, including padding and
/// border. Absolute children don't contribute.
pub fn estimate_size(element: &Element, is_width: bool) -> u16 {
    let fixed = if is_width {
        element.width
    } else {
        element.height
    };
    if let Size::Fixed(n) = fixed {
        return n;
    }

    let border = element.style.border.width() * 2;
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content = match &element.content {
        Content::Text(text) => {
            if is_width {
                text.lines().map(display_width).max().unwrap_or(0) as u16
            } else {
                text.lines().count().max(1) as u16
            }
        }
        Content::Children(_) | Content::Frames { .. } => {
            let children: Vec<&Element> = visible_children(element)
                .iter()
                .filter(|c| c.position != Position::Absolute)
                .collect();
            let along_main = element.direction.is_row() == is_width;
            if children.is_empty() {
                0
            } else if along_main {
                let gap_total = element.gap * (children.len() - 1) as u16;
                children
                    .iter()
                    .map(|c| estimate_outer(c, is_width))
                    .fold(gap_total, |acc, s| acc.saturating_add(s))
            } else {
                children
                    .iter()
                    .map(|c| estimate_outer(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
        Content::Fill(_) => 1,
        Content::None => 0,
    };

    let (min, max) = if is_width {
        (element.min_width, element.max_width)
    } else {
        (element.min_height, element.max_height)
    };
    clamp_opt(content + padding + border, min, max)
}

fn estimate_outer(element: &Element, is_width: bool) -> u16 {
    let margin = if is_width {
        element.margin.horizontal_total()
    } else {
        element.margin.vertical_total()
    };
    estimate_size(element, is_width) + margin
}
