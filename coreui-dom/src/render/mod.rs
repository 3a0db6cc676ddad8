use crate::buffer::Buffer;
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{align_offset, char_width, display_width, truncate_to_width, wrap_words};
use crate::types::{ColorContext, Position, Rgb, TextStyle, TextWrap, Theme};

const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);

/// Values a child inherits from its nearest styled ancestor.
#[derive(Clone, Copy)]
struct Inherited {
    fg: Rgb,
    text_style: TextStyle,
}

struct Painter<'a, 'b> {
    layout: &'a LayoutResult,
    colors: ColorContext<'b>,
    /// Out-of-flow or raised subtrees, painted after the normal flow.
    deferred: Vec<(i16, &'a Element, Inherited)>,
}

/// Paint `root` into `buf` using rects from `layout`. Color variables are
/// resolved against `theme`.
pub fn render_to_buffer(root: &Element, layout: &LayoutResult, buf: &mut Buffer, theme: &dyn Theme) {
    let mut painter = Painter {
        layout,
        colors: ColorContext::new(theme),
        deferred: Vec::new(),
    };
    let inherited = Inherited {
        fg: DEFAULT_FG,
        text_style: TextStyle::new(),
    };

    painter.paint(root, inherited, buf);

    // Layers are painted lowest z first; a layer may defer further layers.
    while !painter.deferred.is_empty() {
        let mut layers = std::mem::take(&mut painter.deferred);
        layers.sort_by_key(|(z, _, _)| *z);
        for (_, element, inherited) in layers {
            painter.paint(element, inherited, buf);
        }
    }
}

impl<'a> Painter<'a, '_> {
    fn paint(&mut self, element: &'a Element, inherited: Inherited, buf: &mut Buffer) {
        let Some(rect) = self.layout.get(&element.id).copied() else {
            return;
        };

        let style = element.effective_style();
        let fg = style
            .foreground
            .as_ref()
            .map(|c| self.colors.rgb(c))
            .unwrap_or(inherited.fg);
        let own = Inherited {
            fg,
            text_style: inherited.text_style.merge(style.text_style),
        };

        if let Some(bg) = &style.background {
            buf.fill(rect, self.colors.rgb(bg));
        }

        if let Some(glyphs) = style.border.glyphs() {
            let border_fg = style
                .border_color
                .as_ref()
                .map(|c| self.colors.rgb(c))
                .unwrap_or(fg);
            draw_border(buf, rect, glyphs, border_fg);
        }

        match &element.content {
            Content::None => {}
            Content::Text(text) => paint_text(text, element, rect, own, buf),
            Content::Fill(glyph) => paint_fill(*glyph, element, rect, own, buf),
            Content::Children(children) => {
                for child in children {
                    self.paint_child(child, own, buf);
                }
            }
            Content::Frames { children, interval } => {
                let idx = Content::frame_index(children.len(), *interval);
                if let Some(frame) = children.get(idx) {
                    self.paint_child(frame, own, buf);
                }
            }
        }
    }

    fn paint_child(&mut self, child: &'a Element, inherited: Inherited, buf: &mut Buffer) {
        if child.position == Position::Absolute || child.z_index > 0 {
            self.deferred.push((child.z_index, child, inherited));
        } else {
            self.paint(child, inherited, buf);
        }
    }
}

fn paint_text(text: &str, element: &Element, rect: Rect, inherited: Inherited, buf: &mut Buffer) {
    let border = element.style.border.width();
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );
    if inner.is_empty() {
        return;
    }

    let width = inner.width as usize;
    let lines: Vec<String> = match element.text_wrap {
        TextWrap::NoWrap => text.lines().map(str::to_string).collect(),
        TextWrap::Truncate => text.lines().map(|l| truncate_to_width(l, width)).collect(),
        TextWrap::Wrap => wrap_words(text, width),
    };

    for (row, line) in lines.iter().enumerate().take(inner.height as usize) {
        let y = inner.y + row as u16;
        let offset = align_offset(display_width(line), width, element.text_align) as u16;
        let mut x = inner.x + offset;

        for ch in line.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if x + w > inner.right() {
                break;
            }
            buf.put(x, y, ch, w, inherited.fg, inherited.text_style);
            x += w;
        }
    }
}

fn paint_fill(glyph: char, element: &Element, rect: Rect, inherited: Inherited, buf: &mut Buffer) {
    let border = element.style.border.width();
    let inner = rect
        .shrink(
            element.padding.top + border,
            element.padding.right + border,
            element.padding.bottom + border,
            element.padding.left + border,
        )
        .intersection(&buf.area());
    let step = char_width(glyph).max(1) as u16;

    for y in inner.y..inner.bottom() {
        let mut x = inner.x;
        while x + step <= inner.right() {
            buf.put(x, y, glyph, step, inherited.fg, inherited.text_style);
            x += step;
        }
    }
}

fn draw_border(buf: &mut Buffer, rect: Rect, glyphs: [char; 6], fg: Rgb) {
    let [tl, tr, bl, br, h, v] = glyphs;
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    set_glyph(buf, rect.x, rect.y, tl, fg);
    set_glyph(buf, right, rect.y, tr, fg);
    set_glyph(buf, rect.x, bottom, bl, fg);
    set_glyph(buf, right, bottom, br, fg);

    for x in (rect.x + 1)..right {
        set_glyph(buf, x, rect.y, h, fg);
        set_glyph(buf, x, bottom, h, fg);
    }
    for y in (rect.y + 1)..bottom {
        set_glyph(buf, rect.x, y, v, fg);
        set_glyph(buf, right, y, v, fg);
    }
}

fn set_glyph(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb) {
    buf.put(x, y, ch, 1, fg, TextStyle::new());
}
