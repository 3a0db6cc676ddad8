use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::types::TextAlign;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` to at most `max_width` columns, ending in `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = char_width(ch);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Pad with spaces on the right up to `width` columns, truncating first
/// if the text is too wide.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let mut out = truncate_to_width(s, width);
    let used = display_width(&out);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}

/// Greedy word wrap. Words wider than the line are split by character.
pub fn wrap_words(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    for input_line in s.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in input_line.split_whitespace() {
            let word_width = display_width(word);
            let sep = usize::from(!line.is_empty());

            if line_width + sep + word_width <= max_width {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_width += sep + word_width;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            if word_width <= max_width {
                line.push_str(word);
                line_width = word_width;
            } else {
                let mut pieces = wrap_chars(word, max_width);
                if let Some(last) = pieces.pop() {
                    lines.extend(pieces);
                    line_width = display_width(&last);
                    line = last;
                }
            }
        }

        lines.push(line);
    }
    lines
}

/// Hard wrap at `max_width` columns regardless of word boundaries.
pub fn wrap_chars(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut used = 0;
    for ch in s.chars() {
        if ch == '\n' {
            lines.push(std::mem::take(&mut line));
            used = 0;
            continue;
        }
        let w = char_width(ch);
        if used + w > max_width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            used = 0;
        }
        line.push(ch);
        used += w;
    }
    lines.push(line);
    lines
}

pub fn align_offset(text_width: usize, available_width: usize, align: TextAlign) -> usize {
    let slack = available_width.saturating_sub(text_width);
    match align {
        TextAlign::Left => 0,
        TextAlign::Center => slack / 2,
        TextAlign::Right => slack,
    }
}
