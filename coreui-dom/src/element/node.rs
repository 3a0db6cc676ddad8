use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use super::Content;
use crate::types::{
    Align, Direction, Edges, Justify, Position, Size, Style, TextAlign, TextWrap, Wrap,
};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// A fresh id for an element the caller did not name.
fn anonymous(kind: &str) -> String {
    format!("{kind}-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed))
}

/// Builder setters that assign their argument.
macro_rules! setters {
    ($($(#[$doc:meta])* $name:ident: $ty:ty),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(mut self, $name: $ty) -> Self {
                self.$name = $name;
                self
            }
        )*
    };
}

/// Builder setters for fields that are unset by default.
macro_rules! optional_setters {
    ($($(#[$doc:meta])* $name:ident: $ty:ty),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $name(mut self, $name: $ty) -> Self {
                self.$name = Some($name);
                self
            }
        )*
    };
}

/// A node of the retained UI tree: box model, flex settings, paint style,
/// interaction flags and content.
#[derive(Debug, Clone)]
pub struct Element {
    pub id: String,
    pub content: Content,

    // Box model
    pub width: Size,
    pub height: Size,
    pub min_width: Option<u16>,
    pub max_width: Option<u16>,
    pub min_height: Option<u16>,
    pub max_height: Option<u16>,
    pub padding: Edges,
    pub margin: Edges,

    // Offsets of an absolute element, from its parent's rect
    pub position: Position,
    pub top: Option<i16>,
    pub left: Option<i16>,
    pub right: Option<i16>,
    pub bottom: Option<i16>,
    /// Paint order among overlays. Positive values paint after the tree.
    pub z_index: i16,

    // As a flex container
    pub direction: Direction,
    pub gap: u16,
    pub justify: Justify,
    pub align: Align,
    pub wrap: Wrap,

    // As a flex item
    pub flex_grow: u16,
    pub align_self: Option<Align>,

    pub style: Style,
    pub style_focused: Option<Style>,
    pub style_disabled: Option<Style>,

    pub text_wrap: TextWrap,
    pub text_align: TextAlign,

    pub focusable: bool,
    pub clickable: bool,
    /// Keys other than Tab go to this element instead of moving focus.
    pub captures_input: bool,
    /// Set by the dispatcher on every frame.
    pub focused: bool,
    pub disabled: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: anonymous("el"),
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None,
            padding: Edges::default(),
            margin: Edges::default(),
            position: Position::Static,
            top: None,
            left: None,
            right: None,
            bottom: None,
            z_index: 0,
            direction: Direction::Column,
            gap: 0,
            justify: Justify::Start,
            align: Align::Start,
            wrap: Wrap::NoWrap,
            flex_grow: 0,
            align_self: None,
            style: Style::default(),
            style_focused: None,
            style_disabled: None,
            text_wrap: TextWrap::NoWrap,
            text_align: TextAlign::Left,
            focusable: false,
            clickable: false,
            captures_input: false,
            focused: false,
            disabled: false,
        }
    }
}

impl Element {
    fn of(kind: &str, content: Content, direction: Direction) -> Self {
        Self {
            id: anonymous(kind),
            content,
            direction,
            ..Default::default()
        }
    }

    pub fn box_() -> Self {
        Self::of("box", Content::None, Direction::Column)
    }

    pub fn col() -> Self {
        Self::of("col", Content::None, Direction::Column)
    }

    pub fn row() -> Self {
        Self::of("row", Content::None, Direction::Row)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::of("text", Content::Text(text.into()), Direction::Column)
    }

    /// Painted edge to edge with `glyph`, for rules and bars.
    pub fn fill(glyph: char) -> Self {
        Self::of("fill", Content::Fill(glyph), Direction::Column)
    }

    /// Shows one of `children` at a time, advancing every `interval`.
    pub fn frames(children: Vec<Element>, interval: Duration) -> Self {
        Self::of("frames", Content::Frames { children, interval }, Direction::Column)
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    setters! {
        width: Size,
        height: Size,
        padding: Edges,
        margin: Edges,
        position: Position,
        z_index: i16,
        direction: Direction,
        gap: u16,
        justify: Justify,
        align: Align,
        wrap: Wrap,
        flex_grow: u16,
        style: Style,
        text_wrap: TextWrap,
        text_align: TextAlign,
        focusable: bool,
        clickable: bool,
        captures_input: bool,
        disabled: bool,
    }

    optional_setters! {
        min_width: u16,
        max_width: u16,
        min_height: u16,
        max_height: u16,
        top: i16,
        left: i16,
        right: i16,
        bottom: i16,
        align_self: Align,
        /// Layered over `style` while focused.
        style_focused: Style,
        /// Layered over `style` while disabled.
        style_disabled: Style,
    }

    /// `style` with the focused and disabled layers applied as they hold.
    pub fn effective_style(&self) -> Style {
        let layers = [
            (self.focused, &self.style_focused),
            (self.disabled, &self.style_disabled),
        ];
        layers
            .into_iter()
            .filter_map(|(on, layer)| layer.as_ref().filter(|_| on))
            .fold(self.style.clone(), |style, layer| style.merge(layer))
    }

    pub fn child(self, child: Element) -> Self {
        self.children([child])
    }

    pub fn children(mut self, more: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(more),
            _ => self.content = Content::Children(more.into_iter().collect()),
        }
        self
    }

    /// Children for traversal. Frames expose every frame.
    pub fn child_slice(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) | Content::Frames { children, .. } => children,
            Content::None | Content::Text(_) | Content::Fill(_) => &[],
        }
    }
}
