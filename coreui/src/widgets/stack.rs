//! Stack, HStack and VStack: flex containers with token spacing.

use coreui_dom::{Align, Direction, Element, Justify, Size, Wrap};

use super::scoped;
use crate::handler_context::{HandlerRegistry, WidgetHandlers};
use crate::style::{PropDoc, named_enum};
use crate::tokens::Spacing;

named_enum! {
    pub enum StackDirection ("direction") {
        Row = "row",
        Column = "column",
        RowReverse = "row-reverse",
        ColumnReverse = "column-reverse",
    }
    default Column
}

impl StackDirection {
    pub const fn direction(self) -> Direction {
        match self {
            StackDirection::Row => Direction::Row,
            StackDirection::Column => Direction::Column,
            StackDirection::RowReverse => Direction::RowReverse,
            StackDirection::ColumnReverse => Direction::ColumnReverse,
        }
    }
}

named_enum! {
    pub enum StackAlign ("align") {
        Start = "start",
        Center = "center",
        End = "end",
        Stretch = "stretch",
    }
    default Stretch
}

impl StackAlign {
    pub const fn align(self) -> Align {
        match self {
            StackAlign::Start => Align::Start,
            StackAlign::Center => Align::Center,
            StackAlign::End => Align::End,
            StackAlign::Stretch => Align::Stretch,
        }
    }
}

named_enum! {
    pub enum StackJustify ("justify") {
        Start = "start",
        Center = "center",
        End = "end",
        Between = "between",
        Around = "around",
    }
    default Start
}

impl StackJustify {
    pub const fn justify(self) -> Justify {
        match self {
            StackJustify::Start => Justify::Start,
            StackJustify::Center => Justify::Center,
            StackJustify::End => Justify::End,
            StackJustify::Between => Justify::SpaceBetween,
            StackJustify::Around => Justify::SpaceAround,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Stack {
    id: Option<String>,
    direction: StackDirection,
    spacing: Spacing,
    align: StackAlign,
    justify: StackJustify,
    wrap: bool,
    full_width: bool,
    divider: Option<Element>,
    children: Vec<Element>,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new(
            "direction",
            "row | column | row-reverse | column-reverse",
            "column",
            "Main axis",
        ),
        PropDoc::new("spacing", "Spacing", "md", "Gap between children"),
        PropDoc::new("align", "start | center | end | stretch", "stretch", "Cross-axis alignment"),
        PropDoc::new(
            "justify",
            "start | center | end | between | around",
            "start",
            "Main-axis distribution",
        ),
        PropDoc::new("wrap", "bool", "false", "Wrap children onto new lines"),
        PropDoc::new("divider", "Element", "-", "Inserted between children"),
    ];

    pub fn new() -> Self {
        Self {
            id: None,
            direction: StackDirection::Column,
            spacing: Spacing::Md,
            align: StackAlign::Stretch,
            justify: StackJustify::Start,
            wrap: false,
            full_width: false,
            divider: None,
            children: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn direction(mut self, direction: StackDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn align(mut self, align: StackAlign) -> Self {
        self.align = align;
        self
    }

    pub fn justify(mut self, justify: StackJustify) -> Self {
        self.justify = justify;
        self
    }

    pub fn wrap(mut self) -> Self {
        self.wrap = true;
        self
    }

    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    pub fn divider(mut self, divider: Element) -> Self {
        self.divider = Some(divider);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn build(self, _registry: &HandlerRegistry, _handlers: &WidgetHandlers) -> Element {
        let direction = self.direction.direction();
        let mut element = Element::box_().direction(direction);
        if let Some(id) = &self.id {
            element = element.id(id);
        }
        log::debug!(
            "Stack::build id={} direction={} children={}",
            element.id,
            self.direction,
            self.children.len()
        );

        let gap = if direction.is_row() {
            self.spacing.cells()
        } else {
            self.spacing.rows()
        };

        let count = self.children.len();
        let mut children = Vec::with_capacity(count * 2);
        for (i, child) in self.children.into_iter().enumerate() {
            children.push(child);
            if i + 1 < count
                && let Some(divider) = &self.divider
            {
                children.push(scoped(divider.clone(), &format!("{}-div-{}", element.id, i)));
            }
        }

        element = element
            .gap(gap)
            .align(self.align.align())
            .justify(self.justify.justify())
            .wrap(if self.wrap { Wrap::Wrap } else { Wrap::NoWrap })
            .children(children);
        if self.full_width {
            element = element.width(Size::Fill);
        }
        element
    }
}

/// Horizontal stack.
pub struct HStack;

impl HStack {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> Stack {
        Stack::new().direction(StackDirection::Row)
    }
}

/// Vertical stack.
pub struct VStack;

impl VStack {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> Stack {
        Stack::new().direction(StackDirection::Column)
    }
}
