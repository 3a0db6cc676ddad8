//! Widget builders.
//!
//! Every widget follows the same shape:
//! `Widget::new().prop(..).build(&registry, &handlers) -> Element`.
//! Stateful widgets take a `State` handle before `build` becomes available.

mod alert;
mod autocomplete;
mod avatar;
mod badge;
mod button;
mod card;
mod checkbox;
mod container;
mod date_picker;
mod divider;
mod dropdown;
mod field;
mod icon;
mod input;
mod multi_select;
mod popup;
mod select;
mod skeleton;
mod spinner;
mod stack;
mod typography;

pub use alert::{Alert, AlertContainer, AlertPosition, AlertState, AlertStatus, AlertVariant};
pub use autocomplete::{Autocomplete, AutocompleteKey, AutocompleteState};
pub use avatar::{Avatar, AvatarGroup, AvatarSize, AvatarStatus, initials};
pub use badge::{Badge, BadgeSize, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardBody, CardFooter, CardHeader, CardPadding, CardVariant};
pub use checkbox::{Checkbox, CheckboxGroup, CheckboxGroupState, CheckboxSize, CheckboxState};
pub use container::Container;
pub use date_picker::{DATE_FORMAT, DateKey, DatePicker, DatePickerState, parse_date};
pub use divider::{Divider, DividerColor, DividerThickness, DividerVariant, LabelPosition, Orientation};
pub use dropdown::{
    Dropdown, DropdownButton, DropdownItem, DropdownState, MenuColor, MenuKey, MenuVariant,
    Placement,
};
pub use field::{FieldSize, FieldVariant};
pub use icon::{ICONS, Icon, IconSize, glyph};
pub use input::{Edit, Input, InputAddon, InputState};
pub use multi_select::{MultiSelect, MultiSelectState};
pub use select::{Select, SelectState};
pub use skeleton::{Skeleton, SkeletonAnimation, SkeletonCircle, SkeletonText};
pub use spinner::{Spinner, SpinnerColor, SpinnerSize};
pub use stack::{HStack, Stack, StackAlign, StackDirection, StackJustify, VStack};
pub use typography::{Code, Heading, HeadingLevel, Label, Text, TextAlignment};

use coreui_dom::{Content, Element, Size};

use crate::handler_context::{Handler, WidgetHandlers};

/// Typestate marker: widget needs a state reference.
#[derive(Debug, Clone, Copy)]
pub struct NeedsState;

/// Typestate marker: widget has a state reference.
#[derive(Debug)]
pub struct HasState<'a, T>(&'a crate::state::State<T>);

/// Prefix every id in the subtree with `scope`. Clones of one template
/// element need distinct ids or they collide in the layout.
pub(crate) fn scoped(mut element: Element, scope: &str) -> Element {
    element.id = format!("{}/{}", scope, element.id);
    element.content = match element.content {
        Content::Children(children) => {
            Content::Children(children.into_iter().map(|c| scoped(c, scope)).collect())
        }
        Content::Frames { children, interval } => Content::Frames {
            children: children.into_iter().map(|c| scoped(c, scope)).collect(),
            interval,
        },
        other => other,
    };
    element
}

/// Zero-sized element standing in for a hidden widget.
pub(crate) fn hidden(id: &str) -> Element {
    Element::box_()
        .id(id)
        .width(Size::Fixed(0))
        .height(Size::Fixed(0))
}

pub(crate) fn handler(handlers: &WidgetHandlers, name: &str) -> Option<Handler> {
    handlers.get(name).cloned()
}
