//! The pages and the sidebar categories that group them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page `{0}`")]
pub struct UnknownPage(pub String);

/// One documentation page. Declaration order is sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageId {
    #[default]
    Colors,
    Typography,
    Icons,
    Box,
    Stack,
    Divider,
    Button,
    Input,
    Checkbox,
    Select,
    Autocomplete,
    DatePicker,
    Dropdown,
    Card,
    Badge,
    Avatar,
    Alert,
    Spinner,
    Skeleton,
}

impl PageId {
    pub const ALL: &'static [PageId] = &[
        PageId::Colors,
        PageId::Typography,
        PageId::Icons,
        PageId::Box,
        PageId::Stack,
        PageId::Divider,
        PageId::Button,
        PageId::Input,
        PageId::Checkbox,
        PageId::Select,
        PageId::Autocomplete,
        PageId::DatePicker,
        PageId::Dropdown,
        PageId::Card,
        PageId::Badge,
        PageId::Avatar,
        PageId::Alert,
        PageId::Spinner,
        PageId::Skeleton,
    ];

    /// Stable name used in `playbook.json` and element ids.
    pub const fn slug(self) -> &'static str {
        match self {
            PageId::Colors => "colors",
            PageId::Typography => "typography",
            PageId::Icons => "icons",
            PageId::Box => "box",
            PageId::Stack => "stack",
            PageId::Divider => "divider",
            PageId::Button => "button",
            PageId::Input => "input",
            PageId::Checkbox => "checkbox",
            PageId::Select => "select",
            PageId::Autocomplete => "autocomplete",
            PageId::DatePicker => "date-picker",
            PageId::Dropdown => "dropdown",
            PageId::Card => "card",
            PageId::Badge => "badge",
            PageId::Avatar => "avatar",
            PageId::Alert => "alert",
            PageId::Spinner => "spinner",
            PageId::Skeleton => "skeleton",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            PageId::Colors => "Colors",
            PageId::Typography => "Typography",
            PageId::Icons => "Icons",
            PageId::Box => "Box",
            PageId::Stack => "Stack",
            PageId::Divider => "Divider",
            PageId::Button => "Button",
            PageId::Input => "Input",
            PageId::Checkbox => "Checkbox",
            PageId::Select => "Select",
            PageId::Autocomplete => "Autocomplete",
            PageId::DatePicker => "DatePicker",
            PageId::Dropdown => "Dropdown",
            PageId::Card => "Card",
            PageId::Badge => "Badge",
            PageId::Avatar => "Avatar",
            PageId::Alert => "Alert",
            PageId::Spinner => "Spinner",
            PageId::Skeleton => "Skeleton",
        }
    }

    /// Icon name shown in the sidebar, and alone when it is collapsed.
    pub const fn icon(self) -> &'static str {
        match self {
            PageId::Colors => "star",
            PageId::Typography => "edit",
            PageId::Icons => "heart",
            PageId::Box => "plus",
            PageId::Stack => "menu",
            PageId::Divider => "minus",
            PageId::Button => "check",
            PageId::Input => "search",
            PageId::Checkbox => "success",
            PageId::Select => "chevron-down",
            PageId::Autocomplete => "filter",
            PageId::DatePicker => "calendar",
            PageId::Dropdown => "more",
            PageId::Card => "copy",
            PageId::Badge => "bell",
            PageId::Avatar => "user",
            PageId::Alert => "warning",
            PageId::Spinner => "refresh",
            PageId::Skeleton => "eye",
        }
    }

    /// One-line summary under the page title.
    pub const fn description(self) -> &'static str {
        match self {
            PageId::Colors => "The palette, semantic colors and theme roles.",
            PageId::Typography => "Text, headings, labels and inline code.",
            PageId::Icons => "The named glyph table.",
            PageId::Box => "Padding, margin, border and background around children.",
            PageId::Stack => "Row and column layout with spacing and alignment.",
            PageId::Divider => "Horizontal and vertical rules, optionally labelled.",
            PageId::Button => "Clickable actions in five variants.",
            PageId::Input => "Single-line text entry with addons and validation.",
            PageId::Checkbox => "Boolean toggles and checkbox groups.",
            PageId::Select => "Pick one or several values from a list.",
            PageId::Autocomplete => "Text entry narrowed to matching options.",
            PageId::DatePicker => "Typed or calendar date entry.",
            PageId::Dropdown => "Action menus with submenus and shortcuts.",
            PageId::Card => "Grouped content with header, body and footer.",
            PageId::Badge => "Short status labels.",
            PageId::Avatar => "Initials, status dots and avatar groups.",
            PageId::Alert => "Status messages, closable or self-dismissing.",
            PageId::Spinner => "Animated busy indicators.",
            PageId::Skeleton => "Placeholders while content loads.",
        }
    }

    pub fn index(self) -> usize {
        PageId::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    /// The page `step` places after this one in sidebar order, wrapping.
    pub fn step(self, step: isize) -> PageId {
        let len = PageId::ALL.len() as isize;
        let next = (self.index() as isize + step).rem_euclid(len);
        PageId::ALL[next as usize]
    }

    pub fn from_slug(slug: &str) -> Result<PageId, UnknownPage> {
        let wanted = slug.trim().to_ascii_lowercase();
        PageId::ALL
            .iter()
            .copied()
            .find(|p| p.slug() == wanted)
            .ok_or_else(|| UnknownPage(slug.to_string()))
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for PageId {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::from_slug(s)
    }
}

/// A titled group of pages in the sidebar.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub title: &'static str,
    pub pages: &'static [PageId],
}

pub const CATEGORIES: &[Category] = &[
    Category {
        title: "Getting Started",
        pages: &[PageId::Colors, PageId::Typography, PageId::Icons],
    },
    Category {
        title: "Layout",
        pages: &[PageId::Box, PageId::Stack, PageId::Divider],
    },
    Category {
        title: "Form",
        pages: &[
            PageId::Button,
            PageId::Input,
            PageId::Checkbox,
            PageId::Select,
            PageId::Autocomplete,
            PageId::DatePicker,
            PageId::Dropdown,
        ],
    },
    Category {
        title: "Data Display",
        pages: &[PageId::Card, PageId::Badge, PageId::Avatar],
    },
    Category {
        title: "Feedback",
        pages: &[PageId::Alert, PageId::Spinner, PageId::Skeleton],
    },
];
