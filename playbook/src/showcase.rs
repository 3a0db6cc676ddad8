//! Page building blocks: a titled live preview with its code, and the
//! props table of a widget.

use std::sync::Arc;
use std::time::Duration;

use coreui::dom::{Align, Border, Color, Edges, Element, Justify, Size, Style, TextWrap};
use coreui::style::{ColorScheme, PropDoc};
use coreui::timer::Timeout;
use coreui::widgets::{Button, ButtonSize, ButtonVariant, Heading, HeadingLevel};
use coreui::{Context, HandlerContext, HandlerRegistry, State, WidgetHandlers};

/// Copy feedback shown when the config does not say otherwise.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// A handler map holding one callback.
pub fn on<F>(name: &'static str, f: F) -> WidgetHandlers
where
    F: Fn(&HandlerContext) + Send + Sync + 'static,
{
    let mut handlers = WidgetHandlers::new();
    handlers.insert(name, Arc::new(f));
    handlers
}

fn muted() -> Style {
    Style::new().foreground(Color::var("muted"))
}

/// Code visibility and copy feedback of one showcase.
#[derive(Debug, Default)]
pub struct ShowcaseState {
    show_code: bool,
    copied: bool,
    revert: Timeout,
}

impl ShowcaseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_code_shown(&self) -> bool {
        self.show_code
    }

    pub fn toggle_code(&mut self) -> bool {
        self.show_code = !self.show_code;
        log::debug!("ShowcaseState::toggle_code shown={}", self.show_code);
        self.show_code
    }

    /// Whether the copy button reads "✓ Copied".
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Whether the copy label is waiting to revert.
    pub fn is_reverting(&self) -> bool {
        self.revert.is_pending()
    }
}

/// Put the trimmed `code` on the clipboard and flag the copy for
/// `feedback`. Copying again restarts the countdown.
pub fn copy_code(state: &State<ShowcaseState>, code: &str, cx: &Context, feedback: Duration) {
    cx.copy_to_clipboard(code.trim());
    let weak = state.downgrade();
    let wakeup = cx.wakeup().clone();
    state.update(|s| {
        s.copied = true;
        s.revert.arm(feedback, wakeup, move || {
            if let Some(state) = weak.upgrade() {
                state.update(|s| s.copied = false);
            }
        });
    });
}

/// Syntax-free code listing with a copy button.
#[derive(Debug, Clone)]
pub struct CodeBlock {
    id: String,
    code: String,
    language: String,
    copy_feedback: Duration,
}

impl CodeBlock {
    pub fn new(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            language: "rust".into(),
            copy_feedback: COPY_FEEDBACK,
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn copy_feedback(mut self, feedback: Duration) -> Self {
        self.copy_feedback = feedback;
        self
    }

    pub fn build(self, registry: &HandlerRegistry, state: &State<ShowcaseState>) -> Element {
        log::debug!("CodeBlock::build id={}", self.id);
        let copied = state.with(|s| s.is_copied());

        let copy = {
            let weak = state.downgrade();
            let code = self.code.clone();
            let feedback = self.copy_feedback;
            on("on_activate", move |hx| {
                if let Some(state) = weak.upgrade() {
                    copy_code(&state, &code, hx.cx(), feedback);
                }
            })
        };
        let button = Button::new(if copied { "✓ Copied" } else { "Copy" })
            .id(format!("{}-copy", self.id))
            .variant(ButtonVariant::Ghost)
            .size(ButtonSize::Xs)
            .color(if copied {
                ColorScheme::Success
            } else {
                ColorScheme::Gray
            })
            .build(registry, &copy);

        let header = Element::row()
            .width(Size::Fill)
            .justify(Justify::SpaceBetween)
            .align(Align::Center)
            .child(Element::text(self.language).style(muted()))
            .child(button);

        let lines = self
            .code
            .trim_matches('\n')
            .lines()
            .map(|line| Element::text(line).style(Style::new().foreground(Color::var("fg"))))
            .collect::<Vec<_>>();

        Element::col()
            .id(&self.id)
            .width(Size::Fill)
            .padding(Edges::horizontal(1))
            .style(Style::new().background(Color::var("subtle")))
            .child(header)
            .children(lines)
    }
}

/// A titled section: live preview, code toggle and code block.
pub struct Showcase {
    id: String,
    title: String,
    description: Option<String>,
    preview: Vec<Element>,
    code: Option<String>,
    copy_feedback: Duration,
    state: State<ShowcaseState>,
}

impl Showcase {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        state: State<ShowcaseState>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            preview: Vec::new(),
            code: None,
            copy_feedback: COPY_FEEDBACK,
            state,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn preview(mut self, element: Element) -> Self {
        self.preview.push(element);
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn copy_feedback(mut self, feedback: Duration) -> Self {
        self.copy_feedback = feedback;
        self
    }

    pub fn build(self, registry: &HandlerRegistry) -> Element {
        log::debug!("Showcase::build id={}", self.id);
        let shown = self.state.with(|s| s.is_code_shown());

        let mut header = Element::row()
            .id(format!("{}-header", self.id))
            .width(Size::Fill)
            .justify(Justify::SpaceBetween)
            .align(Align::Center)
            .child(
                Heading::new(&self.title)
                    .level(HeadingLevel::H4)
                    .build(registry, &WidgetHandlers::new()),
            );
        if self.code.is_some() {
            let weak = self.state.downgrade();
            let toggle = on("on_activate", move |_hx| {
                if let Some(state) = weak.upgrade() {
                    state.update(|s| s.toggle_code());
                }
            });
            header = header.child(
                Button::new(if shown { "◁ Hide Code" } else { "▷ Show Code" })
                    .id(format!("{}-toggle", self.id))
                    .variant(ButtonVariant::Ghost)
                    .size(ButtonSize::Sm)
                    .color(ColorScheme::Gray)
                    .build(registry, &toggle),
            );
        }

        let mut section = Element::col().id(&self.id).width(Size::Fill).child(header);
        if let Some(description) = &self.description {
            section = section.child(
                Element::text(description)
                    .style(muted())
                    .text_wrap(TextWrap::Wrap),
            );
        }

        let preview = Element::col()
            .id(format!("{}-preview", self.id))
            .width(Size::Fill)
            .gap(1)
            .padding(Edges::horizontal(1))
            .style(
                Style::new()
                    .border(Border::Rounded)
                    .border_color(Color::var("border")),
            )
            .children(self.preview);
        section = section.child(preview);

        if shown && let Some(code) = self.code {
            section = section.child(
                CodeBlock::new(format!("{}-code", self.id), code)
                    .copy_feedback(self.copy_feedback)
                    .build(registry, &self.state),
            );
        }
        section
    }
}

const PROP_COLUMNS: [(&str, u16); 3] = [("Prop", 16), ("Type", 28), ("Default", 12)];

/// The configuration surface of a widget, one row per prop.
#[derive(Debug, Clone)]
pub struct PropsTable {
    id: String,
    title: String,
    rows: &'static [PropDoc],
}

impl PropsTable {
    pub fn new(id: impl Into<String>, rows: &'static [PropDoc]) -> Self {
        Self {
            id: id.into(),
            title: "Props".into(),
            rows,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    fn row(cells: [&str; 4], style: Style) -> Element {
        let mut row = Element::row().width(Size::Fill).gap(1);
        for ((_, width), cell) in PROP_COLUMNS.iter().zip(cells) {
            row = row.child(
                Element::text(cell)
                    .width(Size::Fixed(*width))
                    .text_wrap(TextWrap::Truncate)
                    .style(style.clone()),
            );
        }
        row.child(
            Element::text(cells[3])
                .width(Size::Fill)
                .text_wrap(TextWrap::Truncate)
                .style(style),
        )
    }

    pub fn build(self, registry: &HandlerRegistry) -> Element {
        log::debug!("PropsTable::build id={} rows={}", self.id, self.rows.len());

        let header = Self::row(["Prop", "Type", "Default", "Description"], Style::new().bold());
        let rule = Element::fill('─')
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .style(Style::new().foreground(Color::var("border")));
        let rows = self.rows.iter().map(|prop| {
            let default = if prop.default.is_empty() {
                "-"
            } else {
                prop.default
            };
            Self::row([prop.name, prop.accepted, default, prop.effect], Style::new())
        });

        Element::col()
            .id(&self.id)
            .width(Size::Fill)
            .child(
                Heading::new(&self.title)
                    .level(HeadingLevel::H4)
                    .build(registry, &WidgetHandlers::new()),
            )
            .child(header)
            .child(rule)
            .children(rows)
    }
}
