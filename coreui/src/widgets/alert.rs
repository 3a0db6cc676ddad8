//! Alert with optional close button and auto-dismiss.

use std::sync::Arc;
use std::time::Duration;

use coreui_dom::{Align, Edges, Element, Justify, Position, Size, Style};

use super::icon::glyph_or_unknown;
use super::{HasState, NeedsState, handler, hidden};
use crate::handler_context::{EventData, Handler, HandlerContext, HandlerRegistry, WidgetHandlers};
use crate::state::State;
use crate::style::{ColorScheme, PropDoc, named_enum};
use crate::timer::Timeout;

named_enum! {
    pub enum AlertStatus ("alert status") {
        Info = "info",
        Success = "success",
        Warning = "warning",
        Error = "error",
    }
    default Info
}

impl AlertStatus {
    pub const fn color(self) -> ColorScheme {
        match self {
            AlertStatus::Info => ColorScheme::Info,
            AlertStatus::Success => ColorScheme::Success,
            AlertStatus::Warning => ColorScheme::Warning,
            AlertStatus::Error => ColorScheme::Error,
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            AlertStatus::Info => "info",
            AlertStatus::Success => "success",
            AlertStatus::Warning => "warning",
            AlertStatus::Error => "error",
        }
    }
}

named_enum! {
    pub enum AlertVariant ("alert variant") {
        Subtle = "subtle",
        Solid = "solid",
        LeftAccent = "left-accent",
        TopAccent = "top-accent",
    }
    default Subtle
}

impl AlertVariant {
    pub fn style(self, color: ColorScheme) -> Style {
        match self {
            AlertVariant::Solid => Style::new()
                .background(color.base())
                .foreground(color.on_solid()),
            AlertVariant::Subtle | AlertVariant::LeftAccent | AlertVariant::TopAccent => {
                Style::new()
                    .background(color.tint())
                    .foreground(color.on_tint())
            }
        }
    }
}

/// Open flag and dismiss timer of one alert.
#[derive(Debug)]
pub struct AlertState {
    open: bool,
    closed_count: usize,
    armed: bool,
    timer: Timeout,
}

impl Default for AlertState {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertState {
    /// A visible alert.
    pub fn new() -> Self {
        Self {
            open: true,
            closed_count: 0,
            armed: false,
            timer: Timeout::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// How many times the alert has gone from open to closed.
    pub fn closed_count(&self) -> usize {
        self.closed_count
    }

    /// Whether an auto-dismiss is scheduled.
    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Dismiss by hand. Cancels a pending auto-dismiss. Returns false when
    /// already closed.
    pub fn close(&mut self) -> bool {
        self.timer.cancel();
        self.expire()
    }

    /// Show the alert again. The next build re-arms its timer.
    pub fn show(&mut self) {
        if !self.open {
            log::debug!("AlertState::show");
            self.open = true;
            self.armed = false;
        }
    }

    fn expire(&mut self) -> bool {
        if !self.open {
            return false;
        }
        log::debug!("AlertState::close");
        self.open = false;
        self.closed_count += 1;
        true
    }
}

#[derive(Debug)]
pub struct Alert<S = NeedsState> {
    state_marker: S,
    id: Option<String>,
    status: AlertStatus,
    variant: AlertVariant,
    title: Option<String>,
    description: Option<String>,
    closable: bool,
    hide_icon: bool,
    duration: u64,
}

impl Default for Alert<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl Alert<NeedsState> {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("status", "info | success | warning | error", "info", "Color and icon"),
        PropDoc::new("variant", "subtle | solid | left-accent | top-accent", "subtle", "Visual style"),
        PropDoc::new("title", "string", "-", "Bold first line"),
        PropDoc::new("description", "string", "-", "Body text"),
        PropDoc::new("closable", "bool", "false", "Show a close button"),
        PropDoc::new("hide_icon", "bool", "false", "Omit the status icon"),
        PropDoc::new("duration", "ms", "0", "Auto-dismiss delay, 0 for never"),
        PropDoc::new("on_close", "handler", "-", "Fires once when the alert closes"),
    ];

    pub fn new() -> Self {
        Self {
            state_marker: NeedsState,
            id: None,
            status: AlertStatus::default(),
            variant: AlertVariant::default(),
            title: None,
            description: None,
            closable: false,
            hide_icon: false,
            duration: 0,
        }
    }

    pub fn state(self, s: &State<AlertState>) -> Alert<HasState<'_, AlertState>> {
        Alert {
            state_marker: HasState(s),
            id: self.id,
            status: self.status,
            variant: self.variant,
            title: self.title,
            description: self.description,
            closable: self.closable,
            hide_icon: self.hide_icon,
            duration: self.duration,
        }
    }
}

impl<S> Alert<S> {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn status(mut self, status: AlertStatus) -> Self {
        self.status = status;
        self
    }

    pub fn variant(mut self, variant: AlertVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn closable(mut self) -> Self {
        self.closable = true;
        self
    }

    pub fn hide_icon(mut self) -> Self {
        self.hide_icon = true;
        self
    }

    /// Auto-dismiss after `ms` milliseconds. Zero never dismisses.
    pub fn duration(mut self, ms: u64) -> Self {
        self.duration = ms;
        self
    }
}

fn notify_close(on_close: Option<&Handler>, hx: &HandlerContext) {
    if let Some(on_close) = on_close {
        hx.emit(on_close, EventData::None);
    }
}

impl<'a> Alert<HasState<'a, AlertState>> {
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let id = self
            .id
            .clone()
            .unwrap_or_else(|| format!("alert-{}", self.status));

        if !state.with(|s| s.open) {
            log::debug!("Alert::build id={} closed", id);
            return hidden(&id);
        }
        log::debug!(
            "Alert::build id={} status={} variant={}",
            id,
            self.status,
            self.variant
        );

        let on_close = handler(handlers, "on_close");
        if self.duration > 0 {
            let cx = registry.context().clone();
            let weak = state.downgrade();
            let on_close = on_close.clone();
            let delay = Duration::from_millis(self.duration);
            state.update(|s| {
                if s.armed {
                    return;
                }
                s.armed = true;
                s.timer.arm(delay, cx.wakeup().clone(), move || {
                    let Some(state) = weak.upgrade() else {
                        return;
                    };
                    if state.update(|s| s.expire()) {
                        notify_close(on_close.as_ref(), &HandlerContext::new(&cx));
                    }
                });
            });
        }

        let color = self.status.color();
        let accent = Style::new().foreground(match self.variant {
            AlertVariant::Solid => color.on_solid(),
            _ => color.base(),
        });

        let mut text = Element::col().flex_grow(1);
        if let Some(title) = self.title {
            text = text.child(Element::text(title).style(Style::new().bold()));
        }
        if let Some(description) = self.description {
            text = text.child(Element::text(description));
        }

        let mut body = Element::row()
            .gap(1)
            .width(Size::Fill)
            .padding(Edges::horizontal(1));
        if !self.hide_icon {
            body = body.child(
                Element::text(glyph_or_unknown(self.status.icon()).to_string())
                    .style(accent.clone()),
            );
        }
        body = body.child(text);

        if self.closable {
            let close_id = format!("{}-close", id);
            body = body.child(
                Element::text("✕")
                    .id(&close_id)
                    .clickable(true)
                    .style_focused(Style::new().bold()),
            );
            let weak = state.downgrade();
            registry.register(
                &close_id,
                "on_activate",
                Arc::new(move |hx| {
                    let Some(state) = weak.upgrade() else {
                        return;
                    };
                    if state.update(|s| s.close()) {
                        notify_close(on_close.as_ref(), hx);
                    }
                }),
            );
        }

        let style = self.variant.style(color);
        let alert = match self.variant {
            AlertVariant::LeftAccent => Element::row()
                .child(Element::fill('▌').height(Size::Fill).style(accent))
                .child(body),
            AlertVariant::TopAccent => Element::col()
                .child(Element::fill('▀').width(Size::Fill).style(accent))
                .child(body),
            AlertVariant::Subtle | AlertVariant::Solid => Element::row().child(body),
        };
        alert.id(&id).width(Size::Fill).style(style)
    }
}

named_enum! {
    pub enum AlertPosition ("alert position") {
        Top = "top",
        TopRight = "top-right",
        TopLeft = "top-left",
        Bottom = "bottom",
        BottomRight = "bottom-right",
        BottomLeft = "bottom-left",
    }
    default TopRight
}

/// Floats a stack of built alerts over the screen edge.
#[derive(Debug, Clone)]
pub struct AlertContainer {
    position: AlertPosition,
    width: u16,
    alerts: Vec<Element>,
}

impl Default for AlertContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertContainer {
    pub const PROPS: &'static [PropDoc] = &[
        PropDoc::new("position", "top | top-right | top-left | bottom | bottom-right | bottom-left", "top-right", "Screen edge"),
        PropDoc::new("width", "cells", "48", "Width of each alert"),
    ];

    pub fn new() -> Self {
        Self {
            position: AlertPosition::default(),
            width: 48,
            alerts: Vec::new(),
        }
    }

    pub fn position(mut self, position: AlertPosition) -> Self {
        self.position = position;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn alert(mut self, alert: Element) -> Self {
        self.alerts.push(alert);
        self
    }

    pub fn build(self, _registry: &HandlerRegistry, _handlers: &WidgetHandlers) -> Element {
        log::debug!(
            "AlertContainer::build position={} alerts={}",
            self.position,
            self.alerts.len()
        );
        let stack = Element::col()
            .gap(1)
            .width(Size::Fixed(self.width))
            .children(self.alerts);

        use AlertPosition::*;
        let layer = Element::col().position(Position::Absolute).z_index(50);
        match self.position {
            // Centered stacks span the full width so they can center.
            Top | Bottom => {
                let strip = layer
                    .width(Size::Fill)
                    .align(Align::Center)
                    .justify(Justify::Start)
                    .left(0)
                    .child(stack);
                if self.position == Top {
                    strip.top(0)
                } else {
                    strip.bottom(0)
                }
            }
            TopRight => layer.top(0).right(0).child(stack),
            TopLeft => layer.top(0).left(0).child(stack),
            BottomRight => layer.bottom(0).right(0).child(stack),
            BottomLeft => layer.bottom(0).left(0).child(stack),
        }
    }
}
