//! Runtime - owns the terminal, the event loop and rendering.

mod dispatch;

use std::io::{self, Write};

use coreui_dom::element::has_animation;
use coreui_dom::{Element, Event, Key, MapTheme, Modifiers, Terminal};
use crossterm::clipboard::CopyToClipboard;
use crossterm::event::EventStream;
use crossterm::execute;
use futures::StreamExt;
use log::{debug, info, trace};
use tokio::time::{Duration, MissedTickBehavior};

pub use dispatch::{Dispatcher, Flow};

use crate::context::Context;
use crate::handler_context::HandlerRegistry;

/// Animation frame rate while anything on screen animates.
const ANIMATION_FPS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// An application the runtime drives.
pub trait App {
    /// Build the whole element tree. Called before every render; handlers
    /// registered here stay valid until the next build.
    fn element(&self, registry: &HandlerRegistry, cx: &Context) -> Element;

    /// Keys no focused widget consumed. Return true when handled.
    fn on_key(&self, _key: Key, _modifiers: Modifiers, _cx: &Context) -> bool {
        false
    }
}

/// Runs an [`App`] until Ctrl+Q or [`Context::quit`].
pub struct Runtime {
    theme: MapTheme,
    cx: Context,
}

impl Runtime {
    pub fn new(theme: MapTheme) -> Self {
        Self {
            theme,
            cx: Context::new(),
        }
    }

    /// The context handed to the app; clone it for timers set up before
    /// the loop starts.
    pub fn context(&self) -> &Context {
        &self.cx
    }

    pub async fn run(self, app: &dyn App) -> Result<(), RuntimeError> {
        let mut terminal = Terminal::new()?;
        let registry = HandlerRegistry::with_context(self.cx.clone());
        let cx = registry.context().clone();

        let wakeup = cx.wakeup().clone();
        wakeup.listen();

        let mut events = EventStream::new();
        let mut animation = tokio::time::interval(Duration::from_millis(1000 / ANIMATION_FPS));
        animation.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut dispatcher = Dispatcher::new();
        info!("runtime started");

        let mut root = Element::default();
        let mut layout = Default::default();
        let mut dirty = true;

        loop {
            if dirty {
                registry.clear();
                cx.set_focused(dispatcher.focused().map(str::to_string));
                let (width, height) = terminal.size();
                cx.set_viewport(width, height);
                root = app.element(&registry, &cx);
                dispatcher.settle(&mut root, &registry);
                layout = terminal.render(&root, &self.theme)?.clone();
            }
            let animating = has_animation(&root);

            let flow = tokio::select! {
                event = events.next() => match event {
                    Some(event) => match Event::from_crossterm(event?) {
                        Some(event) => {
                            trace!("event {:?}", event);
                            if let Event::Resize { .. } = event {
                                terminal.invalidate()?;
                            }
                            dispatcher.dispatch(&event, &root, &layout, &registry, app)
                        }
                        None => Flow::Idle,
                    },
                    None => Flow::Quit,
                },
                _ = wakeup.wait() => {
                    let ran = wakeup.run_pending();
                    debug!("wakeup jobs={}", ran);
                    Flow::Render
                }
                _ = animation.tick(), if animating => Flow::Render,
            };

            for text in cx.take_clipboard() {
                copy_to_clipboard(&text)?;
            }
            if flow == Flow::Quit || cx.should_quit() {
                break;
            }
            dirty = flow == Flow::Render;
        }

        info!("runtime stopped");
        Ok(())
    }
}

/// Write `text` to the system clipboard with an OSC 52 sequence.
fn copy_to_clipboard(text: &str) -> io::Result<()> {
    debug!("clipboard write len={}", text.len());
    let mut stdout = io::stdout();
    execute!(stdout, CopyToClipboard::to_clipboard_from(text))?;
    stdout.flush()
}
