//! Runtime services available to handlers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::pointer::PointerWatch;
use crate::wakeup::WakeupHandle;

/// Handle to the runtime, cloned into handlers and timers.
///
/// Requests are queued here and carried out by the runtime after the
/// current handler returns.
#[derive(Debug, Clone, Default)]
pub struct Context {
    quit: Arc<AtomicBool>,
    focus_request: Arc<Mutex<Option<String>>>,
    focused: Arc<Mutex<Option<String>>>,
    clipboard: Arc<Mutex<Vec<String>>>,
    viewport: Arc<Mutex<(u16, u16)>>,
    wakeup: WakeupHandle,
    pointer: PointerWatch,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the runtime after the current event.
    pub fn quit(&self) {
        log::info!("quit requested");
        self.quit.store(true, Ordering::SeqCst);
    }

    pub fn should_quit(&self) -> bool {
        self.quit.load(Ordering::SeqCst)
    }

    /// Move focus to the element with `id` once the handler returns.
    pub fn focus(&self, id: impl Into<String>) {
        let mut request = self.focus_request.lock().unwrap_or_else(|p| p.into_inner());
        *request = Some(id.into());
    }

    pub fn take_focus_request(&self) -> Option<String> {
        self.focus_request
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .take()
    }

    /// Record the focused element. Set by the runtime before each build.
    pub fn set_focused(&self, id: Option<String>) {
        *self.focused.lock().unwrap_or_else(|p| p.into_inner()) = id;
    }

    pub fn focused(&self) -> Option<String> {
        self.focused.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused
            .lock()
            .map(|f| f.as_deref() == Some(id))
            .unwrap_or(false)
    }

    /// Record the terminal size. Set by the runtime before each build.
    pub fn set_viewport(&self, width: u16, height: u16) {
        *self.viewport.lock().unwrap_or_else(|p| p.into_inner()) = (width, height);
    }

    /// Terminal size as `(width, height)` at the last build.
    pub fn viewport(&self) -> (u16, u16) {
        *self.viewport.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Queue `text` for the system clipboard. The runtime writes it through
    /// the terminal's OSC 52 sequence.
    pub fn copy_to_clipboard(&self, text: impl Into<String>) {
        let text = text.into();
        log::debug!("clipboard copy queued len={}", text.len());
        self.clipboard
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(text);
    }

    pub fn take_clipboard(&self) -> Vec<String> {
        std::mem::take(&mut *self.clipboard.lock().unwrap_or_else(|p| p.into_inner()))
    }

    /// Ask for a render from outside the event loop.
    pub fn request_render(&self) {
        self.wakeup.send();
    }

    pub fn wakeup(&self) -> &WakeupHandle {
        &self.wakeup
    }

    /// Outside-click watches for open popups.
    pub fn pointer(&self) -> &PointerWatch {
        &self.pointer
    }
}
