use crate::element::{find_element, find_element_mut, visible_children, Element};

/// Tracks which element is currently focused.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        self.step(root, 1)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        self.step(root, -1)
    }

    fn step(&mut self, root: &Element, delta: isize) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let len = focusable.len() as isize;
        let current = self
            .focused
            .as_ref()
            .and_then(|id| focusable.iter().position(|f| f == id));
        let next = match current {
            Some(i) => (i as isize + delta).rem_euclid(len) as usize,
            None if delta >= 0 => 0,
            None => focusable.len() - 1,
        };

        let new_focus = focusable[next].clone();
        if self.focused.as_ref() == Some(&new_focus) {
            return None;
        }
        self.focused = Some(new_focus.clone());
        Some(new_focus)
    }

    /// Drop focus if the focused element is gone from the tree or can no
    /// longer take focus. Returns the ID that lost focus.
    pub fn validate(&mut self, root: &Element) -> Option<String> {
        let id = self.focused.as_ref()?;
        let still_valid = find_element(root, id).is_some_and(|e| e.focusable && !e.disabled);
        if still_valid {
            None
        } else {
            self.focused.take()
        }
    }

    /// Set the `focused` flag on the focused element so its focus style applies.
    pub fn apply(&self, root: &mut Element) {
        if let Some(id) = &self.focused {
            if let Some(element) = find_element_mut(root, id) {
                element.focused = true;
            }
        }
    }
}

/// Focusable, enabled elements in document order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut out = Vec::new();
    collect(root, &mut out);
    out
}

fn collect(element: &Element, out: &mut Vec<String>) {
    if element.focusable && !element.disabled {
        out.push(element.id.clone());
    }
    for child in visible_children(element) {
        collect(child, out);
    }
}
