//! Open/closed, query and highlight state of a filterable option list.

use coreui_dom::Key;

use super::filter::Filter;
use super::option::{SelectOption, display_order, group_rank};

/// What a key did to the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nav {
    /// Not a list key; the widget or the runtime may use it.
    Ignored,
    /// Consumed: opened, moved the highlight, or hit nothing selectable.
    Handled,
    /// Escape closed the list.
    Closed,
    /// Enter on an enabled option.
    Commit(SelectOption),
}

/// Visible options under one group header. `entries` pairs each option
/// with its position in the visible list, which is what the highlight
/// refers to.
#[derive(Debug)]
pub struct Section<'a> {
    pub group: Option<&'a str>,
    pub entries: Vec<(usize, &'a SelectOption)>,
}

#[derive(Debug, Clone, Default)]
pub struct Combobox {
    options: Vec<SelectOption>,
    order: Vec<usize>,
    filter: Filter,
    min_chars: usize,
    open: bool,
    query: String,
    visible: Vec<usize>,
    highlighted: Option<usize>,
}

impl Combobox {
    pub fn new(options: impl IntoIterator<Item = SelectOption>) -> Self {
        let options: Vec<SelectOption> = options.into_iter().collect();
        let order = display_order(&options);
        Self {
            visible: order.clone(),
            order,
            options,
            ..Default::default()
        }
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self.refilter();
        self
    }

    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self.refilter();
        self
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.refilter();
    }

    pub fn set_options(&mut self, options: impl IntoIterator<Item = SelectOption>) {
        self.options = options.into_iter().collect();
        self.order = display_order(&self.options);
        self.refilter();
        self.highlighted = self.highlighted.filter(|&h| h < self.visible.len());
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn option(&self, id: &str) -> Option<&SelectOption> {
        self.options.iter().find(|o| o.id == id)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether enough text was typed to filter and show the list.
    pub fn meets_min_chars(&self) -> bool {
        self.query.chars().count() >= self.min_chars
    }

    /// Visible options in visual order.
    pub fn visible(&self) -> impl Iterator<Item = &SelectOption> {
        self.visible.iter().map(|&i| &self.options[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Visible options split under their group headers.
    pub fn sections(&self) -> Vec<Section<'_>> {
        let mut sections: Vec<Section<'_>> = Vec::new();
        for (pos, &i) in self.visible.iter().enumerate() {
            let option = &self.options[i];
            let group = option.group.as_deref();
            match sections.last_mut() {
                Some(section) if section.group == group => section.entries.push((pos, option)),
                _ => sections.push(Section {
                    group,
                    entries: vec![(pos, option)],
                }),
            }
        }
        sections
    }

    /// Position of the highlight in the visible list.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn highlighted_option(&self) -> Option<&SelectOption> {
        self.highlighted
            .and_then(|h| self.visible.get(h))
            .map(|&i| &self.options[i])
    }

    /// Open the list with the first entry highlighted. Refused while the
    /// query is shorter than `min_chars`.
    pub fn open(&mut self) -> bool {
        if !self.meets_min_chars() {
            log::debug!(
                "Combobox::open refused query_len={} min_chars={}",
                self.query.chars().count(),
                self.min_chars
            );
            return false;
        }
        if !self.open {
            self.open = true;
            self.highlight_first();
        }
        true
    }

    pub fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Replace the filter text. The list is recomputed from the full option
    /// list and the highlight goes back to the first match. Below
    /// `min_chars` the list closes.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
        if self.meets_min_chars() {
            self.open = true;
            self.highlight_first();
        } else {
            self.close();
        }
    }

    /// Drop the filter text without touching the open state.
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.refilter();
        if self.open {
            self.highlight_first();
        }
    }

    pub fn highlight_first(&mut self) {
        self.highlighted = (!self.visible.is_empty()).then_some(0);
    }

    pub fn highlight_last(&mut self) {
        self.highlighted = self.visible.len().checked_sub(1);
    }

    pub fn clear_highlight(&mut self) {
        self.highlighted = None;
    }

    /// Move the highlight by `delta`, wrapping at both ends. From no
    /// highlight, moving down lands on the first entry and up on the last.
    pub fn move_highlight(&mut self, delta: isize) {
        let len = self.visible.len() as isize;
        if len == 0 {
            self.highlighted = None;
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(h) => (h as isize + delta).rem_euclid(len) as usize,
            None if delta >= 0 => 0,
            None => (len - 1) as usize,
        });
    }

    /// Keyboard transitions shared by every selection widget.
    pub fn handle_key(&mut self, key: Key) -> Nav {
        if !self.open {
            return match key {
                Key::Down => {
                    self.open();
                    Nav::Handled
                }
                _ => Nav::Ignored,
            };
        }

        match key {
            Key::Down => self.move_highlight(1),
            Key::Up => self.move_highlight(-1),
            Key::Home => self.highlight_first(),
            Key::End => self.highlight_last(),
            Key::Escape => {
                self.close();
                return Nav::Closed;
            }
            Key::Enter => {
                return match self.highlighted_option() {
                    Some(option) if !option.disabled => Nav::Commit(option.clone()),
                    _ => Nav::Handled,
                };
            }
            _ => return Nav::Ignored,
        }
        Nav::Handled
    }

    fn refilter(&mut self) {
        if self.query.is_empty() || !self.meets_min_chars() {
            self.visible = self.order.clone();
            return;
        }

        let mut visible = self.filter.apply(&self.options, &self.order, &self.query);

        // Ranked filters may interleave groups; keep headers contiguous
        let mut groups: Vec<&str> = Vec::new();
        for &i in &self.order {
            if let Some(group) = self.options[i].group.as_deref()
                && !groups.contains(&group)
            {
                groups.push(group);
            }
        }
        visible.sort_by_key(|&i| group_rank(&groups, self.options[i].group.as_deref()));

        log::debug!(
            "Combobox::refilter query={:?} visible={}/{}",
            self.query,
            visible.len(),
            self.options.len()
        );
        self.visible = visible;
    }
}
