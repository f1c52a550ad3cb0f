// Tab Panel Coordinator
// Owns the active tab index, runs the keyboard state machine and derives
// the views rendered by the tab list and panels

use super::error::{Result, TabPanelError};
use super::events::{KeyOutcome, NavKey};
use super::focus::{FocusTarget, FocusTracker};
use super::item::{pair_descriptors, validate_items, PanelDescriptor, TabDescriptor, TabItem};
use super::view::{PanelView, TabView};

/// Compute the active index after `key` for a list of `count` tabs.
///
/// Left and Right wrap around; Home and End jump to the ends.
pub fn next_index(current: usize, key: NavKey, count: usize) -> usize {
    let last = count.saturating_sub(1);
    match key {
        NavKey::ArrowLeft => {
            if current > 0 {
                current - 1
            } else {
                last
            }
        }
        NavKey::ArrowRight => {
            if current < last {
                current + 1
            } else {
                0
            }
        }
        NavKey::Home => 0,
        NavKey::End => last,
    }
}

/// Accessible tab panel state
#[derive(Debug)]
pub struct TabPanel<F = FocusTracker> {
    /// Accessible name of the tab list
    aria_label: String,

    /// Tabs and their panels, never empty
    items: Vec<TabItem>,

    /// Index of the selected tab, always `< items.len()`
    active: usize,

    /// Whether focus sits inside the active panel rather than on its tab
    panel_focused: bool,

    focus: F,
}

impl TabPanel<FocusTracker> {
    /// Create a tab panel that tracks focus internally
    pub fn new(aria_label: impl Into<String>, items: Vec<TabItem>) -> Result<Self> {
        Self::with_focus(aria_label, items, FocusTracker::new())
    }

    /// Create a tab panel from separate tab and panel lists
    pub fn from_descriptors(
        aria_label: impl Into<String>,
        tabs: Vec<TabDescriptor>,
        panels: Vec<PanelDescriptor>,
    ) -> Result<Self> {
        Self::new(aria_label, pair_descriptors(tabs, panels)?)
    }
}

impl<F: FocusTarget> TabPanel<F> {
    /// Create a tab panel that reports focus moves to `focus`.
    ///
    /// The first tab starts selected and is focused immediately.
    pub fn with_focus(
        aria_label: impl Into<String>,
        items: Vec<TabItem>,
        focus: F,
    ) -> Result<Self> {
        validate_items(&items)?;

        let mut panel = Self {
            aria_label: aria_label.into(),
            items,
            active: 0,
            panel_focused: false,
            focus,
        };
        panel.sync_focus();
        Ok(panel)
    }

    /// Offer a navigation key to the tab list. Keys pressed while the panel
    /// holds focus belong to the panel content and are ignored.
    pub fn handle_key(&mut self, key: NavKey) -> KeyOutcome {
        if self.panel_focused {
            return KeyOutcome::Ignored;
        }

        let next = next_index(self.active, key, self.items.len());
        tracing::debug!(from = self.active, to = next, ?key, "Tab key navigation");

        self.active = next;
        self.sync_focus();
        KeyOutcome::Handled
    }

    /// Offer a DOM-style key name; anything but the navigation keys is ignored
    pub fn handle_key_name(&mut self, name: &str) -> KeyOutcome {
        match NavKey::from_name(name) {
            Some(key) => self.handle_key(key),
            None => KeyOutcome::Ignored,
        }
    }

    /// Select the tab at `index`; focus returns to the tab
    pub fn select_tab(&mut self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(TabPanelError::IndexOutOfRange {
                index,
                count: self.items.len(),
            });
        }

        tracing::debug!(from = self.active, to = index, "Tab selected");
        self.active = index;
        self.panel_focused = false;
        self.sync_focus();
        Ok(())
    }

    /// Sequential focus forward: from the active tab into its panel.
    /// From the panel, focus leaves the widget and the key is ignored.
    pub fn focus_next(&mut self) -> KeyOutcome {
        if self.panel_focused {
            return KeyOutcome::Ignored;
        }

        self.panel_focused = true;
        let id = &self.items[self.active].controls_id;
        tracing::debug!(panel = self.active, "Focus moved into panel");
        self.focus.request_panel_focus(self.active, id);
        KeyOutcome::Handled
    }

    /// Sequential focus backward: from the panel back to the active tab
    pub fn focus_previous(&mut self) -> KeyOutcome {
        if !self.panel_focused {
            return KeyOutcome::Ignored;
        }

        self.panel_focused = false;
        self.sync_focus();
        KeyOutcome::Handled
    }

    fn sync_focus(&mut self) {
        let id = &self.items[self.active].label_id;
        self.focus.request_focus(self.active, id);
    }
}

impl<F> TabPanel<F> {
    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; construction rejects empty tab sets
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.items.len() - 1
    }

    pub fn aria_label(&self) -> &str {
        &self.aria_label
    }

    pub fn active_item(&self) -> &TabItem {
        &self.items[self.active]
    }

    pub fn is_panel_focused(&self) -> bool {
        self.panel_focused
    }

    pub fn focus(&self) -> &F {
        &self.focus
    }

    /// Views for every tab, in order
    pub fn tab_views(&self) -> Vec<TabView<'_>> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| TabView {
                index,
                label: &item.label,
                active: index == self.active,
                focused: !self.panel_focused && index == self.active,
                controls_id: &item.controls_id,
                id: &item.label_id,
            })
            .collect()
    }

    /// Views for every panel, in order
    pub fn panel_views(&self) -> Vec<PanelView<'_>> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| self.panel_view(index, item))
            .collect()
    }

    /// View of the only panel that is shown
    pub fn active_panel(&self) -> PanelView<'_> {
        self.panel_view(self.active, self.active_item())
    }

    fn panel_view<'a>(&'a self, index: usize, item: &'a TabItem) -> PanelView<'a> {
        PanelView {
            index,
            content: &item.content,
            id: &item.controls_id,
            labelled_by: &item.label_id,
            label: &item.label,
            focused: self.panel_focused && index == self.active,
        }
    }
}
