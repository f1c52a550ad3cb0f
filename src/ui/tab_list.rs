// Tab List
// Lays out tabs in a bordered row titled with the list's accessible label

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::styles::Styles;
use super::tab::Tab;
use super::theme::TabStyle;
use crate::core::TabView;

/// Drawn between adjacent tabs
pub const TAB_SEPARATOR: &str = "│";

/// Bounding box for a tab (for click detection)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl TabBounds {
    /// Check if a coordinate (x, y) is within this tab's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

pub struct TabList<'a> {
    aria_label: &'a str,
    tabs: &'a [TabView<'a>],
    style: TabStyle,
}

impl<'a> TabList<'a> {
    pub fn new(aria_label: &'a str, tabs: &'a [TabView<'a>]) -> Self {
        Self {
            aria_label,
            tabs,
            style: TabStyle::default(),
        }
    }

    pub fn style(mut self, style: TabStyle) -> Self {
        self.style = style;
        self
    }

    fn block(&self) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::tab_list_border())
            .title(Span::styled(format!(" {} ", self.aria_label), Styles::title()))
    }

    /// Calculate the bounds of each tab inside `area`, clipped to the row.
    /// Tabs that do not fit at all get no bounds.
    pub fn tab_bounds(&self, area: Rect) -> Vec<TabBounds> {
        let inner = self.block().inner(area);
        if inner.width == 0 || inner.height == 0 {
            return Vec::new();
        }

        let separator_width = u16::try_from(Span::raw(TAB_SEPARATOR).width()).unwrap_or(1);
        let mut bounds = Vec::new();
        let mut current_x = inner.x;

        for view in self.tabs {
            if current_x >= inner.right() {
                break;
            }
            let width = Tab::new(view, self.style).width().min(inner.right() - current_x);
            bounds.push(TabBounds {
                x: current_x,
                y: inner.y,
                width,
                height: 1,
            });
            current_x = current_x
                .saturating_add(width)
                .saturating_add(separator_width);
        }

        bounds
    }

    /// Get the index of the tab at the given coordinates (for click handling)
    pub fn tab_at(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        self.tab_bounds(area)
            .iter()
            .position(|b| b.contains(x, y))
    }

    /// Cell where the terminal cursor sits: the start of the focused tab's label
    pub fn focus_position(&self, area: Rect) -> Option<Position> {
        let index = self.tabs.iter().position(|t| t.focused)?;
        let bounds = self.tab_bounds(area).get(index).copied()?;
        let offset = Tab::new(&self.tabs[index], self.style).label_offset();
        Some(Position::new(
            bounds
                .x
                .saturating_add(offset)
                .min(bounds.x + bounds.width.saturating_sub(1)),
            bounds.y,
        ))
    }
}

impl Widget for TabList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = Vec::with_capacity(self.tabs.len() * 2);
        for (idx, view) in self.tabs.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(TAB_SEPARATOR, Styles::tab_separator()));
            }
            spans.push(Tab::new(view, self.style).span());
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
