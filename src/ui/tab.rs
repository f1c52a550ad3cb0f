// Tab
// A single selectable control in the tab list

use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use super::styles::Styles;
use super::theme::TabStyle;
use crate::core::TabView;

pub struct Tab<'a> {
    view: &'a TabView<'a>,
    style: TabStyle,
}

impl<'a> Tab<'a> {
    pub fn new(view: &'a TabView<'a>, style: TabStyle) -> Self {
        Self { view, style }
    }

    /// Text drawn for the tab. Boxed tabs keep the same width whether or not
    /// they are active so positions do not shift on selection.
    pub fn text(&self) -> String {
        match self.style {
            TabStyle::Boxed if self.view.active => format!("[ {} ]", self.view.label),
            TabStyle::Boxed => format!("  {}  ", self.view.label),
            TabStyle::Text => format!(" {} ", self.view.label),
        }
    }

    /// Display width in terminal cells, so wide labels occupy the columns
    /// they are drawn in. Saturates for labels wider than any terminal.
    pub fn width(&self) -> u16 {
        u16::try_from(self.span().width()).unwrap_or(u16::MAX)
    }

    /// Offset of the label from the tab's left edge
    pub fn label_offset(&self) -> u16 {
        match self.style {
            TabStyle::Boxed => 2,
            TabStyle::Text => 1,
        }
    }

    pub fn style(&self) -> Style {
        let base = if self.view.focused {
            Styles::tab_focused()
        } else if self.view.active {
            Styles::tab_active()
        } else {
            Styles::tab_inactive()
        };

        if self.style == TabStyle::Text && self.view.active {
            base.add_modifier(Modifier::UNDERLINED)
        } else {
            base
        }
    }

    pub fn span(&self) -> Span<'static> {
        Span::styled(self.text(), self.style())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(active: bool) -> TabView<'static> {
        TabView {
            index: 0,
            label: "Logs",
            active,
            focused: active,
            controls_id: "panel-logs",
            id: "tab-logs",
        }
    }

    #[test]
    fn test_boxed_width_is_stable() {
        let active = view(true);
        let inactive = view(false);

        assert_eq!(Tab::new(&active, TabStyle::Boxed).text(), "[ Logs ]");
        assert_eq!(Tab::new(&inactive, TabStyle::Boxed).text(), "  Logs  ");
        assert_eq!(
            Tab::new(&active, TabStyle::Boxed).width(),
            Tab::new(&inactive, TabStyle::Boxed).width()
        );
    }

    #[test]
    fn test_text_style_underlines_active() {
        let active = view(true);
        let inactive = view(false);

        let style = Tab::new(&active, TabStyle::Text).style();
        assert!(style.add_modifier.contains(Modifier::UNDERLINED));

        let style = Tab::new(&inactive, TabStyle::Text).style();
        assert!(!style.add_modifier.contains(Modifier::UNDERLINED));
        assert_eq!(style, Styles::tab_inactive());
    }

    #[test]
    fn test_focused_uses_focus_style() {
        let focused = view(true);
        assert_eq!(Tab::new(&focused, TabStyle::Boxed).style(), Styles::tab_focused());

        let unfocused = TabView { focused: false, ..view(true) };
        assert_eq!(Tab::new(&unfocused, TabStyle::Boxed).style(), Styles::tab_active());
    }

    #[test]
    fn test_width_counts_cells_not_chars() {
        let wide = TabView { label: "日本語", ..view(false) };
        assert_eq!(Tab::new(&wide, TabStyle::Boxed).width(), 10);
        assert_eq!(Tab::new(&wide, TabStyle::Text).width(), 8);
    }

    #[test]
    fn test_width_saturates() {
        let label = "x".repeat(usize::from(u16::MAX) + 10);
        let long = TabView { label: &label, ..view(false) };
        assert_eq!(Tab::new(&long, TabStyle::Text).width(), u16::MAX);
    }
}
