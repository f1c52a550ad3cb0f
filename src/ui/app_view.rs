// Tab Panel View
// Lays out the tab list above the active panel and renders both

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use super::panels::Panels;
use super::tab_list::TabList;
use super::theme::TabStyle;
use crate::core::{FocusTracker, FocusedElement, Result, TabPanel};

/// Height of the tab list row including its borders
pub const TAB_LIST_HEIGHT: u16 = 3;

/// Where the tab list and panel were drawn, kept for click detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabPanelLayout {
    pub tab_list: Rect,
    pub panel: Rect,
}

impl TabPanelLayout {
    pub fn new(area: Rect) -> Self {
        let [tab_list, panel] =
            Layout::vertical([Constraint::Length(TAB_LIST_HEIGHT), Constraint::Min(0)]).areas(area);
        Self { tab_list, panel }
    }
}

/// Render the tab list and the active panel into `area`.
///
/// The focus ring and terminal cursor follow the element the focus tracker
/// last received: a tab, or the first content cell of the shown panel.
pub fn render_tab_panel(
    f: &mut Frame,
    area: Rect,
    panel: &TabPanel<FocusTracker>,
    style: TabStyle,
) -> Result<TabPanelLayout> {
    let layout = TabPanelLayout::new(area);
    let focused = panel.focus().focused();

    let mut tabs = panel.tab_views();
    for tab in &mut tabs {
        tab.focused = focused == Some(FocusedElement::Tab(tab.index));
    }
    let mut panels = panel.panel_views();
    for shown in &mut panels {
        shown.focused = focused == Some(FocusedElement::Panel(shown.index));
    }
    let shown = Panels::new(&panels, panel.active_index())?;

    let tab_list = TabList::new(panel.aria_label(), &tabs).style(style);
    let cursor = tab_list
        .focus_position(layout.tab_list)
        .or_else(|| shown.focus_position(layout.panel));

    f.render_widget(tab_list, layout.tab_list);
    f.render_widget(shown, layout.panel);

    if let Some(position) = cursor {
        f.set_cursor_position(position);
    }

    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NavKey, TabItem};
    use crate::ui::Styles;
    use ratatui::{backend::TestBackend, buffer::Buffer, layout::Position, Terminal};

    fn sample() -> TabPanel {
        TabPanel::new(
            "Project",
            vec![
                TabItem::new("Overview", "overview body", "panel-overview", "tab-overview"),
                TabItem::new("Files", "files body", "panel-files", "tab-files"),
                TabItem::new("History", "history body", "panel-history", "tab-history"),
            ],
        )
        .unwrap()
    }

    fn text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_layout_split() {
        let layout = TabPanelLayout::new(Rect::new(0, 0, 40, 10));
        assert_eq!(layout.tab_list, Rect::new(0, 0, 40, 3));
        assert_eq!(layout.panel, Rect::new(0, 3, 40, 7));
    }

    #[test]
    fn test_renders_active_panel_and_cursor() {
        let mut panel = sample();
        panel.handle_key(NavKey::End);

        let mut terminal = Terminal::new(TestBackend::new(50, 8)).unwrap();
        let mut layout = None;
        terminal
            .draw(|f| {
                let area = f.area();
                layout = Some(render_tab_panel(f, area, &panel, TabStyle::Boxed).unwrap());
            })
            .unwrap();

        let rendered = text(terminal.backend().buffer());
        assert!(rendered.contains("[ History ]"));
        assert!(rendered.contains("  Overview  "));
        assert!(rendered.contains("history body"));
        assert!(!rendered.contains("overview body"));
        assert!(!rendered.contains("files body"));

        // "  Overview  " (12) + sep + "  Files  " (9) + sep, label after "[ "
        assert_eq!(
            terminal.get_cursor_position().unwrap(),
            Position::new(1 + 12 + 1 + 9 + 1 + 2, 1)
        );
        assert_eq!(layout.map(|l| l.panel), Some(Rect::new(0, 3, 50, 5)));
    }

    #[test]
    fn test_cursor_moves_into_focused_panel() {
        let mut panel = sample();
        panel.handle_key(NavKey::ArrowRight);
        panel.focus_next();

        let mut terminal = Terminal::new(TestBackend::new(50, 8)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_tab_panel(f, area, &panel, TabStyle::Boxed).unwrap();
            })
            .unwrap();

        // Panel starts at row 3; content begins inside its border
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(1, 4));
        let buf = terminal.backend().buffer();
        assert_eq!(buf[(0, 4)].fg, Styles::panel_focused_border().fg.unwrap());
        assert_eq!(buf[(0, 1)].fg, Styles::tab_list_border().fg.unwrap());
        assert!(text(buf).contains("files body"));
    }
}
