// Panels
// Shows only the panel belonging to the active tab

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::Widget,
};

use super::panel::Panel;
use crate::core::{PanelView, Result, TabPanelError};

pub struct Panels<'a> {
    panels: &'a [PanelView<'a>],
    active: usize,
}

impl<'a> Panels<'a> {
    /// Fails when `active` does not name one of `panels`
    pub fn new(panels: &'a [PanelView<'a>], active: usize) -> Result<Self> {
        if active >= panels.len() {
            return Err(TabPanelError::IndexOutOfRange {
                index: active,
                count: panels.len(),
            });
        }
        Ok(Self { panels, active })
    }

    pub fn visible(&self) -> &PanelView<'a> {
        &self.panels[self.active]
    }

    /// Cursor cell inside the shown panel while it holds focus
    pub fn focus_position(&self, area: Rect) -> Option<Position> {
        Panel::new(self.visible()).focus_position(area)
    }
}

impl Widget for Panels<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Panel::new(self.visible()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn views() -> Vec<PanelView<'static>> {
        vec![
            PanelView {
                index: 0,
                content: "alpha body",
                id: "p-a",
                labelled_by: "t-a",
                label: "Alpha",
                focused: false,
            },
            PanelView {
                index: 1,
                content: "beta body",
                id: "p-b",
                labelled_by: "t-b",
                label: "Beta",
                focused: false,
            },
        ]
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
    fn test_renders_only_active_panel() {
        let panels = views();
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);

        Panels::new(&panels, 1).unwrap().render(area, &mut buf);

        let rendered = text(&buf);
        assert!(rendered.contains(" Beta "));
        assert!(rendered.contains("beta body"));
        assert!(!rendered.contains("Alpha"));
        assert!(!rendered.contains("alpha body"));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let panels = views();

        let err = Panels::new(&panels, 2).err();
        assert_eq!(err, Some(TabPanelError::IndexOutOfRange { index: 2, count: 2 }));
        assert!(Panels::new(&[], 0).is_err());
    }

    #[test]
    fn test_visible_matches_index() {
        let panels = views();
        let shown = Panels::new(&panels, 0).unwrap();
        assert_eq!(shown.visible().id, "p-a");
    }

    #[test]
    fn test_focus_position_follows_shown_panel() {
        let mut panels = views();
        panels[1].focused = true;
        let area = Rect::new(0, 0, 30, 4);

        let shown = Panels::new(&panels, 1).unwrap();
        assert_eq!(shown.focus_position(area), Some(Position::new(1, 1)));

        let other = Panels::new(&panels, 0).unwrap();
        assert_eq!(other.focus_position(area), None);
    }
}
