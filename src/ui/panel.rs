// Panel
// Content region titled by the tab that controls it

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::styles::Styles;
use crate::core::PanelView;

pub struct Panel<'a> {
    view: &'a PanelView<'a>,
}

impl<'a> Panel<'a> {
    pub fn new(view: &'a PanelView<'a>) -> Self {
        Self { view }
    }

    fn block(&self) -> Block<'a> {
        let border = if self.view.focused {
            Styles::panel_focused_border()
        } else {
            Styles::panel_border()
        };

        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(format!(" {} ", self.view.label), Styles::title()))
    }

    /// Cell where the terminal cursor sits while the panel holds focus:
    /// the first content cell
    pub fn focus_position(&self, area: Rect) -> Option<Position> {
        if !self.view.focused {
            return None;
        }
        let inner = self.block().inner(area);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        Some(Position::new(inner.x, inner.y))
    }
}

impl Widget for Panel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.view.content)
            .wrap(Wrap { trim: false })
            .block(self.block())
            .render(area, buf);
    }
}
