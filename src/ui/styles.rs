// UI Styles
// Color schemes and styling for the tab panel

use ratatui::style::{Color, Modifier, Style};

use super::theme::compiled;

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Tab panel color scheme and styles
pub struct Styles;

impl Styles {
    // === Tabs ===

    pub fn tab_active() -> Style {
        Style::default()
            .fg(rgb(compiled::ACTIVE_FG))
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(rgb(compiled::INACTIVE_FG))
    }

    /// Focus ring for the tab holding input focus
    pub fn tab_focused() -> Style {
        Style::default()
            .fg(rgb(compiled::FOCUS_FG))
            .add_modifier(Modifier::BOLD)
    }

    pub fn tab_separator() -> Style {
        Style::default().fg(rgb(compiled::BORDER_FG))
    }

    // === Borders ===

    pub fn tab_list_border() -> Style {
        Style::default().fg(rgb(compiled::BORDER_FG))
    }

    pub fn panel_border() -> Style {
        Style::default().fg(rgb(compiled::ACTIVE_FG))
    }

    /// Focus ring for a panel holding input focus
    pub fn panel_focused_border() -> Style {
        Style::default().fg(rgb(compiled::FOCUS_FG))
    }

    pub fn title() -> Style {
        Style::default()
            .fg(rgb(compiled::ACTIVE_FG))
            .add_modifier(Modifier::BOLD)
    }
}
