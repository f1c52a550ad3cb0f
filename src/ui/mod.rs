// UI module
// Widgets and the event loop for the tab panel

pub mod app_view;
pub mod panel;
pub mod panels;
pub mod styles;
pub mod tab;
pub mod tab_list;
pub mod theme;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;

use crate::core::{EventHandler, FocusTracker, TabEvent, TabPanel};

pub use app_view::{render_tab_panel, TabPanelLayout};
pub use panel::Panel;
pub use panels::Panels;
pub use styles::Styles;
pub use tab::Tab;
pub use tab_list::{TabBounds, TabList};
pub use theme::TabStyle;

/// Run the tab panel event loop until the user quits
pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    panel: &mut TabPanel<FocusTracker>,
    style: TabStyle,
) -> Result<()> {
    loop {
        // Render the UI
        let mut drawn = None;
        terminal.draw(|f| {
            let area = f.area();
            drawn = Some(render_tab_panel(f, area, panel, style));
        })?;
        let layout = drawn.transpose()?;

        // Handle events
        if event::poll(Duration::from_millis(250))? {
            let tab_event = EventHandler::handle(event::read()?);
            if !handle_event(panel, tab_event, layout.as_ref(), style)? {
                return Ok(());
            }
        }
    }
}

/// Apply an event to the panel. Returns false once the viewer should quit.
fn handle_event(
    panel: &mut TabPanel<FocusTracker>,
    event: TabEvent,
    layout: Option<&TabPanelLayout>,
    style: TabStyle,
) -> Result<bool> {
    let outcome = match event {
        TabEvent::Quit => return Ok(false),
        TabEvent::Navigate(key) => panel.handle_key(key),
        TabEvent::FocusNext => panel.focus_next(),
        TabEvent::FocusPrevious => panel.focus_previous(),
        TabEvent::Click { column, row } => {
            if theme::mouse_enabled() {
                if let Some(layout) = layout {
                    select_at(panel, layout, column, row, style)?;
                }
            }
            return Ok(true);
        }
        TabEvent::None => return Ok(true),
    };

    if !outcome.default_prevented() {
        tracing::debug!(?event, "Key passed through the tab panel");
    }
    Ok(true)
}

/// Select the tab drawn at (`column`, `row`). Returns whether a tab was hit.
fn select_at(
    panel: &mut TabPanel<FocusTracker>,
    layout: &TabPanelLayout,
    column: u16,
    row: u16,
    style: TabStyle,
) -> Result<bool> {
    let clicked = {
        let tabs = panel.tab_views();
        let tab_list = TabList::new(panel.aria_label(), &tabs).style(style);
        tab_list.tab_at(layout.tab_list, column, row)
    };

    match clicked {
        Some(index) => {
            panel.select_tab(index)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
