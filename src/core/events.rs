// Event Handling
// Navigation keys, key outcomes and terminal event conversion

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Keys the tab list reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Previous tab, wrapping to the last
    ArrowLeft,

    /// Next tab, wrapping to the first
    ArrowRight,

    /// First tab
    Home,

    /// Last tab
    End,
}

impl NavKey {
    /// Map a DOM-style key name (`KeyboardEvent.key`) to a navigation key
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            _ => None,
        }
    }

    /// Map a terminal key code to a navigation key
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Left => Some(Self::ArrowLeft),
            KeyCode::Right => Some(Self::ArrowRight),
            KeyCode::Home => Some(Self::Home),
            KeyCode::End => Some(Self::End),
            _ => None,
        }
    }
}

/// Result of offering a key to the tab panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key was consumed; the host must not act on it further
    Handled,

    /// The key passes through untouched
    Ignored,
}

impl KeyOutcome {
    /// Whether the key's default action is suppressed
    pub fn default_prevented(self) -> bool {
        self == Self::Handled
    }
}

/// Events the tab panel viewer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEvent {
    /// Quit the viewer
    Quit,

    /// Keyboard navigation within the tab list
    Navigate(NavKey),

    /// Sequential focus forward (Tab key)
    FocusNext,

    /// Sequential focus backward (Shift+Tab)
    FocusPrevious,

    /// Left click at a terminal cell
    Click { column: u16, row: u16 },

    /// No operation
    None,
}

/// Converts terminal events to tab panel events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to a tab panel event
    pub fn handle(event: Event) -> TabEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            _ => TabEvent::None,
        }
    }

    fn handle_key(key: KeyEvent) -> TabEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return TabEvent::None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => TabEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => TabEvent::Quit,
            KeyCode::Tab => TabEvent::FocusNext,
            KeyCode::BackTab => TabEvent::FocusPrevious,
            code => NavKey::from_key_code(code)
                .map(TabEvent::Navigate)
                .unwrap_or(TabEvent::None),
        }
    }

    fn handle_mouse(mouse: MouseEvent) -> TabEvent {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => TabEvent::Click {
                column: mouse.column,
                row: mouse.row,
            },
            _ => TabEvent::None,
        }
    }
}
