// Focus Management
// The coordinator asks its focus target to move focus after every update

/// The element of the tab panel holding input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedElement {
    /// The tab at this index
    Tab(usize),
    /// The panel at this index
    Panel(usize),
}

/// Receives focus requests for the active tab and its panel
pub trait FocusTarget {
    /// Move input focus to the tab at `index` whose id is `tab_id`
    fn request_focus(&mut self, index: usize, tab_id: &str);

    /// Move input focus into the panel at `index` whose id is `panel_id`
    fn request_panel_focus(&mut self, _index: usize, _panel_id: &str) {}
}

impl<F> FocusTarget for F
where
    F: FnMut(usize, &str),
{
    fn request_focus(&mut self, index: usize, tab_id: &str) {
        self(index, tab_id)
    }
}

/// Default focus target: remembers which element holds focus so the renderer
/// can draw the focus ring and park the terminal cursor on it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusTracker {
    focused: Option<(FocusedElement, String)>,
    requests: usize,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<FocusedElement> {
        self.focused.as_ref().map(|(element, _)| *element)
    }

    /// Index of the focused tab; `None` before the first request or while
    /// a panel holds focus
    pub fn focused_index(&self) -> Option<usize> {
        match self.focused()? {
            FocusedElement::Tab(index) => Some(index),
            FocusedElement::Panel(_) => None,
        }
    }

    /// Index of the focused panel
    pub fn focused_panel(&self) -> Option<usize> {
        match self.focused()? {
            FocusedElement::Panel(index) => Some(index),
            FocusedElement::Tab(_) => None,
        }
    }

    /// Id of the focused tab or panel
    pub fn focused_id(&self) -> Option<&str> {
        self.focused.as_ref().map(|(_, id)| id.as_str())
    }

    /// Number of focus requests received so far
    pub fn requests(&self) -> usize {
        self.requests
    }
}

impl FocusTarget for FocusTracker {
    fn request_focus(&mut self, index: usize, tab_id: &str) {
        self.focused = Some((FocusedElement::Tab(index), tab_id.to_string()));
        self.requests += 1;
    }

    fn request_panel_focus(&mut self, index: usize, panel_id: &str) {
        self.focused = Some((FocusedElement::Panel(index), panel_id.to_string()));
        self.requests += 1;
    }
}
