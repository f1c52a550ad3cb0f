// View Models
// Per-render data derived from the coordinator for the rendering layer

/// Render data for one tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView<'a> {
    pub index: usize,
    pub label: &'a str,

    /// Selected state (`aria-selected`)
    pub active: bool,

    /// Whether this tab currently holds input focus
    pub focused: bool,

    /// Id of the controlled panel (`aria-controls`)
    pub controls_id: &'a str,

    /// Own id, referenced by the panel's `aria-labelledby`
    pub id: &'a str,
}

impl TabView<'_> {
    /// Roving tabindex: 0 for the active tab, -1 for every other tab
    pub fn tab_index(&self) -> i8 {
        if self.active {
            0
        } else {
            -1
        }
    }

    /// Whether sequential (Tab key) navigation can reach this tab
    pub fn is_sequentially_focusable(&self) -> bool {
        self.tab_index() >= 0
    }
}

/// Render data for one panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView<'a> {
    pub index: usize,
    pub content: &'a str,

    /// Panel id, equal to the controlling tab's `controls_id`
    pub id: &'a str,

    /// Id of the tab labelling this panel (`aria-labelledby`)
    pub labelled_by: &'a str,

    /// Text of the labelling tab, used as the panel title
    pub label: &'a str,

    /// Whether the panel holds input focus. Only the shown panel can.
    pub focused: bool,
}
