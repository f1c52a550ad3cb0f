// Tab Panel Library
// An accessible tab panel widget for terminal user interfaces

// Core infrastructure - state machine, focus and view models
pub mod core;

// UI - ratatui widgets and the event loop
pub mod ui;

// Configuration loading and validation
pub mod config;
pub mod config_validation;

// Logging setup
pub mod logging;

// Re-export commonly used items for convenience
pub use self::core::{
    FocusTarget, FocusTracker, FocusedElement, KeyOutcome, NavKey, PanelDescriptor, PanelView,
    TabDescriptor, TabItem, TabPanel, TabPanelError, TabView,
};
pub use config_validation::{load_and_validate_config, LoadedPanel};
pub use ui::{render_tab_panel, run_app, Panel, Panels, Tab, TabList, TabStyle};
