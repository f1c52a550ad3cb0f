// Error Types
// Configuration and range errors raised by the tab panel coordinator

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabPanelError {
    #[error("Tab panel requires at least one tab")]
    NoTabs,

    #[error("Tab list has {tabs} tabs but there are {panels} panels")]
    CountMismatch { tabs: usize, panels: usize },

    #[error("Tab {index} controls '{tab}' but panel {index} has id '{panel}'")]
    ControlsMismatch {
        index: usize,
        tab: String,
        panel: String,
    },

    #[error("Tab {index} has id '{tab}' but panel {index} is labelled by '{panel}'")]
    LabelMismatch {
        index: usize,
        tab: String,
        panel: String,
    },

    #[error("Tab {index} has an empty {field}")]
    EmptyId { index: usize, field: &'static str },

    #[error("Identifier '{0}' is used more than once")]
    DuplicateId(String),

    #[error("Index {index} is out of range for {count} tabs")]
    IndexOutOfRange { index: usize, count: usize },
}

pub type Result<T> = std::result::Result<T, TabPanelError>;
