// Core module
// Tab panel state machine, focus management and view models

pub mod error;
pub mod events;
pub mod focus;
pub mod item;
pub mod panel;
pub mod view;

pub use error::{Result, TabPanelError};
pub use events::{EventHandler, KeyOutcome, NavKey, TabEvent};
pub use focus::{FocusTarget, FocusTracker, FocusedElement};
pub use item::{pair_descriptors, PanelDescriptor, TabDescriptor, TabItem};
pub use panel::{next_index, TabPanel};
pub use view::{PanelView, TabView};
