// Tab Items
// The ordered tab/panel records owned by the coordinator, plus the two-list
// descriptor shape they can be paired from

use serde::Deserialize;
use std::collections::HashSet;

use super::error::{Result, TabPanelError};

/// One tab and the panel it controls
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TabItem {
    /// Text shown on the tab
    pub label: String,

    /// Body of the associated panel
    #[serde(default)]
    pub content: String,

    /// Id of the panel; the tab's `aria-controls`
    pub controls_id: String,

    /// Id of the tab; the panel's `aria-labelledby`
    pub label_id: String,
}

impl TabItem {
    pub fn new(
        label: impl Into<String>,
        content: impl Into<String>,
        controls_id: impl Into<String>,
        label_id: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
            controls_id: controls_id.into(),
            label_id: label_id.into(),
        }
    }
}

/// A tab as declared inside a tab list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabDescriptor {
    pub label: String,
    pub aria_controls: String,
    pub aria_labelledby_id: String,
}

/// A panel as declared inside a panel group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelDescriptor {
    pub content: String,
    pub controls_id: String,
    pub aria_labelledby: String,
}

/// Pair index-correlated tab and panel lists into items.
///
/// Tab `i` must control panel `i` and panel `i` must be labelled by tab `i`.
pub fn pair_descriptors(
    tabs: Vec<TabDescriptor>,
    panels: Vec<PanelDescriptor>,
) -> Result<Vec<TabItem>> {
    if tabs.len() != panels.len() {
        return Err(TabPanelError::CountMismatch {
            tabs: tabs.len(),
            panels: panels.len(),
        });
    }

    tabs.into_iter()
        .zip(panels)
        .enumerate()
        .map(|(index, (tab, panel))| {
            if tab.aria_controls != panel.controls_id {
                return Err(TabPanelError::ControlsMismatch {
                    index,
                    tab: tab.aria_controls,
                    panel: panel.controls_id,
                });
            }
            if tab.aria_labelledby_id != panel.aria_labelledby {
                return Err(TabPanelError::LabelMismatch {
                    index,
                    tab: tab.aria_labelledby_id,
                    panel: panel.aria_labelledby,
                });
            }
            Ok(TabItem {
                label: tab.label,
                content: panel.content,
                controls_id: tab.aria_controls,
                label_id: tab.aria_labelledby_id,
            })
        })
        .collect()
}

/// Check that items form a usable tab set: at least one item, no empty ids,
/// and every id unique across tabs and panels.
pub fn validate_items(items: &[TabItem]) -> Result<()> {
    if items.is_empty() {
        return Err(TabPanelError::NoTabs);
    }

    let mut seen = HashSet::new();
    for (index, item) in items.iter().enumerate() {
        if item.controls_id.trim().is_empty() {
            return Err(TabPanelError::EmptyId { index, field: "controls_id" });
        }
        if item.label_id.trim().is_empty() {
            return Err(TabPanelError::EmptyId { index, field: "label_id" });
        }
        for id in [&item.controls_id, &item.label_id] {
            if !seen.insert(id.as_str()) {
                return Err(TabPanelError::DuplicateId(id.clone()));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(n: usize) -> TabDescriptor {
        TabDescriptor {
            label: format!("Tab {n}"),
            aria_controls: format!("panel-{n}"),
            aria_labelledby_id: format!("tab-{n}"),
        }
    }

    fn panel(n: usize) -> PanelDescriptor {
        PanelDescriptor {
            content: format!("Content {n}"),
            controls_id: format!("panel-{n}"),
            aria_labelledby: format!("tab-{n}"),
        }
    }

    #[test]
    fn test_pair_matching_descriptors() {
        let items = pair_descriptors(vec![tab(0), tab(1)], vec![panel(0), panel(1)]).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1], TabItem::new("Tab 1", "Content 1", "panel-1", "tab-1"));
    }

    #[test]
    fn test_pair_count_mismatch() {
        let err = pair_descriptors(vec![tab(0), tab(1)], vec![panel(0)]).unwrap_err();
        assert_eq!(err, TabPanelError::CountMismatch { tabs: 2, panels: 1 });
    }

    #[test]
    fn test_pair_swapped_panels() {
        let err = pair_descriptors(vec![tab(0), tab(1)], vec![panel(1), panel(0)]).unwrap_err();
        assert_eq!(
            err,
            TabPanelError::ControlsMismatch {
                index: 0,
                tab: "panel-0".to_string(),
                panel: "panel-1".to_string(),
            }
        );
    }

    #[test]
    fn test_pair_label_mismatch() {
        let mut wrong = panel(0);
        wrong.aria_labelledby = "tab-9".to_string();

        let err = pair_descriptors(vec![tab(0)], vec![wrong]).unwrap_err();
        assert!(matches!(err, TabPanelError::LabelMismatch { index: 0, .. }));
    }

    #[test]
    fn test_validate_rejects_empty_and_duplicates() {
        assert_eq!(validate_items(&[]), Err(TabPanelError::NoTabs));

        let blank = TabItem::new("A", "", " ", "tab-a");
        assert_eq!(
            validate_items(&[blank]),
            Err(TabPanelError::EmptyId { index: 0, field: "controls_id" })
        );

        let a = TabItem::new("A", "", "panel-a", "tab-a");
        let b = TabItem::new("B", "", "panel-a", "tab-b");
        assert_eq!(
            validate_items(&[a.clone(), b]),
            Err(TabPanelError::DuplicateId("panel-a".to_string()))
        );

        // A tab id may not double as a panel id either
        let c = TabItem::new("C", "", "tab-a", "tab-c");
        assert_eq!(
            validate_items(&[a.clone(), c]),
            Err(TabPanelError::DuplicateId("tab-a".to_string()))
        );

        assert!(validate_items(&[a]).is_ok());
    }
}
