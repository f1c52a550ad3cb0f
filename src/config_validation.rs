// Configuration validation module

use std::path::PathBuf;

use crate::config::{load_config, AppConfig, ConfigError, PanelConfig};
use crate::core::TabPanel;
use crate::ui::TabStyle;

/// A validated tab panel ready to run
#[derive(Debug)]
pub struct LoadedPanel {
    pub panel: TabPanel,
    pub style: TabStyle,
}

/// Load configuration and build a validated tab panel from it
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> Result<LoadedPanel, ConfigError> {
    let config = load_config(config_path)?;
    build_panel(config)
}

/// Build a tab panel from parsed configuration, rejecting unusable tab sets
pub fn build_panel(config: AppConfig) -> Result<LoadedPanel, ConfigError> {
    let PanelConfig { aria_label, style, tabs } = config.panel;
    let tab_count = tabs.len();

    match TabPanel::new(aria_label, tabs) {
        Ok(panel) => {
            tracing::info!(tabs = tab_count, label = panel.aria_label(), "Loaded tab panel");
            Ok(LoadedPanel {
                panel,
                style: style.unwrap_or_default(),
            })
        }
        Err(e) => {
            tracing::warn!(error = %e, "Rejected tab panel configuration");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use crate::core::TabPanelError;

    #[test]
    fn test_build_valid_panel() {
        let config = parse_config(
            "panel:\n  aria_label: Docs\n  style: boxed\n  tabs:\n    - { label: A, controls_id: pa, label_id: ta }\n    - { label: B, controls_id: pb, label_id: tb }\n",
        )
        .unwrap();

        let loaded = build_panel(config).unwrap();
        assert_eq!(loaded.style, TabStyle::Boxed);
        assert_eq!(loaded.panel.len(), 2);
        assert_eq!(loaded.panel.active_index(), 0);
        assert_eq!(loaded.panel.focus().focused_id(), Some("ta"));
    }

    #[test]
    fn test_empty_tab_list_rejected() {
        let config = parse_config("panel:\n  aria_label: Docs\n  tabs: []\n").unwrap();

        let err = build_panel(config).unwrap_err();
        assert!(matches!(err, ConfigError::TabPanel(TabPanelError::NoTabs)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let config = parse_config(
            "panel:\n  aria_label: Docs\n  tabs:\n    - { label: A, controls_id: same, label_id: ta }\n    - { label: B, controls_id: same, label_id: tb }\n",
        )
        .unwrap();

        let err = build_panel(config).unwrap_err();
        assert!(matches!(err, ConfigError::TabPanel(TabPanelError::DuplicateId(id)) if id == "same"));
    }
}
