// Theme
// Defaults compiled from config.yaml at build time
// Modify the theme section of config.yaml and rebuild to change these values

use serde::Deserialize;

// Include the auto-generated theme from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_theme.rs"));
}

/// How tabs are drawn in the tab list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabStyle {
    /// Square brackets around the active tab: [ TAB ]
    Boxed,
    /// Plain labels, the active one underlined
    Text,
}

impl TabStyle {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "boxed" => Some(Self::Boxed),
            "text" => Some(Self::Text),
            _ => None,
        }
    }
}

impl Default for TabStyle {
    fn default() -> Self {
        Self::parse(compiled::TAB_STYLE).unwrap_or(Self::Boxed)
    }
}

/// Whether clicking a tab selects it
pub fn mouse_enabled() -> bool {
    compiled::MOUSE_ENABLED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_style() {
        assert_eq!(TabStyle::parse("boxed"), Some(TabStyle::Boxed));
        assert_eq!(TabStyle::parse(" Text "), Some(TabStyle::Text));
        assert_eq!(TabStyle::parse("curved"), None);
    }
}
