// Build script - reads the theme section of config.yaml at compile time and generates defaults
// This allows changing the look of the widget during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("compiled_theme.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let theme = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_theme(&content)
    } else {
        CompiledTheme::default()
    };

    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const TAB_STYLE: &str = "{tab_style}";
pub const MOUSE_ENABLED: bool = {mouse_enabled};

// Tab and panel colors (RGB tuples)
pub const ACTIVE_FG: (u8, u8, u8) = {active_fg};
pub const INACTIVE_FG: (u8, u8, u8) = {inactive_fg};
pub const FOCUS_FG: (u8, u8, u8) = {focus_fg};
pub const BORDER_FG: (u8, u8, u8) = {border_fg};
"#,
        tab_style = theme.tab_style,
        mouse_enabled = theme.mouse_enabled,
        active_fg = rgb_literal(theme.active_fg),
        inactive_fg = rgb_literal(theme.inactive_fg),
        focus_fg = rgb_literal(theme.focus_fg),
        border_fg = rgb_literal(theme.border_fg),
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled theme");
}

struct CompiledTheme {
    tab_style: String,
    mouse_enabled: bool,
    active_fg: (u8, u8, u8),
    inactive_fg: (u8, u8, u8),
    focus_fg: (u8, u8, u8),
    border_fg: (u8, u8, u8),
}

impl Default for CompiledTheme {
    fn default() -> Self {
        Self {
            tab_style: "boxed".to_string(),
            mouse_enabled: true,
            active_fg: (255, 215, 95),   // #ffd75f
            inactive_fg: (138, 138, 138), // #8a8a8a
            focus_fg: (95, 215, 255),    // #5fd7ff
            border_fg: (95, 95, 135),    // #5f5f87
        }
    }
}

fn rgb_literal(rgb: (u8, u8, u8)) -> String {
    format!("({}, {}, {})", rgb.0, rgb.1, rgb.2)
}

fn parse_theme(content: &str) -> CompiledTheme {
    let mut theme = CompiledTheme::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut in_theme = false;
    let mut in_colors = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // A top-level key closes whatever section we were in
        let top_level = !line.starts_with(' ') && !line.starts_with('\t');
        if top_level {
            in_theme = trimmed.starts_with("theme:");
            in_colors = false;
            continue;
        }
        if !in_theme {
            continue;
        }

        if trimmed.starts_with("colors:") {
            in_colors = true;
            continue;
        }

        if let Some((key, value)) = parse_kv(trimmed) {
            if in_colors {
                match key {
                    "active_fg" => theme.active_fg = parse_hex_color(value, theme.active_fg),
                    "inactive_fg" => theme.inactive_fg = parse_hex_color(value, theme.inactive_fg),
                    "focus_fg" => theme.focus_fg = parse_hex_color(value, theme.focus_fg),
                    "border_fg" => theme.border_fg = parse_hex_color(value, theme.border_fg),
                    _ => in_colors = false,
                }
            }
            if !in_colors {
                match key {
                    "tab_style" => theme.tab_style = value.trim_matches('"').to_lowercase(),
                    "mouse_enabled" => theme.mouse_enabled = parse_bool(value),
                    _ => {}
                }
            }
        }
    }

    theme
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Inline comments need a leading space so hex colors survive
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    // Section header
    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}

fn parse_hex_color(s: &str, fallback: (u8, u8, u8)) -> (u8, u8, u8) {
    let s = s.trim().trim_matches('"').trim_matches('\'');
    let s = s.strip_prefix('#').unwrap_or(s);

    if s.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&s[0..2], 16),
            u8::from_str_radix(&s[2..4], 16),
            u8::from_str_radix(&s[4..6], 16),
        ) {
            return (r, g, b);
        }
    }

    fallback
}
