use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Colors of the panels and selections.
///
/// Each entry is a list of attributes: a color name or hex code, optionally
/// combined with 'bold', 'underline' or 'reverse'.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Border color of the focused panel.
    pub active_border_color: Vec<String>,

    /// Border color of unfocused panels.
    pub inactive_border_color: Vec<String>,

    /// Background of the selected line.
    pub selected_line_bg_color: Vec<String>,

    /// Foreground of commits that have been cherry-picked.
    pub cherry_picked_commit_fg_color: Vec<String>,

    /// Foreground of text that is not selectable.
    pub default_fg_color: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            active_border_color: vec!["green".to_string(), "bold".to_string()],
            inactive_border_color: vec!["default".to_string()],
            selected_line_bg_color: vec!["blue".to_string()],
            cherry_picked_commit_fg_color: vec!["blue".to_string()],
            default_fg_color: vec!["default".to_string()],
        }
    }
}

crate::config_section!(ThemeConfig {
    active_border_color,
    inactive_border_color,
    selected_line_bg_color,
    cherry_picked_commit_fg_color,
    default_fg_color,
});
