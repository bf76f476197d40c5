mod theme;

pub use theme::ThemeConfig;

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Settings for the user interface.
///
/// Controls layout, scrolling behavior and the colors used by the panels.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct GuiConfig {
    /// Number of lines to scroll per mouse wheel tick in the main view.
    pub scroll_height: i32,

    /// Allow scrolling past the bottom of the content in the main view.
    pub scroll_past_bottom: bool,

    /// Handle mouse events.
    pub mouse_events: bool,

    /// Fraction of the total window width taken by the side panels.
    pub side_panel_width: f64,

    /// Grow the focused side panel to take more vertical space.
    pub expand_focused_side_panel: bool,

    /// Interface language: one of 'auto', 'en', 'nl', 'ja', 'pl'.
    pub language: String,

    /// Format used for absolute commit dates.
    pub time_format: String,

    /// Border style of the panels: one of 'rounded', 'single', 'double', 'hidden'.
    pub border: String,

    /// Nerd Fonts version to use for file icons. Empty disables icons.
    pub nerd_fonts_version: String,

    /// Colors for branches whose name matches a pattern.
    pub branch_color_patterns: Option<BTreeMap<String, String>>,

    /// Colors of the panels and selections.
    pub theme: ThemeConfig,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            scroll_height: 2,
            scroll_past_bottom: true,
            mouse_events: true,
            side_panel_width: 0.3333,
            expand_focused_side_panel: false,
            language: "auto".to_string(),
            time_format: "02 Jan 06".to_string(),
            border: "rounded".to_string(),
            nerd_fonts_version: String::new(),
            branch_color_patterns: None,
            theme: ThemeConfig::default(),
        }
    }
}

crate::config_section!(GuiConfig {
    scroll_height,
    scroll_past_bottom,
    mouse_events,
    side_panel_width,
    expand_focused_side_panel,
    language,
    time_format,
    border,
    nerd_fonts_version,
    branch_color_patterns,
    theme,
});
