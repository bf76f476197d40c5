//! Configuration schema definitions.
//!
//! Defines the user configuration type the schema and reference docs are
//! generated from, plus the settings and paths the generators themselves use.
//! All configurations are serializable and every field has a default.

mod git;
mod gui;
mod os;
mod paths;
mod settings;
mod update;


pub use git::{GitConfig, PagingConfig};
pub use gui::{GuiConfig, ThemeConfig};
pub use os::OsConfig;
pub use paths::ProjectPaths;
pub use settings::{GeneratorSettings, SETTINGS_FILE};
pub use update::{UpdateConfig, UpdateMethod};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// User configuration for the terminal client.
///
/// Represents the complete configuration that users write in `config.yml`.
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct UserConfig {
    /// Settings for the user interface.
    pub gui: GuiConfig,

    /// Settings for the git integration.
    pub git: GitConfig,

    /// Periodic update checks.
    pub update: UpdateConfig,

    /// Ask for confirmation before quitting.
    pub confirm_on_quit: bool,

    /// Quit when pressing the return key in the top-level view.
    pub quit_on_top_level_return: bool,

    /// Skip the popups shown on startup after an upgrade.
    pub disable_startup_popups: bool,

    /// What to do when started outside of a repository: one of 'prompt', 'create', 'skip', 'quit'.
    pub not_a_repository: String,

    /// Wait for a keypress before returning from a subprocess.
    pub prompt_to_return_from_subprocess: bool,

    /// Commands for opening and editing files.
    pub os: OsConfig,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            gui: GuiConfig::default(),
            git: GitConfig::default(),
            update: UpdateConfig::default(),
            confirm_on_quit: false,
            quit_on_top_level_return: false,
            disable_startup_popups: false,
            not_a_repository: "prompt".to_string(),
            prompt_to_return_from_subprocess: true,
            os: OsConfig::default(),
        }
    }
}

crate::config_section!(UserConfig {
    gui,
    git,
    update,
    confirm_on_quit,
    quit_on_top_level_return,
    disable_startup_popups,
    not_a_repository,
    prompt_to_return_from_subprocess,
    os,
});
