use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Commands for opening and editing files.
///
/// Empty commands fall back to the editor preset, then to `$EDITOR`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct OsConfig {
    /// Command for editing a file. Use {{filename}} for the file path.
    pub edit: String,

    /// Command for editing a file at a line. Use {{filename}} and {{line}}.
    pub edit_at_line: String,

    /// Command for opening a file with its default application.
    pub open: String,

    /// Editor preset: one of 'vim', 'nvim', 'emacs', 'nano', 'vscode', 'sublime', 'helix'.
    pub edit_preset: String,
}

crate::config_section!(OsConfig {
    edit,
    edit_at_line,
    open,
    edit_preset,
});
