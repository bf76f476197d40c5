use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How diffs are piped through an external pager.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PagingConfig {
    /// Value of the '--color' argument passed to git: one of 'always', 'never', 'auto'.
    pub color_arg: String,

    /// Pager command, e.g. 'delta --dark --paging=never'. Empty uses the built-in view.
    pub pager: String,

    /// Use the pager configured in git's own config instead.
    pub use_config: bool,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            color_arg: "always".to_string(),
            pager: String::new(),
            use_config: false,
        }
    }
}

crate::config_section!(PagingConfig {
    color_arg,
    pager,
    use_config,
});
