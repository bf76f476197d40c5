mod paging;

pub use paging::PagingConfig;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Settings for the git integration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct GitConfig {
    /// How diffs are piped through an external pager.
    pub paging: PagingConfig,

    /// Fetch from remotes in the background.
    pub auto_fetch: bool,

    /// Refresh the file and branch lists in the background.
    pub auto_refresh: bool,

    /// Interval in seconds between background fetches.
    pub fetch_interval: u32,

    /// Branches treated as main branches when computing merge bases.
    pub main_branches: Vec<String>,

    /// Command used to render the log of a branch.
    pub branch_log_cmd: String,

    /// Skip the GPG signing prompt when rewording commits.
    pub override_gpg: bool,

    /// Prefix prepended to new commit messages, derived from the branch name.
    pub commit_prefix: Option<String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            paging: PagingConfig::default(),
            auto_fetch: true,
            auto_refresh: true,
            fetch_interval: 60,
            main_branches: vec!["master".to_string(), "main".to_string()],
            branch_log_cmd: "git log --graph --color=always --abbrev-commit --decorate --date=relative --pretty=medium {{branchName}} --".to_string(),
            override_gpg: false,
            commit_prefix: None,
        }
    }
}

crate::config_section!(GitConfig {
    paging,
    auto_fetch,
    auto_refresh,
    fetch_interval,
    main_branches,
    branch_log_cmd,
    override_gpg,
    commit_prefix,
});
