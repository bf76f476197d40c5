use std::{
    env,
    io::{Error, ErrorKind},
    path::{Path, PathBuf},
};

/// Environment variable overriding project root discovery.
pub const ROOT_ENV_VAR: &str = "CONFIGREF_ROOT";

const ROOT_MARKERS: [&str; 2] = [".git", "Cargo.toml"];

/// Utility struct for locating the project the generators write into
///
/// The schema file and the reference docs live at fixed paths relative to
/// the project root.
pub struct ProjectPaths;

impl ProjectPaths {
    /// Returns the project root directory
    ///
    /// - Uses `CONFIGREF_ROOT` when set
    /// - Otherwise walks up from the current directory, see [`Self::find_root_from`]
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be read or no
    /// ancestor looks like a project root
    pub fn project_root() -> Result<PathBuf, Error> {
        if let Ok(root) = env::var(ROOT_ENV_VAR) {
            return Ok(PathBuf::from(root));
        }

        let current = env::current_dir()?;
        Self::find_root_from(&current)
    }

    /// Finds the project root above `start`
    ///
    /// Prefers the nearest ancestor holding a `.git` entry, then the nearest
    /// one holding a `Cargo.toml`.
    ///
    /// # Errors
    /// Returns `ErrorKind::NotFound` if no ancestor qualifies
    pub fn find_root_from(start: &Path) -> Result<PathBuf, Error> {
        ROOT_MARKERS
            .iter()
            .find_map(|marker| {
                start
                    .ancestors()
                    .find(|dir| dir.join(marker).exists())
                    .map(Path::to_path_buf)
            })
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::NotFound,
                    format!(
                        "No project root (directory with .git or Cargo.toml) above {}",
                        start.display()
                    ),
                )
            })
    }

    /// Resolves `path` against `root` unless it is already absolute
    pub fn resolve(root: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.join(path)
        }
    }
}
