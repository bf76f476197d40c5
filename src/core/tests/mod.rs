//! Unit tests for core module
//!
//! Covers error construction and atomic file replacement.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::{fs, path::Path};

use tempfile::TempDir;

use crate::{ConfigRefError, core::write_atomically};

mod errors {
    use super::*;

    #[test]
    fn toml_parse_without_path_uses_string_location() {
        let error = ConfigRefError::toml_parse("expected a value", None);

        match error {
            ConfigRefError::TomlParseError { location, details } => {
                assert_eq!(location, "string");
                assert_eq!(details, "expected a value");
            }
            other => panic!("expected TOML parse error, got {other:?}"),
        }
    }

    #[test]
    fn io_error_names_the_path() {
        let error = ConfigRefError::io("permission denied", Path::new("docs/Config.md"));

        assert_eq!(
            error.to_string(),
            "I/O error on 'docs/Config.md': permission denied"
        );
    }
}

mod persist {
    use super::*;

    #[test]
    fn creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("schema.json");

        write_atomically(&path, "{}\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
        assert!(!dir.path().join("schema.json.tmp").exists());
    }

    #[test]
    fn replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Config.md");
        fs::write(&path, "old").unwrap();

        write_atomically(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing/Config.md");

        assert!(write_atomically(&path, "new").is_err());
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn keeps_permission_bits() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Config.md");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        write_atomically(&path, "new").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }

    #[cfg(unix)]
    #[test]
    fn writes_through_symlink() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real.md");
        let link = dir.path().join("Config.md");
        fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        write_atomically(&link, "new").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "new");
        assert_eq!(fs::read_to_string(&link).unwrap(), "new");
    }
}
