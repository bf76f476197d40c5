use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
};

/// Replaces the file at `path` with `contents` in one step.
///
/// The contents go to a sibling `.tmp` file first, which is then renamed
/// over the target, so readers see either the old file or the new one. An
/// existing target keeps its permission bits, and a symlinked target has the
/// file it points to replaced, leaving the link in place. The temporary file
/// is removed if the replacement fails.
///
/// # Errors
///
/// Returns the underlying I/O error from resolving, writing or renaming.
pub fn write_atomically(path: &Path, contents: &str) -> io::Result<()> {
    let target = resolve_target(path)?;
    let temp_path = temp_path_for(&target);

    fs::write(&temp_path, contents)?;

    if let Err(err) = replace(&temp_path, &target) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    Ok(())
}

fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.file_type().is_symlink() => fs::canonicalize(path),
        _ => Ok(path.to_path_buf()),
    }
}

fn replace(temp_path: &Path, target: &Path) -> io::Result<()> {
    match fs::metadata(target) {
        Ok(metadata) => fs::set_permissions(temp_path, metadata.permissions())?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }

    fs::rename(temp_path, target)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut file_name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("configref"));
    file_name.push(".tmp");
    path.with_file_name(file_name)
}
