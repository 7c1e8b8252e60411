//! Reservation-based creation of temporary files and directories
//!
//! Every operation here is a direct sequence of blocking filesystem calls.
//! Uniqueness is guaranteed only at the moment a path is returned: nothing
//! prevents another process from claiming the name afterwards, and no
//! cross-process coordination is attempted. Callers own the returned path
//! and are responsible for populating and deleting it.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TmpPathError;

/// Atomically reserve a new, empty, uniquely named file under `dir`.
///
/// The reservation uses an exclusive create, so the returned path existed as
/// an empty file owned by this call at the moment it was created. The file
/// persists after return.
fn reserve(dir: &Path, prefix: &str) -> Result<PathBuf, TmpPathError> {
    let reserved = tempfile::Builder::new()
        .prefix(prefix)
        .tempfile_in(dir)
        .map_err(|source| TmpPathError::Reservation {
            dir: dir.to_path_buf(),
            prefix: prefix.to_owned(),
            source,
        })?;

    let (_file, path) = reserved.keep().map_err(|err| TmpPathError::Reservation {
        dir: dir.to_path_buf(),
        prefix: prefix.to_owned(),
        source: err.error,
    })?;

    Ok(path)
}

/// Create a new, empty, uniquely named directory.
///
/// The directory is created under `base` (default: the system temp root)
/// with the given filename prefix (default: none). The unique name is
/// claimed by reserving a file, which is then replaced by a directory at
/// the same path.
///
/// # Errors
///
/// Returns [`TmpPathError::Reservation`] if the unique name could not be
/// claimed, or [`TmpPathError::CreateDir`] if directory creation failed and
/// the path is still not a directory. A path that already exists as a
/// directory at creation time is tolerated: another caller winning that
/// race still leaves the filesystem in the requested state.
pub fn temp_dir(base: Option<&Path>, prefix: Option<&str>) -> Result<PathBuf, TmpPathError> {
    let base = base.map(Path::to_path_buf).unwrap_or_else(env::temp_dir);
    let prefix = prefix.unwrap_or("");

    let path = reserve(&base, prefix)?;

    // The reservation was only needed for its name; a directory goes in its
    // place. A failed unlink surfaces through create_dir below.
    let _ = fs::remove_file(&path);

    if let Err(source) = fs::create_dir(&path) {
        if !path.is_dir() {
            return Err(TmpPathError::CreateDir { path, source });
        }
    }

    tracing::debug!("created temp directory {}", path.display());
    Ok(path)
}

/// Create a new, empty, uniquely named file under the system temp root.
///
/// The filename starts with `prefix` (default: none). When `extension` is
/// given and non-empty, the reserved file is renamed to carry
/// `.{extension}` and the renamed path is returned; otherwise the reserved
/// path is returned as-is.
///
/// # Errors
///
/// Returns [`TmpPathError::Reservation`] if no unique name could be
/// claimed, or [`TmpPathError::Rename`] if attaching the extension failed.
/// The rename error names both the reserved and the target path, along
/// with the prefix and extension, for diagnostics.
pub fn temp_file(prefix: Option<&str>, extension: Option<&str>) -> Result<PathBuf, TmpPathError> {
    let prefix = prefix.unwrap_or("");
    let reserved = reserve(&env::temp_dir(), prefix)?;

    let Some(extension) = extension.filter(|ext| !ext.is_empty()) else {
        tracing::debug!("created temp file {}", reserved.display());
        return Ok(reserved);
    };

    let mut renamed = reserved.clone().into_os_string();
    renamed.push(".");
    renamed.push(extension);
    let renamed = PathBuf::from(renamed);

    fs::rename(&reserved, &renamed).map_err(|source| TmpPathError::Rename {
        from: reserved.clone(),
        to: renamed.clone(),
        prefix: prefix.to_owned(),
        extension: extension.to_owned(),
        source,
    })?;

    tracing::debug!("created temp file {}", renamed.display());
    Ok(renamed)
}

/// Create a temp file that keeps the extension of an existing path.
///
/// Only the full path/name is generated; the contents of `existing` are not
/// copied. A reference path without an extension yields a temp file without
/// a forced extension.
///
/// # Errors
///
/// Same as [`temp_file`].
pub fn temp_file_like(existing: &Path, prefix: Option<&str>) -> Result<PathBuf, TmpPathError> {
    let extension = existing.extension().and_then(|ext| ext.to_str());
    temp_file(prefix, extension)
}
