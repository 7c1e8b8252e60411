//! System temp root location and separator-normalized joining
//!
//! The temp root comes from `std::env::temp_dir()`, which honors `TMPDIR` on
//! Unix. Everything here is pure string computation: no filesystem access is
//! performed and no existence guarantee is made for the returned path.

use std::env;
use std::path::{PathBuf, MAIN_SEPARATOR};

/// Locate the system temp root, or a path inside it.
///
/// With no argument, returns the temp root with trailing path separators
/// stripped. With a relative name, joins the stripped root and the name
/// (leading separators stripped) with exactly one separator, so callers can
/// pass `"sub/file.txt"` or `"/sub/file.txt"` interchangeably.
///
/// # Examples
///
/// ```
/// use tmppath::system_temp_path;
///
/// let root = system_temp_path(None);
/// assert!(!root.to_string_lossy().ends_with(std::path::MAIN_SEPARATOR));
///
/// let inside = system_temp_path(Some("scratch/report.csv"));
/// assert!(inside.starts_with(&root));
/// ```
pub fn system_temp_path(relative: Option<&str>) -> PathBuf {
    let root = env::temp_dir();
    let root = root.to_string_lossy();
    let root = root.trim_end_matches(std::path::is_separator);

    match relative {
        Some(name) => {
            let name = name.trim_start_matches(std::path::is_separator);
            PathBuf::from(format!("{root}{MAIN_SEPARATOR}{name}"))
        }
        None => PathBuf::from(root),
    }
}
