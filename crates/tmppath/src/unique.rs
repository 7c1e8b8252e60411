//! Numeric-suffix probing for non-colliding filenames
//!
//! A candidate path `/a/b/report.csv` that already exists is rewritten to
//! `/a/b/report-1.csv`, `/a/b/report-2.csv`, … until a free slot is found.
//! Probing is a plain existence check per candidate, so the result is only
//! guaranteed not to exist at the moment it is returned.

use std::path::{Path, PathBuf};

use crate::error::TmpPathError;

/// The lazily-produced sequence of suffixed candidates for a path.
///
/// Yields `{dir}/{stem}-{n}.{ext}` for n = 1, 2, 3, … — or `{dir}/{stem}-{n}`
/// when the candidate has no extension, so no stray dot is produced. The
/// sequence is unbounded and restartable; callers apply their own predicate
/// or bound.
pub fn suffix_candidates(candidate: &Path) -> impl Iterator<Item = PathBuf> {
    let dir = candidate.parent().map(Path::to_path_buf).unwrap_or_default();
    let stem = candidate
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = candidate
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned());

    (1u64..).map(move |n| {
        let name = match &extension {
            Some(ext) => format!("{stem}-{n}.{ext}"),
            None => format!("{stem}-{n}"),
        };
        dir.join(name)
    })
}

/// Derive a filename that does not currently exist, near `candidate`.
///
/// Returns `candidate` unchanged when it does not exist; otherwise the first
/// suffixed candidate (see [`suffix_candidates`]) that does not exist.
/// Calling this on its own output, while that output still does not exist,
/// returns the same value again.
///
/// The search is unbounded: a directory pre-populated with every suffix, or
/// an environment where existence checks return a stable wrong answer, will
/// keep this probing indefinitely. Use [`unique_filename_within`] where that
/// hazard matters.
pub fn unique_filename(candidate: &Path) -> PathBuf {
    if !candidate.exists() {
        return candidate.to_path_buf();
    }

    // The candidate sequence has no end; see unique_filename_within for a
    // bounded search.
    suffix_candidates(candidate)
        .find(|path| !path.exists())
        .unwrap_or_else(|| candidate.to_path_buf())
}

/// Bounded variant of [`unique_filename`].
///
/// Probes at most `limit` suffixes.
///
/// # Errors
///
/// Returns [`TmpPathError::SuffixesExhausted`] when every probed suffix
/// already exists.
pub fn unique_filename_within(candidate: &Path, limit: u32) -> Result<PathBuf, TmpPathError> {
    if !candidate.exists() {
        return Ok(candidate.to_path_buf());
    }

    suffix_candidates(candidate)
        .take(limit as usize)
        .find(|path| !path.exists())
        .ok_or_else(|| TmpPathError::SuffixesExhausted {
            candidate: candidate.to_path_buf(),
            limit,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_missing_candidate_is_returned_unchanged() {
        let sandbox = TempDir::new().unwrap();
        let candidate = sandbox.path().join("report.csv");

        assert_eq!(unique_filename(&candidate), candidate);
    }

    #[test]
    fn test_first_suffix_when_candidate_exists() {
        let sandbox = TempDir::new().unwrap();
        let candidate = sandbox.path().join("report.csv");
        touch(&candidate);

        assert_eq!(
            unique_filename(&candidate),
            sandbox.path().join("report-1.csv")
        );
    }

    #[test]
    fn test_skips_taken_suffixes() {
        let sandbox = TempDir::new().unwrap();
        let candidate = sandbox.path().join("report.csv");
        touch(&candidate);
        touch(&sandbox.path().join("report-1.csv"));
        touch(&sandbox.path().join("report-2.csv"));

        assert_eq!(
            unique_filename(&candidate),
            sandbox.path().join("report-3.csv")
        );
    }

    #[test]
    fn test_no_extension_has_no_stray_dot() {
        let sandbox = TempDir::new().unwrap();
        let candidate = sandbox.path().join("README");
        touch(&candidate);

        assert_eq!(unique_filename(&candidate), sandbox.path().join("README-1"));
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let sandbox = TempDir::new().unwrap();
        let candidate = sandbox.path().join("report.csv");
        touch(&candidate);

        let first = unique_filename(&candidate);
        assert_eq!(unique_filename(&first), first);
    }

    #[test]
    fn test_candidates_are_restartable() {
        let candidate = Path::new("/a/b/report.csv");

        let first: Vec<_> = suffix_candidates(candidate).take(2).collect();
        let again: Vec<_> = suffix_candidates(candidate).take(2).collect();
        assert_eq!(first, again);
        assert_eq!(first[0], Path::new("/a/b/report-1.csv"));
        assert_eq!(first[1], Path::new("/a/b/report-2.csv"));
    }

    #[test]
    fn test_bounded_search_exhaustion() {
        let sandbox = TempDir::new().unwrap();
        let candidate = sandbox.path().join("report.csv");
        touch(&candidate);
        touch(&sandbox.path().join("report-1.csv"));
        touch(&sandbox.path().join("report-2.csv"));

        let err = unique_filename_within(&candidate, 2).unwrap_err();
        assert!(matches!(
            err,
            TmpPathError::SuffixesExhausted { limit: 2, .. }
        ));

        let found = unique_filename_within(&candidate, 3).unwrap();
        assert_eq!(found, sandbox.path().join("report-3.csv"));
    }
}
