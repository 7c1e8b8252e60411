//! Error types for temporary-path operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reserving or deriving temporary paths
#[derive(Error, Debug)]
pub enum TmpPathError {
    /// The unique-name reservation primitive could not produce a path
    /// (disk full, permission denied, namespace exhausted)
    #[error("failed to reserve a unique name under {dir} (prefix: `{prefix}`): {source}")]
    Reservation {
        dir: PathBuf,
        prefix: String,
        source: std::io::Error,
    },

    /// Directory creation failed and the path is still not a directory
    #[error("directory {path} was not created: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Attaching the requested extension to a reserved file failed
    #[error(
        "could not rename reserved file {from} to {to} (prefix: `{prefix}`, extension: `{extension}`): {source}"
    )]
    Rename {
        from: PathBuf,
        to: PathBuf,
        prefix: String,
        extension: String,
        source: std::io::Error,
    },

    /// Bounded suffix search ran out of probes before finding a free name
    #[error("no free numeric suffix for {candidate} within {limit} probes")]
    SuffixesExhausted { candidate: PathBuf, limit: u32 },
}
