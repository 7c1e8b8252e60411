//! Temporary file and directory helpers
//!
//! This crate is a thin convenience layer over standard filesystem
//! primitives for three recurring chores:
//!
//! - Creating uniquely named temp files and directories, optionally anchored
//!   to a base directory, filename prefix, or forced extension
//! - Deriving a non-colliding filename from an existing path by appending a
//!   numeric suffix (`report.csv` → `report-1.csv`)
//! - Locating the system temp root and joining paths under it with
//!   normalized separators
//!
//! All functions are stateless and reentrant, with synchronous blocking
//! filesystem access. Uniqueness holds at the moment a path is returned;
//! callers needing strict guarantees under cross-process contention must add
//! their own coordination.
//!
//! # Example
//!
//! ```
//! use tmppath::{temp_file, unique_filename};
//!
//! # fn example() -> Result<(), tmppath::TmpPathError> {
//! let csv = temp_file(Some("export-"), Some("csv"))?;
//! assert!(csv.exists());
//!
//! // A second export next to the first gets a -1 suffix.
//! let next = unique_filename(&csv);
//! assert_ne!(next, csv);
//! # std::fs::remove_file(&csv).unwrap();
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod error;
pub mod logging;
pub mod sys;
pub mod temp;
pub mod unique;

pub use error::TmpPathError;
pub use sys::system_temp_path;
pub use temp::{temp_dir, temp_file, temp_file_like};
pub use unique::{suffix_candidates, unique_filename, unique_filename_within};
