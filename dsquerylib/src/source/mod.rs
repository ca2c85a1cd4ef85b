//! Source discovery: find datastore files to read.
//!
//! This module handles the first stage of the pipeline - deciding which
//! files under a root directory hold data. It provides:
//!
//! - **Listing**: the `DirectoryLister` seam and its filesystem implementation
//! - **File filtering**: Include/exclude files with glob patterns
//!
//! ## Example
//!
//! ```rust,ignore
//! use dsquerylib::source::{DirectoryLister, FileFilter, FsLister};
//!
//! let files = FsLister::new().list_entries(Path::new("output"))?;
//! let filter = FileFilter::new().include("*.csv")?;
//! ```

pub mod listing;

pub use listing::{DirectoryLister, FileFilter, FsLister};
