//! # dsquerylib
//!
//! Ad-hoc queries over directories of pipe-delimited datastore files.
//!
//! ## Overview
//!
//! A datastore is a directory of exported text files. Each file has a header
//! line naming its columns, followed by one record per line with fields
//! separated by `|` and optionally wrapped in double quotes:
//!
//! ```text
//! "STB"|"TITLE"|"PROVIDER"|"DATE"|"REV"|"VIEW_TIME"
//! "stb1"|"the matrix"|"warner bros"|"2014-04-01"|"4.00"|"1:30"
//! ```
//!
//! A [`Query`] reads every file in the directory and:
//!
//! - **Orders** rows by one or more columns (ascending, stable, lexical)
//! - **Filters** rows by `column=value` equality (all predicates must hold)
//! - **Selects** the columns to output, in the requested order
//!
//! Each surviving row is rendered as its values joined by `", "`.
//!
//! All values are text. Nothing is coerced to numbers or dates, so
//! `"10.00"` sorts before `"4.00"`.
//!
//! ## Example
//!
//! ```rust
//! use dsquerylib::{query_datastore, Query, QueryConfig};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(
//!     dir.path().join("datastore.csv"),
//!     "\"STB\"|\"TITLE\"|\"DATE\"|\"REV\"\n\
//!      \"stb1\"|\"the matrix\"|\"2014-04-01\"|\"4.00\"\n\
//!      \"stb2\"|\"unbreakable\"|\"2014-04-03\"|\"6.00\"\n\
//!      \"stb3\"|\"the hobbit\"|\"2014-04-01\"|\"3.00\"\n",
//! )
//! .unwrap();
//!
//! // Build a reusable query
//! let query = Query::new(["TITLE", "REV"], ["REV"], ["DATE=2014-04-01"]).unwrap();
//! let rows = query.execute(dir.path()).unwrap();
//! assert_eq!(rows, vec!["the hobbit, 3.00", "the matrix, 4.00"]);
//!
//! // Or query the configured default directory
//! let config = QueryConfig::new(dir.path());
//! let all: [&str; 0] = [];
//! let rows = query_datastore(&config, ["STB"], all, all).unwrap();
//! assert_eq!(rows, vec!["stb1", "stb2", "stb3"]);
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use config::{QueryConfig, DEFAULT_OUTPUT_DIRECTORY, OUTPUT_DIRECTORY_ENV};
pub use data::{parse_datastore, read_datastore, Record};
pub use error::DsqueryError;
pub use output::{render_json, render_row, render_rows};
pub use query::{
    query_datastore, DelimitedInput, FilterCriteria, FilterPredicate, OrderCriteria, Query,
    RawInput, SelectCriteria,
};
pub use source::{DirectoryLister, FileFilter, FsLister};

/// Result type for dsquerylib operations
pub type Result<T> = std::result::Result<T, DsqueryError>;
