//! Query processing: select, order and filter datastore rows.
//!
//! This module handles the core of the pipeline - turning a directory of
//! datastore files into result rows. It provides:
//!
//! - **Options**: Criteria types (`SelectCriteria`, `OrderCriteria`, `FilterCriteria`)
//! - **Input**: Coercion of comma-separated arguments (`DelimitedInput`)
//! - **Engine**: The reusable `Query` and the `query_datastore` shortcut
//!
//! ## Example
//!
//! ```rust,ignore
//! use dsquerylib::query::Query;
//!
//! let query = Query::new(["TITLE", "PROVIDER", "REV"], ["REV"], ["DATE=2014-04-01"])?;
//! for row in query.execute("output")? {
//!     println!("{row}");
//! }
//! ```

pub mod engine;
pub mod input;
pub mod options;

pub use engine::{query_datastore, Query};
pub use input::{DelimitedInput, RawInput, INPUT_DELIMITER};
pub use options::{FilterCriteria, FilterPredicate, OrderCriteria, SelectCriteria};
