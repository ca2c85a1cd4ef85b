//! Data collection: parse datastore files into records.
//!
//! This module handles the second stage of the pipeline - reading each
//! listed file and turning its rows into [`Record`]s. It provides:
//!
//! - **Records**: ordered column → value mappings (`Record`)
//! - **Reading**: the pipe-delimited file parser (`read_datastore`, `parse_datastore`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use dsquerylib::data::read_datastore;
//!
//! let records = read_datastore("output/datastore.csv")?;
//! println!("first title: {}", records[0].get("TITLE"));
//! ```

pub mod reader;
pub mod record;

pub use reader::{parse_datastore, read_datastore, FIELD_DELIMITER};
pub use record::Record;
