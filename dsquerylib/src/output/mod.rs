//! Output formatting: present result records.
//!
//! This module handles the final stage of the pipeline - turning projected
//! records into what the caller prints. It provides:
//!
//! - **Text rows**: values joined by `", "` (`render_row`, `render_rows`)
//! - **JSON**: an array of objects in column order (`render_json`)
//!
//! Rendering is a pure presentation layer. All filtering, ordering and
//! projection happens in the query stage.

pub mod render;

pub use render::{render_json, render_row, render_rows, RENDER_SEPARATOR};
