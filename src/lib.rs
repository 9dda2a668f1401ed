//! acs-refs: CLI for splitting ACS-style reference lists into JSON arrays.
//!
//! This library provides functionality to:
//! - Split a semicolon-delimited reference list into individual fragments
//! - Trim surrounding whitespace from each fragment
//! - Render the ordered fragments as a JSON array of strings

pub mod output;
pub mod splitter;

pub use output::{render_json, write_file, write_stdout, OutputError};
pub use splitter::{split_refs, ReferenceList};
