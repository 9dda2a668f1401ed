//! JSON output for reference lists.
//!
//! Renders a `ReferenceList` as a JSON array of strings and writes it,
//! newline-terminated, to stdout or a file.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

use crate::splitter::ReferenceList;

/// Errors that can occur when writing output.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to serialize references: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    IoError(#[from] std::io::Error),
}

/// Renders a reference list as a JSON array of strings.
///
/// # Arguments
///
/// * `refs` - The reference list to render
/// * `pretty` - When true, pretty-print with serde_json's default
///   indentation; otherwise emit a compact single-line array
///
/// # Returns
///
/// The JSON text, without a trailing newline.
pub fn render_json(refs: &ReferenceList, pretty: bool) -> Result<String, OutputError> {
    let json = if pretty {
        serde_json::to_string_pretty(refs)?
    } else {
        serde_json::to_string(refs)?
    };
    Ok(json)
}

/// Writes the rendered JSON to stdout, followed by exactly one newline.
pub fn write_stdout(json: &str) -> Result<(), OutputError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", json)?;
    Ok(())
}

/// Writes the rendered JSON to a file, followed by exactly one newline.
pub fn write_file(path: &Path, json: &str) -> Result<(), OutputError> {
    let mut content = String::with_capacity(json.len() + 1);
    content.push_str(json);
    content.push('\n');
    fs::write(path, content)?;
    Ok(())
}
