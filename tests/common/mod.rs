//! Shared test helpers for integration tests.

/// Parse a stdout capture as a JSON array of strings.
///
/// Panics with a readable message when stdout is not a JSON string array,
/// so failing CLI tests show what the binary actually printed.
pub fn parse_json_line(stdout: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(stdout);
    serde_json::from_str(text.trim_end()).unwrap_or_else(|e| {
        panic!(
            "stdout is not a JSON array of strings ({}): {:?}",
            e, text
        )
    })
}
