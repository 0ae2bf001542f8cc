//! Splitting model output into outline points

/// Split raw text into trimmed, non-empty lines, preserving order
///
/// Handles both `\n` and `\r\n` line endings. Whitespace-only input yields
/// an empty vector.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
