/// Pure string processing utilities for console input

/// Split a line of user input into a lowercased command word and its arguments
///
/// Returns `None` when the line holds nothing but whitespace.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}

/// Check if a string is empty after trimming
pub fn is_empty_or_whitespace(text: &str) -> bool {
    text.trim().is_empty()
}
