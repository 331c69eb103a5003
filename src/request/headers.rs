//! Raw header text handling.
//!
//! Headers are edited as a free-form text block, one `Name: Value` per line.
//! These helpers convert between that block, its individual lines, and
//! name/value pairs for the transport.

/// Splits a header text block into its non-blank lines, in order.
pub fn split_header_block(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect()
}

/// Joins header lines back into a text block.
pub fn join_header_lines(lines: &[String]) -> String {
    lines.join("\n")
}

/// Splits one line on its first colon into a trimmed name/value pair.
pub fn parse_header_line(line: &str) -> Option<(String, String)> {
    let (name, value) = line.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), value.trim().to_string()))
}

/// All parseable lines as name/value pairs; lines without a colon are skipped.
pub fn header_pairs(lines: &[String]) -> Vec<(String, String)> {
    lines.iter().filter_map(|l| parse_header_line(l)).collect()
}
