//! Plain-text rendering of a received response for display.

use super::json::format_body;
use std::collections::BTreeMap;

/// Renders status, headers and body as display text.
///
/// Headers are listed by name in sorted order; repeated headers are merged
/// into one line with their values joined by `", "`. JSON-looking bodies are
/// pretty printed.
pub fn format_response(status: u16, headers: &[(String, String)], body: &str) -> String {
    let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (name, value) in headers {
        grouped.entry(name.as_str()).or_default().push(value.as_str());
    }

    let mut out = format!("Status: {}\nHeaders:\n", status);
    for (name, values) in grouped {
        out.push_str(&format!(" {}: {}\n", name, values.join(", ")));
    }
    out.push_str("\nBody:\n");
    out.push_str(&format_body(body));
    out.push('\n');
    out
}
