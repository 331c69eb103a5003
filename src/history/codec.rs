//! One-line text encoding of a request for the history log.
//!
//! Layout, fields separated by `@@`:
//!
//! ```text
//! method@@url@@headers@@bodyType@@rawBody@@name,value,isFile;name,value,isFile;
//! ```
//!
//! Newlines inside the header block, the raw body and form values are
//! written as the two characters `\n`. An empty field is written as a single
//! space so the field count stays fixed.

use crate::request::{join_header_lines, BodyType, FormField, RequestDescriptor};

pub const FIELD_DELIMITER: &str = "@@";
const FORM_FIELD_SEPARATOR: char = ';';
const FORM_PART_SEPARATOR: char = ',';
const EMPTY_SENTINEL: &str = " ";
const MIN_SEGMENTS: usize = 5;

fn escape_newlines(value: &str) -> String {
    value.replace('\n', "\\n")
}

fn unescape_newlines(value: &str) -> String {
    value.replace("\\n", "\n")
}

fn or_sentinel(value: String) -> String {
    if value.is_empty() {
        EMPTY_SENTINEL.to_string()
    } else {
        value
    }
}

fn from_sentinel(segment: &str) -> &str {
    if segment == EMPTY_SENTINEL {
        ""
    } else {
        segment
    }
}

/// Encodes `descriptor` as one history line, including the trailing `\n`.
pub fn encode_record(descriptor: &RequestDescriptor) -> String {
    let mut line = [
        or_sentinel(descriptor.method.clone()),
        or_sentinel(descriptor.url.clone()),
        or_sentinel(escape_newlines(&join_header_lines(&descriptor.headers))),
        descriptor.body_type.to_string(),
        or_sentinel(escape_newlines(&descriptor.raw_body)),
    ]
    .join(FIELD_DELIMITER);
    line.push_str(FIELD_DELIMITER);

    for field in &descriptor.form_fields {
        line.push_str(&format!(
            "{}{sep}{}{sep}{}{}",
            field.name,
            escape_newlines(&field.value),
            field.is_file,
            FORM_FIELD_SEPARATOR,
            sep = FORM_PART_SEPARATOR,
        ));
    }

    line.push('\n');
    line
}

/// Decodes one history line. Returns `None` when the line has fewer than
/// five fields.
pub fn decode_record(line: &str) -> Option<RequestDescriptor> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    let segments: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if segments.len() < MIN_SEGMENTS {
        return None;
    }

    let header_block = unescape_newlines(from_sentinel(segments[2]));
    let headers = if header_block.is_empty() {
        Vec::new()
    } else {
        header_block.split('\n').map(|l| l.to_string()).collect()
    };

    let form_fields = segments
        .get(MIN_SEGMENTS)
        .map(|run| decode_form_fields(run))
        .unwrap_or_default();

    Some(RequestDescriptor {
        method: from_sentinel(segments[0]).to_string(),
        url: from_sentinel(segments[1]).to_string(),
        headers,
        body_type: segments[3].parse().unwrap_or(BodyType::Raw),
        raw_body: unescape_newlines(from_sentinel(segments[4])),
        form_fields,
    })
}

fn decode_form_fields(run: &str) -> Vec<FormField> {
    run.split(FORM_FIELD_SEPARATOR)
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| {
            let mut parts = entry.splitn(3, FORM_PART_SEPARATOR);
            FormField {
                name: parts.next().unwrap_or_default().to_string(),
                value: unescape_newlines(parts.next().unwrap_or_default()),
                is_file: parts.next().is_some_and(|v| v.trim() == "true"),
            }
        })
        .collect()
}
