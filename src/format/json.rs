//! Lexical JSON pretty printer.
//!
//! A single pass over the characters tracking only whether we are inside a
//! string literal and whether the previous character was an escaping
//! backslash. It does not validate: unbalanced input still produces
//! deterministic output, with indentation clamped at zero.

const INDENT: &str = "  ";

/// Re-indents JSON text two spaces per nesting level.
pub fn pretty_print_json(json: &str) -> String {
    let mut pretty = String::with_capacity(json.len() * 2);
    let mut indent: i64 = 0;
    let mut in_quotes = false;
    let mut escape = false;

    for c in json.chars() {
        match c {
            '"' => {
                pretty.push(c);
                if !escape {
                    in_quotes = !in_quotes;
                }
                escape = false;
            }
            '\\' => {
                pretty.push(c);
                escape = !escape;
            }
            '{' | '[' => {
                pretty.push(c);
                if !in_quotes {
                    indent += 1;
                    newline(&mut pretty, indent);
                }
                escape = false;
            }
            '}' | ']' => {
                if !in_quotes {
                    indent -= 1;
                    newline(&mut pretty, indent);
                }
                pretty.push(c);
                escape = false;
            }
            ',' => {
                pretty.push(c);
                if !in_quotes {
                    newline(&mut pretty, indent);
                }
                escape = false;
            }
            ':' => {
                pretty.push(c);
                if !in_quotes {
                    pretty.push(' ');
                }
                escape = false;
            }
            _ => {
                pretty.push(c);
                escape = false;
            }
        }
    }

    pretty
}

fn newline(out: &mut String, indent: i64) {
    out.push('\n');
    let depth = usize::try_from(indent).unwrap_or(0);
    out.push_str(&INDENT.repeat(depth));
}

/// Pretty prints `body` if it looks like a JSON object or array, otherwise
/// returns it unchanged.
pub fn format_body(body: &str) -> String {
    let trimmed = body.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        pretty_print_json(body)
    } else {
        body.to_string()
    }
}
