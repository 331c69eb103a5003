//! Conversion between request descriptors and `curl` command lines.
//!
//! Generation is exact. Parsing is best effort: the command is split into
//! quote-aware tokens and each token is run through a short ordered rule
//! table. Anything no rule recognises is ignored, so parsing never fails.

use super::types::{BodyType, ParsedCurlResult, RequestDescriptor};

/// Renders `descriptor` as a single-line `curl` invocation.
pub fn generate_curl(descriptor: &RequestDescriptor) -> String {
    let mut curl = format!("curl -X {} \"{}\"", descriptor.method, descriptor.url);

    for line in descriptor.headers.iter().filter(|l| l.contains(':')) {
        curl.push_str(&format!(" -H \"{}\"", line.trim()));
    }

    if descriptor.allows_body() {
        match descriptor.body_type {
            BodyType::Raw if !descriptor.raw_body.is_empty() => {
                curl.push_str(&format!(" -d '{}'", descriptor.raw_body.replace('\'', "\\'")));
            }
            BodyType::Raw => {}
            BodyType::FormData => {
                for field in &descriptor.form_fields {
                    if field.is_file {
                        curl.push_str(&format!(" -F \"{}=@{}\"", field.name, field.value));
                    } else {
                        curl.push_str(&format!(" -F \"{}={}\"", field.name, field.value));
                    }
                }
            }
        }
    }

    curl
}

/// One entry of the token rule table.
struct Rule {
    matches: fn(&str) -> bool,
    /// Whether the rule consumes the following token as its argument.
    takes_argument: bool,
    apply: fn(&mut ParsedCurlResult, &str),
}

const RULES: &[Rule] = &[
    Rule {
        matches: |t| t == "-X" || t == "--request",
        takes_argument: true,
        apply: |parsed, arg| parsed.method = strip_quotes(arg).to_string(),
    },
    Rule {
        matches: |t| t == "-H" || t == "--header",
        takes_argument: true,
        apply: apply_header,
    },
    Rule {
        matches: |t| t == "-d" || t == "--data" || t == "--data-raw",
        takes_argument: true,
        apply: |parsed, arg| parsed.body = Some(strip_quotes(arg).to_string()),
    },
    Rule {
        matches: is_url_token,
        takes_argument: false,
        apply: |parsed, token| parsed.url = Some(strip_quotes(token).to_string()),
    },
];

fn apply_header(parsed: &mut ParsedCurlResult, arg: &str) {
    if let Some((name, value)) = strip_quotes(arg).split_once(':') {
        parsed
            .headers
            .push(format!("{}:{}", name.trim(), value.trim()));
    }
}

fn is_url_token(token: &str) -> bool {
    let bare = strip_quotes(token);
    bare.starts_with("http://") || bare.starts_with("https://")
}

/// Parses a `curl` command line. Never fails; unknown input yields defaults.
pub fn parse_curl(command: &str) -> ParsedCurlResult {
    let mut parsed = ParsedCurlResult::default();
    let tokens = tokenize(command);
    let mut iter = tokens.iter();

    while let Some(token) = iter.next() {
        let Some(rule) = RULES.iter().find(|r| (r.matches)(token)) else {
            continue;
        };
        if rule.takes_argument {
            // A trailing flag without its argument is dropped.
            if let Some(arg) = iter.next() {
                (rule.apply)(&mut parsed, arg);
            }
        } else {
            (rule.apply)(&mut parsed, token);
        }
    }

    tracing::debug!(
        method = %parsed.method,
        url = ?parsed.url,
        headers = parsed.headers.len(),
        has_body = parsed.body.is_some(),
        "Parsed curl command"
    );
    parsed
}

/// Splits on whitespace, keeping quoted runs (quotes included) in one token.
/// A quote only opens a run at the start of a token; elsewhere it is literal.
/// Inside a quoted run a backslash keeps the next character in the run.
fn tokenize(command: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = command.chars();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) => {
                current.push(c);
                if c == '\\' {
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                } else if c == q {
                    quote = None;
                }
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                // Only a quote opening a token starts a quoted run.
                if !in_token && (c == '"' || c == '\'') {
                    quote = Some(c);
                }
                in_token = true;
                current.push(c);
            }
        }
    }

    if in_token {
        tokens.push(current);
    }
    tokens
}

/// Removes one matching pair of quotes wrapping the whole token. A lone
/// quote character is an empty value.
fn strip_quotes(token: &str) -> &str {
    if token == "\"" || token == "'" {
        return "";
    }
    for q in ['"', '\''] {
        if token.len() >= 2 && token.starts_with(q) && token.ends_with(q) {
            return &token[1..token.len() - 1];
        }
    }
    token
}
