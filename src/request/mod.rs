pub mod curl;
pub mod headers;
pub mod multipart;
pub mod types;

pub use curl::{generate_curl, parse_curl};
pub use headers::{header_pairs, join_header_lines, parse_header_line, split_header_block};
pub use multipart::{build_multipart_body, generate_boundary, multipart_content_type};
pub use types::*;
