pub mod json;
pub mod response;

pub use json::{format_body, pretty_print_json};
pub use response::format_response;
