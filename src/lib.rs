pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod history;
pub mod request;
pub mod routes;

pub use client::{ReqwestTransport, Transport, Workbench};
pub use config::Config;
pub use error::AppError;
pub use format::{format_response, pretty_print_json};
pub use history::{decode_record, encode_record, HistoryLog};
pub use request::{
    build_multipart_body, generate_curl, parse_curl, BodyType, FormField, ParsedCurlResult,
    RequestDescriptor,
};
pub use routes::api_router;
