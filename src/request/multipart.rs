//! `multipart/form-data` body construction.
//!
//! Builds the exact wire bytes for an ordered list of form fields. File
//! fields are read whole from disk and embedded without any transfer
//! encoding.

use super::types::FormField;
use crate::error::AppError;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

const BOUNDARY_PREFIX: &str = "----HttpWorkbenchBoundary";

static BOUNDARY_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generates a boundary token that is unique within this process.
pub fn generate_boundary() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let seq = BOUNDARY_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}{}{:04}", BOUNDARY_PREFIX, millis, seq)
}

/// `Content-Type` header value announcing `boundary`.
pub fn multipart_content_type(boundary: &str) -> String {
    format!("multipart/form-data; boundary={}", boundary)
}

/// Builds the multipart body for `fields`, in order.
///
/// # Errors
///
/// Returns [`AppError::Resource`] if a file field cannot be read. Nothing is
/// returned in that case, not even the parts built so far.
pub fn build_multipart_body(fields: &[FormField], boundary: &str) -> Result<Vec<u8>, AppError> {
    let mut body = Vec::new();

    for field in fields {
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());

        if field.is_file {
            let path = Path::new(&field.value);
            let content = std::fs::read(path).map_err(|source| AppError::Resource {
                path: field.value.clone(),
                source,
            })?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| field.value.clone());

            body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                    field.name, file_name
                )
                .as_bytes(),
            );
            body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
            body.extend_from_slice(&content);
        } else {
            body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", field.name)
                    .as_bytes(),
            );
            body.extend_from_slice(field.value.as_bytes());
        }

        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());
    Ok(body)
}
