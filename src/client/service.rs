//! Request workbench service.
//!
//! Turns a [`RequestDescriptor`] into a wire request, executes it through a
//! [`Transport`], renders the response for display and records the request
//! in the history log.

use super::transport::{Transport, TransportRequest};
use crate::error::AppError;
use crate::format::format_response;
use crate::history::{HistoryEntry, HistoryLog};
use crate::request::{
    build_multipart_body, generate_boundary, header_pairs, multipart_content_type, BodyType,
    RequestDescriptor,
};

/// Result of a successful send.
#[derive(Debug, Clone)]
pub struct SendOutcome {
    pub status: u16,
    /// Display text produced by [`format_response`].
    pub formatted: String,
    /// False when the request went out but could not be written to history.
    pub history_saved: bool,
}

fn has_header(headers: &[(String, String)], name: &str) -> bool {
    headers.iter().any(|(n, _)| n.eq_ignore_ascii_case(name))
}

/// Builds the wire request for `descriptor`.
///
/// GET and DELETE never carry a body. Raw bodies default to
/// `Content-Type: application/json` unless the descriptor sets one; form
/// bodies always replace any user supplied content type with the multipart
/// one carrying the generated boundary.
pub fn prepare_request(descriptor: &RequestDescriptor) -> Result<TransportRequest, AppError> {
    let url = descriptor.url.trim();
    if url.is_empty() {
        return Err(AppError::InvalidRequest("URL is empty".to_string()));
    }
    url::Url::parse(url).map_err(|e| AppError::InvalidRequest(format!("Invalid URL: {}", e)))?;

    let mut headers = header_pairs(&descriptor.headers);

    let body = if !descriptor.allows_body() {
        None
    } else {
        match descriptor.body_type {
            BodyType::Raw => {
                if !has_header(&headers, "content-type") {
                    headers.push(("Content-Type".to_string(), "application/json".to_string()));
                }
                Some(descriptor.raw_body.clone().into_bytes())
            }
            BodyType::FormData => {
                let boundary = generate_boundary();
                let body = build_multipart_body(&descriptor.form_fields, &boundary)?;
                headers.retain(|(n, _)| !n.eq_ignore_ascii_case("content-type"));
                headers.push(("Content-Type".to_string(), multipart_content_type(&boundary)));
                Some(body)
            }
        }
    };

    Ok(TransportRequest {
        method: descriptor.method.clone(),
        url: url.to_string(),
        headers,
        body,
    })
}

/// Ties the transport and the history log together.
pub struct Workbench<T: Transport> {
    transport: T,
    history: HistoryLog,
}

impl<T: Transport> Workbench<T> {
    pub fn new(transport: T, history: HistoryLog) -> Self {
        Self { transport, history }
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Sends `descriptor` and returns the formatted response.
    ///
    /// A history append failure is logged and reported in the outcome but
    /// does not fail the send.
    pub async fn send(&self, descriptor: &RequestDescriptor) -> Result<SendOutcome, AppError> {
        let request = prepare_request(descriptor)?;
        tracing::debug!(
            method = %request.method,
            url = %request.url,
            body_size = request.body.as_ref().map(|b| b.len()).unwrap_or(0),
            "Sending request"
        );

        let response = self.transport.execute(request).await.inspect_err(|e| {
            tracing::warn!(code = e.code(), error = %e, "Request failed");
        })?;
        let formatted = format_response(response.status, &response.headers, &response.body);

        let history_saved = match self.history.append(descriptor) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to record request in history");
                false
            }
        };

        Ok(SendOutcome {
            status: response.status,
            formatted,
            history_saved,
        })
    }

    pub fn save_history(&self, descriptor: &RequestDescriptor) -> Result<(), AppError> {
        self.history.append(descriptor)
    }

    /// Raw history lines, oldest first. Read failures yield an empty list.
    pub fn history_lines(&self) -> Vec<String> {
        self.history.load_lines().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load history");
            Vec::new()
        })
    }

    /// Decoded history entries, oldest first. Read failures yield an empty list.
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        self.history.load_entries().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load history");
            Vec::new()
        })
    }
}
