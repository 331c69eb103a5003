//! Transport abstraction layer.
//!
//! The workbench never opens sockets itself. It hands a fully prepared
//! request to a [`Transport`] and gets back status, headers and body text.
//! The default implementation is backed by `reqwest`.

use crate::config::Config;
use crate::error::AppError;
use reqwest::Method;
use std::future::Future;
use std::pin::Pin;

/// A request ready to go on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// What came back from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<TransportResponse, AppError>> + Send + 'a>>;

/// Trait for services that carry a prepared request to the network.
///
/// This abstraction keeps the workbench free of I/O and lets tests supply
/// canned responses.
pub trait Transport: Send + Sync {
    /// Executes `request` and returns the response, or a transport error.
    fn execute(&self, request: TransportRequest) -> TransportFuture<'_>;
}

/// Default transport using a shared `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport configured from `config`.
    ///
    /// The connect timeout always applies. The overall request timeout only
    /// applies when configured. Invalid certificates are accepted when
    /// `accept_invalid_certs` is set.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: TransportRequest) -> TransportFuture<'_> {
        Box::pin(async move {
            let method = Method::from_bytes(request.method.as_bytes()).map_err(|_| {
                AppError::InvalidRequest(format!("Invalid method: {}", request.method))
            })?;

            let mut req_builder = self.client.request(method, &request.url);
            for (name, value) in &request.headers {
                req_builder = req_builder.header(name.as_str(), value.as_str());
            }
            if let Some(body) = request.body {
                req_builder = req_builder.body(body);
            }

            let response = req_builder.send().await?;
            let status = response.status().as_u16();
            let headers: Vec<(String, String)> = response
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
                .collect();
            let body = response.text().await?;

            Ok(TransportResponse {
                status,
                headers,
                body,
            })
        })
    }
}
