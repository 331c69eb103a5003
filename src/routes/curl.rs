use axum::Json;
use serde::{Deserialize, Serialize};

use crate::request::{generate_curl, parse_curl, ParsedCurlResult, RequestDescriptor};

#[derive(Debug, Serialize)]
pub struct GenerateCurlResponse {
    pub curl: String,
}

pub async fn generate(Json(descriptor): Json<RequestDescriptor>) -> Json<GenerateCurlResponse> {
    Json(GenerateCurlResponse {
        curl: generate_curl(&descriptor),
    })
}

#[derive(Debug, Deserialize)]
pub struct ParseCurlRequest {
    pub command: String,
}

/// The parse result plus the editor descriptor derived from it.
#[derive(Debug, Serialize)]
pub struct ParseCurlResponse {
    #[serde(flatten)]
    pub parsed: ParsedCurlResult,
    pub request: RequestDescriptor,
}

pub async fn parse(Json(request): Json<ParseCurlRequest>) -> Json<ParseCurlResponse> {
    let parsed = parse_curl(&request.command);
    Json(ParseCurlResponse {
        request: parsed.clone().into_descriptor(),
        parsed,
    })
}
