use axum::Json;
use serde::{Deserialize, Serialize};

use crate::format::pretty_print_json;

#[derive(Debug, Deserialize)]
pub struct FormatRequest {
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct FormatResponse {
    pub formatted: String,
}

pub async fn pretty_print(Json(request): Json<FormatRequest>) -> Json<FormatResponse> {
    Json(FormatResponse {
        formatted: pretty_print_json(&request.body),
    })
}
