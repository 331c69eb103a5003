use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::client::{Transport, Workbench};
use crate::error::AppError;
use crate::request::RequestDescriptor;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendResponse {
    pub success: bool,
    pub status: u16,
    pub response: String,
    pub history_saved: bool,
}

pub async fn send_request<T: Transport + 'static>(
    State(workbench): State<Arc<Workbench<T>>>,
    Json(descriptor): Json<RequestDescriptor>,
) -> Result<Json<SendResponse>, AppError> {
    let outcome = workbench.send(&descriptor).await?;

    Ok(Json(SendResponse {
        success: true,
        status: outcome.status,
        response: outcome.formatted,
        history_saved: outcome.history_saved,
    }))
}
