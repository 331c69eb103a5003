use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::client::{Transport, Workbench};
use crate::error::AppError;
use crate::history::HistoryEntry;
use crate::request::RequestDescriptor;

#[derive(Debug, Serialize)]
pub struct HistoryEntries {
    pub entries: Vec<HistoryEntry>,
}

#[derive(Debug, Serialize)]
pub struct HistoryLines {
    pub lines: Vec<String>,
}

pub async fn list_entries<T: Transport + 'static>(
    State(workbench): State<Arc<Workbench<T>>>,
) -> Json<HistoryEntries> {
    Json(HistoryEntries {
        entries: workbench.history_entries(),
    })
}

pub async fn list_lines<T: Transport + 'static>(
    State(workbench): State<Arc<Workbench<T>>>,
) -> Json<HistoryLines> {
    Json(HistoryLines {
        lines: workbench.history_lines(),
    })
}

pub async fn save_entry<T: Transport + 'static>(
    State(workbench): State<Arc<Workbench<T>>>,
    Json(descriptor): Json<RequestDescriptor>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    workbench.save_history(&descriptor)?;
    Ok((StatusCode::CREATED, Json(json!({ "success": true }))))
}
