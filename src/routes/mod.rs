pub mod curl;
pub mod format;
pub mod health;
pub mod history;
pub mod send;

use crate::client::{Transport, Workbench};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Builds the API router around a shared workbench.
pub fn api_router<T: Transport + 'static>(workbench: Arc<Workbench<T>>) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/curl/generate", post(curl::generate))
        .route("/api/curl/parse", post(curl::parse))
        .route("/api/format", post(format::pretty_print))
        .route("/api/send", post(send::send_request::<T>))
        .route(
            "/api/history",
            get(history::list_entries::<T>).post(history::save_entry::<T>),
        )
        .route("/api/history/raw", get(history::list_lines::<T>))
        .with_state(workbench)
}
