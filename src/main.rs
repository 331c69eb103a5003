use http_workbench::{api_router, Config, HistoryLog, ReqwestTransport, Workbench};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "http_workbench=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!(
        history_file = %config.history_file.display(),
        accept_invalid_certs = config.accept_invalid_certs,
        "Starting HTTP workbench on port {}",
        config.port
    );

    let transport = match ReqwestTransport::from_config(&config) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialise transport");
            std::process::exit(1);
        }
    };
    let workbench = Arc::new(Workbench::new(
        transport,
        HistoryLog::new(config.history_file.clone()),
    ));

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = api_router(workbench).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    );

    // Run the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(error = %e, "Failed to bind {}", addr);
            std::process::exit(1);
        }
    };

    tracing::info!("Listening on http://{}", addr);
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "Server error");
    }
}
