//! Main entry point for the ParkControl backend.
//!
//! This file initializes the Axum web server, seeds the in-memory working
//! set, connects to the upstream operation-center API when credentials are
//! configured, and registers all API routes and middleware.
//! It orchestrates the application's startup and defines its overall structure.

mod api;
mod auth;
mod config;
mod errors;
mod services;
mod store;
mod utils;

use crate::api::common::ApiResponse;
use crate::auth::session::SessionManager;
use crate::services::center_client::{CenterApi, CenterClient};
use crate::services::dashboard::Dashboard;
use crate::services::refresh::RefreshHandle;
use crate::store::Store;
use axum::{Extension, Router, response::Json, routing::get};
use config::Config;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::fmt::init;

#[tokio::main]
async fn main() {
    init();

    let config = Config::from_env().unwrap();
    let store = Arc::new(Store::seeded());
    let sessions = Arc::new(SessionManager::new());

    let client: Arc<dyn CenterApi> = Arc::new(CenterClient::new(config.center_api_url.clone()));
    if let (Some(username), Some(password)) =
        (&config.center_api_username, &config.center_api_password)
    {
        if let Err(error) = client.authenticate(username, password).await {
            warn!(%error, "Operation-center login failed, serving local data only");
        }
    }

    let dashboard = Arc::new(Dashboard::new(store.clone(), Some(client)));
    dashboard.load_lots().await;

    let refresh = RefreshHandle::spawn(
        dashboard.clone(),
        Duration::from_secs(config.refresh_interval_seconds),
    );

    let app = Router::new()
        .route("/", get(root_handler))
        .nest("/auth", auth::routes::auth_router())
        .nest("/api/lots", api::lot::routes::lot_router().await)
        .nest("/api/users", api::user::routes::user_router().await)
        .layer(Extension(store))
        .layer(Extension(sessions))
        .layer(Extension(dashboard))
        .layer(Extension(config.clone()));

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await.unwrap();

    info!("Starting ParkControl server on port {}", config.server_port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    refresh.shutdown().await;
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
    info!("Shutdown signal received");
}

async fn root_handler() -> Json<ApiResponse<serde_json::Value>> {
    Json(ApiResponse::success(
        serde_json::json!({
            "service": "ParkControl Backend",
            "version": "0.1.0"
        }),
        "Welcome to ParkControl API",
    ))
}
