//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for operator
//! authentication (login, registration, logout), parse request data, and
//! interact with the `auth::service` for core business logic.

use crate::api::common::service_error_to_http;
use crate::auth::models::*;
use crate::auth::service::AuthService;
use crate::auth::session::SessionManager;
use crate::config::Config;
use crate::store::Store;
use crate::utils::jwt::Claims;
use axum::{
    extract::{Extension, Json},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::Json as ResponseJson,
};
use std::sync::Arc;

/// Handle operator login.
#[axum::debug_handler]
pub async fn login(
    Extension(store): Extension<Arc<Store>>,
    Extension(sessions): Extension<Arc<SessionManager>>,
    Extension(config): Extension<Config>,
    Json(payload): Json<LoginRequest>,
) -> Result<ResponseJson<LoginResponse>, (StatusCode, String)> {
    let auth_service = AuthService::new(&store, &sessions, &config);

    match auth_service.login(payload).await {
        Ok(response) => Ok(ResponseJson(response)),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle operator registration. A successful registration also logs the
/// new operator in.
#[axum::debug_handler]
pub async fn register(
    Extension(store): Extension<Arc<Store>>,
    Extension(sessions): Extension<Arc<SessionManager>>,
    Extension(config): Extension<Config>,
    Json(payload): Json<RegisterRequest>,
) -> Result<ResponseJson<LoginResponse>, (StatusCode, String)> {
    let auth_service = AuthService::new(&store, &sessions, &config);

    match auth_service.register(payload).await {
        Ok(response) => Ok(ResponseJson(response)),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Handle logout. Idempotent: requests without a token, or for a token
/// that is already gone, still succeed.
#[axum::debug_handler]
pub async fn logout(
    Extension(store): Extension<Arc<Store>>,
    Extension(sessions): Extension<Arc<SessionManager>>,
    Extension(config): Extension<Config>,
    headers: HeaderMap,
) -> Result<ResponseJson<serde_json::Value>, (StatusCode, String)> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "));

    if let Some(token) = token {
        let auth_service = AuthService::new(&store, &sessions, &config);
        if let Err(error) = auth_service.logout(token).await {
            return Err(service_error_to_http(error));
        }
    }

    Ok(ResponseJson(serde_json::json!({
        "message": "Logged out successfully"
    })))
}

/// Get current operator information from the session token.
#[axum::debug_handler]
pub async fn me(
    Extension(store): Extension<Arc<Store>>,
    Extension(claims): Extension<Claims>,
) -> Result<ResponseJson<UserInfo>, (StatusCode, String)> {
    let user = match store.get_user_by_id(&claims.sub).await {
        Some(user) => UserInfo {
            id: user.id,
            name: user.name,
            email: user.email,
        },
        // Token minted before a restart can outlive the mocked store; the
        // claims still identify the operator.
        None => UserInfo {
            id: claims.sub.clone(),
            name: claims.name.clone(),
            email: claims.email.clone(),
        },
    };

    Ok(ResponseJson(user))
}
