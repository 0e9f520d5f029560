//! Middleware for protecting authenticated routes.
//!
//! Validates bearer tokens on protected endpoints and re-admits valid
//! tokens whose in-memory session is gone (process restart). Login and
//! registration routes are public and simply not layered with this
//! middleware; any other request without a valid token is answered 401,
//! which sends the client back to the login view.

use crate::auth::session::SessionManager;
use crate::config::Config;
use crate::utils::jwt::JwtUtils;
use axum::{
    extract::{Extension, Request},
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Bearer-token authentication middleware.
pub async fn jwt_auth(
    Extension(config): Extension<Config>,
    Extension(sessions): Extension<Arc<SessionManager>>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let jwt_utils = JwtUtils::new(&config);
    match jwt_utils.validate_token(token) {
        Ok(claims) => {
            // Restore path: a valid token is trusted even when the session
            // registry no longer holds it.
            sessions.resume(token, &claims).await;
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(_) => Err(StatusCode::UNAUTHORIZED),
    }
}
