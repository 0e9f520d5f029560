//! Defines the HTTP routes specifically for authentication.
//!
//! Login and registration are the public allow-list: they are the only
//! routes reachable without a bearer token. Everything else in the API is
//! layered with `jwt_auth`.

use crate::auth::handlers::*;
use crate::auth::middleware::*;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Creates the authentication router with all auth-related routes
pub fn auth_router() -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/logout", post(logout))
        .route("/me", get(me).layer(middleware::from_fn(jwt_auth)))
}
