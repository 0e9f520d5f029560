//! Defines the HTTP routes for the parking-lot views.
//!
//! Every lot route requires an authenticated session; unauthenticated
//! requests are answered 401 by the `jwt_auth` layer.

use super::handlers::{back, get_lot, list_lots, refresh_lot, toggle_gate};
use crate::auth::middleware::jwt_auth;
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub async fn lot_router() -> Router {
    Router::new()
        .route("/", get(list_lots))
        .route("/back", post(back))
        .route("/{lot_id}", get(get_lot))
        .route("/{lot_id}/refresh", post(refresh_lot))
        .route("/{lot_id}/gates/{gate_id}/toggle", post(toggle_gate))
        .layer(middleware::from_fn(jwt_auth))
}
