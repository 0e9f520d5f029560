//! Defines the HTTP routes for the registered-users view.

use super::handlers::list_users;
use crate::auth::middleware::jwt_auth;
use axum::{Router, middleware, routing::get};

pub async fn user_router() -> Router {
    Router::new()
        .route("/", get(list_users))
        .layer(middleware::from_fn(jwt_auth))
}
