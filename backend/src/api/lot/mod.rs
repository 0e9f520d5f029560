//! Module for parking-lot API endpoints.

pub mod handlers;
pub mod routes;
