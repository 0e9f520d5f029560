//! Module for registered-user API endpoints.

pub mod handlers;
pub mod routes;
