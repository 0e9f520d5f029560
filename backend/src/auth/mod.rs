//! Authentication module for managing operator sessions and access control.
//!
//! This module provides the public interface for authentication-related
//! functionality such as login, registration, session lifecycle, and the
//! bearer-token middleware that guards protected routes.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
pub mod session;
