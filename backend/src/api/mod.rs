//! Module for defining the API endpoints and their handlers.
//!
//! This module organizes the HTTP routes of the dashboard backend,
//! grouping related endpoints into sub-modules for parking lots and
//! registered users, and keeping the shared response/error plumbing in
//! `common`.

pub mod common;
pub mod lot;
pub mod user;
