//! Module for core business logic services.
//!
//! This module encapsulates services that perform specific business
//! operations and orchestrate interactions between different parts of the
//! application, such as the dashboard working set, the periodic refresher,
//! and the upstream operation-center client.

pub mod center_client;
pub mod dashboard;
pub mod refresh;
pub mod user_service;
