//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the server port, JWT settings, and the upstream gate-hardware API address.

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub jwt_expires_in_seconds: u64,
    pub server_port: u16,
    pub center_api_url: String,
    pub center_api_username: Option<String>,
    pub center_api_password: Option<String>,
    pub refresh_interval_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET not set")?;

        let jwt_expires_in_seconds = env::var("JWT_EXPIRES_IN_SECONDS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse::<u64>()
            .context("JWT_EXPIRES_IN_SECONDS must be a valid number")?;

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVER_PORT must be a valid number")?;

        let center_api_url = env::var("CENTER_API_URL")
            .unwrap_or_else(|_| "https://localhost:7211/api".to_string());

        let center_api_username = env::var("CENTER_API_USERNAME").ok();
        let center_api_password = env::var("CENTER_API_PASSWORD").ok();

        let refresh_interval_seconds = env::var("REFRESH_INTERVAL_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .context("REFRESH_INTERVAL_SECONDS must be a valid number")?;

        Ok(Config {
            jwt_secret,
            jwt_expires_in_seconds,
            server_port,
            center_api_url,
            center_api_username,
            center_api_password,
            refresh_interval_seconds,
        })
    }
}

#[cfg(test)]
impl Config {
    /// Fixed configuration for unit tests, independent of the environment.
    pub fn for_tests() -> Self {
        Config {
            jwt_secret: "test-secret".to_string(),
            jwt_expires_in_seconds: 86_400,
            server_port: 0,
            center_api_url: "https://localhost:7211/api".to_string(),
            center_api_username: None,
            center_api_password: None,
            refresh_interval_seconds: 30,
        }
    }
}
