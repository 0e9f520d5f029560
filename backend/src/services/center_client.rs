//! Client for the upstream operation-center / gate-hardware REST API.
//!
//! All outbound calls go through one place so failures are normalized into
//! the service error taxonomy: unauthorized responses purge the held token,
//! structured validation bodies are flattened to one message per field,
//! and everything else becomes a generic network error. Requests to paths
//! outside the public allow-list are refused client-side when no token is
//! held. No retries; every failure is terminal for that call.

use crate::errors::{ServiceError, ServiceResult};
use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::warn;

/// Paths reachable without a bearer token.
const PUBLIC_PATHS: &[&str] = &["/auth/login", "/user"];

/// Fallback message for failures without a usable error body.
const FALLBACK_ERROR: &str = "Ocorreu um erro inesperado. Tente novamente mais tarde.";

/// A parking lot record as the upstream API reports it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationCenter {
    pub operation_center_id: u64,
    pub name: String,
    pub is_active: bool,
}

/// Gate actuation command. Accepted by the upstream API but deliberately
/// not wired into local gate toggling.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceCommand {
    pub serial: String,
    pub action: String,
}

/// Seam over the upstream API so the dashboard can be tested with a stub.
#[async_trait]
pub trait CenterApi: Send + Sync {
    /// Obtains and holds a bearer token for subsequent calls.
    async fn authenticate(&self, username: &str, password: &str) -> ServiceResult<()>;

    /// Lists the operation centers (parking lots) known upstream.
    async fn list_centers(&self) -> ServiceResult<Vec<OperationCenter>>;

    /// Sends a gate actuation command.
    async fn send_command(&self, command: DeviceCommand) -> ServiceResult<()>;
}

pub struct CenterClient {
    http: Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl CenterClient {
    pub fn new(base_url: String) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        CenterClient {
            http,
            base_url,
            token: RwLock::new(None),
        }
    }

    fn is_public(path: &str) -> bool {
        PUBLIC_PATHS.iter().any(|route| path.starts_with(route))
    }

    async fn send(&self, method: Method, path: &str, body: Option<Value>) -> ServiceResult<Value> {
        let token = self.token.read().await.clone();

        if !Self::is_public(path) && token.is_none() {
            return Err(ServiceError::authentication("Token inexistente"));
        }

        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http
            .request(method, &url)
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ServiceError::network(format!("{}: {}", FALLBACK_ERROR, e)))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<Value>()
                .await
                .map_err(|e| ServiceError::network(format!("{}: {}", FALLBACK_ERROR, e)));
        }

        if status == StatusCode::UNAUTHORIZED {
            // Token is no longer valid upstream; drop it so the next call
            // fails fast until re-authentication.
            *self.token.write().await = None;
        }

        let body = response.json::<Value>().await.ok();
        Err(normalize_failure(status, body))
    }
}

/// Maps a failed upstream response to the error taxonomy.
fn normalize_failure(status: StatusCode, body: Option<Value>) -> ServiceError {
    if status == StatusCode::UNAUTHORIZED {
        return ServiceError::authentication("Não autorizado");
    }

    if status == StatusCode::BAD_REQUEST {
        if let Some(errors) = body.as_ref().and_then(|b| b.get("errors")).and_then(Value::as_object)
        {
            let messages: Vec<&str> = errors
                .values()
                .filter_map(|field| field.as_array())
                .filter_map(|messages| messages.first())
                .filter_map(Value::as_str)
                .collect();
            if !messages.is_empty() {
                return ServiceError::validation(messages.join("\n"));
            }
        }
    }

    let detail = body
        .as_ref()
        .and_then(|b| b.get("detail"))
        .and_then(Value::as_str)
        .unwrap_or(FALLBACK_ERROR);
    ServiceError::network(detail.to_string())
}

#[async_trait]
impl CenterApi for CenterClient {
    async fn authenticate(&self, username: &str, password: &str) -> ServiceResult<()> {
        let body = serde_json::json!({ "username": username, "password": password });
        let response = self.send(Method::POST, "/auth/login", Some(body)).await?;

        let token = response
            .get("token")
            .and_then(Value::as_str)
            .ok_or_else(|| ServiceError::network("Login response had no token"))?;

        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    async fn list_centers(&self) -> ServiceResult<Vec<OperationCenter>> {
        let response = self.send(Method::GET, "/operation-center", None).await?;

        // An empty or missing items array is a valid (empty) listing.
        let items = match response.get("items") {
            Some(items) => serde_json::from_value(items.clone())
                .map_err(|e| ServiceError::network(format!("Malformed center list: {}", e)))?,
            None => {
                warn!("Operation-center response carried no items field");
                Vec::new()
            }
        };

        Ok(items)
    }

    async fn send_command(&self, command: DeviceCommand) -> ServiceResult<()> {
        let body = serde_json::to_value(&command)
            .map_err(|e| ServiceError::internal(format!("Command serialization failed: {}", e)))?;
        self.send(Method::POST, "/Devices/command", Some(body))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_and_registration_paths_are_public() {
        assert!(CenterClient::is_public("/auth/login"));
        assert!(CenterClient::is_public("/user"));
        assert!(!CenterClient::is_public("/operation-center"));
        assert!(!CenterClient::is_public("/Devices/command"));
    }

    #[tokio::test]
    async fn protected_call_without_token_is_refused_client_side() {
        let client = CenterClient::new("https://localhost:7211/api".into());
        let err = client.list_centers().await.unwrap_err();
        assert!(matches!(err, ServiceError::Authentication { .. }));
    }

    #[test]
    fn unauthorized_maps_to_authentication() {
        let err = normalize_failure(StatusCode::UNAUTHORIZED, None);
        assert!(matches!(err, ServiceError::Authentication { .. }));
    }

    #[test]
    fn validation_body_is_flattened_to_first_message_per_field() {
        let body = serde_json::json!({
            "errors": {
                "Email": ["E-mail inválido", "E-mail em uso"],
                "Document": ["CPF inválido"]
            }
        });
        let err = normalize_failure(StatusCode::BAD_REQUEST, Some(body));
        match err {
            ServiceError::Validation { message } => {
                let mut lines: Vec<&str> = message.lines().collect();
                lines.sort_unstable();
                assert_eq!(lines, vec!["CPF inválido", "E-mail inválido"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn other_failures_fall_back_to_detail_or_generic_message() {
        let with_detail = normalize_failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            Some(serde_json::json!({ "detail": "Banco indisponível" })),
        );
        match with_detail {
            ServiceError::Network { message } => assert_eq!(message, "Banco indisponível"),
            other => panic!("expected network error, got {:?}", other),
        }

        let without_body = normalize_failure(StatusCode::BAD_GATEWAY, None);
        match without_body {
            ServiceError::Network { message } => assert_eq!(message, FALLBACK_ERROR),
            other => panic!("expected network error, got {:?}", other),
        }
    }
}
