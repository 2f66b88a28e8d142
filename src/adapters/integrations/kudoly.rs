//! Kudoly adapter. Implements TaskTrackerPort over the Kudoly REST API.
//!
//! Every operation is one authenticated JSON POST. Responses are classified
//! into success or `ApiError` the same way for all three endpoints.

use crate::domain::{
    ApiError, CheckTaskRequest, CheckTaskResponse, DomainError, SaveDevlogRequest,
    SaveDevlogResponse, SaveReportRequest, SaveReportResponse,
};
use crate::ports::TaskTrackerPort;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

const CHECK_TASK_PATH: &str = "/daily-check-task";
const SAVE_REPORT_PATH: &str = "/daily-save-report";
const SAVE_DEVLOG_PATH: &str = "/daily-save-devlog";

const DEFAULT_UNAUTHORIZED_MESSAGE: &str = "Invalid or expired token";
const DEFAULT_FAILURE_MESSAGE: &str = "Request failed";
const GENERIC_CODE: &str = "API_ERROR";

/// Kudoly API client.
///
/// Holds only immutable configuration, so one instance can serve concurrent
/// callers.
pub struct KudolyClient {
    client: Client,
    base_url: String,
    token: String,
}

impl KudolyClient {
    /// Create a new client.
    ///
    /// # Arguments
    /// * `base_url` - API root, e.g. `https://example.com/webhook`
    /// * `token` - Bearer token sent on every request
    ///
    /// # Errors
    /// Returns `DomainError::Config` if either value is empty. No network
    /// activity happens here.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, DomainError> {
        let base_url = base_url.into();
        let token = token.into();
        if base_url.is_empty() {
            return Err(DomainError::Config("KUDOLY_BASE_URL is required".to_string()));
        }
        if token.is_empty() {
            return Err(DomainError::Config("KUDOLY_API_TOKEN is required".to_string()));
        }
        let base_url = base_url.strip_suffix('/').unwrap_or(&base_url).to_string();
        Ok(Self {
            client: Client::new(),
            base_url,
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn request<B, T>(&self, path: &str, body: &B) -> Result<T, DomainError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "POST");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        let status = response.status();
        // A body that is not JSON is treated as empty, not as a client fault.
        let data = match response.bytes().await {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or(Value::Null),
            Err(_) => Value::Null,
        };

        if let Err(err) = classify(status, &data) {
            warn!(
                path,
                status = err.status,
                code = %err.code,
                message = %err.message,
                "Kudoly API rejected request"
            );
            return Err(err.into());
        }

        serde_json::from_value(data).map_err(|e| DomainError::Decode(e.to_string()))
    }
}

/// Classify a response. `Ok(())` means the body holds the typed payload.
fn classify(status: StatusCode, data: &Value) -> Result<(), ApiError> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError {
            status: 401,
            code: "UNAUTHORIZED".to_string(),
            message: text_field(data, "error")
                .unwrap_or_else(|| DEFAULT_UNAUTHORIZED_MESSAGE.to_string()),
            available_projects: None,
        });
    }

    if !status.is_success() {
        let fallback = format!(
            "HTTP error: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or_default()
        );
        return Err(ApiError {
            status: status.as_u16(),
            code: text_field(data, "code").unwrap_or_else(|| GENERIC_CODE.to_string()),
            message: text_field(data, "error").unwrap_or_else(|| fallback.trim_end().to_string()),
            available_projects: projects_field(data),
        });
    }

    if data.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(ApiError {
            status: 200,
            code: text_field(data, "code").unwrap_or_else(|| GENERIC_CODE.to_string()),
            message: text_field(data, "error")
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string()),
            available_projects: projects_field(data),
        });
    }

    Ok(())
}

fn text_field(data: &Value, key: &str) -> Option<String> {
    data.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn projects_field(data: &Value) -> Option<Vec<String>> {
    data.get("available_projects")
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
}

#[async_trait::async_trait]
impl TaskTrackerPort for KudolyClient {
    async fn check_task(
        &self,
        request: &CheckTaskRequest,
    ) -> Result<CheckTaskResponse, DomainError> {
        self.request(CHECK_TASK_PATH, request).await
    }

    async fn save_report(
        &self,
        request: &SaveReportRequest,
    ) -> Result<SaveReportResponse, DomainError> {
        self.request(SAVE_REPORT_PATH, request).await
    }

    async fn save_devlog(
        &self,
        request: &SaveDevlogRequest,
    ) -> Result<SaveDevlogResponse, DomainError> {
        self.request(SAVE_DEVLOG_PATH, request).await
    }
}
