//! Outcomes returned by the use cases. Serialized with a `type` tag so the
//! agent can branch on `type`/`code` without any error handling.

use super::entities::ClickUpStatus;
use serde::Serialize;
use std::fmt;

/// Machine-readable codes produced by this crate. Backend codes outside this
/// set are passed through verbatim as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ProjectNameRequired,
    TaskNameRequired,
    ClickupStatusRequired,
    DevlogContentRequired,
    ProjectNotFound,
    ClickupNotConfigured,
    TaskNotFound,
    Unauthorized,
    ApiError,
    UnknownError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ProjectNameRequired => "PROJECT_NAME_REQUIRED",
            ErrorCode::TaskNameRequired => "TASK_NAME_REQUIRED",
            ErrorCode::ClickupStatusRequired => "CLICKUP_STATUS_REQUIRED",
            ErrorCode::DevlogContentRequired => "DEVLOG_CONTENT_REQUIRED",
            ErrorCode::ProjectNotFound => "PROJECT_NOT_FOUND",
            ErrorCode::ClickupNotConfigured => "CLICKUP_NOT_CONFIGURED",
            ErrorCode::TaskNotFound => "TASK_NOT_FOUND",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::ApiError => "API_ERROR",
            ErrorCode::UnknownError => "UNKNOWN_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<ErrorCode> for String {
    fn eq(&self, other: &ErrorCode) -> bool {
        self == other.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorOutcome {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_projects: Option<Vec<String>>,
}

impl ErrorOutcome {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.as_str().to_string(),
            message: message.into(),
            available_projects: None,
        }
    }

    pub fn with_projects(mut self, projects: Option<Vec<String>>) -> Self {
        self.available_projects = projects;
        self
    }
}

/// Task lookup came back empty and the caller has not decided whether to create it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskPending {
    pub task_found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub project_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clickup_list_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_statuses: Option<Vec<ClickUpStatus>>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSaved {
    pub success: bool,
    pub daily_id: String,
    pub task_name: String,
    pub task_created: bool,
    pub project_name: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevlogSaved {
    pub message: String,
    pub task_name: String,
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReportOutcome {
    CheckTask(TaskPending),
    SaveReport(ReportSaved),
    Error(ErrorOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DevlogOutcome {
    Success(DevlogSaved),
    Error(ErrorOutcome),
}

impl From<ErrorOutcome> for ReportOutcome {
    fn from(err: ErrorOutcome) -> Self {
        ReportOutcome::Error(err)
    }
}

impl From<ErrorOutcome> for DevlogOutcome {
    fn from(err: ErrorOutcome) -> Self {
        DevlogOutcome::Error(err)
    }
}
