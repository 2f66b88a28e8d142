//! Domain entities. Wire records exchanged with the Kudoly API.
//!
//! No HTTP types here. Optional backend fields are explicit `Option`s; the
//! orchestrators decide the defaults.

use serde::{Deserialize, Serialize};

/// Filename under which a DEVLOG is attached to a task.
pub const DEVLOG_FILENAME: &str = "DEVLOG.md";

/// Status of the work reported in a daily.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Complete,
    #[default]
    Progress,
    Blocked,
    Upcoming,
    Qa,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 5] = [
        ReportStatus::Complete,
        ReportStatus::Progress,
        ReportStatus::Blocked,
        ReportStatus::Upcoming,
        ReportStatus::Qa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Complete => "complete",
            ReportStatus::Progress => "progress",
            ReportStatus::Blocked => "blocked",
            ReportStatus::Upcoming => "upcoming",
            ReportStatus::Qa => "qa",
        }
    }
}

/// A ClickUp status a new task may be created with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickUpStatus {
    pub status: String,
    pub color: String,
}

/// Body of `POST /daily-check-task`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckTaskRequest {
    pub project_name: String,
    pub task_name: String,
}

/// Lookup result. When `task_found` is false, `available_statuses` lists the
/// statuses valid for creating the task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckTaskResponse {
    #[serde(default)]
    pub task_found: bool,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub clickup_list_id: Option<String>,
    #[serde(default)]
    pub available_statuses: Option<Vec<ClickUpStatus>>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub available_projects: Option<Vec<String>>,
}

/// Body of `POST /daily-save-report`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveReportRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    pub project_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clickup_list_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clickup_task_id: Option<String>,
    pub task_name: String,
    pub activities_string: String,
    pub status: ReportStatus,
    pub create_task: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clickup_status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveReportResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub daily_id: String,
    #[serde(default)]
    pub task_created: Option<bool>,
}

/// Body of `POST /daily-save-devlog`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveDevlogRequest {
    pub project_name: String,
    pub task_name: String,
    pub devlog_content: String,
    pub filename: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveDevlogResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub task_name: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}
