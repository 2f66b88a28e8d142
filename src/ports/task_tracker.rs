//! Task tracker outbound port. Daily reports and DEVLOGs stored by the Kudoly API.

use crate::domain::{
    CheckTaskRequest, CheckTaskResponse, DomainError, SaveDevlogRequest, SaveDevlogResponse,
    SaveReportRequest, SaveReportResponse,
};

/// Port for the remote task tracker backend.
///
/// Implemented by the Kudoly HTTP adapter. Every call is independent and
/// stateless; implementations must not retry.
#[async_trait::async_trait]
pub trait TaskTrackerPort: Send + Sync {
    /// Check whether `task_name` exists under `project_name`.
    ///
    /// # Errors
    /// Returns `DomainError::Api` when the backend rejects the lookup (e.g.
    /// `PROJECT_NOT_FOUND`), other variants for transport or decode failures.
    async fn check_task(
        &self,
        request: &CheckTaskRequest,
    ) -> Result<CheckTaskResponse, DomainError>;

    /// Persist a daily report, optionally creating the task first.
    async fn save_report(
        &self,
        request: &SaveReportRequest,
    ) -> Result<SaveReportResponse, DomainError>;

    /// Attach a markdown document to a task.
    async fn save_devlog(
        &self,
        request: &SaveDevlogRequest,
    ) -> Result<SaveDevlogResponse, DomainError>;
}
