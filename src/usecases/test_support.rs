//! In-memory port doubles for use case tests.

use crate::domain::{
    ApiError, CheckTaskRequest, CheckTaskResponse, DomainError, SaveDevlogRequest,
    SaveDevlogResponse, SaveReportRequest, SaveReportResponse,
};
use crate::ports::{ProjectNamePort, TaskTrackerPort};
use std::sync::Mutex;

pub struct FixedProjectName(Option<String>);

impl FixedProjectName {
    pub fn new(name: Option<&str>) -> Self {
        Self(name.map(str::to_string))
    }
}

#[async_trait::async_trait]
impl ProjectNamePort for FixedProjectName {
    async fn default_project_name(&self) -> Option<String> {
        self.0.clone()
    }
}

pub fn api_error(status: u16, code: &str, message: &str, projects: &[&str]) -> DomainError {
    DomainError::Api(ApiError {
        status,
        code: code.to_string(),
        message: message.to_string(),
        available_projects: if projects.is_empty() {
            None
        } else {
            Some(projects.iter().map(|p| p.to_string()).collect())
        },
    })
}

/// Scripted tracker. Each operation answers once; calls are recorded.
#[derive(Default)]
pub struct MockTracker {
    check: Mutex<Option<Result<CheckTaskResponse, DomainError>>>,
    report: Mutex<Option<Result<SaveReportResponse, DomainError>>>,
    devlog: Mutex<Option<Result<SaveDevlogResponse, DomainError>>>,
    checks: Mutex<Vec<CheckTaskRequest>>,
    reports: Mutex<Vec<SaveReportRequest>>,
    devlogs: Mutex<Vec<SaveDevlogRequest>>,
}

impl MockTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_check(self, result: Result<CheckTaskResponse, DomainError>) -> Self {
        *self.check.lock().unwrap() = Some(result);
        self
    }

    pub fn with_report(self, result: Result<SaveReportResponse, DomainError>) -> Self {
        *self.report.lock().unwrap() = Some(result);
        self
    }

    pub fn with_devlog(self, result: Result<SaveDevlogResponse, DomainError>) -> Self {
        *self.devlog.lock().unwrap() = Some(result);
        self
    }

    pub fn check_calls(&self) -> Vec<CheckTaskRequest> {
        self.checks.lock().unwrap().clone()
    }

    pub fn report_calls(&self) -> Vec<SaveReportRequest> {
        self.reports.lock().unwrap().clone()
    }

    pub fn devlog_calls(&self) -> Vec<SaveDevlogRequest> {
        self.devlogs.lock().unwrap().clone()
    }
}

fn unexpected(op: &str) -> DomainError {
    DomainError::Transport(format!("unexpected {} call", op))
}

#[async_trait::async_trait]
impl TaskTrackerPort for MockTracker {
    async fn check_task(
        &self,
        request: &CheckTaskRequest,
    ) -> Result<CheckTaskResponse, DomainError> {
        self.checks.lock().unwrap().push(request.clone());
        self.check
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(unexpected("check_task")))
    }

    async fn save_report(
        &self,
        request: &SaveReportRequest,
    ) -> Result<SaveReportResponse, DomainError> {
        self.reports.lock().unwrap().push(request.clone());
        self.report
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(unexpected("save_report")))
    }

    async fn save_devlog(
        &self,
        request: &SaveDevlogRequest,
    ) -> Result<SaveDevlogResponse, DomainError> {
        self.devlogs.lock().unwrap().push(request.clone());
        self.devlog
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(unexpected("save_devlog")))
    }
}
