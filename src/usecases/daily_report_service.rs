//! Daily report use case: resolve project → check task → (ask to create) → save.
//!
//! - Never returns an error; every failure is an `error` outcome
//! - Stops at `check_task` when the task is missing and creation was not requested
//! - At most two sequential tracker calls

use crate::domain::{
    CheckTaskRequest, ErrorCode, ErrorOutcome, ReportOutcome, ReportSaved, ReportStatus,
    SaveReportRequest, TaskPending,
};
use crate::ports::{ProjectNamePort, TaskTrackerPort};
use crate::usecases::error_mapping::{
    ErrorContext, ErrorRule, ErrorTable, clickup_not_configured, map_failure, project_not_found,
};
use crate::usecases::project::{non_empty, resolve_project_name};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

const REPORT_ERRORS: ErrorTable = ErrorTable {
    rules: &[
        ErrorRule {
            code: ErrorCode::ProjectNotFound,
            message: project_not_found,
            keep_projects: true,
        },
        ErrorRule {
            code: ErrorCode::ClickupNotConfigured,
            message: clickup_not_configured,
            keep_projects: false,
        },
    ],
    passthrough_projects: true,
};

/// Arguments of the `submit_daily_report` tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmitDailyReportInput {
    /// Falls back to the local manifest when absent.
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub task_name: Option<String>,
    pub activities_string: String,
    #[serde(default)]
    pub status: ReportStatus,
    /// Create the task when the lookup does not find it.
    #[serde(default)]
    pub create_task: bool,
    /// Status for the new task; required when `create_task` is set.
    #[serde(default)]
    pub clickup_status: Option<String>,
}

/// Daily report service. Coordinates the task lookup and the report save.
pub struct DailyReportService {
    tracker: Arc<dyn TaskTrackerPort>,
    projects: Arc<dyn ProjectNamePort>,
}

impl DailyReportService {
    pub fn new(tracker: Arc<dyn TaskTrackerPort>, projects: Arc<dyn ProjectNamePort>) -> Self {
        Self { tracker, projects }
    }

    pub async fn submit(&self, input: SubmitDailyReportInput) -> ReportOutcome {
        let Some(project_name) =
            resolve_project_name(input.project_name, self.projects.as_ref()).await
        else {
            return ErrorOutcome::new(
                ErrorCode::ProjectNameRequired,
                "Could not determine the project name. Please specify it.",
            )
            .into();
        };

        let Some(task_name) = non_empty(input.task_name) else {
            return ErrorOutcome::new(
                ErrorCode::TaskNameRequired,
                "Please provide the task name.",
            )
            .into();
        };

        let ctx = ErrorContext {
            project_name: &project_name,
            task_name: &task_name,
        };

        info!(project = %project_name, task = %task_name, "checking task");
        let lookup = match self
            .tracker
            .check_task(&CheckTaskRequest {
                project_name: project_name.clone(),
                task_name: task_name.clone(),
            })
            .await
        {
            Ok(lookup) => lookup,
            Err(e) => {
                warn!(error = %e, "task lookup failed");
                return map_failure(&e, &REPORT_ERRORS, &ctx).into();
            }
        };

        if !lookup.task_found && !input.create_task {
            info!(task = %task_name, "task not found, awaiting creation decision");
            return ReportOutcome::CheckTask(TaskPending {
                task_found: false,
                project_id: lookup.project_id,
                project_name: project_name.clone(),
                clickup_list_id: lookup.clickup_list_id,
                available_statuses: lookup.available_statuses,
                message: format!(
                    "Task \"{}\" does not exist in ClickUp. Do you want to create it?",
                    task_name
                ),
            });
        }

        // Applies even when the task already exists.
        let clickup_status = non_empty(input.clickup_status);
        if input.create_task && clickup_status.is_none() {
            return ErrorOutcome::new(
                ErrorCode::ClickupStatusRequired,
                "You must specify the ClickUp status to create the task.",
            )
            .into();
        }

        let request = SaveReportRequest {
            project_id: lookup.project_id,
            project_name: project_name.clone(),
            clickup_list_id: lookup.clickup_list_id,
            clickup_task_id: lookup.task_id,
            task_name: task_name.clone(),
            activities_string: input.activities_string,
            status: input.status,
            create_task: input.create_task,
            clickup_status,
        };

        info!(
            project = %project_name,
            task = %task_name,
            status = input.status.as_str(),
            create_task = input.create_task,
            "saving daily report"
        );
        let saved = match self.tracker.save_report(&request).await {
            Ok(saved) => saved,
            Err(e) => {
                warn!(error = %e, "report save failed");
                return map_failure(&e, &REPORT_ERRORS, &ctx).into();
            }
        };

        let task_created = saved.task_created.unwrap_or(false);
        let message = if task_created {
            format!("Report saved. Task \"{}\" created in ClickUp.", task_name)
        } else {
            format!("Report saved for task \"{}\".", task_name)
        };
        info!(daily_id = %saved.daily_id, task_created, "daily report saved");

        ReportOutcome::SaveReport(ReportSaved {
            success: saved.success,
            daily_id: saved.daily_id,
            task_name,
            task_created,
            project_name,
            message,
        })
    }
}
