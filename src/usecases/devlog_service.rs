//! DEVLOG use case: validate and attach a markdown knowledge document to a task.

use crate::domain::{
    DEVLOG_FILENAME, DevlogOutcome, DevlogSaved, ErrorCode, ErrorOutcome, SaveDevlogRequest,
};
use crate::ports::{ProjectNamePort, TaskTrackerPort};
use crate::usecases::error_mapping::{
    ErrorContext, ErrorRule, ErrorTable, map_failure, project_not_found, task_not_found,
};
use crate::usecases::project::{non_empty, resolve_project_name};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};

const DEVLOG_ERRORS: ErrorTable = ErrorTable {
    rules: &[
        ErrorRule {
            code: ErrorCode::TaskNotFound,
            message: task_not_found,
            keep_projects: false,
        },
        ErrorRule {
            code: ErrorCode::ProjectNotFound,
            message: project_not_found,
            keep_projects: false,
        },
    ],
    passthrough_projects: false,
};

/// Arguments of the `generate_devlog` tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GenerateDevlogInput {
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub task_name: Option<String>,
    /// Markdown body of the document.
    #[serde(default)]
    pub devlog_content: String,
}

pub struct DevlogService {
    tracker: Arc<dyn TaskTrackerPort>,
    projects: Arc<dyn ProjectNamePort>,
}

impl DevlogService {
    pub fn new(tracker: Arc<dyn TaskTrackerPort>, projects: Arc<dyn ProjectNamePort>) -> Self {
        Self { tracker, projects }
    }

    pub async fn save(&self, input: GenerateDevlogInput) -> DevlogOutcome {
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
                "Please provide the name of the task where the DEVLOG should be saved.",
            )
            .into();
        };

        if input.devlog_content.trim().is_empty() {
            return ErrorOutcome::new(
                ErrorCode::DevlogContentRequired,
                "The DEVLOG content cannot be empty.",
            )
            .into();
        }

        let request = SaveDevlogRequest {
            project_name: project_name.clone(),
            task_name: task_name.clone(),
            devlog_content: input.devlog_content,
            filename: DEVLOG_FILENAME.to_string(),
        };

        info!(
            project = %project_name,
            task = %task_name,
            content_len = request.devlog_content.len(),
            "saving DEVLOG"
        );
        let saved = match self.tracker.save_devlog(&request).await {
            Ok(saved) => saved,
            Err(e) => {
                warn!(error = %e, "DEVLOG save failed");
                let ctx = ErrorContext {
                    project_name: &project_name,
                    task_name: &task_name,
                };
                return map_failure(&e, &DEVLOG_ERRORS, &ctx).into();
            }
        };

        let task_name = non_empty(saved.task_name).unwrap_or(task_name);
        let message = non_empty(saved.message)
            .unwrap_or_else(|| format!("DEVLOG saved to task \"{}\"", task_name));

        DevlogOutcome::Success(DevlogSaved {
            message,
            task_name,
            filename: non_empty(saved.filename).unwrap_or_else(|| DEVLOG_FILENAME.to_string()),
            file_url: saved.file_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SaveDevlogResponse;
    use crate::usecases::test_support::{FixedProjectName, MockTracker, api_error};

    fn service(tracker: &Arc<MockTracker>, manifest: Option<&str>) -> DevlogService {
        DevlogService::new(
            Arc::clone(tracker) as Arc<dyn TaskTrackerPort>,
            Arc::new(FixedProjectName::new(manifest)),
        )
    }

    fn input(content: &str) -> GenerateDevlogInput {
        GenerateDevlogInput {
            project_name: Some("my-project".to_string()),
            task_name: Some("my-task".to_string()),
            devlog_content: content.to_string(),
        }
    }

    fn expect_error(outcome: DevlogOutcome) -> ErrorOutcome {
        match outcome {
            DevlogOutcome::Error(err) => err,
            other => panic!("expected error outcome, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_blank_content_is_rejected_without_call() {
        let tracker = Arc::new(MockTracker::new());

        let outcome = service(&tracker, None).save(input("   ")).await;

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["type"], "error");
        assert_eq!(value["code"], "DEVLOG_CONTENT_REQUIRED");
        assert!(tracker.devlog_calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_project_name() {
        let tracker = Arc::new(MockTracker::new());

        let outcome = service(&tracker, None)
            .save(GenerateDevlogInput {
                project_name: None,
                ..input("# Notes")
            })
            .await;

        assert_eq!(expect_error(outcome).code, "PROJECT_NAME_REQUIRED");
    }

    #[tokio::test]
    async fn test_missing_task_name() {
        let tracker = Arc::new(MockTracker::new());

        let outcome = service(&tracker, Some("pkg-project"))
            .save(GenerateDevlogInput {
                project_name: None,
                task_name: Some(String::new()),
                devlog_content: "# Notes".to_string(),
            })
            .await;

        assert_eq!(expect_error(outcome).code, "TASK_NAME_REQUIRED");
        assert!(tracker.devlog_calls().is_empty());
    }

    #[tokio::test]
    async fn test_saves_with_fixed_filename_and_manifest_project() {
        let tracker = Arc::new(MockTracker::new().with_devlog(Ok(SaveDevlogResponse {
            success: true,
            message: Some("Stored".to_string()),
            file_url: Some("https://files.test/DEVLOG.md".to_string()),
            ..Default::default()
        })));

        let outcome = service(&tracker, Some("pkg-project"))
            .save(GenerateDevlogInput {
                project_name: None,
                ..input("# Notes")
            })
            .await;

        let calls = tracker.devlog_calls();
        assert_eq!(
            calls,
            vec![SaveDevlogRequest {
                project_name: "pkg-project".to_string(),
                task_name: "my-task".to_string(),
                devlog_content: "# Notes".to_string(),
                filename: "DEVLOG.md".to_string(),
            }]
        );
        assert_eq!(
            outcome,
            DevlogOutcome::Success(DevlogSaved {
                message: "Stored".to_string(),
                task_name: "my-task".to_string(),
                filename: "DEVLOG.md".to_string(),
                file_url: Some("https://files.test/DEVLOG.md".to_string()),
            })
        );
    }

    #[tokio::test]
    async fn test_defaults_message_from_backend_task_name() {
        let tracker = Arc::new(MockTracker::new().with_devlog(Ok(SaveDevlogResponse {
            success: true,
            task_name: Some("Canonical Task".to_string()),
            ..Default::default()
        })));

        let outcome = service(&tracker, None).save(input("# Notes")).await;

        match outcome {
            DevlogOutcome::Success(saved) => {
                assert_eq!(saved.task_name, "Canonical Task");
                assert_eq!(saved.message, "DEVLOG saved to task \"Canonical Task\"");
                assert_eq!(saved.filename, "DEVLOG.md");
                assert!(saved.file_url.is_none());
            }
            other => panic!("expected success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_task_not_found() {
        let tracker = Arc::new(
            MockTracker::new().with_devlog(Err(api_error(404, "TASK_NOT_FOUND", "nope", &[]))),
        );

        let err = expect_error(service(&tracker, None).save(input("# Notes")).await);

        assert_eq!(err.code, "TASK_NOT_FOUND");
        assert_eq!(err.message, "Task \"my-task\" not found in ClickUp.");
    }

    #[tokio::test]
    async fn test_project_not_found_drops_alternatives() {
        let tracker = Arc::new(MockTracker::new().with_devlog(Err(api_error(
            404,
            "PROJECT_NOT_FOUND",
            "nope",
            &["other"],
        ))));

        let err = expect_error(service(&tracker, None).save(input("# Notes")).await);

        assert_eq!(err.code, "PROJECT_NOT_FOUND");
        assert_eq!(err.message, "Project \"my-project\" not found.");
        assert!(err.available_projects.is_none());
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let tracker = Arc::new(
            MockTracker::new().with_devlog(Err(api_error(401, "UNAUTHORIZED", "expired", &[]))),
        );

        let err = expect_error(service(&tracker, None).save(input("# Notes")).await);

        assert_eq!(err.code, "UNAUTHORIZED");
        assert_eq!(err.message, "Invalid or expired token.");
    }

    #[tokio::test]
    async fn test_other_codes_pass_through_without_alternatives() {
        let tracker = Arc::new(MockTracker::new().with_devlog(Err(api_error(
            422,
            "FILE_TOO_LARGE",
            "Document exceeds limit",
            &["other"],
        ))));

        let err = expect_error(service(&tracker, None).save(input("# Notes")).await);

        assert_eq!(err.code, "FILE_TOO_LARGE");
        assert_eq!(err.message, "Document exceeds limit");
        assert!(err.available_projects.is_none());
    }
}
