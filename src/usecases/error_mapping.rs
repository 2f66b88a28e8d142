//! Shared translation of tracker failures into error outcomes.
//!
//! Each use case supplies a table of backend codes it rewrites with its own
//! message; unauthorized handling and the fallbacks are common to all tables.

use crate::domain::{DomainError, ErrorCode, ErrorOutcome};
use tracing::debug;

pub const UNAUTHORIZED_MESSAGE: &str = "Invalid or expired token.";

/// Names available to message templates.
pub struct ErrorContext<'a> {
    pub project_name: &'a str,
    pub task_name: &'a str,
}

/// Rewrites one backend code.
pub struct ErrorRule {
    pub code: ErrorCode,
    pub message: fn(&ErrorContext<'_>) -> String,
    /// Keep the backend's `available_projects` on the outcome.
    pub keep_projects: bool,
}

pub struct ErrorTable {
    pub rules: &'static [ErrorRule],
    /// Whether codes without a rule forward `available_projects`.
    pub passthrough_projects: bool,
}

pub fn project_not_found(ctx: &ErrorContext<'_>) -> String {
    format!("Project \"{}\" not found.", ctx.project_name)
}

pub fn clickup_not_configured(ctx: &ErrorContext<'_>) -> String {
    format!(
        "Project \"{}\" does not have ClickUp configured.",
        ctx.project_name
    )
}

pub fn task_not_found(ctx: &ErrorContext<'_>) -> String {
    format!("Task \"{}\" not found in ClickUp.", ctx.task_name)
}

/// Map a failed tracker call to the outcome handed back to the agent.
pub fn map_failure(err: &DomainError, table: &ErrorTable, ctx: &ErrorContext<'_>) -> ErrorOutcome {
    let DomainError::Api(api) = err else {
        return ErrorOutcome::new(ErrorCode::UnknownError, err.to_string());
    };

    if let Some(rule) = table.rules.iter().find(|rule| api.code == rule.code) {
        debug!(code = %rule.code, status = api.status, "rewriting backend error");
        let outcome = ErrorOutcome::new(rule.code, (rule.message)(ctx));
        return if rule.keep_projects {
            outcome.with_projects(api.available_projects.clone())
        } else {
            outcome
        };
    }

    if api.is_unauthorized() {
        debug!(code = %ErrorCode::Unauthorized, status = api.status, "rejected credentials");
        return ErrorOutcome::new(ErrorCode::Unauthorized, UNAUTHORIZED_MESSAGE);
    }

    let code = if api.code.is_empty() {
        ErrorCode::ApiError.as_str().to_string()
    } else {
        api.code.clone()
    };
    ErrorOutcome {
        code,
        message: api.message.clone(),
        available_projects: if table.passthrough_projects {
            api.available_projects.clone()
        } else {
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ApiError;

    const TABLE: ErrorTable = ErrorTable {
        rules: &[
            ErrorRule {
                code: ErrorCode::ProjectNotFound,
                message: project_not_found,
                keep_projects: true,
            },
            ErrorRule {
                code: ErrorCode::TaskNotFound,
                message: task_not_found,
                keep_projects: false,
            },
        ],
        passthrough_projects: false,
    };

    fn ctx() -> ErrorContext<'static> {
        ErrorContext {
            project_name: "alpha",
            task_name: "login",
        }
    }

    fn api(status: u16, code: &str, projects: Option<Vec<String>>) -> DomainError {
        DomainError::Api(ApiError {
            status,
            code: code.to_string(),
            message: "backend says no".to_string(),
            available_projects: projects,
        })
    }

    #[test]
    fn test_rule_rewrites_message_and_keeps_projects() {
        let projects = Some(vec!["beta".to_string()]);
        let outcome = map_failure(&api(404, "PROJECT_NOT_FOUND", projects.clone()), &TABLE, &ctx());
        assert_eq!(outcome.code, "PROJECT_NOT_FOUND");
        assert_eq!(outcome.message, "Project \"alpha\" not found.");
        assert_eq!(outcome.available_projects, projects);
    }

    #[test]
    fn test_rule_without_projects_drops_them() {
        let outcome = map_failure(
            &api(404, "TASK_NOT_FOUND", Some(vec!["beta".to_string()])),
            &TABLE,
            &ctx(),
        );
        assert_eq!(outcome.message, "Task \"login\" not found in ClickUp.");
        assert!(outcome.available_projects.is_none());
    }

    #[test]
    fn test_unauthorized_by_status() {
        let outcome = map_failure(&api(401, "SOMETHING", None), &TABLE, &ctx());
        assert_eq!(outcome.code, "UNAUTHORIZED");
        assert_eq!(outcome.message, UNAUTHORIZED_MESSAGE);
    }

    #[test]
    fn test_passthrough_respects_table_flag() {
        let err = api(409, "DUPLICATE", Some(vec!["beta".to_string()]));
        let outcome = map_failure(&err, &TABLE, &ctx());
        assert_eq!(outcome.code, "DUPLICATE");
        assert_eq!(outcome.message, "backend says no");
        assert!(outcome.available_projects.is_none());

        let forwarding = ErrorTable {
            rules: &[],
            passthrough_projects: true,
        };
        let outcome = map_failure(&err, &forwarding, &ctx());
        assert_eq!(outcome.available_projects, Some(vec!["beta".to_string()]));
    }

    #[test]
    fn test_non_api_error_is_unknown() {
        let err = DomainError::Transport("connection refused".to_string());
        let outcome = map_failure(&err, &TABLE, &ctx());
        assert_eq!(outcome.code, "UNKNOWN_ERROR");
        assert!(outcome.message.contains("connection refused"));
    }
}
