//! Tool definitions advertised through `tools/list`.
//!
//! Descriptions carry the conversation the agent must have with the user
//! before calling; the tools themselves do not talk to the user.

use crate::domain::ReportStatus;
use rmcp::model::{JsonObject, Tool};
use serde_json::{Value, json};
use std::sync::Arc;

pub const SUBMIT_DAILY_REPORT: &str = "submit_daily_report";
pub const GENERATE_DEVLOG: &str = "generate_devlog";

const SUBMIT_DAILY_REPORT_DESCRIPTION: &str = r#"Records a daily activity against a ClickUp task, checking first that the task exists.

IMPORTANT: NEVER call this tool right away. Follow this conversation BEFORE calling it:

1. PROJECT: If the user does not mention the project, try to get it from package.json. If that is not possible, ask: "Which project are you working on?"

2. TASK: Ask: "What is the name of the task you want to report on?"

3. SUMMARY: Analyze the chat context and write a summary that:
   - Non-technical people (stakeholders, managers) can understand
   - Focuses on WHAT was done and WHY, not on technical details
   - Is concise (2-4 sentences at most)
   Show the summary and ask: "This is the summary for the daily: [summary]. Do you want to record it, or should something be added or changed?"

4. STATUS: Ask: "What is the status? (complete, progress, blocked, upcoming, qa)" or infer it from the context.

5. Only once ALL of the information is confirmed, call the tool.

6. If the tool returns task_found=false, ask the user whether to create the task and with which ClickUp status (from available_statuses), then call again with create_task=true and clickup_status."#;

const GENERATE_DEVLOG_DESCRIPTION: &str = r#"Generates and saves a knowledge document (DEVLOG.md) on a ClickUp task.

IMPORTANT: NEVER call this tool right away. Follow this conversation BEFORE calling it:

1. PROJECT AND TASK:
   - Project: take it from package.json or ask "Which project are you working on?"
   - Task: ask "Which task should the DEVLOG be attached to?"

2. REVIEW THE WHOLE CONTEXT of the chat: code written or changed, files created, commands run, errors found and how they were solved, decisions taken.

3. WRITE THE DEVLOG with this structure:
   ---
   project: [name]
   task: [name]
   date: [YYYY-MM-DD]
   tags: [technologies, key concepts]
   ---

   # [Descriptive title]

   ## Context
   ## What was done
   ## Technical decisions
   ## Implementation
   ## Problems and solutions
   ## Configuration and usage
   ## Known limitations
   ## Search keywords

4. SHOW A PREVIEW AND CONFIRM: "This is the generated DEVLOG. Do you want to save it as is, or adjust something?" Iterate until the user is satisfied.

5. Only then call the tool with the final content.

Good content is self-contained, explains the WHY and not only the WHAT, uses searchable keywords, names files and functions exactly, and is honest about limitations and technical debt."#;

fn tool(name: &'static str, description: &'static str, schema: Value) -> Tool {
    let schema = match schema {
        Value::Object(map) => map,
        _ => JsonObject::new(),
    };
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: Arc::new(schema),
        annotations: None,
    }
}

pub fn tool_definitions() -> Vec<Tool> {
    let statuses: Vec<&str> = ReportStatus::ALL.iter().map(|s| s.as_str()).collect();
    vec![
        tool(
            SUBMIT_DAILY_REPORT,
            SUBMIT_DAILY_REPORT_DESCRIPTION,
            json!({
                "type": "object",
                "properties": {
                    "project_name": {
                        "type": "string",
                        "description": "Project name. Read from package.json when omitted"
                    },
                    "task_name": {
                        "type": "string",
                        "description": "Name of the ClickUp task"
                    },
                    "activities_string": {
                        "type": "string",
                        "description": "Description of the activities performed"
                    },
                    "status": {
                        "type": "string",
                        "enum": statuses,
                        "default": ReportStatus::default().as_str(),
                        "description": "Task status"
                    },
                    "create_task": {
                        "type": "boolean",
                        "default": false,
                        "description": "When true, creates the task in ClickUp if it does not exist"
                    },
                    "clickup_status": {
                        "type": "string",
                        "description": "ClickUp status for the new task (required when create_task=true)"
                    }
                },
                "required": ["activities_string"]
            }),
        ),
        tool(
            GENERATE_DEVLOG,
            GENERATE_DEVLOG_DESCRIPTION,
            json!({
                "type": "object",
                "properties": {
                    "project_name": {
                        "type": "string",
                        "description": "Project name. Read from package.json when omitted"
                    },
                    "task_name": {
                        "type": "string",
                        "description": "Name of the ClickUp task the DEVLOG is saved to"
                    },
                    "devlog_content": {
                        "type": "string",
                        "description": "DEVLOG content in markdown"
                    }
                },
                "required": ["task_name", "devlog_content"]
            }),
        ),
    ]
}
