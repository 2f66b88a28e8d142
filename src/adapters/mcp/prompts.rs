//! Prompts advertised through `prompts/list`.

use rmcp::model::{
    GetPromptResult, Prompt, PromptArgument, PromptMessage, PromptMessageContent,
    PromptMessageRole,
};

pub const REGISTER_DAILY: &str = "register-daily";

pub fn prompt_definitions() -> Vec<Prompt> {
    vec![Prompt {
        name: REGISTER_DAILY.to_string(),
        description: Some("Starts the guided flow to record a daily activity".to_string()),
        arguments: Some(vec![PromptArgument {
            name: "context".to_string(),
            description: Some("Additional context about the work done".to_string()),
            required: Some(false),
        }]),
    }]
}

/// Messages for `register-daily`, optionally embedding user-supplied context.
pub fn register_daily(context: Option<&str>) -> GetPromptResult {
    let context_info = context
        .filter(|c| !c.is_empty())
        .map(|c| format!("\n\nProvided context: {}", c))
        .unwrap_or_default();

    let text = format!(
        "I want to record today's daily.{}\n\n\
         Please guide me step by step:\n\
         1. First confirm the project (you can try to read it from package.json)\n\
         2. Ask me for the task name\n\
         3. Write an executive summary of my activities based on our conversation\n\
         4. Confirm the task status\n\
         5. Only then use the submit_daily_report tool\n\n\
         Let's start.",
        context_info
    );

    GetPromptResult {
        description: Some("Guided daily registration".to_string()),
        messages: vec![PromptMessage {
            role: PromptMessageRole::User,
            content: PromptMessageContent::Text { text },
        }],
    }
}
