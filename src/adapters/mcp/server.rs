//! MCP server over stdio. Implements InputPort.
//!
//! Tool outcomes, including error outcomes, are returned as text content.
//! Only calls that cannot be parsed into a tool input become protocol errors.

use super::prompts::{REGISTER_DAILY, prompt_definitions, register_daily};
use super::tools::{GENERATE_DEVLOG, SUBMIT_DAILY_REPORT, tool_definitions};
use crate::domain::DomainError;
use crate::ports::InputPort;
use crate::usecases::{
    DailyReportService, DevlogService, GenerateDevlogInput, SubmitDailyReportInput,
};
use rmcp::model::{
    Annotated, CallToolRequestParam, CallToolResult, GetPromptRequestParam, GetPromptResult,
    Implementation, InitializeRequestParam, InitializeResult, JsonObject, ListPromptsResult,
    ListToolsResult, PaginatedRequestParam, PromptsCapability, ProtocolVersion, RawContent,
    RawTextContent, ServerCapabilities, ServerInfo, ToolsCapability,
};
use rmcp::service::RequestContext;
use rmcp::transport::io::stdio;
use rmcp::{Error as McpError, RoleServer, ServerHandler, serve_server};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const SERVER_NAME: &str = "kudoly-mcp";

const INSTRUCTIONS: &str = "Records daily activity reports and DEVLOG documents on ClickUp tasks \
    through the Kudoly API. Follow each tool's description to gather the details from the user \
    before calling it.";

#[derive(Clone)]
pub struct McpServer {
    report: Arc<DailyReportService>,
    devlog: Arc<DevlogService>,
}

impl McpServer {
    pub fn new(report: Arc<DailyReportService>, devlog: Arc<DevlogService>) -> Self {
        Self { report, devlog }
    }

    /// Run the named tool. Unknown tools and malformed arguments are
    /// `invalid_params`; everything else is an outcome in the text content.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = arguments.unwrap_or_default();
        info!(tool = name, "tool call");

        match name {
            SUBMIT_DAILY_REPORT => {
                let input: SubmitDailyReportInput = parse_arguments(name, arguments)?;
                text_result(&self.report.submit(input).await)
            }
            GENERATE_DEVLOG => {
                let input: GenerateDevlogInput = parse_arguments(name, arguments)?;
                text_result(&self.devlog.save(input).await)
            }
            other => {
                warn!(tool = other, "unknown tool");
                Err(McpError::invalid_params(
                    format!("Unknown tool: {}", other),
                    None,
                ))
            }
        }
    }

    pub fn prompt(
        &self,
        name: &str,
        arguments: Option<&JsonObject>,
    ) -> Result<GetPromptResult, McpError> {
        match name {
            REGISTER_DAILY => {
                let context = arguments
                    .and_then(|args| args.get("context"))
                    .and_then(Value::as_str);
                Ok(register_daily(context))
            }
            other => Err(McpError::invalid_params(
                format!("Unknown prompt: {}", other),
                None,
            )),
        }
    }
}

fn parse_arguments<T: DeserializeOwned>(tool: &str, arguments: JsonObject) -> Result<T, McpError> {
    serde_json::from_value(Value::Object(arguments)).map_err(|e| {
        debug!(tool, error = %e, "rejected tool arguments");
        McpError::invalid_params(format!("Invalid arguments: {}", e), None)
    })
}

fn text_result<T: Serialize>(outcome: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(outcome)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult {
        content: vec![Annotated::new(
            RawContent::Text(RawTextContent { text }),
            None,
        )],
        is_error: Some(false),
    })
}

impl ServerHandler for McpServer {
    async fn initialize(
        &self,
        request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        info!(
            client = %request.client_info.name,
            version = %request.client_info.version,
            "MCP client connected"
        );
        let mut info = self.get_info();
        info.protocol_version = request.protocol_version;
        Ok(info)
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: tool_definitions(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.dispatch(&request.name, request.arguments).await
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        Ok(ListPromptsResult {
            prompts: prompt_definitions(),
            next_cursor: None,
        })
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.prompt(&request.name, request.arguments.as_ref())
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities {
                prompts: Some(PromptsCapability { list_changed: None }),
                tools: Some(ToolsCapability { list_changed: None }),
                resources: None,
                logging: None,
                completions: None,
                experimental: None,
            },
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
            },
            instructions: Some(INSTRUCTIONS.into()),
        }
    }
}

#[async_trait::async_trait]
impl InputPort for McpServer {
    async fn run(&self) -> Result<(), DomainError> {
        info!(server = SERVER_NAME, "serving MCP over stdio");
        let service = serve_server(self.clone(), stdio())
            .await
            .map_err(|e| DomainError::Protocol(format!("MCP handshake failed: {}", e)))?;
        service
            .waiting()
            .await
            .map_err(|e| DomainError::Protocol(format!("MCP session aborted: {}", e)))?;
        info!("MCP session closed");
        Ok(())
    }
}
