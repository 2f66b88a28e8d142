//! MCP tool server adapter. Exposes the use cases to an agent over stdio.

pub mod prompts;
pub mod server;
pub mod tools;

pub use server::McpServer;
