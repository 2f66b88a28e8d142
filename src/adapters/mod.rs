//! Infrastructure adapters. Implement ports.
//!
//! Kudoly HTTP API, local manifest, MCP stdio transport. Map errors to DomainError.

pub mod integrations;
pub mod mcp;
pub mod workspace;
