//! kudoly-mcp: daily reports and DEVLOGs for ClickUp tasks, served as MCP tools.
//!
//! Hexagonal layout: the use cases talk to the Kudoly API and the local
//! manifest through ports; the MCP stdio server drives them.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
