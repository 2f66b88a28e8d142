//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

/// Source of a default project name when the caller gives none.
#[async_trait::async_trait]
pub trait ProjectNamePort: Send + Sync {
    /// Returns `None` when no default is available. Never fails.
    async fn default_project_name(&self) -> Option<String>;
}
