//! Inbound port. The tool transport (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: serves the use cases to an agent until the transport closes.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    async fn run(&self) -> Result<(), DomainError>;
}
