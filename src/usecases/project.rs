//! Project and input normalization shared by the use cases.

use crate::ports::ProjectNamePort;

/// Treat empty strings as absent, like a missing argument.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Explicit input first, then the local default.
pub async fn resolve_project_name(
    explicit: Option<String>,
    source: &dyn ProjectNamePort,
) -> Option<String> {
    match non_empty(explicit) {
        Some(name) => Some(name),
        None => non_empty(source.default_project_name().await),
    }
}
