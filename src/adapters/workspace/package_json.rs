//! Implements ProjectNamePort by reading `package.json` from a project directory.

use crate::ports::ProjectNamePort;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

const MANIFEST_FILE: &str = "package.json";

#[derive(Deserialize)]
struct Manifest {
    #[serde(default)]
    name: Option<String>,
}

/// Resolves the default project name from `<dir>/package.json`.
pub struct PackageJsonResolver {
    dir: PathBuf,
}

impl PackageJsonResolver {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.dir.join(MANIFEST_FILE)
    }
}

#[async_trait::async_trait]
impl ProjectNamePort for PackageJsonResolver {
    async fn default_project_name(&self) -> Option<String> {
        let path = self.manifest_path();
        let content = match fs::read_to_string(&path).await {
            Ok(s) => s,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no manifest available");
                return None;
            }
        };
        // Any value other than an object with a string `name` counts as no default.
        let manifest: Manifest = serde_json::from_str(&content).ok()?;
        manifest.name.filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn resolve_with(content: Option<&str>) -> Option<String> {
        let dir = tempfile::tempdir().unwrap();
        if let Some(content) = content {
            std::fs::write(dir.path().join(MANIFEST_FILE), content).unwrap();
        }
        PackageJsonResolver::new(dir.path())
            .default_project_name()
            .await
    }

    #[tokio::test]
    async fn test_returns_name_from_manifest() {
        let name = resolve_with(Some(r#"{"name": "my-project", "version": "1.0.0"}"#)).await;
        assert_eq!(name.as_deref(), Some("my-project"));
    }

    #[tokio::test]
    async fn test_missing_manifest_is_none() {
        assert_eq!(resolve_with(None).await, None);
    }

    #[tokio::test]
    async fn test_invalid_json_is_none() {
        assert_eq!(resolve_with(Some("{ not json")).await, None);
    }

    #[tokio::test]
    async fn test_manifest_without_name_is_none() {
        assert_eq!(resolve_with(Some(r#"{"version": "1.0.0"}"#)).await, None);
        assert_eq!(resolve_with(Some(r#"{"name": ""}"#)).await, None);
    }

    #[tokio::test]
    async fn test_non_string_name_is_none() {
        assert_eq!(resolve_with(Some(r#"{"name": 42}"#)).await, None);
        assert_eq!(resolve_with(Some("[1, 2, 3]")).await, None);
    }

    #[test]
    fn test_manifest_path_is_in_dir() {
        let resolver = PackageJsonResolver::new("/tmp/project");
        assert_eq!(
            resolver.manifest_path(),
            PathBuf::from("/tmp/project/package.json")
        );
    }
}
