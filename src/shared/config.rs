//! Application configuration. API credentials, paths.

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Kudoly API root. Read from KUDOLY_BASE_URL.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Bearer token for the Kudoly API. Read from KUDOLY_API_TOKEN.
    #[serde(default)]
    pub api_token: Option<String>,

    /// Directory whose package.json names the default project. Read from KUDOLY_PROJECT_DIR.
    #[serde(default)]
    pub project_dir: Option<String>,
}

/// `KUDOLY_BASE_URL` maps to `base_url`, and so on.
fn environment() -> config::Environment {
    config::Environment::with_prefix("KUDOLY")
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("KUDOLY_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(environment());
        c.build()?.try_deserialize()
    }

    /// Returns the API base URL, ignoring empty values.
    pub fn base_url(&self) -> Option<String> {
        self.base_url.clone().filter(|s| !s.is_empty())
    }

    /// Returns the API token, ignoring empty values.
    pub fn api_token(&self) -> Option<String> {
        self.api_token.clone().filter(|s| !s.is_empty())
    }

    /// Directory searched for package.json. Defaults to the working directory.
    pub fn project_dir_or_default(&self) -> PathBuf {
        self.project_dir
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}
