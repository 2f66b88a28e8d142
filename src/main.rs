//! Wiring & DI. Entry point: bootstrap adapters, inject into services, serve MCP.
//! No business logic here.

use kudoly_mcp::adapters::integrations::KudolyClient;
use kudoly_mcp::adapters::mcp::McpServer;
use kudoly_mcp::adapters::workspace::PackageJsonResolver;
use kudoly_mcp::ports::{InputPort, ProjectNamePort, TaskTrackerPort};
use kudoly_mcp::shared::config::AppConfig;
use kudoly_mcp::usecases::{DailyReportService, DevlogService};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv::dotenv();
    // stdout carries the protocol; logs go to stderr.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load()?;
    let Some(base_url) = cfg.base_url() else {
        anyhow::bail!("KUDOLY_BASE_URL environment variable is required");
    };
    let Some(api_token) = cfg.api_token() else {
        anyhow::bail!("KUDOLY_API_TOKEN environment variable is required");
    };

    let client = KudolyClient::new(base_url, api_token)?;
    info!(base_url = %client.base_url(), "Kudoly API client ready");
    let tracker: Arc<dyn TaskTrackerPort> = Arc::new(client);

    let project_dir = cfg.project_dir_or_default();
    info!(path = %project_dir.display(), "project manifest directory");
    let projects: Arc<dyn ProjectNamePort> = Arc::new(PackageJsonResolver::new(&project_dir));

    let report_service = Arc::new(DailyReportService::new(
        Arc::clone(&tracker),
        Arc::clone(&projects),
    ));
    let devlog_service = Arc::new(DevlogService::new(tracker, projects));

    let input_port: Arc<dyn InputPort> = Arc::new(McpServer::new(report_service, devlog_service));
    input_port.run().await?;

    Ok(())
}
