//! HTTP server entry point
//!
//! Usage: `college-agent-server [config-file]`
//!
//! Loads settings, builds the dataset index once at startup (errors
//! surface here, not on first request), then serves the query API.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use college_agent_agent::CollegeAgent;
use college_agent_config::{load_settings, ResponseTemplates};
use college_agent_server::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args().nth(1);
    let settings = load_settings(config_path.as_deref()).context("loading settings")?;

    let agent = CollegeAgent::from_dataset_file(
        settings.dataset.path.clone(),
        ResponseTemplates::default(),
    )
    .with_context(|| format!("loading dataset from {}", settings.dataset.path))?;

    tracing::info!(colleges = agent.college_count(), "dataset loaded");

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let router = create_router(AppState::new(settings, agent));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;

    tracing::info!(%addr, "college agent listening");
    axum::serve(listener, router).await.context("serving")?;

    Ok(())
}
