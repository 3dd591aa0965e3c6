//! mailsift service entry point

use anyhow::Context;
use mailsift_server::{bootstrap, routes};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = mailsift_infra::config::load().context("failed to load configuration")?;
    let state = bootstrap::build_state(&config).context("failed to bootstrap service")?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(%addr, "mailsift listening");

    axum::serve(listener, routes::router(state)).await.context("server error")?;
    Ok(())
}
