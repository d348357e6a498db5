use hitokoto::config::LogFormat;
use hitokoto::provider::AnthropicProvider;
use hitokoto::{router, AppState, ServerConfig};
use std::{net::SocketAddr, sync::Arc};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    let filter = EnvFilter::from_default_env().add_directive("info".parse()?);
    match config.log_format {
        LogFormat::Json => fmt().json().with_env_filter(filter).init(),
        LogFormat::Pretty => fmt().with_env_filter(filter).init(),
    }

    let provider = AnthropicProvider::new(config.api_key.clone(), config.provider_base_url.clone());
    info!(
        model = %config.prompt.model,
        max_tokens = config.prompt.max_tokens,
        daily_limit = config.daily_limit,
        "provider configured"
    );
    let state = AppState::new(Arc::new(provider), config.prompt, config.daily_limit);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
