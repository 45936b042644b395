use matchup_board::{router, AppState, Config};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;
    if !config.snapshot_path.exists() {
        warn!(
            "snapshot {} does not exist yet; pages will fail until it is written",
            config.snapshot_path.display()
        );
    }

    let app = router(AppState::from_config(&config));

    info!(
        snapshot = %config.snapshot_path.display(),
        timezone = %config.timezone,
        "listening on http://{}",
        config.addr
    );
    let listener = TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
