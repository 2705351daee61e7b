mod routes;
mod views;

use pos_probe::config::ProbeConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ProbeConfig::from_env()?;
    match config.api_base_url.as_deref() {
        Some(base_url) => info!(%base_url, "probing backend"),
        None => warn!("{} is not set; checks will report a configuration error", pos_probe::config::API_BASE_URL_VAR),
    }

    let state = routes::default_state(&config);
    let app = routes::build_router(state, &config.web_dir);

    info!("probe listening on http://{}", config.bind_addr);
    axum::Server::try_bind(&config.bind_addr)
        .map_err(|err| format!("failed to bind {}: {err}", config.bind_addr))?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| format!("server failed: {err}"))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
