pub mod health;
pub mod probe;

use axum::{Router, routing::get};
use pos_probe::{config::ProbeConfig, fetcher::ReqwestFetcher, probe::ConnectivityProbe};
use std::path::Path;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub probe: ConnectivityProbe,
}

pub fn build_router(state: AppState, web_dir: &Path) -> Router {
    Router::new()
        .route("/", get(probe::probe_page))
        .route("/partials/probe", get(probe::probe_card).post(probe::probe_trigger))
        .route("/api/probe", get(probe::probe_status))
        .route("/api/probe/check", axum::routing::post(probe::probe_check))
        .route("/health", get(health::health))
        .nest_service("/web", ServeDir::new(web_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn default_state(config: &ProbeConfig) -> AppState {
    AppState {
        probe: ConnectivityProbe::new(config.api_base_url.clone(), Arc::new(ReqwestFetcher::new())),
    }
}
