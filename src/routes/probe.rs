use crate::routes::AppState;
use crate::views::probe::{render_probe_card, render_probe_page};
use axum::{Json, extract::State, http::StatusCode, response::Html};
use pos_probe::models::ProbeSnapshot;
use tracing::debug;

pub async fn probe_page(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    let snapshot = state.probe.snapshot().await;
    render_probe_page(&snapshot, state.probe.is_configured())
        .map(Html)
        .map_err(|message| (StatusCode::INTERNAL_SERVER_ERROR, message))
}

pub async fn probe_card(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    let snapshot = state.probe.snapshot().await;
    render_probe_card(&snapshot, state.probe.is_configured())
        .map(Html)
        .map_err(|message| (StatusCode::INTERNAL_SERVER_ERROR, message))
}

pub async fn probe_trigger(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, String)> {
    if state.probe.spawn_check().await.is_none() {
        debug!("probe trigger ignored; no request issued");
    }
    probe_card(State(state)).await
}

pub async fn probe_status(State(state): State<AppState>) -> Json<ProbeSnapshot> {
    Json(state.probe.snapshot().await)
}

pub async fn probe_check(State(state): State<AppState>) -> Json<ProbeSnapshot> {
    state.probe.check_backend().await;
    Json(state.probe.snapshot().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{body::Body, http::Request};
    use pos_probe::{
        fetcher::{BackendFetcher, BackendReply, FetchError},
        models::Status,
        probe::{ConnectivityProbe, MISSING_CONFIG_MESSAGE},
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    struct StaticFetcher(Result<BackendReply, FetchError>);

    #[async_trait]
    impl BackendFetcher for StaticFetcher {
        async fn fetch_message(&self, _url: &str) -> Result<BackendReply, FetchError> {
            self.0.clone()
        }
    }

    fn state_with(base_url: Option<&str>, reply: Result<BackendReply, FetchError>) -> AppState {
        AppState {
            probe: ConnectivityProbe::new(
                base_url.map(|value| value.to_string()),
                Arc::new(StaticFetcher(reply)),
            ),
        }
    }

    fn running() -> Result<BackendReply, FetchError> {
        Ok(BackendReply {
            status: 200,
            message: "Success: Backend is running".to_string(),
        })
    }

    #[tokio::test]
    async fn page_starts_without_status_panel() {
        let state = state_with(Some("http://backend"), running());
        let Html(body) = probe_page(State(state)).await.expect("page");
        assert!(body.contains("Coffee POS System"));
        assert!(body.contains("Test Backend Connection"));
        assert!(!body.contains("Status:"));
        assert!(!body.contains("Configuration Error:"));
    }

    #[tokio::test]
    async fn trigger_returns_loading_card_then_settles() {
        let state = state_with(Some("http://backend"), running());
        let Html(body) = probe_trigger(State(state.clone())).await.expect("card");
        assert!(body.contains("Connecting to backend...") || body.contains("Success: Backend is running"));

        let probe = state.probe.clone();
        for _ in 0..50 {
            if probe.snapshot().await.status != Status::Loading {
                break;
            }
            tokio::task::yield_now().await;
        }

        let Html(body) = probe_card(State(state)).await.expect("card");
        assert!(body.contains("Success: Backend is running"));
        assert!(!body.contains("disabled"));
    }

    #[tokio::test]
    async fn check_api_reports_missing_config() {
        let state = state_with(None, running());
        let Json(snapshot) = probe_check(State(state)).await;
        assert_eq!(snapshot.status, Status::Error);
        assert_eq!(snapshot.message, MISSING_CONFIG_MESSAGE);
    }

    #[tokio::test]
    async fn router_serves_status_json() {
        let state = state_with(Some("http://backend"), running());
        let app = crate::routes::build_router(state, std::path::Path::new("web"));
        let response = app
            .oneshot(Request::builder().uri("/api/probe").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
