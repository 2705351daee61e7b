use crate::{
    config::normalize_base_url,
    fetcher::BackendFetcher,
    models::{ErrorKind, ProbeSnapshot, Status},
};
use std::sync::Arc;
use tokio::{sync::Mutex, task::JoinHandle};
use tracing::{error, info, warn};

pub const MISSING_CONFIG_MESSAGE: &str = "Error: VITE_API_BASE_URL environment variable is not set.";
pub const CONNECTING_MESSAGE: &str = "Connecting to backend...";
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "Failed to fetch from backend. Check CORS, network, or if the backend is running.";

/// One-shot reachability check against the configured backend.
///
/// Clones share the same state, so a clone handed to a spawned task updates
/// what every other handle observes.
#[derive(Clone)]
pub struct ConnectivityProbe {
    base_url: Option<Arc<str>>,
    fetcher: Arc<dyn BackendFetcher>,
    state: Arc<Mutex<ProbeSnapshot>>,
}

/// Proof that the probe moved to `Loading` and owns the single in-flight
/// request. Only [`ConnectivityProbe::begin_check`] hands these out.
#[derive(Debug)]
pub struct CheckTicket {
    target: String,
}

impl CheckTicket {
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl ConnectivityProbe {
    pub fn new(base_url: Option<String>, fetcher: Arc<dyn BackendFetcher>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.as_deref()).map(Arc::from),
            fetcher,
            state: Arc::new(Mutex::new(ProbeSnapshot::default())),
        }
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }

    pub async fn snapshot(&self) -> ProbeSnapshot {
        self.state.lock().await.clone()
    }

    pub async fn check_backend(&self) {
        if let Some(ticket) = self.begin_check().await {
            self.complete(ticket).await;
        }
    }

    /// Starts a check and runs the request on a background task. Returns
    /// `None` when no request was issued.
    pub async fn spawn_check(&self) -> Option<JoinHandle<()>> {
        let ticket = self.begin_check().await?;
        let probe = self.clone();
        Some(tokio::spawn(async move {
            probe.complete(ticket).await;
        }))
    }

    pub async fn begin_check(&self) -> Option<CheckTicket> {
        let mut state = self.state.lock().await;

        let Some(base_url) = self.base_url.as_deref() else {
            warn!("backend check requested without {}", crate::config::API_BASE_URL_VAR);
            *state = ProbeSnapshot {
                status: Status::Error,
                message: MISSING_CONFIG_MESSAGE.to_string(),
                error_kind: Some(ErrorKind::Configuration),
                http_status: None,
                checked_at: Some(current_datetime()),
            };
            return None;
        };

        if state.status.is_loading() {
            return None;
        }

        *state = ProbeSnapshot {
            status: Status::Loading,
            message: CONNECTING_MESSAGE.to_string(),
            error_kind: None,
            http_status: None,
            checked_at: None,
        };

        Some(CheckTicket {
            target: format!("{base_url}/"),
        })
    }

    pub async fn complete(&self, ticket: CheckTicket) {
        info!(target_url = %ticket.target, "checking backend");
        let outcome = self.fetcher.fetch_message(&ticket.target).await;

        let next = match outcome {
            Ok(reply) if reply.is_success() => {
                info!(status = reply.status, "backend reachable");
                ProbeSnapshot {
                    status: Status::Success,
                    message: reply.message,
                    error_kind: None,
                    http_status: Some(reply.status),
                    checked_at: Some(current_datetime()),
                }
            }
            Ok(reply) => {
                warn!(status = reply.status, message = %reply.message, "backend reported failure");
                ProbeSnapshot {
                    status: Status::Error,
                    message: reply.message,
                    error_kind: Some(ErrorKind::Application),
                    http_status: Some(reply.status),
                    checked_at: Some(current_datetime()),
                }
            }
            Err(err) => {
                error!(target_url = %ticket.target, "fetch error: {err}");
                ProbeSnapshot {
                    status: Status::Error,
                    message: TRANSPORT_FAILURE_MESSAGE.to_string(),
                    error_kind: Some(ErrorKind::Transport),
                    http_status: None,
                    checked_at: Some(current_datetime()),
                }
            }
        };

        *self.state.lock().await = next;
    }
}

pub fn current_datetime() -> String {
    let Ok(format) =
        time::format_description::parse("[year]-[month]-[day] [hour]:[minute]:[second]")
    else {
        return "n/a".to_string();
    };
    let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
    now.format(&format).unwrap_or_else(|_| "n/a".to_string())
}
