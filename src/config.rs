use std::net::SocketAddr;
use std::path::PathBuf;

pub const API_BASE_URL_VAR: &str = "VITE_API_BASE_URL";
pub const BIND_ADDR_VAR: &str = "PROBE_BIND_ADDR";
pub const WEB_DIR_VAR: &str = "PROBE_WEB_DIR";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Settings read once at startup and frozen for the life of the process.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub api_base_url: Option<String>,
    pub bind_addr: SocketAddr,
    pub web_dir: PathBuf,
}

impl ProbeConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = normalize_base_url(lookup(API_BASE_URL_VAR).as_deref());

        let bind_raw = lookup(BIND_ADDR_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|err| format!("invalid {BIND_ADDR_VAR} '{bind_raw}': {err}"))?;

        let web_dir = lookup(WEB_DIR_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_web_dir);

        Ok(Self {
            api_base_url,
            bind_addr,
            web_dir,
        })
    }
}

/// Empty and whitespace-only values count as unset. Trailing slashes are
/// dropped so that joining `/` never yields `//`.
pub fn normalize_base_url(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn default_web_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("web")
}
