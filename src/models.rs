use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl Status {
    pub fn indicator(self) -> Indicator {
        match self {
            Status::Success => Indicator::Affirmative,
            Status::Error => Indicator::Negative,
            Status::Loading => Indicator::InProgress,
            Status::Idle => Indicator::Inactive,
        }
    }

    pub fn is_loading(self) -> bool {
        self == Status::Loading
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Loading => "loading",
            Status::Success => "success",
            Status::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Affirmative,
    Negative,
    InProgress,
    Inactive,
}

impl Indicator {
    pub fn css_class(self) -> &'static str {
        match self {
            Indicator::Affirmative => "probe-status--success",
            Indicator::Negative => "probe-status--error",
            Indicator::InProgress => "probe-status--loading",
            Indicator::Inactive => "probe-status--idle",
        }
    }
}

/// Why a probe ended in [`Status::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// No base URL was configured.
    Configuration,
    /// The backend answered with a non-success status.
    Application,
    /// The request failed or the body could not be parsed.
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProbeSnapshot {
    pub status: Status,
    pub message: String,
    #[serde(default)]
    pub error_kind: Option<ErrorKind>,
    #[serde(default)]
    pub http_status: Option<u16>,
    #[serde(default)]
    pub checked_at: Option<String>,
}

/// Body shape the backend answers with, for both success and failure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendMessage {
    pub message: String,
}
