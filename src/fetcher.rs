use crate::models::BackendMessage;

/// What came back from the backend once a body was parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendReply {
    pub status: u16,
    pub message: String,
}

impl BackendReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("failed to read response: {0}")]
    Body(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

#[async_trait::async_trait]
pub trait BackendFetcher: Send + Sync {
    async fn fetch_message(&self, url: &str) -> Result<BackendReply, FetchError>;
}

pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl BackendFetcher for ReqwestFetcher {
    async fn fetch_message(&self, url: &str) -> Result<BackendReply, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::Request(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| FetchError::Body(err.to_string()))?;

        let message = parse_message_body(&body)?;
        Ok(BackendReply { status, message })
    }
}

pub fn parse_message_body(body: &str) -> Result<String, FetchError> {
    serde_json::from_str::<BackendMessage>(body)
        .map(|payload| payload.message)
        .map_err(|err| FetchError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_message_field() {
        let message = parse_message_body(r#"{"message":"Success: Backend is running"}"#)
            .expect("parse failed");
        assert_eq!(message, "Success: Backend is running");
    }

    #[test]
    fn ignores_extra_fields() {
        let message = parse_message_body(r#"{"message":"ok","db":"neon"}"#).expect("parse failed");
        assert_eq!(message, "ok");
    }

    #[test]
    fn rejects_missing_or_non_string_message() {
        assert!(matches!(parse_message_body(r#"{"status":"ok"}"#), Err(FetchError::Decode(_))));
        assert!(matches!(parse_message_body(r#"{"message":42}"#), Err(FetchError::Decode(_))));
        assert!(matches!(parse_message_body("<html>502</html>"), Err(FetchError::Decode(_))));
    }

    #[test]
    fn success_range_is_2xx() {
        let reply = |status| BackendReply { status, message: String::new() };
        assert!(reply(200).is_success());
        assert!(reply(204).is_success());
        assert!(!reply(301).is_success());
        assert!(!reply(500).is_success());
    }
}
