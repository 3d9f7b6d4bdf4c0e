use std::time::Duration;

use crate::error::{Result, VaultChatError};

/// Longest slice of an error body echoed back to the user
const ERROR_BODY_EXCERPT: usize = 200;

/// One JSON POST to the question-answering endpoint
pub trait Transport: Send + Sync {
    /// POST `body` to `url` with the given `Authorization` header value and
    /// return the response body. Non-2xx statuses are errors.
    fn post_json(&self, url: &str, authorization: &str, body: &str) -> Result<String>;
}

/// `ureq`-backed transport with a global per-request timeout
pub struct HttpTransport {
    agent: ureq::Agent,
    user_agent: String,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build();

        let user_agent = format!(
            "vaultchat/{} ({})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS
        );

        Self {
            agent: config.into(),
            user_agent,
        }
    }
}

impl Transport for HttpTransport {
    #[tracing::instrument(skip(self, authorization, body), fields(bytes = body.len()))]
    fn post_json(&self, url: &str, authorization: &str, body: &str) -> Result<String> {
        let mut response = self
            .agent
            .post(url)
            .header("Authorization", authorization)
            .header("Content-Type", "application/json")
            .header("User-Agent", &self.user_agent)
            .send(body)
            .map_err(|e| VaultChatError::network(describe_transport_error(&e)))?;

        let status = response.status().as_u16();
        let text = response
            .body_mut()
            .read_to_string()
            .map_err(|e| VaultChatError::network(format!("failed to read response: {}", e)))?;

        if !(200..300).contains(&status) {
            tracing::debug!(status, "endpoint returned error status");
            return Err(VaultChatError::network(format!(
                "HTTP {}{}",
                status,
                excerpt(&text)
            )));
        }

        Ok(text)
    }
}

fn describe_transport_error(error: &ureq::Error) -> String {
    match error {
        ureq::Error::Timeout(_) => "request timed out".to_string(),
        ureq::Error::HostNotFound => "host not found".to_string(),
        other => format!("transport error: {}", other),
    }
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let cut: String = trimmed.chars().take(ERROR_BODY_EXCERPT).collect();
    if cut.len() < trimmed.len() {
        format!(": {}...", cut)
    } else {
        format!(": {}", cut)
    }
}
