use std::time::{Duration, Instant};

use crate::config::Settings;
use crate::error::{Result, VaultChatError};
use crate::trace_time;

use super::transport::{HttpTransport, Transport};
use super::types::{QaRequest, QaResponse};

/// Text placed before the context blob when a question carries context
pub const CONTEXT_PREAMBLE: &str = "Based on the following notes from my vault:\n\n";

/// Client for the question-answering endpoint
pub struct QaClient {
    api_key: String,
    endpoint: String,
    transport: Box<dyn Transport>,
}

impl QaClient {
    /// Create a client with an explicit transport
    pub fn new(settings: &Settings, transport: Box<dyn Transport>) -> Self {
        Self {
            api_key: settings.api_key.trim().to_string(),
            endpoint: settings.endpoint.clone(),
            transport,
        }
    }

    /// Create a client that talks HTTP with the configured timeout
    pub fn from_settings(settings: &Settings) -> Self {
        let transport = HttpTransport::new(Duration::from_secs(settings.timeout_seconds));
        Self::new(settings, Box::new(transport))
    }

    /// Fail with a configuration error when no API key is set
    pub fn ensure_configured(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(VaultChatError::missing_api_key());
        }
        Ok(())
    }

    /// Ask a question, grounded in `context` when it is non-empty.
    ///
    /// Fails with a configuration error, before any network traffic, when no
    /// API key is set. Makes exactly one request otherwise.
    #[tracing::instrument(skip(self, question, context), fields(context_bytes = context.len()))]
    pub fn ask(&self, question: &str, context: &str) -> Result<QaResponse> {
        self.ensure_configured()?;

        let request = QaRequest::new(question, context);
        let body = request.to_body()?;
        let authorization = format!("Bot {}", self.api_key);

        let start = Instant::now();
        tracing::debug!(endpoint = %self.endpoint, with_context = request.context.is_some(), "calling_remote");

        let text = self
            .transport
            .post_json(&self.endpoint, &authorization, &body)
            .inspect_err(|e| tracing::warn!(error = %e, "question-answering request failed"))?;

        trace_time!(start, "remote_call");

        let response = QaResponse::parse(&text)?;
        tracing::debug!(
            tokens = response.tokens,
            references = response.references.len(),
            "answer_received"
        );
        Ok(response)
    }
}
