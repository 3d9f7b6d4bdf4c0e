use serde::{Deserialize, Serialize};

use crate::error::{Result, VaultChatError};

use super::client::CONTEXT_PREAMBLE;

/// A question plus the optional context it should be answered from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaRequest {
    pub question: String,
    pub context: Option<String>,
}

impl QaRequest {
    /// Build a request; an empty context counts as no context
    pub fn new(question: impl Into<String>, context: impl Into<String>) -> Self {
        let context = context.into();
        Self {
            question: question.into(),
            context: (!context.is_empty()).then_some(context),
        }
    }

    /// The text sent as `query`
    pub fn transmitted_query(&self) -> String {
        match &self.context {
            Some(context) => format!(
                "{}{}\n\nQuestion: {}",
                CONTEXT_PREAMBLE, context, self.question
            ),
            None => self.question.clone(),
        }
    }

    /// JSON request body
    pub fn to_body(&self) -> Result<String> {
        Ok(serde_json::to_string(&RequestBody {
            query: self.transmitted_query(),
        })?)
    }
}

#[derive(Serialize)]
struct RequestBody {
    query: String,
}

/// One citation returned with an answer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub snippet: String,
}

/// A parsed answer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QaResponse {
    pub answer: String,
    pub references: Vec<Reference>,
    pub tokens: u64,
    pub latency_ms: u64,
}

impl QaResponse {
    /// Parse a response body.
    ///
    /// Absent or null `references`, `tokens` and `meta.ms` default; a body
    /// without `data.output` is malformed.
    pub fn parse(body: &str) -> Result<Self> {
        let envelope: Envelope = serde_json::from_str(body)
            .map_err(|e| VaultChatError::network(format!("invalid JSON response: {}", e)))?;

        let data = envelope
            .data
            .ok_or_else(|| VaultChatError::MalformedResponse("missing `data`".to_string()))?;
        let answer = data.output.ok_or_else(|| {
            VaultChatError::MalformedResponse("missing `data.output`".to_string())
        })?;

        Ok(QaResponse {
            answer,
            references: data.references.unwrap_or_default(),
            tokens: data.tokens.unwrap_or(0),
            latency_ms: envelope.meta.and_then(|meta| meta.ms).unwrap_or(0),
        })
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Data>,
    #[serde(default)]
    meta: Option<Meta>,
}

#[derive(Debug, Deserialize)]
struct Data {
    #[serde(default)]
    output: Option<String>,
    #[serde(default)]
    references: Option<Vec<Reference>>,
    #[serde(default)]
    tokens: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct Meta {
    #[serde(default)]
    ms: Option<u64>,
}
