//! HTTP Responder
//!
//! POSTs `{"message": ...}` as JSON and reads `{"response": ...}` back.
//! The status code is not inspected: whatever JSON object comes back is the
//! reply, and anything that is not JSON is a failed request.

use async_trait::async_trait;
use platform_core::{
    error::{ChatError, Result},
    responder::{ChatReply, ChatRequest, Responder},
};

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/chat";

/// Responder client configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponderConfig {
    /// Absolute URL of the chat endpoint
    pub endpoint: String,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
        }
    }
}

impl ResponderConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Read `CHAT_ENDPOINT`, falling back to [`DEFAULT_ENDPOINT`]
    pub fn from_env() -> Self {
        let endpoint = std::env::var("CHAT_ENDPOINT")
            .ok()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.into());

        Self { endpoint }
    }

    /// Check the endpoint is an absolute http(s) URL
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.endpoint)
            .map_err(|e| ChatError::Config(format!("invalid endpoint {:?}: {}", self.endpoint, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(ChatError::Config(format!("unsupported scheme: {other}"))),
        }
    }
}

/// Responder that talks to a remote chat endpoint over HTTP
#[derive(Clone, Debug)]
pub struct HttpResponder {
    client: reqwest::Client,
    config: ResponderConfig,
}

impl HttpResponder {
    /// Create a responder for the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::from_config(ResponderConfig::new(endpoint))
    }

    /// Create from configuration
    pub fn from_config(config: ResponderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create from configuration, rejecting endpoints that can never work
    pub fn try_from_config(config: ResponderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_config(ResponderConfig::from_env())
    }

    /// Reuse an existing reqwest client
    pub const fn with_client(client: reqwest::Client, config: ResponderConfig) -> Self {
        Self { client, config }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl Responder for HttpResponder {
    async fn respond(&self, request: &ChatRequest) -> Result<ChatReply> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        tracing::debug!(%status, bytes = body.len(), endpoint = %self.config.endpoint, "responder replied");

        serde_json::from_slice(&body).map_err(|e| ChatError::Decode(e.to_string()))
    }
}
