//! Responder Strategy
//!
//! The outbound half of a chat turn. The widget only sees this trait, so the
//! HTTP client, the in-process demo replies and test doubles are
//! interchangeable.
//!
//! ## Wire contract
//!
//! ```text
//! POST <endpoint>
//! Content-Type: application/json
//!
//! {"message": "Hi"}
//!
//! → {"response": "Hello!", "model": "gpt-4-turbo", "tokens_used": 123}
//! ```
//!
//! Only `response` is read by the widget; it may be absent.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Request body sent to the responder
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's text, exactly as submitted
    #[serde(default)]
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Reply body returned by the responder
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Generated text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,

    /// Model that produced the reply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Tokens consumed (reported by the demo service)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u32>,
}

impl ChatReply {
    pub fn text(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
            ..Default::default()
        }
    }

    /// The reply text, if there is any to show.
    ///
    /// An empty string counts as no text.
    pub fn into_text(self) -> Option<String> {
        self.response.filter(|r| !r.is_empty())
    }
}

/// Strategy trait for anything that can answer a chat message
///
/// Browser futures are not `Send`, so the bound is relaxed on wasm.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait Responder {
    /// Send one message and wait for the reply
    async fn respond(&self, request: &ChatRequest) -> Result<ChatReply>;
}
