//! Error Types

use thiserror::Error;

/// Result type alias for responder calls
pub type Result<T> = std::result::Result<T, ChatError>;

/// Ways an outbound chat request can fail.
///
/// The widget never surfaces these to the user directly; every variant is
/// absorbed into the locale's transport-failure string when a turn settles.
#[derive(Error, Debug)]
pub enum ChatError {
    /// Request could not be sent or its body could not be read
    #[error("Transport error: {0}")]
    Transport(String),

    /// Body arrived but was not a JSON reply object
    #[error("Malformed reply: {0}")]
    Decode(String),

    /// Responder endpoint is misconfigured
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChatError {
    /// Whether the request never produced a readable body
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Config(_))
    }

    /// Whether a body arrived but could not be interpreted
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::Json(_))
    }
}
