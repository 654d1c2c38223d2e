//! # platform-client
//!
//! HTTP implementation of [`platform_core::Responder`].
//!
//! The same client runs natively (tests, tooling) and inside the browser,
//! where reqwest delegates to `fetch`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use platform_client::HttpResponder;
//! use platform_core::ChatSession;
//!
//! let responder = HttpResponder::from_env();
//! let mut session = ChatSession::new();
//! session.update_draft("Hi");
//! session.round_trip(&responder).await;
//! ```

pub mod http;

pub use http::{DEFAULT_ENDPOINT, HttpResponder, ResponderConfig};

// Re-export core types for convenience
pub use platform_core::{ChatError, ChatReply, ChatRequest, ChatSession, Responder, Result};
