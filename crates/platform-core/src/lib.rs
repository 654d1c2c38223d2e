//! # platform-core
//!
//! Chat widget state for the llm-platform landing page, independent of any UI
//! framework or HTTP stack.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        ChatSession                            │
//! │  ┌──────────────┐  ┌──────────────┐  ┌────────────────────┐   │
//! │  │    Draft     │  │  Transcript  │  │  Pending turns     │   │
//! │  │  (input box) │──│ (append-only)│──│  (in-flight calls) │   │
//! │  └──────────────┘  └──────────────┘  └────────────────────┘   │
//! └───────────────────────────────┬──────────────────────────────┘
//!                                 │ ChatRequest / ChatReply
//!                        ┌────────▼────────┐
//!                        │   Responder     │  (HTTP, mock, ...)
//!                        └─────────────────┘
//! ```
//!
//! A submit is split in two halves so the caller owns the await point:
//! [`ChatSession::submit`] records the user turn synchronously and hands back a
//! [`PendingTurn`]; [`ChatSession::settle`] consumes that token once the
//! [`Responder`] has answered (or failed) and appends exactly one assistant
//! message.

pub mod error;
pub mod locale;
pub mod message;
pub mod responder;
pub mod session;

pub use error::{ChatError, Result};
pub use locale::Locale;
pub use message::{Message, Role, Transcript};
pub use responder::{ChatReply, ChatRequest, Responder};
pub use session::{ChatSession, PendingTurn, TurnId};
