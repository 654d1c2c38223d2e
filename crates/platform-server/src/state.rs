//! Application State

use std::sync::Arc;

use crate::replies::ReplyBook;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Canned replies the demo responder picks from
    pub replies: Arc<ReplyBook>,

    /// Model name reported with every reply
    pub model: Arc<str>,
}

impl AppState {
    pub fn new(replies: ReplyBook, model: impl Into<Arc<str>>) -> Self {
        Self {
            replies: Arc::new(replies),
            model: model.into(),
        }
    }
}
