//! Chat Session
//!
//! State behind the landing page's chat widget: the transcript, the draft in
//! the input box and the set of requests still in flight.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Result;
use crate::locale::Locale;
use crate::message::{Message, Transcript};
use crate::responder::{ChatReply, ChatRequest, Responder};

/// Source of per-process session identities
static NEXT_SESSION: AtomicU64 = AtomicU64::new(0);

/// Identifier of one submitted turn: the issuing session plus a sequence
/// number within it
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TurnId {
    session: u64,
    seq: u64,
}

impl TurnId {
    /// Position of the turn within its session
    pub const fn seq(self) -> u64 {
        self.seq
    }
}

impl std::fmt::Display for TurnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "turn-{}.{}", self.session, self.seq)
    }
}

/// An in-flight request awaiting its reply.
///
/// Not `Clone`: [`ChatSession::settle`] consumes it, and each user message
/// gets exactly one answer.
#[derive(Debug)]
#[must_use = "a pending turn must be settled or its user message stays unanswered"]
pub struct PendingTurn {
    id: TurnId,
    request: ChatRequest,
}

impl PendingTurn {
    pub const fn id(&self) -> TurnId {
        self.id
    }

    /// Payload to hand to the responder
    pub const fn request(&self) -> &ChatRequest {
        &self.request
    }
}

/// The chat widget's state.
///
/// Overlapping submissions are allowed: each one gets its own
/// [`PendingTurn`] and replies land in the order they are settled. The
/// awaiting flag stays raised until the last in-flight turn settles.
#[derive(Debug)]
pub struct ChatSession {
    id: u64,
    transcript: Transcript,
    draft: String,
    pending: BTreeSet<TurnId>,
    next_turn: u64,
    revision: u64,
    locale: Locale,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            id: NEXT_SESSION.fetch_add(1, Ordering::Relaxed),
            transcript: Transcript::new(),
            draft: String::new(),
            pending: BTreeSet::new(),
            next_turn: 0,
            revision: 0,
            locale: Locale::default(),
        }
    }
}

impl ChatSession {
    /// Create an empty session with English fallbacks
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locale(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    pub const fn locale(&self) -> Locale {
        self.locale
    }

    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the draft text
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Whether any submitted turn is still waiting for its reply
    pub fn is_awaiting_reply(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of turns currently in flight
    pub fn pending_turns(&self) -> usize {
        self.pending.len()
    }

    /// Bumped on every transcript append.
    ///
    /// Views watch this to scroll the newest entry into sight.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Record a user turn and clear the draft.
    ///
    /// Returns `None` without touching any state when `text` is blank. The
    /// stored content is `text` as given, untrimmed.
    pub fn submit(&mut self, text: impl Into<String>) -> Option<PendingTurn> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }

        let id = TurnId {
            session: self.id,
            seq: self.next_turn,
        };
        self.next_turn += 1;

        self.append(Message::user(text.clone()));
        self.draft.clear();
        self.pending.insert(id);

        tracing::debug!(turn = %id, pending = self.pending.len(), "chat turn submitted");

        Some(PendingTurn {
            id,
            request: ChatRequest::new(text),
        })
    }

    /// Submit whatever is currently in the draft
    pub fn submit_draft(&mut self) -> Option<PendingTurn> {
        if self.draft.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.draft);
        self.submit(text)
    }

    /// Append the assistant message answering `turn`.
    ///
    /// A reply with no text becomes the locale's empty-reply placeholder and
    /// any error becomes its transport-failure string. Returns `None` if the
    /// turn was not issued by this session.
    pub fn settle(&mut self, turn: PendingTurn, outcome: Result<ChatReply>) -> Option<&Message> {
        if turn.id.session != self.id || !self.pending.remove(&turn.id) {
            tracing::warn!(turn = %turn.id, "ignoring reply for a turn this session never issued");
            return None;
        }

        let content = match outcome {
            Ok(reply) => reply.into_text().unwrap_or_else(|| {
                tracing::debug!(turn = %turn.id, "responder returned no text");
                self.locale.empty_reply().to_owned()
            }),
            Err(e) => {
                tracing::warn!(turn = %turn.id, error = %e, "chat request failed");
                self.locale.transport_failure().to_owned()
            }
        };

        tracing::debug!(turn = %turn.id, pending = self.pending.len(), "chat turn settled");
        Some(self.append(Message::assistant(content)))
    }

    /// Submit the draft, wait for `responder`, and settle the turn.
    ///
    /// Holds `&mut self` across the await, so turns issued this way never
    /// overlap. Returns `None` when the draft was blank and nothing was sent.
    pub async fn round_trip<R>(&mut self, responder: &R) -> Option<&Message>
    where
        R: Responder + ?Sized,
    {
        let turn = self.submit_draft()?;
        let outcome = responder.respond(turn.request()).await;
        self.settle(turn, outcome)
    }

    fn append(&mut self, message: Message) -> &Message {
        self.revision += 1;
        self.transcript.push(message)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::error::ChatError;
    use crate::message::Role;

    /// Replies with a fixed JSON body and counts calls
    struct JsonResponder {
        body: &'static str,
        calls: AtomicUsize,
    }

    impl JsonResponder {
        fn new(body: &'static str) -> Self {
            Self {
                body,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Responder for JsonResponder {
        async fn respond(&self, _request: &ChatRequest) -> Result<ChatReply> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(serde_json::from_str(self.body)?)
        }
    }

    struct OfflineResponder;

    #[async_trait]
    impl Responder for OfflineResponder {
        async fn respond(&self, _request: &ChatRequest) -> Result<ChatReply> {
            Err(ChatError::Transport("connection refused".into()))
        }
    }

    /// Echoes the request so tests can check the payload
    struct EchoResponder;

    #[async_trait]
    impl Responder for EchoResponder {
        async fn respond(&self, request: &ChatRequest) -> Result<ChatReply> {
            Ok(ChatReply::text(format!("echo: {}", request.message)))
        }
    }

    fn roles(session: &ChatSession) -> Vec<Role> {
        session.transcript().iter().map(|m| m.role).collect()
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = ChatSession::new();
        assert!(session.transcript().is_empty());
        assert!(session.draft().is_empty());
        assert!(!session.is_awaiting_reply());
        assert_eq!(session.revision(), 0);
    }

    #[test]
    fn test_update_draft_replaces_text() {
        let mut session = ChatSession::new();
        session.update_draft("Hel");
        session.update_draft("Hello");
        assert_eq!(session.draft(), "Hello");
        assert!(session.transcript().is_empty());
    }

    #[tokio::test]
    async fn test_blank_draft_is_ignored() {
        let responder = JsonResponder::new(r#"{"response": "hello"}"#);
        let mut session = ChatSession::new();

        for blank in ["", "   ", "\n\t "] {
            session.update_draft(blank);
            assert!(session.round_trip(&responder).await.is_none());
            assert_eq!(session.draft(), blank);
        }

        assert!(session.submit("  ").is_none());
        assert!(session.transcript().is_empty());
        assert!(!session.is_awaiting_reply());
        assert_eq!(session.revision(), 0);
        assert_eq!(responder.calls(), 0);
    }

    #[test]
    fn test_submit_records_user_turn_before_reply() {
        let mut session = ChatSession::new();
        session.update_draft("  Hi there ");

        let turn = session.submit_draft().unwrap();

        assert_eq!(session.transcript().len(), 1);
        let first = &session.transcript().messages()[0];
        assert_eq!(first.role, Role::User);
        assert_eq!(first.content, "  Hi there ");
        assert_eq!(turn.request().message, "  Hi there ");
        assert!(session.draft().is_empty());
        assert!(session.is_awaiting_reply());

        session.settle(turn, Ok(ChatReply::text("ok")));
        assert!(!session.is_awaiting_reply());
    }

    #[test]
    fn test_submit_clears_draft_even_when_text_differs() {
        let mut session = ChatSession::new();
        session.update_draft("half-typed");
        let _turn = session.submit("something else").unwrap();
        assert!(session.draft().is_empty());
    }

    #[tokio::test]
    async fn test_reply_text_is_appended() {
        let responder = JsonResponder::new(r#"{"response": "hello"}"#);
        let mut session = ChatSession::new();
        session.update_draft("Hi");

        let reply = session.round_trip(&responder).await.unwrap();
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, "hello");
        assert_eq!(responder.calls(), 1);
        assert!(!session.is_awaiting_reply());
    }

    #[tokio::test]
    async fn test_missing_response_uses_placeholder() {
        let responder = JsonResponder::new("{}");
        let mut session = ChatSession::new();
        session.update_draft("Hi");
        session.round_trip(&responder).await;

        let last = session.transcript().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, "Sorry, an error occurred.");
        assert!(!session.is_awaiting_reply());
    }

    #[tokio::test]
    async fn test_error_body_without_response_uses_placeholder() {
        let responder = JsonResponder::new(r#"{"error": "boom"}"#);
        let mut session = ChatSession::with_locale(Locale::Ru);
        session.update_draft("Привет");
        session.round_trip(&responder).await;

        assert_eq!(
            session.transcript().last().unwrap().content,
            "Извините, произошла ошибка."
        );
    }

    #[tokio::test]
    async fn test_transport_failure_uses_failure_string() {
        let mut session = ChatSession::new();
        session.update_draft("Hi");
        session.round_trip(&OfflineResponder).await;

        let last = session.transcript().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, "Sorry, could not get a response from the server.");
        assert!(!session.is_awaiting_reply());
    }

    #[tokio::test]
    async fn test_unparseable_body_uses_failure_string() {
        let responder = JsonResponder::new("<html>502 Bad Gateway</html>");
        let mut session = ChatSession::new();
        session.update_draft("Hi");
        session.round_trip(&responder).await;

        assert_eq!(
            session.transcript().last().unwrap().content,
            Locale::En.transport_failure()
        );
        assert!(!session.is_awaiting_reply());
    }

    #[tokio::test]
    async fn test_end_to_end_exchange() {
        let responder = JsonResponder::new(r#"{"response":"Hello!"}"#);
        let mut session = ChatSession::new();
        session.update_draft("Hi");
        session.round_trip(&responder).await;

        let transcript: Vec<_> = session
            .transcript()
            .iter()
            .map(|m| (m.role, m.content.as_str()))
            .collect();
        assert_eq!(
            transcript,
            [(Role::User, "Hi"), (Role::Assistant, "Hello!")]
        );
        assert_eq!(session.revision(), 2);
    }

    #[tokio::test]
    async fn test_request_carries_submitted_text() {
        let mut session = ChatSession::new();
        session.update_draft("ping");
        let reply = session.round_trip(&EchoResponder).await.unwrap();
        assert_eq!(reply.content, "echo: ping");
    }

    #[test]
    fn test_overlapping_turns_settle_in_arrival_order() {
        let mut session = ChatSession::new();
        let first = session.submit("one").unwrap();
        let second = session.submit("two").unwrap();
        assert_ne!(first.id(), second.id());
        assert_eq!(session.pending_turns(), 2);

        session.settle(second, Ok(ChatReply::text("reply two")));
        assert!(session.is_awaiting_reply());

        session.settle(first, Err(ChatError::Transport("reset".into())));
        assert!(!session.is_awaiting_reply());

        let contents: Vec<_> = session.transcript().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            contents,
            ["one", "two", "reply two", Locale::En.transport_failure()]
        );
        assert_eq!(
            roles(&session),
            [Role::User, Role::User, Role::Assistant, Role::Assistant]
        );
    }

    #[test]
    fn test_every_user_turn_gets_one_answer() {
        let mut session = ChatSession::new();
        let turns: Vec<_> = ["a", "b", "c"]
            .into_iter()
            .filter_map(|t| session.submit(t))
            .collect();

        for turn in turns.into_iter().rev() {
            session.settle(turn, Ok(ChatReply::default()));
        }

        let transcript = session.transcript();
        assert_eq!(transcript.count_role(Role::User), 3);
        assert_eq!(transcript.count_role(Role::Assistant), 3);
        assert_eq!(session.pending_turns(), 0);
    }

    #[test]
    fn test_turn_from_other_session_is_rejected() {
        let mut ours = ChatSession::new();
        let mut theirs = ChatSession::new();
        let ours_turn = ours.submit("mine").unwrap();
        let theirs_turn = theirs.submit("theirs").unwrap();
        assert_eq!(ours_turn.id().seq(), theirs_turn.id().seq());
        assert_ne!(ours_turn.id(), theirs_turn.id());

        assert!(ours.settle(theirs_turn, Ok(ChatReply::text("reply to theirs"))).is_none());
        assert_eq!(ours.transcript().len(), 1);
        assert!(ours.is_awaiting_reply());

        let own_reply = ours.settle(ours_turn, Ok(ChatReply::text("reply to mine")));
        assert_eq!(own_reply.map(|m| m.content.as_str()), Some("reply to mine"));
        assert!(!ours.is_awaiting_reply());
    }

    #[test]
    fn test_with_locale_sessions_are_distinct() {
        let mut first = ChatSession::with_locale(Locale::Ru);
        let mut second = ChatSession::with_locale(Locale::Ru);
        let first_turn = first.submit("один").unwrap();
        let second_turn = second.submit("два").unwrap();

        assert!(second.settle(first_turn, Ok(ChatReply::text("x"))).is_none());
        assert!(second.settle(second_turn, Ok(ChatReply::text("y"))).is_some());
        assert!(first.is_awaiting_reply());
        assert_eq!(second.transcript().len(), 2);
    }

    #[test]
    fn test_revision_tracks_appends_only() {
        let mut session = ChatSession::new();
        session.update_draft("typing");
        assert_eq!(session.revision(), 0);

        let turn = session.submit_draft().unwrap();
        assert_eq!(session.revision(), 1);

        session.settle(turn, Ok(ChatReply::text("done")));
        assert_eq!(session.revision(), 2);
    }
}
