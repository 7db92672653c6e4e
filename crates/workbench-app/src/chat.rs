//! Assistant chat log and per-exchange state machine
//!
//! Each exchange walks `Idle -> UserSubmitted -> AssistantPending ->
//! AssistantComplete -> Idle`, or ends in `AssistantFailed -> Idle` when the
//! provider errors. At most one exchange is in flight; the log itself is
//! append-only, and the assistant placeholder is finalized in place.

use chrono::{DateTime, Local};
use workbench_core::prelude::*;
use workbench_core::{Author, ExchangeId, MessageId, MessagePhase};

/// Text stored when the provider resolves with an empty reply
pub const EMPTY_REPLY_TEXT: &str = "(empty reply)";

/// One entry of the chat log
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub author: Author,
    pub text: String,
    pub phase: MessagePhase,
    pub created_at: DateTime<Local>,
}

impl ChatMessage {
    pub fn is_pending(&self) -> bool {
        self.phase == MessagePhase::Pending
    }
}

/// Where the current exchange stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExchangePhase {
    #[default]
    Idle,
    UserSubmitted,
    AssistantPending,
    AssistantComplete,
    AssistantFailed,
}

/// The in-flight request a submit or retry produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub exchange: ExchangeId,
    /// Assistant placeholder the reply will land in
    pub placeholder: MessageId,
    pub prompt: String,
}

/// Ordered chat log
#[derive(Debug, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_message_id: u64,
    next_exchange_id: u64,
    phase: ExchangePhase,
    pending: Option<PendingReply>,
    /// Most recent failed exchange, eligible for retry
    failed: Option<PendingReply>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, id: MessageId) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn phase(&self) -> ExchangePhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }

    pub fn pending(&self) -> Option<&PendingReply> {
        self.pending.as_ref()
    }

    pub fn can_retry(&self) -> bool {
        self.pending.is_none() && self.failed.is_some()
    }

    /// Append the user's prompt and an assistant placeholder.
    ///
    /// Returns `None` (and changes nothing) for blank input or while another
    /// reply is still pending.
    pub fn submit(&mut self, text: &str) -> Option<PendingReply> {
        let prompt = text.trim();
        if prompt.is_empty() {
            trace!("Ignoring blank submit");
            return None;
        }
        if let Some(pending) = &self.pending {
            debug!("Ignoring submit while {} is pending", pending.exchange);
            return None;
        }

        let exchange = ExchangeId(self.next_exchange_id);
        self.next_exchange_id += 1;

        self.push(Author::User, prompt.to_string(), MessagePhase::Complete);
        self.transition(exchange, ExchangePhase::UserSubmitted);

        let placeholder = self.push(Author::Assistant, String::new(), MessagePhase::Pending);
        self.transition(exchange, ExchangePhase::AssistantPending);

        let reply = PendingReply {
            exchange,
            placeholder,
            prompt: prompt.to_string(),
        };
        self.pending = Some(reply.clone());
        self.failed = None;
        Some(reply)
    }

    /// Finalize the pending placeholder with the reply text.
    ///
    /// Returns `false` when `exchange`/`placeholder` is not the current
    /// pending reply; such stale completions leave the log untouched.
    pub fn complete(
        &mut self,
        exchange: ExchangeId,
        placeholder: MessageId,
        text: impl Into<String>,
    ) -> bool {
        if !self.is_current(exchange, placeholder) {
            debug!("Ignoring stale completion for {}", exchange);
            return false;
        }

        let mut text = text.into();
        if text.trim().is_empty() {
            text = EMPTY_REPLY_TEXT.to_string();
        }
        self.finalize(placeholder, text, MessagePhase::Complete);
        self.pending = None;
        self.transition(exchange, ExchangePhase::AssistantComplete);
        self.transition(exchange, ExchangePhase::Idle);
        true
    }

    /// Mark the pending placeholder as failed with `reason`
    pub fn fail(
        &mut self,
        exchange: ExchangeId,
        placeholder: MessageId,
        reason: impl Into<String>,
    ) -> bool {
        if !self.is_current(exchange, placeholder) {
            debug!("Ignoring stale failure for {}", exchange);
            return false;
        }

        self.finalize(placeholder, reason.into(), MessagePhase::Failed);
        self.failed = self.pending.take();
        self.transition(exchange, ExchangePhase::AssistantFailed);
        self.transition(exchange, ExchangePhase::Idle);
        true
    }

    /// Re-issue the last failed exchange in place.
    ///
    /// The same placeholder goes back to `Pending` under a fresh exchange id
    /// so completions from the failed attempt cannot land.
    pub fn retry(&mut self) -> Option<PendingReply> {
        if self.pending.is_some() {
            return None;
        }
        let failed = self.failed.take()?;

        let exchange = ExchangeId(self.next_exchange_id);
        self.next_exchange_id += 1;

        self.finalize(failed.placeholder, String::new(), MessagePhase::Pending);
        let reply = PendingReply {
            exchange,
            placeholder: failed.placeholder,
            prompt: failed.prompt,
        };
        self.pending = Some(reply.clone());
        info!("Retrying {} as {}", failed.exchange, exchange);
        self.transition(exchange, ExchangePhase::AssistantPending);
        Some(reply)
    }

    fn is_current(&self, exchange: ExchangeId, placeholder: MessageId) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| p.exchange == exchange && p.placeholder == placeholder)
    }

    fn push(&mut self, author: Author, text: String, phase: MessagePhase) -> MessageId {
        let id = MessageId(self.next_message_id);
        self.next_message_id += 1;
        self.messages.push(ChatMessage {
            id,
            author,
            text,
            phase,
            created_at: Local::now(),
        });
        id
    }

    fn finalize(&mut self, id: MessageId, text: String, phase: MessagePhase) {
        if let Some(message) = self.messages.iter_mut().find(|m| m.id == id) {
            message.text = text;
            message.phase = phase;
        }
    }

    fn transition(&mut self, exchange: ExchangeId, to: ExchangePhase) {
        debug!("{}: {:?} -> {:?}", exchange, self.phase, to);
        self.phase = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_submit_appends_nothing() {
        let mut log = ChatLog::new();
        assert!(log.submit("").is_none());
        assert!(log.submit("   ").is_none());
        assert!(log.submit("\n\t").is_none());
        assert!(log.is_empty());
        assert_eq!(log.phase(), ExchangePhase::Idle);
    }

    #[test]
    fn test_submit_appends_user_then_placeholder() {
        let mut log = ChatLog::new();
        let reply = log.submit("build a form").unwrap();

        let messages = log.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].author, Author::User);
        assert_eq!(messages[0].text, "build a form");
        assert_eq!(messages[0].phase, MessagePhase::Complete);
        assert_eq!(messages[1].author, Author::Assistant);
        assert!(messages[1].is_pending());
        assert_eq!(messages[1].id, reply.placeholder);
        assert!(messages[0].id < messages[1].id);
        assert_eq!(log.phase(), ExchangePhase::AssistantPending);
    }

    #[test]
    fn test_second_submit_while_pending_is_noop() {
        let mut log = ChatLog::new();
        log.submit("first").unwrap();
        assert!(log.submit("second").is_none());
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_complete_replaces_placeholder_in_place() {
        let mut log = ChatLog::new();
        let reply = log.submit("hello").unwrap();
        assert!(log.complete(reply.exchange, reply.placeholder, "Hi there"));

        assert_eq!(log.len(), 2);
        let placeholder = &log.messages()[1];
        assert_eq!(placeholder.id, reply.placeholder);
        assert_eq!(placeholder.text, "Hi there");
        assert_eq!(placeholder.phase, MessagePhase::Complete);
        assert!(log.is_idle());
        assert_eq!(log.phase(), ExchangePhase::Idle);
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut log = ChatLog::new();
        let first = log.submit("one").unwrap();
        log.complete(first.exchange, first.placeholder, "done");

        let second = log.submit("two").unwrap();
        assert!(!log.complete(first.exchange, first.placeholder, "late"));
        assert!(!log.complete(second.exchange, MessageId(999), "unknown"));
        assert_eq!(log.messages()[1].text, "done");
        assert!(log.messages()[3].is_pending());
    }

    #[test]
    fn test_empty_reply_gets_marker_text() {
        let mut log = ChatLog::new();
        let reply = log.submit("hello").unwrap();
        log.complete(reply.exchange, reply.placeholder, "  ");
        assert_eq!(log.messages()[1].text, EMPTY_REPLY_TEXT);
    }

    #[test]
    fn test_ids_strictly_increase_across_exchanges() {
        let mut log = ChatLog::new();
        for prompt in ["a", "b", "c"] {
            let reply = log.submit(prompt).unwrap();
            log.complete(reply.exchange, reply.placeholder, "ok");
        }
        let ids: Vec<_> = log.messages().iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(log.len(), 6);
    }

    #[test]
    fn test_fail_then_retry_in_place() {
        let mut log = ChatLog::new();
        let reply = log.submit("build a form").unwrap();
        assert!(!log.can_retry());

        assert!(log.fail(reply.exchange, reply.placeholder, "backend offline"));
        assert_eq!(log.messages()[1].phase, MessagePhase::Failed);
        assert_eq!(log.messages()[1].text, "backend offline");
        assert!(log.is_idle());
        assert!(log.can_retry());

        let retried = log.retry().unwrap();
        assert_eq!(retried.placeholder, reply.placeholder);
        assert_eq!(retried.prompt, "build a form");
        assert_ne!(retried.exchange, reply.exchange);
        assert_eq!(log.len(), 2);
        assert!(log.messages()[1].is_pending());

        // The failed attempt can no longer land
        assert!(!log.complete(reply.exchange, reply.placeholder, "late"));
        assert!(log.complete(retried.exchange, retried.placeholder, "form ready"));
        assert_eq!(log.messages()[1].text, "form ready");
    }

    #[test]
    fn test_retry_without_failure_is_noop() {
        let mut log = ChatLog::new();
        assert!(log.retry().is_none());
        let reply = log.submit("x").unwrap();
        assert!(log.retry().is_none());
        log.complete(reply.exchange, reply.placeholder, "ok");
        assert!(log.retry().is_none());
    }

    #[test]
    fn test_new_submit_discards_retry_candidate() {
        let mut log = ChatLog::new();
        let reply = log.submit("x").unwrap();
        log.fail(reply.exchange, reply.placeholder, "boom");
        log.submit("y").unwrap();
        assert!(!log.can_retry());
    }
}
