//! Message sequence and streaming state for one chat session.
//!
//! The transcript is a pure state machine: the chat page feeds it user
//! submissions and inbound socket frames, and it owns the ordering rules —
//! optimistic echo, a single mutable assistant placeholder per round, and
//! settlement on the end-of-response marker.

use shared::models::{MessageSender, StoredMessage};
use uuid::Uuid;

/// In-band marker signalling the end of a streamed reply.
pub const END_OF_RESPONSE: &str = "[END]";

/// Shown in place of a reply when the transport fails mid-round.
pub const REPLY_FAILED: &str =
    "Sorry, something went wrong while answering. Please try again.";

/// The author of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One rendered message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    /// Client-generated identifier, stable across re-renders.
    pub id: Uuid,
    pub role: Role,
    pub content: String,
}

/// Result of asking the transcript to accept an outbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The message was appended together with an assistant placeholder.
    Accepted,
    /// Empty or whitespace-only input; nothing changed.
    EmptyInput,
    /// A round is still in flight; nothing changed.
    Busy,
}

/// Result of feeding one inbound frame to the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkOutcome {
    /// Content was appended to the in-flight placeholder.
    Appended,
    /// The end-of-response marker arrived; the round is settled.
    Settled,
    /// No round was in flight; the frame was dropped.
    Ignored,
}

/// Ordered message sequence plus the per-round awaiting flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<ChatEntry>,
    awaiting: bool,
}

impl Transcript {
    /// Rebuild a transcript from persisted history.
    pub fn from_history(history: &[StoredMessage]) -> Self {
        let entries = history
            .iter()
            .map(|message| ChatEntry {
                id: Uuid::new_v4(),
                role: match message.sender {
                    MessageSender::User => Role::User,
                    MessageSender::Bot => Role::Assistant,
                },
                content: message.content.clone(),
            })
            .collect();

        Self {
            entries,
            awaiting: false,
        }
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a round is in flight and further submissions are blocked.
    pub fn is_awaiting(&self) -> bool {
        self.awaiting
    }

    /// Whether the assistant has not produced any content yet this round.
    pub fn is_thinking(&self) -> bool {
        self.awaiting
            && self
                .entries
                .last()
                .is_some_and(|entry| entry.role == Role::Assistant && entry.content.is_empty())
    }

    /// Accept an outbound message: append the user's text (optimistic echo)
    /// and an empty assistant placeholder, then block further submissions
    /// until the round settles.
    pub fn submit(&mut self, text: &str) -> SubmitOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::EmptyInput;
        }
        if self.awaiting {
            return SubmitOutcome::Busy;
        }

        self.entries.push(ChatEntry {
            id: Uuid::new_v4(),
            role: Role::User,
            content: trimmed.to_string(),
        });
        self.entries.push(ChatEntry {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            content: String::new(),
        });
        self.awaiting = true;

        SubmitOutcome::Accepted
    }

    /// Feed one inbound frame. Content accumulates on the placeholder until
    /// the end-of-response marker arrives, after which the entry is final.
    pub fn apply_chunk(&mut self, frame: &str) -> ChunkOutcome {
        if !self.awaiting {
            return ChunkOutcome::Ignored;
        }

        if frame.contains(END_OF_RESPONSE) {
            self.awaiting = false;
            return ChunkOutcome::Settled;
        }

        if let Some(placeholder) = self.entries.last_mut()
            && placeholder.role == Role::Assistant
        {
            placeholder.content.push_str(frame);
        }

        ChunkOutcome::Appended
    }

    /// Settle the round with a complete reply (request/response variant).
    pub fn settle_with(&mut self, content: &str) {
        if !self.awaiting {
            return;
        }

        if let Some(placeholder) = self.entries.last_mut()
            && placeholder.role == Role::Assistant
        {
            placeholder.content = content.to_string();
        }
        self.awaiting = false;
    }

    /// Settle the round with the fixed apology after a transport failure.
    pub fn fail(&mut self) {
        self.settle_with(REPLY_FAILED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::models::Timestamp;

    fn stored(sender: MessageSender, content: &str) -> StoredMessage {
        StoredMessage {
            id: 1,
            chat_id: 1,
            sender,
            content: content.to_string(),
            timestamp: Timestamp(Utc.with_ymd_and_hms(2025, 3, 8, 14, 30, 0).unwrap()),
        }
    }

    #[test]
    fn test_empty_submission_is_rejected() {
        let mut transcript = Transcript::default();

        assert_eq!(transcript.submit(""), SubmitOutcome::EmptyInput);
        assert_eq!(transcript.submit("   \n\t"), SubmitOutcome::EmptyInput);
        assert!(transcript.entries().is_empty());
    }

    #[test]
    fn test_submission_appends_echo_and_placeholder() {
        let mut transcript = Transcript::default();

        assert_eq!(transcript.submit("  hello  "), SubmitOutcome::Accepted);
        assert_eq!(transcript.entries().len(), 2);
        assert_eq!(transcript.entries()[0].role, Role::User);
        assert_eq!(transcript.entries()[0].content, "hello");
        assert_eq!(transcript.entries()[1].role, Role::Assistant);
        assert!(transcript.entries()[1].content.is_empty());
        assert!(transcript.is_awaiting());
        assert!(transcript.is_thinking());
    }

    #[test]
    fn test_concurrent_submission_is_blocked() {
        let mut transcript = Transcript::default();
        transcript.submit("first");

        assert_eq!(transcript.submit("second"), SubmitOutcome::Busy);
        // the rejected submission leaves the transcript untouched
        assert_eq!(transcript.entries().len(), 2);
        assert_eq!(transcript.entries()[0].content, "first");
    }

    #[test]
    fn test_chunks_concatenate_in_arrival_order() {
        let mut transcript = Transcript::default();
        transcript.submit("what are your hours?");

        assert_eq!(transcript.apply_chunk("We are "), ChunkOutcome::Appended);
        assert_eq!(transcript.apply_chunk("open "), ChunkOutcome::Appended);
        assert_eq!(transcript.apply_chunk("8am-3pm."), ChunkOutcome::Appended);
        assert_eq!(transcript.apply_chunk(END_OF_RESPONSE), ChunkOutcome::Settled);

        let assistant: Vec<_> = transcript
            .entries()
            .iter()
            .filter(|entry| entry.role == Role::Assistant)
            .collect();
        assert_eq!(assistant.len(), 1);
        assert_eq!(assistant[0].content, "We are open 8am-3pm.");
        assert!(!transcript.is_awaiting());
    }

    #[test]
    fn test_exactly_one_assistant_message_per_round() {
        let mut transcript = Transcript::default();

        transcript.submit("first question");
        transcript.apply_chunk("answer one");
        transcript.apply_chunk(END_OF_RESPONSE);

        transcript.submit("second question");
        transcript.apply_chunk("answer two");
        transcript.apply_chunk(END_OF_RESPONSE);

        let assistant_count = transcript
            .entries()
            .iter()
            .filter(|entry| entry.role == Role::Assistant)
            .count();
        assert_eq!(assistant_count, 2);
        assert_eq!(transcript.entries().len(), 4);
    }

    #[test]
    fn test_settled_round_ignores_stray_frames() {
        let mut transcript = Transcript::default();
        transcript.submit("hi");
        transcript.apply_chunk("hello");
        transcript.apply_chunk(END_OF_RESPONSE);

        assert_eq!(transcript.apply_chunk("late frame"), ChunkOutcome::Ignored);
        assert_eq!(transcript.entries()[1].content, "hello");
    }

    #[test]
    fn test_failure_replaces_placeholder_with_apology() {
        let mut transcript = Transcript::default();
        transcript.submit("hi");
        transcript.apply_chunk("partial ");
        transcript.fail();

        assert_eq!(transcript.entries()[1].content, REPLY_FAILED);
        assert!(!transcript.is_awaiting());
        // submission is re-enabled after the failed round settles
        assert_eq!(transcript.submit("again"), SubmitOutcome::Accepted);
    }

    #[test]
    fn test_settle_with_complete_reply() {
        let mut transcript = Transcript::default();
        transcript.submit("hi");
        transcript.settle_with("full reply");

        assert_eq!(transcript.entries()[1].content, "full reply");
        assert!(!transcript.is_awaiting());
    }

    #[test]
    fn test_from_history_maps_senders() {
        let history = vec![
            stored(MessageSender::User, "hello"),
            stored(MessageSender::Bot, "hi there"),
        ];

        let transcript = Transcript::from_history(&history);
        assert_eq!(transcript.entries().len(), 2);
        assert_eq!(transcript.entries()[0].role, Role::User);
        assert_eq!(transcript.entries()[1].role, Role::Assistant);
        assert!(!transcript.is_awaiting());
    }
}
