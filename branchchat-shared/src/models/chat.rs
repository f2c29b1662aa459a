use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Summary of a chat session as returned by `GET /chats/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatSummary {
    /// Server-issued identifier for the session.
    pub id: i64,

    /// When the session was created.
    pub created_at: Timestamp,
}

/// Response payload for `POST /chats/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatCreated {
    /// Identifier of the newly created session.
    pub id: i64,
}

/// The author of a persisted message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    /// Sent by the customer.
    User,
    /// Sent by the chatbot.
    Bot,
}

/// A message persisted by the backend for one chat session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredMessage {
    /// Unique identifier for the message.
    pub id: i64,

    /// Session this message belongs to.
    pub chat_id: i64,

    /// Who authored the message.
    pub sender: MessageSender,

    /// The message content.
    pub content: String,

    /// When the message was stored.
    pub timestamp: Timestamp,
}

/// Request payload for `POST /messages/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendMessageRequest {
    /// Session the message is addressed to.
    pub chat_id: i64,

    /// The outbound user message.
    pub user_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_sender_wire_names() {
        assert_eq!(
            serde_json::to_string(&MessageSender::User).unwrap(),
            "\"user\""
        );
        assert_eq!(
            serde_json::to_string(&MessageSender::Bot).unwrap(),
            "\"bot\""
        );

        let sender: MessageSender = serde_json::from_str("\"bot\"").unwrap();
        assert_eq!(sender, MessageSender::Bot);
    }

    #[test]
    fn test_stored_message_deserialization() {
        let json = r#"{
            "id": 7,
            "chat_id": 3,
            "sender": "user",
            "content": "What are your opening hours?",
            "timestamp": "2025-03-08T14:30:00Z"
        }"#;

        let message: StoredMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.id, 7);
        assert_eq!(message.chat_id, 3);
        assert_eq!(message.sender, MessageSender::User);
        assert_eq!(message.content, "What are your opening hours?");
        assert_eq!(
            message.timestamp.0,
            Utc.with_ymd_and_hms(2025, 3, 8, 14, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_chat_summary_deserialization() {
        let json = r#"[{"id": 1, "created_at": "2025-03-08T10:00:00Z"}]"#;
        let chats: Vec<ChatSummary> = serde_json::from_str(json).unwrap();

        assert_eq!(chats.len(), 1);
        assert_eq!(chats[0].id, 1);
    }
}
