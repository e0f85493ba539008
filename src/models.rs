use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single board message as returned by the comments API.
///
/// The feed endpoint returns messages already sorted newest-first
/// (`_sort=createdAt&_order=desc`); the client renders them in that order and
/// never re-sorts locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub nickname: String,
    pub body: String,
    /// Epoch milliseconds on the wire.
    #[serde(rename = "createdAt", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Timestamp as shown in the message header.
    pub fn created_at_display(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    pub nickname: String,
    pub body: String,
}

/// Application-level envelope for `POST /comments`.
///
/// `ok == 0` is the API's failure sentinel; any other value means the message
/// was accepted. On failure `message` carries a human-readable reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMessageResponse {
    pub ok: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CreateMessageResponse {
    pub fn is_ok(&self) -> bool {
        self.ok != 0
    }

    /// Failure reason for display, with a fallback when the API omits one.
    pub fn error_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "The message was rejected".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_deserializes_epoch_millis() {
        let json = r#"{"id":"7","nickname":"emory","body":"hello","createdAt":1622540645000}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.id, "7");
        assert_eq!(msg.nickname, "emory");
        assert_eq!(msg.body, "hello");
        assert_eq!(msg.created_at.timestamp_millis(), 1_622_540_645_000);
    }

    #[test]
    fn feed_preserves_server_order() {
        // Newest-first is the server's contract; the order of the array is
        // the order we keep.
        let json = r#"[
            {"id":"2","nickname":"a","body":"second","createdAt":2000},
            {"id":"1","nickname":"b","body":"first","createdAt":1000}
        ]"#;
        let feed: Vec<Message> = serde_json::from_str(json).unwrap();
        let ids: Vec<&str> = feed.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
    }

    #[test]
    fn create_request_serializes_nickname_and_body() {
        let req = CreateMessageRequest {
            nickname: "emory".to_string(),
            body: "hi there".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["nickname"], "emory");
        assert_eq!(json["body"], "hi there");
    }

    #[test]
    fn ok_sentinel_is_zero() {
        let failed: CreateMessageResponse =
            serde_json::from_str(r#"{"ok":0,"message":"body required"}"#).unwrap();
        assert!(!failed.is_ok());
        assert_eq!(failed.error_message(), "body required");

        let accepted: CreateMessageResponse = serde_json::from_str(r#"{"ok":1}"#).unwrap();
        assert!(accepted.is_ok());

        // Anything other than the sentinel counts as success.
        let odd: CreateMessageResponse = serde_json::from_str(r#"{"ok":2}"#).unwrap();
        assert!(odd.is_ok());
    }
}
