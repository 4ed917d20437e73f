//! # Response Envelope
//!
//! The data + one-shot notice envelope every mutation returns.
//!
//! ## Notice Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Mutation Response Shape                            │
//! │                                                                         │
//! │  POST /products                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  {                                                                      │
//! │    "data":   { ...the new record... },                                 │
//! │    "notice": { "kind": "success",                                      │
//! │                "message": "Product created successfully" }             │
//! │  }                                                                      │
//! │                                                                         │
//! │  The notice is consumed once by the client (it shows the banner and    │
//! │  forgets it). At most one notice per response, success OR error,       │
//! │  never both. No session state survives the request.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Whether a notice reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A one-shot banner message carried on a mutation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// The response envelope: optional payload plus at most one notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

impl<T> Envelope<T> {
    /// A payload with a success notice.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Envelope {
            data: Some(data),
            notice: Some(Notice {
                kind: NoticeKind::Success,
                message: message.into(),
            }),
        }
    }

    /// A success notice with no payload (delete responses).
    pub fn success_message(message: impl Into<String>) -> Self {
        Envelope {
            data: None,
            notice: Some(Notice {
                kind: NoticeKind::Success,
                message: message.into(),
            }),
        }
    }

    /// An error notice with no payload.
    pub fn error(message: impl Into<String>) -> Self {
        Envelope {
            data: None,
            notice: Some(Notice {
                kind: NoticeKind::Error,
                message: message.into(),
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let json = serde_json::to_value(Envelope::success(42, "Done")).unwrap();
        assert_eq!(json["data"], 42);
        assert_eq!(json["notice"]["kind"], "success");
        assert_eq!(json["notice"]["message"], "Done");
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let json = serde_json::to_value(Envelope::<i32>::error("Nope")).unwrap();
        assert!(json.get("data").is_none());
        assert_eq!(json["notice"]["kind"], "error");
    }
}
