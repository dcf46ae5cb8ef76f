//! Line-delimited JSON messages sent to the host.
//!
//! Every message is a single JSON object on its own line with a `kind`
//! discriminator:
//!
//! ```text
//! {"kind":"event","event":{"type":"wordAccepted","word":"CAT","score":24}}
//! {"kind":"framing","framing":{"centerX":1.0,"centerY":1.5,"orthoSize":2.0}}
//! {"kind":"snapshot","snapshot":{...}}
//! {"kind":"notice","message":"no level loaded"}
//! ```

use serde::Serialize;

use crate::core::{CameraFraming, MatchEvent, MatchSnapshot};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Outbound {
    Event { event: MatchEvent },
    /// Sent right after a level is initialized.
    Framing { framing: CameraFraming },
    Snapshot { snapshot: MatchSnapshot },
    Notice { message: String },
}

impl Outbound {
    pub fn notice(message: impl Into<String>) -> Self {
        Self::Notice {
            message: message.into(),
        }
    }
}

/// Encode one message as a JSON line, without the trailing newline.
pub fn encode_line(message: &Outbound) -> Result<String> {
    Ok(serde_json::to_string(message)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdapterError;
    use crate::types::RejectReason;

    #[test]
    fn test_event_line() {
        let line = encode_line(&Outbound::Event {
            event: MatchEvent::WordRejected {
                word: "QX".to_string(),
                reason: RejectReason::Invalid,
            },
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["kind"], "event");
        assert_eq!(value["event"]["type"], "wordRejected");
        assert_eq!(value["event"]["reason"], "invalid");
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_notice_line() {
        let line = encode_line(&Outbound::notice("no level loaded")).unwrap();
        assert_eq!(line, r#"{"kind":"notice","message":"no level loaded"}"#);
    }

    #[test]
    fn test_encode_failures_are_adapter_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AdapterError = json_err.into();
        assert!(matches!(err, AdapterError::Encode(_)));
        assert!(err.to_string().starts_with("failed to encode message"));
    }
}
