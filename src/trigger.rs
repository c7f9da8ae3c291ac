// File: src/trigger.rs
//! Pub/Sub style trigger events. Only the decoded inner message is of
//! interest, and only for logging.
use crate::error::{PromptError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerMessage {
    /// Base64 of the inner message, usually UTF-8 JSON.
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerEvent {
    pub message: TriggerMessage,
}

impl TriggerEvent {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PromptError::Trigger(e.to_string()))
    }

    /// Wraps an inner message the way the publisher does.
    pub fn wrap(inner: &Value) -> Result<Self> {
        let encoded = BASE64.encode(serde_json::to_vec(inner)?);
        Ok(Self {
            message: TriggerMessage { data: encoded },
        })
    }

    /// Event used for manual runs: the inner message is
    /// `{"message": {"data": "test"}}`.
    pub fn test_event() -> Self {
        let inner = serde_json::json!({ "message": { "data": "test" } });
        Self {
            message: TriggerMessage {
                data: BASE64.encode(inner.to_string()),
            },
        }
    }

    /// Decodes the inner message to text. Only invalid base64 is an error;
    /// bytes that are not UTF-8 are replaced.
    pub fn decode(&self) -> Result<String> {
        let bytes = BASE64.decode(self.message.data.trim())?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// The inner message as JSON, when it is JSON.
    pub fn decode_json(&self) -> Result<Option<Value>> {
        let text = self.decode()?;
        Ok(serde_json::from_str(&text).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_decodes_to_test_message() {
        let decoded = TriggerEvent::test_event().decode_json().unwrap().unwrap();
        assert_eq!(decoded, json!({ "message": { "data": "test" } }));
    }

    #[test]
    fn wrapped_payload_survives_json_transport() {
        let inner = json!({ "reason": "scheduled", "n": 3 });
        let event = TriggerEvent::wrap(&inner).unwrap();
        let wire = serde_json::to_string(&event).unwrap();
        let received = TriggerEvent::from_json(&wire).unwrap();
        assert_eq!(received.decode_json().unwrap(), Some(inner));
    }

    #[test]
    fn plain_text_payload_is_accepted() {
        let event = TriggerEvent {
            message: TriggerMessage {
                data: BASE64.encode("tick"),
            },
        };
        assert_eq!(event.decode().unwrap(), "tick");
        assert_eq!(event.decode_json().unwrap(), None);
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let event = TriggerEvent {
            message: TriggerMessage { data: "***".into() },
        };
        assert!(matches!(event.decode(), Err(PromptError::Base64(_))));
        assert!(TriggerEvent::from_json(r#"{"data": "x"}"#).is_err());
    }
}
