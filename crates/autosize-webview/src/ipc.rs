//! IPC protocol from the embedded page to Rust.
//!
//! JavaScript calls `window.autosize.ipc.send(kind, payload)`, which posts
//! `JSON.stringify({kind, payload})` through wry's `window.ipc` and lands in
//! the `ipc_handler` registered on the WebView.

use serde::{Deserialize, Serialize};

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload.
    pub payload: IpcPayload,
}

/// Payload of an IPC message: a simple string or structured JSON.
///
/// A `null` payload arrives as `Json(Value::Null)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Create a simple text message.
    pub fn text(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Text(text.into()),
        }
    }

    /// The payload as text, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match &self.payload {
            IpcPayload::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// JavaScript snippet that sets up the IPC bridge on the JS side.
/// Registered as an initialization script ahead of the measurement script.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.autosize = window.autosize || {};
    window.autosize.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        }
    };
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_text_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"size_report","payload":"320,480"}"#).unwrap();
        assert_eq!(msg.kind, "size_report");
        assert_eq!(msg.as_text(), Some("320,480"));
    }

    #[test]
    fn parses_json_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"custom","payload":{"a":1}}"#).unwrap();
        assert!(matches!(msg.payload, IpcPayload::Json(_)));
        assert_eq!(msg.as_text(), None);
    }

    #[test]
    fn null_payload_is_json_null() {
        let msg = IpcMessage::from_json(r#"{"kind":"ping","payload":null}"#).unwrap();
        assert_eq!(msg.payload, IpcPayload::Json(serde_json::Value::Null));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(IpcMessage::from_json("320,480").is_none());
        assert!(IpcMessage::from_json(r#"{"payload":"x"}"#).is_none());
    }

    #[test]
    fn text_constructor_round_trips() {
        let msg = IpcMessage::text("size_report", "10,20");
        let raw = serde_json::to_string(&msg).unwrap();
        assert_eq!(IpcMessage::from_json(&raw), Some(msg));
    }

    #[test]
    fn bridge_posts_kind_and_payload() {
        assert!(IPC_INIT_SCRIPT.contains("window.autosize.ipc"));
        assert!(IPC_INIT_SCRIPT.contains("window.ipc.postMessage"));
    }
}
