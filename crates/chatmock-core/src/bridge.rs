//! Import/export bridge for raw chat JSON.
//!
//! The raw-data editor surface lets a user copy the current chat state out
//! (for example to hand to an LLM) and paste externally generated scenarios
//! back in. Export produces a canonical pretty-printed `{"messages": [...]}`
//! document; import validates the envelope and converts the entries
//! leniently, so a single malformed message degrades to a fallback text
//! bubble instead of rejecting the whole document.

use serde_json::Value;
use uuid::Uuid;

use crate::error::{ChatmockError, Result};
use crate::message::{Message, MessageBody, Sender};

/// Serializes the message list as pretty-printed `{"messages": [...]}` JSON.
pub fn export_json(messages: &[Message]) -> Result<String> {
    let document = serde_json::json!({ "messages": messages });
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Parses externally supplied JSON into a candidate message list.
///
/// # Errors
///
/// - `Parse` if `text` is not syntactically valid JSON.
/// - `Schema` if the root is not an object or its `messages` field is not an
///   array.
///
/// Individual entries are not schema-checked: entries that do not form a
/// well-typed message are converted to fallback text messages preserving
/// whatever common fields they carry.
pub fn import_json(text: &str) -> Result<Vec<Message>> {
    let document: Value =
        serde_json::from_str(text).map_err(|err| ChatmockError::parse(err.to_string()))?;

    let root = document
        .as_object()
        .ok_or_else(|| ChatmockError::schema("Root must be an object"))?;
    let entries = root
        .get("messages")
        .and_then(Value::as_array)
        .ok_or_else(|| ChatmockError::schema("'messages' must be an array"))?;

    Ok(entries.iter().cloned().map(lenient_message).collect())
}

/// Converts one imported entry, falling back to a plain text message.
fn lenient_message(value: Value) -> Message {
    match serde_json::from_value::<Message>(value.clone()) {
        Ok(message) => message,
        Err(err) => {
            tracing::debug!(%err, "imported entry is not a well-typed message, using fallback");
            fallback_message(&value)
        }
    }
}

/// Builds the fallback text message for an entry that failed conversion,
/// keeping whatever common fields are salvageable.
fn fallback_message(value: &Value) -> Message {
    let field = |name: &str| {
        value
            .get(name)
            .and_then(Value::as_str)
            .map(|s| s.to_string())
    };
    let sender = match value.get("sender").and_then(Value::as_str) {
        Some("user") => Sender::User,
        _ => Sender::Bot,
    };

    Message {
        id: field("id").unwrap_or_else(|| Uuid::new_v4().to_string()),
        sender,
        content: field("content").unwrap_or_default(),
        sender_name: field("senderName"),
        timestamp: field("timestamp"),
        body: MessageBody::Text,
    }
}
