//! The message list store.
//!
//! An ordered collection of messages with CRUD and reorder operations. The
//! list order is the conversation's display and export order. Ids are unique
//! within the list at all times; operations addressing a missing id are
//! either idempotent no-ops (`remove`, `reorder`) or typed `NotFound` errors
//! (`replace`, `update`), matching how stale UI events are tolerated.

use crate::error::{ChatmockError, Result};
use crate::message::{Message, MessagePatch};

/// The central store for the live conversation being edited.
///
/// `MessageList` exclusively owns the ordered messages. All mutation goes
/// through `&mut self` methods that run to completion synchronously, so
/// consumers only ever observe fully applied states; `snapshot` hands out a
/// deep copy for point-in-time reads (scenario saves, image export).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageList {
    messages: Vec<Message>,
}

impl MessageList {
    /// Creates an empty message list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list from an existing ordered set of messages.
    ///
    /// Later entries sharing an id with an earlier one are dropped, so the
    /// uniqueness invariant holds even for externally supplied data.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        let mut list = Self::new();
        for message in messages {
            list.append(message);
        }
        list
    }

    /// Appends a message at the end of the conversation.
    ///
    /// A message whose id already exists in the list is silently dropped.
    pub fn append(&mut self, message: Message) {
        if self.contains(&message.id) {
            tracing::debug!(id = %message.id, "ignoring append with duplicate id");
            return;
        }
        self.messages.push(message);
    }

    /// Overwrites the message with the given id.
    ///
    /// The stored id always wins: the incoming record keeps `id` even if its
    /// own id field differs, so replacing can never rename an entry.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no message with `id` exists.
    pub fn replace(&mut self, id: &str, mut message: Message) -> Result<()> {
        let index = self
            .index_of(id)
            .ok_or_else(|| ChatmockError::not_found("message", id))?;
        message.id = id.to_string();
        self.messages[index] = message;
        Ok(())
    }

    /// Shallow-merges a patch into the message with the given id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no message with `id` exists.
    pub fn update(&mut self, id: &str, patch: &MessagePatch) -> Result<()> {
        let index = self
            .index_of(id)
            .ok_or_else(|| ChatmockError::not_found("message", id))?;
        patch.apply_to(&mut self.messages[index]);
        Ok(())
    }

    /// Removes the message with the given id. No-op if absent.
    pub fn remove(&mut self, id: &str) {
        self.messages.retain(|message| message.id != id);
    }

    /// Moves the message with the given id to `target_index`.
    ///
    /// The target index is clamped to the valid range; shifting the other
    /// entries preserves their relative order. Reordering a missing id is a
    /// no-op.
    pub fn reorder(&mut self, id: &str, target_index: usize) {
        let Some(from) = self.index_of(id) else {
            return;
        };
        let to = target_index.min(self.messages.len().saturating_sub(1));
        if from == to {
            return;
        }
        let message = self.messages.remove(from);
        self.messages.insert(to, message);
    }

    /// Empties the list.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Returns the message with the given id, if present.
    pub fn get(&self, id: &str) -> Option<&Message> {
        self.messages.iter().find(|message| message.id == id)
    }

    /// Returns whether a message with the given id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// Read access to the ordered messages.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// A deep copy of the current messages, for point-in-time consumers.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.messages.iter().position(|message| message.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{MessageKind, Sender};

    fn text_message(id: &str, content: &str) -> Message {
        let mut message = Message::new_default(MessageKind::Text, Sender::User, Some("John"));
        message.id = id.to_string();
        message.content = content.to_string();
        message
    }

    #[test]
    fn test_append_keeps_order() {
        let mut list = MessageList::new();
        list.append(text_message("a", "first"));
        list.append(text_message("b", "second"));

        let ids: Vec<&str> = list.messages().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_append_ignores_duplicate_id() {
        let mut list = MessageList::new();
        list.append(text_message("a", "first"));
        list.append(text_message("a", "imposter"));

        assert_eq!(list.len(), 1);
        assert_eq!(list.get("a").unwrap().content, "first");
    }

    #[test]
    fn test_no_duplicate_ids_across_operations() {
        let mut list = MessageList::new();
        list.append(text_message("a", "one"));
        list.append(text_message("b", "two"));
        list.remove("a");
        list.append(text_message("a", "one again"));
        list.replace("b", text_message("b", "two again")).unwrap();
        list.append(text_message("b", "dup"));

        let mut ids: Vec<&str> = list.messages().iter().map(|m| m.id.as_str()).collect();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_replace_preserves_id() {
        let mut list = MessageList::new();
        list.append(text_message("a", "original"));

        // Incoming record carries a different id; the addressed id wins.
        list.replace("a", text_message("renamed", "replacement"))
            .unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(list.get("a").unwrap().content, "replacement");
        assert!(list.get("renamed").is_none());
    }

    #[test]
    fn test_replace_missing_id_is_not_found() {
        let mut list = MessageList::new();
        let err = list.replace("ghost", text_message("ghost", "x")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let mut list = MessageList::new();
        let err = list
            .update("ghost", &MessagePatch::with_content("x"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut list = MessageList::new();
        list.append(text_message("a", "one"));
        list.remove("a");
        list.remove("a");
        list.remove("never-existed");
        assert!(list.is_empty());
    }

    #[test]
    fn test_reorder_moves_and_shifts() {
        let mut list = MessageList::new();
        list.append(text_message("a", "1"));
        list.append(text_message("b", "2"));
        list.append(text_message("c", "3"));

        list.reorder("c", 0);

        let ids: Vec<&str> = list.messages().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_reorder_is_idempotent() {
        let mut list = MessageList::new();
        list.append(text_message("a", "1"));
        list.append(text_message("b", "2"));
        list.append(text_message("c", "3"));

        list.reorder("a", 2);
        let once = list.snapshot();
        list.reorder("a", 2);
        assert_eq!(list.snapshot(), once);
    }

    #[test]
    fn test_reorder_clamps_target_index() {
        let mut list = MessageList::new();
        list.append(text_message("a", "1"));
        list.append(text_message("b", "2"));

        list.reorder("a", 99);

        let ids: Vec<&str> = list.messages().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_reorder_missing_id_is_noop() {
        let mut list = MessageList::new();
        list.append(text_message("a", "1"));
        let before = list.snapshot();
        list.reorder("ghost", 0);
        assert_eq!(list.snapshot(), before);
    }

    #[test]
    fn test_from_messages_drops_duplicates() {
        let list = MessageList::from_messages(vec![
            text_message("a", "one"),
            text_message("a", "imposter"),
            text_message("b", "two"),
        ]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut list = MessageList::new();
        list.append(text_message("a", "1"));
        list.clear();
        assert!(list.is_empty());
    }
}
