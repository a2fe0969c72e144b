//! The editing workbench use case.
//!
//! `Workbench` is the application's top-level state container: it owns the
//! live message list, the editor session, the current selection, and the
//! scenario catalog store, and it exposes the operations the rendering
//! collaborator and the surrounding chrome invoke (bubble callbacks, the
//! component picker, quick send/receive inputs, the scenario sidebar, and
//! the raw-JSON dialog).

use chatmock_core::bridge;
use chatmock_core::error::{ChatmockError, Result};
use chatmock_core::message::{Message, MessageBody, MessageKind, MessagePatch, Sender};
use chatmock_core::scenario::{Scenario, ScenarioCatalog};
use chatmock_core::{EditorSession, MessageList};
use chatmock_infrastructure::{KeyValueStore, ScenarioCatalogStore};
use chrono::Local;
use uuid::Uuid;

/// Default display name for the user side of the conversation.
const DEFAULT_SENDER_NAME: &str = "John";
/// Default display name for the contact side of the conversation.
const DEFAULT_RECEIVER_NAME: &str = "Morris";

/// Coordinates the live conversation, the editor session, and persistence.
///
/// All operations are synchronous and run to completion within one
/// user-triggered event; there is no concurrent mutation (the single
/// rendering thread drives everything), so consumers always observe fully
/// applied states.
pub struct Workbench<S: KeyValueStore> {
    /// The live conversation being edited
    messages: MessageList,
    /// The single editor session (picker or open editor)
    session: EditorSession,
    /// Id of the currently highlighted bubble, if any
    selected_id: Option<String>,
    /// Saved scenario snapshots, write-through persisted
    scenarios: ScenarioCatalogStore<S>,
    /// Display name for user-side messages
    sender_name: String,
    /// Display name for contact-side messages
    receiver_name: String,
}

impl<S: KeyValueStore> Workbench<S> {
    /// Creates a workbench over the given durable store.
    ///
    /// The scenario catalog is loaded immediately; the message list starts
    /// empty.
    pub fn new(store: S) -> Self {
        Self {
            messages: MessageList::new(),
            session: EditorSession::new(),
            selected_id: None,
            scenarios: ScenarioCatalogStore::new(store),
            sender_name: DEFAULT_SENDER_NAME.to_string(),
            receiver_name: DEFAULT_RECEIVER_NAME.to_string(),
        }
    }

    // ============================================================================
    // Read access
    // ============================================================================

    pub fn messages(&self) -> &MessageList {
        &self.messages
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    /// Mutable access to the open draft, for editor field bindings.
    pub fn draft_mut(&mut self) -> Option<&mut Message> {
        self.session.draft_mut()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn scenarios(&self) -> &ScenarioCatalog {
        self.scenarios.catalog()
    }

    pub fn current_scenario_id(&self) -> Option<&str> {
        self.scenarios.current_scenario_id()
    }

    pub fn sender_name(&self) -> &str {
        &self.sender_name
    }

    pub fn receiver_name(&self) -> &str {
        &self.receiver_name
    }

    pub fn set_sender_name(&mut self, name: impl Into<String>) {
        self.sender_name = name.into();
    }

    pub fn set_receiver_name(&mut self, name: impl Into<String>) {
        self.receiver_name = name.into();
    }

    // ============================================================================
    // Quick inputs and demo seed
    // ============================================================================

    /// Appends a plain text message from the user side.
    ///
    /// Blank content is a silent no-op, matching the quick-input behavior.
    pub fn send_text(&mut self, content: &str) {
        self.append_quick_text(content, Sender::User);
    }

    /// Appends a plain text message from the contact side.
    pub fn receive_text(&mut self, content: &str) {
        self.append_quick_text(content, Sender::Bot);
    }

    fn append_quick_text(&mut self, content: &str, sender: Sender) {
        if content.trim().is_empty() {
            return;
        }
        let name = match sender {
            Sender::User => self.sender_name.clone(),
            Sender::Bot => self.receiver_name.clone(),
        };
        self.messages.append(Message {
            id: Uuid::new_v4().to_string(),
            sender,
            content: content.to_string(),
            sender_name: Some(name),
            timestamp: Some(Local::now().format("%H:%M").to_string()),
            body: MessageBody::Text,
        });
    }

    /// Seeds the demo conversation shown on first launch.
    pub fn sample_conversation(&mut self) {
        self.messages.clear();
        self.selected_id = None;

        let mut hi = Message::new_default(MessageKind::Text, Sender::User, Some("John"));
        hi.content = "Hi".to_string();
        hi.timestamp = Some("11:06".to_string());

        let mut greeting = Message::new_default(MessageKind::Text, Sender::Bot, Some("Morris"));
        greeting.content =
            "Hi John, I can help you with Excess Overtime requests. What would you like to do?"
                .to_string();
        greeting.timestamp = Some("11:06".to_string());

        let mut choices = Message::new_default(MessageKind::Buttons, Sender::Bot, Some("Morris"));
        choices.content = "Choose an option:".to_string();
        choices.timestamp = Some("11:06".to_string());
        choices.body = MessageBody::Buttons {
            buttons: Some(vec![
                "Submit Excess OT Request".to_string(),
                "View My Past Requests".to_string(),
            ]),
        };

        self.messages.append(hi);
        self.messages.append(greeting);
        self.messages.append(choices);
    }

    // ============================================================================
    // Rendering collaborator callbacks
    // ============================================================================

    /// Highlights the bubble with the given id. Ignored if the id is stale.
    pub fn select_message(&mut self, id: &str) {
        if self.messages.contains(id) {
            self.selected_id = Some(id.to_string());
        }
    }

    /// Deletes a message; a selection pointing at it is cleared.
    pub fn delete_message(&mut self, id: &str) {
        self.messages.remove(id);
        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        }
    }

    /// Opens the editor on an existing message.
    pub fn edit_message(&mut self, id: &str) -> Result<()> {
        self.session.edit_existing(&self.messages, id)
    }

    /// Applies an in-place partial edit to a message.
    pub fn update_message(&mut self, id: &str, patch: &MessagePatch) -> Result<()> {
        self.messages.update(id, patch)
    }

    /// Moves a message to the given position in the conversation.
    pub fn reorder_message(&mut self, id: &str, target_index: usize) {
        self.messages.reorder(id, target_index);
    }

    /// Empties the live conversation ("Clear All").
    pub fn clear_messages(&mut self) {
        self.messages.clear();
        self.selected_id = None;
    }

    /// Starts a fresh chat: clears the list and drops the current-scenario
    /// association.
    pub fn new_chat(&mut self) -> Result<()> {
        self.clear_messages();
        self.session.cancel();
        self.scenarios.clear_current()
    }

    // ============================================================================
    // Picker and editor flow
    // ============================================================================

    /// Opens the component picker, discarding any open draft.
    pub fn open_picker(&mut self) {
        self.session.open_picker();
    }

    /// Picks a component kind and opens the editor on a seeded draft.
    ///
    /// The draft's sender name follows the chosen side, as the editor UI
    /// labels it.
    pub fn choose_component(&mut self, kind: MessageKind, sender: Sender) {
        let name = match sender {
            Sender::User => self.sender_name.clone(),
            Sender::Bot => self.receiver_name.clone(),
        };
        self.session.pick(kind, sender, Some(&name));
    }

    /// Closes the editor or picker, discarding the draft.
    pub fn cancel_editor(&mut self) {
        self.session.cancel();
    }

    /// Commits the open draft into the conversation.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the draft fails the save gate (empty content
    /// on a kind that requires it); the list is not mutated in that case.
    pub fn commit_editor(&mut self) -> Result<()> {
        if let Some(draft) = self.session.draft() {
            if !draft.is_valid_for_save() {
                return Err(ChatmockError::validation("Message content cannot be empty"));
            }
        }
        self.session.commit(&mut self.messages)
    }

    // ============================================================================
    // Scenario flow
    // ============================================================================

    /// Saves the live conversation as a named scenario snapshot.
    pub fn save_scenario(&mut self, name: &str) -> Result<Scenario> {
        self.scenarios.save_scenario(name, self.messages.snapshot())
    }

    /// Replaces the live conversation with a stored scenario.
    ///
    /// Any open draft is discarded; the loaded scenario becomes current.
    pub fn load_scenario(&mut self, id: &str) -> Result<()> {
        let messages = self.scenarios.select_scenario(id)?;
        self.messages = MessageList::from_messages(messages);
        self.selected_id = None;
        self.session.cancel();
        self.scenarios.mark_current(id)?;
        tracing::debug!(%id, count = self.messages.len(), "scenario loaded");
        Ok(())
    }

    /// Deletes a stored scenario. The live conversation is untouched.
    pub fn delete_scenario(&mut self, id: &str) -> Result<()> {
        self.scenarios.delete_scenario(id)
    }

    // ============================================================================
    // Raw-data surface
    // ============================================================================

    /// Canonical pretty-printed JSON view of the live conversation.
    pub fn export_json(&self) -> Result<String> {
        bridge::export_json(self.messages.messages())
    }

    /// Replaces the live conversation with externally supplied JSON.
    ///
    /// On a parse or schema error the live list is left untouched and the
    /// error is returned for inline display.
    pub fn apply_json(&mut self, text: &str) -> Result<()> {
        let imported = bridge::import_json(text)?;
        self.messages = MessageList::from_messages(imported);
        self.selected_id = None;
        self.session.cancel();
        tracing::debug!(count = self.messages.len(), "raw JSON applied");
        Ok(())
    }
}
