//! Editor session state machine.
//!
//! Tracks the ephemeral "idle / picking / creating / editing" state of the
//! single message editor and binds its draft to the list store on commit.
//! Modeling the session as one tagged enum makes illegal flag combinations
//! (simultaneously "creating" and "editing") unrepresentable.

use crate::error::{ChatmockError, Result};
use crate::list::MessageList;
use crate::message::{Message, MessageKind, Sender};

/// The ephemeral state of the message editor.
///
/// At most one session is active. The draft is an owned copy, independent of
/// the list store until committed, so cancelling an edit can never corrupt
/// the live conversation. Entering any mode from a non-idle state discards
/// the current draft without warning, mirroring the editor UI it backs.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorSession {
    /// No picker or editor is open.
    #[default]
    Idle,
    /// The component picker is open, no type chosen yet.
    Picking,
    /// An editor is open on a draft for a message not yet in the list.
    CreatingNew { draft: Message },
    /// An editor is open on a deep copy of an existing message.
    EditingExisting { id: String, draft: Message },
}

impl EditorSession {
    /// Creates an idle session.
    pub fn new() -> Self {
        Self::Idle
    }

    /// Opens the component picker, discarding any open draft.
    ///
    /// No-op if the picker is already open.
    pub fn open_picker(&mut self) {
        if matches!(self, Self::Picking) {
            return;
        }
        *self = Self::Picking;
    }

    /// Starts creating a new message of the picked kind.
    ///
    /// The draft is a freshly seeded default (see [`Message::new_default`]),
    /// so the editor opens on a directly-saveable record.
    pub fn pick(&mut self, kind: MessageKind, sender: Sender, sender_name: Option<&str>) {
        *self = Self::CreatingNew {
            draft: Message::new_default(kind, sender, sender_name),
        };
    }

    /// Starts editing an existing message, loading a deep copy as the draft.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no message with `id` exists in the list; the
    /// session state is left unchanged in that case.
    pub fn edit_existing(&mut self, list: &MessageList, id: &str) -> Result<()> {
        let message = list
            .get(id)
            .ok_or_else(|| ChatmockError::not_found("message", id))?;
        *self = Self::EditingExisting {
            id: id.to_string(),
            draft: message.clone(),
        };
        Ok(())
    }

    /// Closes the session, discarding the draft. Always safe.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Commits the draft into the list store and returns to idle.
    ///
    /// A `CreatingNew` draft is appended; an `EditingExisting` draft replaces
    /// the entry it was loaded from. Committing from `Idle` or `Picking` is a
    /// no-op, tolerating stale UI events.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the edited message was deleted while the editor
    /// was open; the session still returns to idle.
    pub fn commit(&mut self, list: &mut MessageList) -> Result<()> {
        match std::mem::take(self) {
            state @ (Self::Idle | Self::Picking) => {
                *self = state;
                Ok(())
            }
            Self::CreatingNew { draft } => {
                list.append(draft);
                Ok(())
            }
            Self::EditingExisting { id, draft } => list.replace(&id, draft),
        }
    }

    /// The current draft, if an editor is open.
    pub fn draft(&self) -> Option<&Message> {
        match self {
            Self::CreatingNew { draft } | Self::EditingExisting { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Mutable access to the current draft, if an editor is open.
    pub fn draft_mut(&mut self) -> Option<&mut Message> {
        match self {
            Self::CreatingNew { draft } | Self::EditingExisting { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Whether an editor (create or edit) is currently open.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::CreatingNew { .. } | Self::EditingExisting { .. })
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_picking(&self) -> bool {
        matches!(self, Self::Picking)
    }
}
