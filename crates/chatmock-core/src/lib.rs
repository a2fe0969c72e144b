//! Domain layer for chatmock: the editing model behind a browser-based
//! builder for fabricated chat-conversation mockups.
//!
//! This crate owns the parts with real invariants: the polymorphic message
//! record, the ordered message list store, the editor session state machine,
//! the scenario snapshot models, and the raw-JSON import/export bridge.
//! Rendering, drag-and-drop mechanics, and image export are external
//! collaborators that consume this model through the application layer.

pub mod bridge;
pub mod editor;
pub mod error;
pub mod list;
pub mod message;
pub mod scenario;

// Re-export common error type
pub use error::{ChatmockError, Result};

pub use editor::EditorSession;
pub use list::MessageList;
pub use message::{Message, MessageBody, MessageKind, MessagePatch, Sender};
pub use scenario::{Scenario, ScenarioCatalog};
