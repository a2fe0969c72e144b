//! Message domain model.
//!
//! This module contains the core `Message` entity: a tagged variant over the
//! seven bubble kinds a conversation mockup can contain, plus the default
//! seeding used to open an editor on a directly-saveable draft.

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who a message is attributed to inside the simulated conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person writing the chat (right-aligned bubbles).
    User,
    /// The contact or bot being talked to (left-aligned bubbles).
    Bot,
}

/// The closed set of message kinds the editor can produce.
///
/// Used by the component picker and for kind dispatch without having to
/// match on the full [`MessageBody`] payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Buttons,
    List,
    Card,
    Datepicker,
    Image,
    Typing,
}

impl MessageKind {
    /// All kinds in picker display order.
    pub const ALL: [MessageKind; 7] = [
        MessageKind::Text,
        MessageKind::Buttons,
        MessageKind::List,
        MessageKind::Card,
        MessageKind::Datepicker,
        MessageKind::Image,
        MessageKind::Typing,
    ];
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MessageKind::Text => "text",
            MessageKind::Buttons => "buttons",
            MessageKind::List => "list",
            MessageKind::Card => "card",
            MessageKind::Datepicker => "datepicker",
            MessageKind::Image => "image",
            MessageKind::Typing => "typing",
        };
        write!(f, "{}", name)
    }
}

/// The kind of interactive element embedded in a card body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardElementKind {
    Text,
    Input,
    Textarea,
    Date,
    Dropdown,
    Checkbox,
}

/// The value held by a card element: free text, or a checkbox flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardElementValue {
    Text(String),
    Flag(bool),
}

/// A single interactive element inside a card message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardElement {
    /// Unique element identifier (UUID format)
    pub id: String,
    /// The element kind
    #[serde(rename = "type")]
    pub kind: CardElementKind,
    /// Display label shown next to the element
    pub label: String,
    /// Placeholder text for input-like elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Comma-separated choices for dropdown elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
    /// Current element value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<CardElementValue>,
}

impl CardElement {
    /// Creates a new card element of the given kind with a fresh id.
    pub fn new(kind: CardElementKind, label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            label: label.into(),
            placeholder: None,
            options: None,
            value: None,
        }
    }
}

/// The type-conditional payload of a message.
///
/// Serialized internally tagged under `"type"` so the wire shape stays flat
/// (`{"type": "buttons", "buttons": [...]}`), matching the exported JSON the
/// raw-data editor round-trips. Every payload field is optional: absence and
/// an empty collection are distinct states and both survive a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageBody {
    /// Plain text bubble; `content` carries the text.
    Text,
    /// A bubble followed by a group of action buttons.
    #[serde(rename_all = "camelCase")]
    Buttons {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        buttons: Option<Vec<String>>,
    },
    /// A multi-select option list, optionally with a free-text "Other" entry.
    #[serde(rename_all = "camelCase")]
    List {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        list_items: Option<Vec<String>>,
        /// Indices into `list_items` that are currently selected.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        selected_items: Option<Vec<usize>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        allow_other: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        is_other_selected: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        other_text: Option<String>,
    },
    /// A rich media card with optional buttons and embedded form elements.
    #[serde(rename_all = "camelCase")]
    Card {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        buttons: Option<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        card_title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        card_description: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        card_image: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        card_elements: Option<Vec<CardElement>>,
    },
    /// A date selection bubble holding a single date or a range.
    #[serde(rename_all = "camelCase")]
    Datepicker {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        selected_date: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_date: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        end_date: Option<String>,
    },
    /// An image bubble; `content` is an optional caption.
    #[serde(rename_all = "camelCase")]
    Image {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
    },
    /// An animated typing indicator; carries no extra fields.
    Typing,
}

impl MessageBody {
    /// Returns the kind tag of this body.
    pub fn kind(&self) -> MessageKind {
        match self {
            MessageBody::Text => MessageKind::Text,
            MessageBody::Buttons { .. } => MessageKind::Buttons,
            MessageBody::List { .. } => MessageKind::List,
            MessageBody::Card { .. } => MessageKind::Card,
            MessageBody::Datepicker { .. } => MessageKind::Datepicker,
            MessageBody::Image { .. } => MessageKind::Image,
            MessageBody::Typing => MessageKind::Typing,
        }
    }

    /// Builds the default payload an editor opens on for the given kind.
    ///
    /// Collections are seeded with small non-empty data so a freshly picked
    /// component is directly saveable without further editing.
    pub fn seeded(kind: MessageKind) -> Self {
        match kind {
            MessageKind::Text => MessageBody::Text,
            MessageKind::Buttons => MessageBody::Buttons {
                buttons: Some(vec!["Option 1".to_string(), "Option 2".to_string()]),
            },
            MessageKind::List => MessageBody::List {
                list_items: Some(vec!["First item".to_string(), "Second item".to_string()]),
                selected_items: None,
                allow_other: None,
                is_other_selected: None,
                other_text: None,
            },
            MessageKind::Card => MessageBody::Card {
                buttons: Some(vec!["Option 1".to_string(), "Option 2".to_string()]),
                card_title: Some("Card Title".to_string()),
                card_description: Some("Card description goes here".to_string()),
                card_image: Some("gradient".to_string()),
                card_elements: None,
            },
            MessageKind::Datepicker => MessageBody::Datepicker {
                selected_date: None,
                start_date: None,
                end_date: None,
            },
            MessageKind::Image => MessageBody::Image { image_url: None },
            MessageKind::Typing => MessageBody::Typing,
        }
    }
}

/// A single message in a conversation mockup.
///
/// The common fields live on the struct; the type-conditional fields live in
/// the flattened [`MessageBody`]. `content` is defaulted on deserialization
/// so externally supplied records missing it still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique message identifier, immutable after creation (UUID format)
    pub id: String,
    /// Who the message is attributed to
    pub sender: Sender,
    /// Free text; semantics depend on the kind (bubble text, caption, prompt)
    #[serde(default)]
    pub content: String,
    /// Display label for the sender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    /// Display timestamp string; not used for ordering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Type tag and type-conditional fields
    #[serde(flatten)]
    pub body: MessageBody,
}

impl Message {
    /// Creates a default message draft of the given kind.
    ///
    /// The draft gets a fresh unique id, a kind-specific placeholder as its
    /// content, seeded type-conditional fields, and the current wall-clock
    /// time as its display timestamp.
    ///
    /// # Arguments
    ///
    /// * `kind` - The message kind picked in the component picker
    /// * `sender` - Who the message is attributed to
    /// * `sender_name` - Optional display label for the sender
    pub fn new_default(kind: MessageKind, sender: Sender, sender_name: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sender,
            content: default_content(kind).to_string(),
            sender_name: sender_name.map(|name| name.to_string()),
            timestamp: Some(Local::now().format("%H:%M").to_string()),
            body: MessageBody::seeded(kind),
        }
    }

    /// Returns the kind tag of this message.
    pub fn kind(&self) -> MessageKind {
        self.body.kind()
    }

    /// Returns whether this message passes the UI-level save gate.
    ///
    /// A message is saveable if its content is non-empty, or its kind does
    /// not require content (`typing`, and `image` which may omit a caption).
    /// This is a gate for editor commit buttons, not a store-level rejection:
    /// the list store accepts any well-typed record.
    pub fn is_valid_for_save(&self) -> bool {
        match self.kind() {
            MessageKind::Typing | MessageKind::Image => true,
            _ => !self.content.trim().is_empty(),
        }
    }
}

/// Placeholder content an editor opens on for each kind.
fn default_content(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Text => "Hello! How can I help you today?",
        MessageKind::Buttons => "Please select an option:",
        MessageKind::List => "Here are your options:",
        MessageKind::Card => "Check out this card!",
        MessageKind::Datepicker => "Please select a date:",
        MessageKind::Image => "",
        MessageKind::Typing => "",
    }
}
