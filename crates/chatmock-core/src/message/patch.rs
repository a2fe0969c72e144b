//! Partial message updates.
//!
//! The rendering collaborator edits messages in place without opening the
//! full editor (toggling a list selection, picking a date range, typing into
//! a card element). Those edits arrive as a [`MessagePatch`]: an all-optional
//! field set that is shallow-merged into the existing record.

use serde::{Deserialize, Serialize};

use super::model::{CardElement, Message, MessageBody};

/// A partial update to a message.
///
/// Only `Some` fields are applied. Common fields always apply; body fields
/// apply only when the target message's kind actually carries them — a
/// `selected_items` patch against a text message is silently ignored, so
/// type-mismatched data can never be stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_items: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_items: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_other: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_other_selected: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_elements: Option<Vec<CardElement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl MessagePatch {
    /// A patch that replaces the message content.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// A patch that replaces the selected indices of a list message.
    pub fn with_selected_items(indices: Vec<usize>) -> Self {
        Self {
            selected_items: Some(indices),
            ..Self::default()
        }
    }

    /// A patch that sets a single selected date on a datepicker message.
    pub fn with_selected_date(date: impl Into<String>) -> Self {
        Self {
            selected_date: Some(date.into()),
            ..Self::default()
        }
    }

    /// A patch that sets a date range on a datepicker message.
    pub fn with_date_range(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start_date: Some(start.into()),
            end_date: Some(end.into()),
            ..Self::default()
        }
    }

    /// Shallow-merges this patch into the given message.
    ///
    /// The message id and kind are never touched. Body fields that do not
    /// exist on the message's kind are ignored.
    pub fn apply_to(&self, message: &mut Message) {
        if let Some(content) = &self.content {
            message.content = content.clone();
        }
        if let Some(sender_name) = &self.sender_name {
            message.sender_name = Some(sender_name.clone());
        }
        if let Some(timestamp) = &self.timestamp {
            message.timestamp = Some(timestamp.clone());
        }

        match &mut message.body {
            MessageBody::Text | MessageBody::Typing => {}
            MessageBody::Buttons { buttons } => {
                if let Some(patched) = &self.buttons {
                    *buttons = Some(patched.clone());
                }
            }
            MessageBody::List {
                list_items,
                selected_items,
                allow_other,
                is_other_selected,
                other_text,
            } => {
                if let Some(patched) = &self.list_items {
                    *list_items = Some(patched.clone());
                }
                if let Some(patched) = &self.selected_items {
                    *selected_items = Some(patched.clone());
                }
                if let Some(patched) = self.allow_other {
                    *allow_other = Some(patched);
                }
                if let Some(patched) = self.is_other_selected {
                    *is_other_selected = Some(patched);
                }
                if let Some(patched) = &self.other_text {
                    *other_text = Some(patched.clone());
                }
            }
            MessageBody::Card {
                buttons,
                card_title,
                card_description,
                card_image,
                card_elements,
            } => {
                if let Some(patched) = &self.buttons {
                    *buttons = Some(patched.clone());
                }
                if let Some(patched) = &self.card_title {
                    *card_title = Some(patched.clone());
                }
                if let Some(patched) = &self.card_description {
                    *card_description = Some(patched.clone());
                }
                if let Some(patched) = &self.card_image {
                    *card_image = Some(patched.clone());
                }
                if let Some(patched) = &self.card_elements {
                    *card_elements = Some(patched.clone());
                }
            }
            MessageBody::Datepicker {
                selected_date,
                start_date,
                end_date,
            } => {
                if let Some(patched) = &self.selected_date {
                    *selected_date = Some(patched.clone());
                }
                if let Some(patched) = &self.start_date {
                    *start_date = Some(patched.clone());
                }
                if let Some(patched) = &self.end_date {
                    *end_date = Some(patched.clone());
                }
            }
            MessageBody::Image { image_url } => {
                if let Some(patched) = &self.image_url {
                    *image_url = Some(patched.clone());
                }
            }
        }
    }
}
