//! Scenario domain models.
//!
//! A scenario is a named, saved snapshot of an entire message list. The
//! catalog is the full set of saved scenarios plus the pointer to the one
//! currently loaded in the editor.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::message::Message;

/// A named snapshot of a message list.
///
/// Scenarios are independent: editing the live list does not retroactively
/// mutate a previously saved scenario until it is explicitly re-saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Unique scenario identifier (UUID format)
    pub id: String,
    /// User-supplied display name, non-empty
    pub name: String,
    /// Deep copy of the message list at save time
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Timestamp of the last save (RFC 3339)
    pub last_modified: String,
}

impl Scenario {
    /// Creates a scenario snapshotting the given messages now.
    pub fn new(name: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            messages,
            last_modified: Utc::now().to_rfc3339(),
        }
    }
}

/// The full set of saved scenarios plus the current-selection pointer.
///
/// Loaded once at startup from durable storage; every mutation is persisted
/// back in full by the persistence layer (no incremental diffing).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioCatalog {
    /// Saved scenarios, most recently saved first
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
    /// Id of the scenario currently loaded in the editor, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_scenario_id: Option<String>,
}

impl ScenarioCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the scenario with the given id, if present.
    pub fn get(&self, id: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|scenario| scenario.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{MessageKind, Sender};

    #[test]
    fn test_new_scenario_has_fresh_id_and_timestamp() {
        let a = Scenario::new("Demo", Vec::new());
        let b = Scenario::new("Demo", Vec::new());
        assert_ne!(a.id, b.id);
        assert!(!a.last_modified.is_empty());
    }

    #[test]
    fn test_catalog_round_trip() {
        let message = Message::new_default(MessageKind::Text, Sender::User, Some("John"));
        let mut catalog = ScenarioCatalog::new();
        catalog.scenarios.push(Scenario::new("Demo", vec![message]));
        catalog.current_scenario_id = Some(catalog.scenarios[0].id.clone());

        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.contains("currentScenarioId"));
        assert!(json.contains("lastModified"));

        let back: ScenarioCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
    }

    #[test]
    fn test_catalog_tolerates_missing_fields() {
        let catalog: ScenarioCatalog = serde_json::from_str("{}").unwrap();
        assert!(catalog.scenarios.is_empty());
        assert!(catalog.current_scenario_id.is_none());
    }
}
