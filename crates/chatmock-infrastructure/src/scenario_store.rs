//! Write-through scenario catalog persistence.
//!
//! The catalog lives under a single durable key and is loaded once at
//! startup. Every mutation (save, delete, pointer change) synchronously
//! re-serializes the entire catalog; a corrupted or missing document
//! degrades to an empty catalog instead of blocking the app.

use chatmock_core::error::{ChatmockError, Result};
use chatmock_core::message::Message;
use chatmock_core::scenario::{Scenario, ScenarioCatalog};

use crate::kv_store::KeyValueStore;

/// The durable key holding the serialized catalog.
const CATALOG_KEY: &str = "scenarios";

/// Owns the scenario catalog and keeps it synchronized with durable storage.
pub struct ScenarioCatalogStore<S: KeyValueStore> {
    store: S,
    catalog: ScenarioCatalog,
}

impl<S: KeyValueStore> ScenarioCatalogStore<S> {
    /// Creates the store, loading the catalog from durable storage.
    ///
    /// A missing key yields an empty catalog. An unreadable or unparseable
    /// document also yields an empty catalog, with a warning; startup never
    /// fails on bad catalog data.
    pub fn new(store: S) -> Self {
        let catalog = match store.get(CATALOG_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<ScenarioCatalog>(&raw) {
                Ok(catalog) => catalog,
                Err(err) => {
                    tracing::warn!(%err, "stored scenario catalog is corrupted, starting empty");
                    ScenarioCatalog::new()
                }
            },
            Ok(None) => ScenarioCatalog::new(),
            Err(err) => {
                tracing::warn!(%err, "failed to read scenario catalog, starting empty");
                ScenarioCatalog::new()
            }
        };
        Self { store, catalog }
    }

    /// Read access to the loaded catalog.
    pub fn catalog(&self) -> &ScenarioCatalog {
        &self.catalog
    }

    /// Id of the scenario currently loaded in the editor, if any.
    pub fn current_scenario_id(&self) -> Option<&str> {
        self.catalog.current_scenario_id.as_deref()
    }

    /// Saves a new scenario snapshotting the given messages.
    ///
    /// The scenario is prepended (most recently saved first), becomes the
    /// current scenario, and the catalog is persisted.
    ///
    /// # Arguments
    ///
    /// * `name` - User-supplied scenario name; must be non-empty after trim
    /// * `messages` - Deep copy of the live message list at save time
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the trimmed name is empty, or an error if the
    /// catalog cannot be persisted.
    pub fn save_scenario(&mut self, name: &str, messages: Vec<Message>) -> Result<Scenario> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ChatmockError::validation("Scenario name cannot be empty"));
        }

        let scenario = Scenario::new(name, messages);
        self.catalog.scenarios.insert(0, scenario.clone());
        self.catalog.current_scenario_id = Some(scenario.id.clone());
        self.persist()?;

        tracing::info!(id = %scenario.id, name = %scenario.name, "scenario saved");
        Ok(scenario)
    }

    /// Deletes the scenario with the given id. No-op if absent.
    ///
    /// If the deleted scenario was the current one, the current pointer is
    /// cleared. The catalog is persisted after a deletion.
    pub fn delete_scenario(&mut self, id: &str) -> Result<()> {
        if self.catalog.get(id).is_none() {
            return Ok(());
        }

        self.catalog.scenarios.retain(|scenario| scenario.id != id);
        if self.catalog.current_scenario_id.as_deref() == Some(id) {
            self.catalog.current_scenario_id = None;
        }
        self.persist()
    }

    /// Looks up a scenario and returns a deep copy of its messages.
    ///
    /// Does not mutate the catalog; the caller replaces the live message
    /// list with the returned snapshot and calls [`mark_current`] if the
    /// load succeeds.
    ///
    /// [`mark_current`]: Self::mark_current
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no scenario with `id` exists.
    pub fn select_scenario(&self, id: &str) -> Result<Vec<Message>> {
        self.catalog
            .get(id)
            .map(|scenario| scenario.messages.clone())
            .ok_or_else(|| ChatmockError::not_found("scenario", id))
    }

    /// Marks the scenario with the given id as current and persists.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no scenario with `id` exists.
    pub fn mark_current(&mut self, id: &str) -> Result<()> {
        if self.catalog.get(id).is_none() {
            return Err(ChatmockError::not_found("scenario", id));
        }
        self.catalog.current_scenario_id = Some(id.to_string());
        self.persist()
    }

    /// Clears the current-scenario pointer and persists.
    pub fn clear_current(&mut self) -> Result<()> {
        if self.catalog.current_scenario_id.is_none() {
            return Ok(());
        }
        self.catalog.current_scenario_id = None;
        self.persist()
    }

    /// Re-serializes the full catalog under the durable key.
    fn persist(&mut self) -> Result<()> {
        let raw = serde_json::to_string(&self.catalog)?;
        self.store
            .set(CATALOG_KEY, &raw)
            .map_err(ChatmockError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv_store::{FileKeyValueStore, InMemoryKeyValueStore};
    use chatmock_core::message::{MessageKind, MessagePatch, Sender};
    use chatmock_core::MessageList;
    use tempfile::TempDir;

    fn demo_messages() -> Vec<Message> {
        let mut hi = Message::new_default(MessageKind::Text, Sender::User, Some("John"));
        hi.content = "Hi".to_string();
        let list_message = Message::new_default(MessageKind::List, Sender::Bot, Some("Morris"));
        vec![hi, list_message]
    }

    #[test]
    fn test_save_with_empty_name_is_validation_error() {
        let mut store = ScenarioCatalogStore::new(InMemoryKeyValueStore::new());
        let err = store.save_scenario("   ", demo_messages()).unwrap_err();
        assert!(err.is_validation());
        assert!(store.catalog().scenarios.is_empty());
    }

    #[test]
    fn test_save_select_round_trip() {
        let messages = demo_messages();
        let mut store = ScenarioCatalogStore::new(InMemoryKeyValueStore::new());

        let scenario = store.save_scenario("Demo", messages.clone()).unwrap();

        assert_eq!(store.current_scenario_id(), Some(scenario.id.as_str()));
        assert_eq!(store.select_scenario(&scenario.id).unwrap(), messages);
    }

    #[test]
    fn test_saved_scenario_is_isolated_from_live_edits() {
        let mut live = MessageList::from_messages(demo_messages());
        let mut store = ScenarioCatalogStore::new(InMemoryKeyValueStore::new());

        let scenario = store.save_scenario("Demo", live.snapshot()).unwrap();
        let saved = store.select_scenario(&scenario.id).unwrap();

        // Mutate the live list after saving.
        let first_id = live.messages()[0].id.clone();
        let second_id = live.messages()[1].id.clone();
        live.update(&first_id, &MessagePatch::with_content("edited"))
            .unwrap();
        live.remove(&second_id);

        assert_eq!(store.select_scenario(&scenario.id).unwrap(), saved);
    }

    #[test]
    fn test_scenarios_are_most_recent_first() {
        let mut store = ScenarioCatalogStore::new(InMemoryKeyValueStore::new());
        store.save_scenario("First", Vec::new()).unwrap();
        store.save_scenario("Second", Vec::new()).unwrap();

        let names: Vec<&str> = store
            .catalog()
            .scenarios
            .iter()
            .map(|scenario| scenario.name.as_str())
            .collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[test]
    fn test_delete_clears_current_pointer() {
        let mut store = ScenarioCatalogStore::new(InMemoryKeyValueStore::new());
        let scenario = store.save_scenario("Demo", Vec::new()).unwrap();

        store.delete_scenario(&scenario.id).unwrap();

        assert!(store.catalog().scenarios.is_empty());
        assert_eq!(store.current_scenario_id(), None);
    }

    #[test]
    fn test_delete_other_scenario_keeps_pointer() {
        let mut store = ScenarioCatalogStore::new(InMemoryKeyValueStore::new());
        let old = store.save_scenario("Old", Vec::new()).unwrap();
        let current = store.save_scenario("Current", Vec::new()).unwrap();

        store.delete_scenario(&old.id).unwrap();

        assert_eq!(store.current_scenario_id(), Some(current.id.as_str()));
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut store = ScenarioCatalogStore::new(InMemoryKeyValueStore::new());
        store.save_scenario("Demo", Vec::new()).unwrap();
        store.delete_scenario("ghost").unwrap();
        assert_eq!(store.catalog().scenarios.len(), 1);
    }

    #[test]
    fn test_select_missing_id_is_not_found() {
        let store = ScenarioCatalogStore::new(InMemoryKeyValueStore::new());
        let err = store.select_scenario("ghost").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_corrupted_catalog_degrades_to_empty() {
        let seeded = InMemoryKeyValueStore::with_entry(CATALOG_KEY, "{not json");
        let store = ScenarioCatalogStore::new(seeded);
        assert!(store.catalog().scenarios.is_empty());
        assert_eq!(store.current_scenario_id(), None);
    }

    #[test]
    fn test_catalog_survives_restart_on_disk() {
        let temp_dir = TempDir::new().unwrap();

        let saved_id = {
            let file_store = FileKeyValueStore::new(temp_dir.path()).unwrap();
            let mut store = ScenarioCatalogStore::new(file_store);
            store.save_scenario("Persisted", demo_messages()).unwrap().id
        };

        let file_store = FileKeyValueStore::new(temp_dir.path()).unwrap();
        let store = ScenarioCatalogStore::new(file_store);

        assert_eq!(store.catalog().scenarios.len(), 1);
        assert_eq!(store.current_scenario_id(), Some(saved_id.as_str()));
        assert_eq!(store.select_scenario(&saved_id).unwrap().len(), 2);
    }

    #[test]
    fn test_mark_current_and_clear() {
        let mut store = ScenarioCatalogStore::new(InMemoryKeyValueStore::new());
        let a = store.save_scenario("A", Vec::new()).unwrap();
        let b = store.save_scenario("B", Vec::new()).unwrap();
        assert_eq!(store.current_scenario_id(), Some(b.id.as_str()));

        store.mark_current(&a.id).unwrap();
        assert_eq!(store.current_scenario_id(), Some(a.id.as_str()));

        assert!(store.mark_current("ghost").unwrap_err().is_not_found());

        store.clear_current().unwrap();
        assert_eq!(store.current_scenario_id(), None);
    }
}
