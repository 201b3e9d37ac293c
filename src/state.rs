//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is the explicit store object handed to the presentation layer.
//! It owns the list collection, the user profile and the settings, and it is
//! the only place that pairs a mutation with its save: every list operation
//! is applied in memory first and then followed by a full snapshot save
//! through the persistence worker (write-through, no debounce).
//!
//! Rejected creations (blank input, or an item for a list that does not
//! exist) change nothing and issue no save. Deletes and toggles always save,
//! even when the id was not found.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::lists::ListStore;
use crate::model::{ItemId, ListId, ShoppingList};
use crate::services::persistence::{self, PersistError, PersistHandle};
use crate::services::profile::UserProfile;
use crate::services::settings::{Language, Settings};
use crate::storage::KeyValueStore;

pub struct AppState {
    lists: ListStore,
    profile: UserProfile,
    settings: Settings,
    persist: PersistHandle,
    worker: JoinHandle<()>,
}

impl AppState {
    /// Start the persistence worker and load the stored name and lists.
    pub async fn load(store: Arc<dyn KeyValueStore>, config: &AppConfig) -> Self {
        let name = persistence::load_profile(store.as_ref()).await;
        let lists = persistence::load_lists(store.as_ref()).await;
        info!(lists = lists.len(), onboarded = name.is_some(), "application state loaded");

        let (persist, worker) = persistence::spawn_persistence_worker(store, config.persist);
        Self {
            lists: ListStore::from_lists(lists),
            profile: UserProfile::new(name),
            settings: Settings::new(config.language),
            persist,
            worker,
        }
    }

    // =========================================================================
    // READS
    // =========================================================================

    #[must_use]
    pub fn lists(&self) -> &[ShoppingList] {
        self.lists.lists()
    }

    #[must_use]
    pub fn find_list(&self, list_id: ListId) -> Option<&ShoppingList> {
        self.lists.find(list_id)
    }

    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // =========================================================================
    // LIST MUTATIONS
    // =========================================================================

    pub async fn create_list(&mut self, name: &str) -> Option<ListId> {
        let id = self.lists.create_list(name)?;
        debug!(list_id = id, "list created");
        self.save_lists().await;
        Some(id)
    }

    pub async fn create_item(&mut self, list_id: ListId, text: &str) -> Option<ItemId> {
        let id = self.lists.create_item(list_id, text)?;
        debug!(list_id, item_id = id, "item created");
        self.save_lists().await;
        Some(id)
    }

    pub async fn delete_list(&mut self, list_id: ListId) {
        self.lists.delete_list(list_id);
        self.save_lists().await;
    }

    pub async fn delete_item(&mut self, list_id: ListId, item_id: ItemId) {
        self.lists.delete_item(list_id, item_id);
        self.save_lists().await;
    }

    pub async fn toggle_item_completed(&mut self, list_id: ListId, item_id: ItemId) {
        self.lists.toggle_item_completed(list_id, item_id);
        self.save_lists().await;
    }

    pub async fn toggle_list_expanded(&mut self, list_id: ListId) {
        self.lists.toggle_list_expanded(list_id);
        self.save_lists().await;
    }

    pub async fn clear_items(&mut self, list_id: ListId) {
        self.lists.clear_items(list_id);
        self.save_lists().await;
    }

    pub async fn remove_completed_items(&mut self, list_id: ListId) {
        self.lists.remove_completed_items(list_id);
        self.save_lists().await;
    }

    // =========================================================================
    // PROFILE / SETTINGS
    // =========================================================================

    /// Update the display name in memory, then save it. Blank names are
    /// ignored. A failed save leaves the in-memory name updated.
    pub async fn set_user_name(&mut self, name: &str) -> bool {
        if !self.profile.set_name(name) {
            return false;
        }
        self.persist.save_profile(name).await;
        true
    }

    pub fn set_language(&mut self, language: Language) {
        self.settings.set_language(language);
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Wait for every save issued so far to be written.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::WorkerStopped`] if the worker is gone.
    pub async fn flush(&self) -> Result<(), PersistError> {
        self.persist.flush().await
    }

    /// Drain the save queue and stop the worker.
    pub async fn shutdown(self) {
        let Self { persist, worker, .. } = self;
        drop(persist);
        if let Err(e) = worker.await {
            tracing::error!(error = %e, "persistence worker panicked");
        }
    }

    async fn save_lists(&self) {
        self.persist.save_lists(self.lists.lists()).await;
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
