use std::sync::Arc;

use tracing::info;

use crate::{
    model::{FavouriteEntry, Recipe},
    storage::{self, KeyValueStore},
};

/// Most-recent-first list of saved recipes, written through to storage on
/// every mutation.
pub struct Favourites {
    entries: Vec<FavouriteEntry>,
    store: Arc<dyn KeyValueStore>,
    saved_count: usize,
}

impl Favourites {
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let mut entries = storage::load_favourites(store.as_ref());
        let mut seen = std::collections::HashSet::new();
        entries.retain(|e| !e.id.is_empty() && seen.insert(e.id.clone()));
        let saved_count = entries.len();

        Self {
            entries,
            store,
            saved_count,
        }
    }

    pub fn entries(&self) -> &[FavouriteEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&FavouriteEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn is_favourite(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Count shown in the header. Updated by the save step only.
    pub fn saved_count(&self) -> usize {
        self.saved_count
    }

    pub fn toggle(&mut self, recipe: &Recipe) {
        if recipe.id.is_empty() {
            return;
        }

        if self.is_favourite(&recipe.id) {
            self.entries.retain(|e| e.id != recipe.id);
            info!(id = recipe.id.as_str(), "favourite_removed");
        } else {
            self.entries.insert(0, FavouriteEntry::from(recipe));
            info!(id = recipe.id.as_str(), "favourite_added");
        }
        self.persist();
    }

    pub fn remove(&mut self, id: &str) {
        self.entries.retain(|e| e.id != id);
        self.persist();
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
        self.persist();
    }

    fn persist(&mut self) {
        storage::save_favourites(self.store.as_ref(), &self.entries);
        self.saved_count = self.entries.len();
    }
}
