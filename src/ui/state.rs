use std::sync::Arc;

use crate::{
    favourites::Favourites,
    model::{AccentPreference, FavouriteEntry, Recipe},
    storage::{self, KeyValueStore},
};

pub struct AppState {
    pub data: AppData,
    pub ui: UiState,
}

pub struct AppData {
    pub recipes: Vec<Recipe>,
    pub favourites: Favourites,
    /// Recipe shown in the modal. The modal is open iff this is set.
    pub current: Option<Recipe>,
    pub accent: AccentPreference,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Focus,
    pub input: String,
    pub is_searching: bool,
    pub search_seq: u64,
    pub pending_open: Option<String>,
    pub drawer_open: bool,
    pub results_index: usize,
    pub drawer_index: usize,
    pub modal_scroll: u16,
    pub notification: Option<String>,
    pub confirm: Option<Confirm>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    Search,
    #[default]
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirm {
    ClearFavourites,
}

impl Confirm {
    pub fn prompt(&self) -> &'static str {
        match self {
            Confirm::ClearFavourites => "Clear all favourites?",
        }
    }
}

impl AppState {
    /// Fresh state as at startup: preferences and favourites from storage,
    /// everything else empty.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let accent = storage::load_accent(store.as_ref());
        let favourites = Favourites::load(store);

        Self {
            data: AppData {
                recipes: Vec::new(),
                favourites,
                current: None,
                accent,
            },
            ui: UiState::default(),
        }
    }

    pub fn modal_open(&self) -> bool {
        self.data.current.is_some()
    }

    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.data.recipes.get(self.ui.results_index)
    }

    pub fn selected_favourite(&self) -> Option<&FavouriteEntry> {
        self.data.favourites.entries().get(self.ui.drawer_index)
    }

    /// Keeps the drawer cursor on an entry after the list shrinks.
    pub fn clamp_drawer_index(&mut self) {
        let len = self.data.favourites.entries().len();
        self.ui.drawer_index = self.ui.drawer_index.min(len.saturating_sub(1));
    }

    /// Fresh lookup result first, then the current results, then the
    /// favourites projection.
    pub fn resolve_recipe(&self, id: &str, fresh: Option<Recipe>) -> Option<Recipe> {
        fresh
            .or_else(|| self.data.recipes.iter().find(|r| r.id == id).cloned())
            .or_else(|| self.data.favourites.get(id).map(Recipe::from))
    }
}
