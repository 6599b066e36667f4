use tracing::{debug, info};

use crate::{
    event::events::Event,
    model::AccentPreference,
    storage,
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        state::{AppState, Confirm, Focus},
        tui::{TerminalEvent, Tui},
    },
};

pub const DETAILS_UNAVAILABLE: &str = "Recipe details are not available";
pub const NO_FAVOURITES: &str = "No favourites yet — press f on a recipe to save it.";

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui)? {
                should_render = true;
            }
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
            should_render = true;
        }

        Ok(should_render)
    }

    pub fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => Self::load_sample(app),
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => {
                if let Some(msg) = InputHandler::handle_key(key, &app.state) {
                    app.update(msg);
                }
            }
            TerminalEvent::Paste(text) => {
                if app.state.ui.focus == Focus::Search {
                    app.update(AppMessage::InputPaste(text));
                }
            }
            TerminalEvent::Tick => return Ok(app.has_focus),
            TerminalEvent::Resize(..) => {}
        }

        Ok(true)
    }

    /// Applies a result from a background task. Search responses older than
    /// the latest issued search, and lookups the user no longer waits for,
    /// are dropped.
    pub fn handle_action(app: &mut App, evt: Event) {
        match evt {
            Event::SearchCompleted { seq, recipes } => {
                if seq != app.state.ui.search_seq {
                    debug!(seq, latest = app.state.ui.search_seq, "stale_search_dropped");
                    return;
                }
                info!(count = recipes.len(), "search_completed");
                app.state.data.recipes = recipes;
                app.state.ui.results_index = 0;
                app.state.ui.is_searching = false;
            }
            Event::RecipeResolved { id, recipe } => {
                if app.state.ui.pending_open.as_deref() != Some(id.as_str()) {
                    debug!(id = id.as_str(), "stale_lookup_dropped");
                    return;
                }
                app.state.ui.pending_open = None;

                match app.state.resolve_recipe(&id, recipe) {
                    Some(recipe) => {
                        app.state.data.current = Some(recipe);
                        app.state.ui.modal_scroll = 0;
                    }
                    None => {
                        info!(id = id.as_str(), "recipe_unavailable");
                        app.state.ui.notification = Some(DETAILS_UNAVAILABLE.to_string());
                    }
                }
            }
        }
    }

    pub fn handle_message(app: &mut App, msg: AppMessage) {
        let state = &mut app.state;
        match msg {
            AppMessage::Quit => app.should_quit = true,
            AppMessage::Home => Self::reload(app),
            AppMessage::RandomAccent => {
                let accent = AccentPreference::with_hue(rand::random_range(0..360));
                state.data.accent = accent;
                storage::save_accent(app.ctx.store.as_ref(), accent);
            }
            AppMessage::FocusSearch => state.ui.focus = Focus::Search,
            AppMessage::InputChar(c) => state.ui.input.push(c),
            AppMessage::InputPaste(text) => {
                let line = text.replace(['\r', '\n'], " ");
                state.ui.input.push_str(&line);
            }
            AppMessage::InputBackspace => {
                state.ui.input.pop();
            }
            AppMessage::SubmitSearch => {
                if state.ui.is_searching {
                    return;
                }
                state.ui.focus = Focus::Results;
                state.ui.is_searching = true;
                let query = state.ui.input.trim().to_string();
                Self::request_search(app, query);
            }
            AppMessage::MoveUp => Self::move_selection(state, -1),
            AppMessage::MoveDown => Self::move_selection(state, 1),
            AppMessage::EscapeAll => {
                state.data.current = None;
                state.ui.pending_open = None;
                state.ui.drawer_open = false;
                state.ui.focus = Focus::Results;
            }
            AppMessage::ViewSelected => {
                if let Some(id) = state.selected_recipe().map(|r| r.id.clone()) {
                    Self::request_open(app, id);
                }
            }
            AppMessage::ToggleSelectedFavourite => {
                if let Some(recipe) = state.selected_recipe().cloned() {
                    state.data.favourites.toggle(&recipe);
                    state.clamp_drawer_index();
                }
            }
            AppMessage::ToggleDrawer => {
                if state.ui.drawer_open {
                    state.ui.drawer_open = false;
                } else if state.data.favourites.is_empty() {
                    state.ui.notification = Some(NO_FAVOURITES.to_string());
                } else {
                    state.ui.drawer_open = true;
                    state.ui.drawer_index = 0;
                }
            }
            AppMessage::CloseDrawer => state.ui.drawer_open = false,
            AppMessage::OpenSelectedFavourite => {
                if let Some(id) = state.selected_favourite().map(|f| f.id.clone()) {
                    Self::request_open(app, id);
                }
            }
            AppMessage::RemoveSelectedFavourite => {
                if let Some(id) = state.selected_favourite().map(|f| f.id.clone()) {
                    state.data.favourites.remove(&id);
                    state.clamp_drawer_index();
                }
            }
            AppMessage::RequestClearFavourites => {
                state.ui.confirm = Some(Confirm::ClearFavourites);
            }
            AppMessage::ToggleModalFavourite => {
                if let Some(recipe) = state.data.current.clone() {
                    state.data.favourites.toggle(&recipe);
                    state.clamp_drawer_index();
                }
            }
            AppMessage::CloseModal => {
                state.data.current = None;
                state.ui.modal_scroll = 0;
            }
            AppMessage::Confirm(accepted) => {
                let pending = state.ui.confirm.take();
                if accepted && pending == Some(Confirm::ClearFavourites) {
                    state.data.favourites.clear_all();
                    state.ui.drawer_index = 0;
                    state.ui.drawer_open = false;
                }
            }
            AppMessage::DismissNotification => state.ui.notification = None,
        }
    }

    fn move_selection(state: &mut AppState, delta: isize) {
        if state.modal_open() {
            state.ui.modal_scroll = state.ui.modal_scroll.saturating_add_signed(delta as i16);
            return;
        }

        let (index, len) = if state.ui.drawer_open {
            (&mut state.ui.drawer_index, state.data.favourites.entries().len())
        } else {
            (&mut state.ui.results_index, state.data.recipes.len())
        };

        if len == 0 {
            *index = 0;
            return;
        }
        *index = index.saturating_add_signed(delta).min(len - 1);
    }

    /// Blank queries load the random sample, as on startup.
    fn request_search(app: &mut App, query: String) {
        app.state.ui.search_seq += 1;
        let seq = app.state.ui.search_seq;

        let api = app.ctx.api.clone();
        let tx = app.ctx.event_tx.clone();
        tokio::spawn(async move {
            let recipes = if query.is_empty() {
                api.random_sample().await
            } else {
                api.search_by_text(&query).await
            };
            let _ = tx.send(Event::SearchCompleted { seq, recipes });
        });
    }

    /// Background sample load for startup and Home. It does not lock the
    /// search box; a user search issued meanwhile makes this response stale.
    fn load_sample(app: &mut App) {
        Self::request_search(app, String::new());
    }

    /// Always fetches fresh detail, even for recipes already in memory.
    fn request_open(app: &mut App, id: String) {
        app.state.ui.pending_open = Some(id.clone());

        let api = app.ctx.api.clone();
        let tx = app.ctx.event_tx.clone();
        tokio::spawn(async move {
            let recipe = api.lookup_by_id(&id).await;
            let _ = tx.send(Event::RecipeResolved { id, recipe });
        });
    }

    /// Rebuilds state from storage as at startup. Only the search counter
    /// carries over so in-flight responses stay stale.
    fn reload(app: &mut App) {
        let seq = app.state.ui.search_seq;
        app.state = AppState::load(app.ctx.store.clone());
        app.state.ui.search_seq = seq;
        Self::load_sample(app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        http::RecipeSource,
        model::Recipe,
        storage::{KeyValueStore, MemoryStore},
        ui::state::Focus,
    };
    use async_trait::async_trait;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::{
        collections::HashMap,
        sync::{
            Arc,
            atomic::{AtomicUsize, Ordering},
        },
    };

    #[derive(Default)]
    struct FakeSource {
        search: Vec<Recipe>,
        sample: Vec<Recipe>,
        lookups: HashMap<String, Recipe>,
        search_calls: AtomicUsize,
        sample_calls: AtomicUsize,
        lookup_calls: AtomicUsize,
    }

    #[async_trait]
    impl RecipeSource for FakeSource {
        async fn search_by_text(&self, query: &str) -> Vec<Recipe> {
            self.search_calls.fetch_add(1, Ordering::SeqCst);
            if query.trim().is_empty() {
                return Vec::new();
            }
            self.search.clone()
        }

        async fn lookup_by_id(&self, id: &str) -> Option<Recipe> {
            self.lookup_calls.fetch_add(1, Ordering::SeqCst);
            self.lookups.get(id).cloned()
        }

        async fn random_sample(&self) -> Vec<Recipe> {
            self.sample_calls.fetch_add(1, Ordering::SeqCst);
            self.sample.clone()
        }
    }

    fn recipe(id: &str, name: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            name: name.to_string(),
            category: "Chicken".to_string(),
            area: "Japanese".to_string(),
            thumbnail: String::new(),
            instructions: "Preheat oven.".to_string(),
            video: String::new(),
            ingredients: vec!["3/4 cup soy sauce".to_string()],
        }
    }

    fn app_with(source: FakeSource) -> (App, Arc<FakeSource>, MemoryStore) {
        let source = Arc::new(source);
        let store = MemoryStore::new();
        let app = App::with_services(source.clone(), Arc::new(store.clone()));
        (app, source, store)
    }

    async fn pump(app: &mut App) {
        let evt = app.event_rx.recv_async().await.unwrap();
        EventHandler::handle_action(app, evt);
    }

    fn press(app: &mut App, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        if let Some(msg) = InputHandler::handle_key(key, &app.state) {
            app.update(msg);
        }
    }

    fn type_query(app: &mut App, query: &str) {
        press(app, KeyCode::Char('/'));
        for c in query.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[tokio::test]
    async fn search_shows_busy_until_results_arrive() {
        let (mut app, source, _) = app_with(FakeSource {
            search: vec![recipe("52772", "Teriyaki Chicken")],
            ..Default::default()
        });

        type_query(&mut app, "teriyaki");
        assert!(app.state.ui.is_searching);
        assert_eq!(app.state.ui.focus, Focus::Results);

        pump(&mut app).await;
        assert!(!app.state.ui.is_searching);
        assert_eq!(app.state.data.recipes.len(), 1);
        assert_eq!(source.search_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn blank_search_loads_random_sample() {
        let (mut app, source, _) = app_with(FakeSource {
            sample: vec![recipe("1", "A"), recipe("2", "B")],
            ..Default::default()
        });

        type_query(&mut app, "   ");
        pump(&mut app).await;

        assert_eq!(source.search_calls.load(Ordering::SeqCst), 0);
        assert_eq!(source.sample_calls.load(Ordering::SeqCst), 1);
        assert_eq!(app.state.data.recipes.len(), 2);
    }

    #[tokio::test]
    async fn submit_is_ignored_while_busy() {
        let (mut app, _, _) = app_with(FakeSource::default());

        app.update(AppMessage::SubmitSearch);
        let seq = app.state.ui.search_seq;
        app.update(AppMessage::SubmitSearch);
        assert_eq!(app.state.ui.search_seq, seq);
    }

    #[test]
    fn stale_search_response_is_dropped() {
        let (mut app, _, _) = app_with(FakeSource::default());
        app.state.ui.search_seq = 2;
        app.state.ui.is_searching = true;

        EventHandler::handle_action(
            &mut app,
            Event::SearchCompleted {
                seq: 1,
                recipes: vec![recipe("old", "Old")],
            },
        );
        assert!(app.state.data.recipes.is_empty());
        assert!(app.state.ui.is_searching);

        EventHandler::handle_action(
            &mut app,
            Event::SearchCompleted {
                seq: 2,
                recipes: vec![recipe("new", "New")],
            },
        );
        assert_eq!(app.state.data.recipes[0].id, "new");
        assert!(!app.state.ui.is_searching);
    }

    #[tokio::test]
    async fn favourite_then_remove_updates_counter_and_drawer() {
        let (mut app, _, store) = app_with(FakeSource::default());
        app.state.data.recipes = vec![recipe("52772", "Teriyaki Chicken")];

        press(&mut app, KeyCode::Char('f'));
        assert!(app.state.ui.pending_open.is_none());
        assert_eq!(app.state.data.favourites.saved_count(), 1);
        assert_eq!(storage::load_favourites(&store)[0].name, "Teriyaki Chicken");

        press(&mut app, KeyCode::Char('F'));
        assert!(app.state.ui.drawer_open);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.state.data.favourites.saved_count(), 0);
        assert!(storage::load_favourites(&store).is_empty());
    }

    #[tokio::test]
    async fn view_fetches_fresh_detail() {
        let mut fresh = recipe("52772", "Teriyaki Chicken");
        fresh.instructions = "Full instructions".to_string();
        let (mut app, source, _) = app_with(FakeSource {
            lookups: HashMap::from([("52772".to_string(), fresh)]),
            ..Default::default()
        });
        app.state.data.recipes = vec![recipe("52772", "Teriyaki Chicken")];

        press(&mut app, KeyCode::Enter);
        assert!(!app.state.modal_open());
        pump(&mut app).await;

        assert_eq!(source.lookup_calls.load(Ordering::SeqCst), 1);
        let current = app.state.data.current.as_ref().unwrap();
        assert_eq!(current.instructions, "Full instructions");
    }

    #[tokio::test]
    async fn failed_lookup_falls_back_to_results_then_favourites() {
        let (mut app, _, _) = app_with(FakeSource::default());
        app.state.data.recipes = vec![recipe("1", "In results")];

        app.update(AppMessage::ViewSelected);
        pump(&mut app).await;
        assert_eq!(app.state.data.current.as_ref().unwrap().name, "In results");

        app.update(AppMessage::CloseModal);
        app.state.data.favourites.toggle(&recipe("2", "Saved"));
        app.state.data.recipes.clear();
        app.update(AppMessage::ToggleDrawer);
        app.update(AppMessage::OpenSelectedFavourite);
        pump(&mut app).await;

        let current = app.state.data.current.as_ref().unwrap();
        assert_eq!(current.name, "Saved");
        assert!(current.instructions.is_empty());
    }

    #[tokio::test]
    async fn unresolvable_recipe_notifies_and_keeps_modal_closed() {
        let (mut app, _, _) = app_with(FakeSource::default());

        EventHandler::request_open(&mut app, "999".to_string());
        pump(&mut app).await;

        assert!(!app.state.modal_open());
        assert_eq!(app.state.ui.notification.as_deref(), Some(DETAILS_UNAVAILABLE));

        press(&mut app, KeyCode::Char('x'));
        assert!(app.state.ui.notification.is_none());
    }

    #[tokio::test]
    async fn escape_closes_modal_and_drawer_together() {
        let (mut app, _, _) = app_with(FakeSource::default());
        app.state.data.favourites.toggle(&recipe("1", "A"));
        app.update(AppMessage::ToggleDrawer);
        app.state.data.current = Some(recipe("1", "A"));

        press(&mut app, KeyCode::Esc);
        assert!(!app.state.modal_open());
        assert!(!app.state.ui.drawer_open);
    }

    #[tokio::test]
    async fn escape_while_loading_cancels_the_open() {
        let (mut app, _, _) = app_with(FakeSource {
            lookups: HashMap::from([("1".to_string(), recipe("1", "A"))]),
            ..Default::default()
        });

        EventHandler::request_open(&mut app, "1".to_string());
        press(&mut app, KeyCode::Esc);
        pump(&mut app).await;
        assert!(!app.state.modal_open());
    }

    #[tokio::test]
    async fn modal_toggle_tracks_open_recipe() {
        let (mut app, _, _) = app_with(FakeSource::default());
        app.state.data.current = Some(recipe("7", "Stew"));

        press(&mut app, KeyCode::Char('f'));
        assert!(app.state.data.favourites.is_favourite("7"));
        press(&mut app, KeyCode::Char('f'));
        assert!(!app.state.data.favourites.is_favourite("7"));
    }

    #[test]
    fn empty_drawer_shows_notification() {
        let (mut app, _, _) = app_with(FakeSource::default());
        app.update(AppMessage::ToggleDrawer);
        assert!(!app.state.ui.drawer_open);
        assert_eq!(app.state.ui.notification.as_deref(), Some(NO_FAVOURITES));
    }

    #[test]
    fn clearing_favourites_needs_confirmation() {
        let (mut app, _, store) = app_with(FakeSource::default());
        app.state.data.favourites.toggle(&recipe("1", "A"));
        app.state.data.favourites.toggle(&recipe("2", "B"));
        app.update(AppMessage::ToggleDrawer);

        press(&mut app, KeyCode::Char('C'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.state.data.favourites.saved_count(), 2);
        assert!(app.state.ui.drawer_open);

        press(&mut app, KeyCode::Char('C'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.state.data.favourites.is_empty());
        assert!(storage::load_favourites(&store).is_empty());
        assert!(!app.state.ui.drawer_open);
    }

    #[test]
    fn random_accent_is_persisted() {
        let (mut app, _, store) = app_with(FakeSource::default());
        app.update(AppMessage::RandomAccent);

        let accent = app.state.data.accent;
        assert!(accent.h < 360);
        assert_eq!(storage::load_accent(&store), accent);
    }

    #[tokio::test]
    async fn home_rebuilds_state_from_storage() {
        let (mut app, source, _) = app_with(FakeSource {
            sample: vec![recipe("1", "A")],
            ..Default::default()
        });
        app.state.data.favourites.toggle(&recipe("9", "Kept"));
        app.state.ui.input = "leftover".to_string();
        app.state.data.recipes = vec![recipe("x", "X")];
        let seq = app.state.ui.search_seq;

        press(&mut app, KeyCode::Char('H'));
        assert!(app.state.ui.input.is_empty());
        assert!(app.state.data.recipes.is_empty());
        assert!(app.state.data.favourites.is_favourite("9"));
        assert_eq!(app.state.ui.search_seq, seq + 1);

        pump(&mut app).await;
        assert_eq!(app.state.data.recipes[0].id, "1");
        assert_eq!(source.sample_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn selection_stays_in_bounds() {
        let (mut app, _, _) = app_with(FakeSource::default());
        app.state.data.recipes = vec![recipe("1", "A"), recipe("2", "B")];

        for _ in 0..5 {
            app.update(AppMessage::MoveDown);
        }
        assert_eq!(app.state.ui.results_index, 1);
        for _ in 0..5 {
            app.update(AppMessage::MoveUp);
        }
        assert_eq!(app.state.ui.results_index, 0);
    }

    #[tokio::test]
    async fn user_search_is_not_blocked_by_startup_sample() {
        let (mut app, source, _) = app_with(FakeSource {
            search: vec![recipe("52772", "Teriyaki Chicken")],
            sample: vec![recipe("1", "A")],
            ..Default::default()
        });

        EventHandler::load_sample(&mut app);
        assert!(!app.state.ui.is_searching);

        type_query(&mut app, "teriyaki");
        assert!(app.state.ui.is_searching);
        assert_eq!(source.search_calls.load(Ordering::SeqCst), 1);

        pump(&mut app).await;
        pump(&mut app).await;
        assert_eq!(app.state.data.recipes.len(), 1);
        assert_eq!(app.state.data.recipes[0].id, "52772");
        assert!(!app.state.ui.is_searching);
    }

    #[tokio::test]
    async fn drawer_cursor_follows_unfavourite_from_modal() {
        let (mut app, _, _) = app_with(FakeSource {
            lookups: HashMap::from([("a".to_string(), recipe("a", "A"))]),
            ..Default::default()
        });
        app.state.data.favourites.toggle(&recipe("a", "A"));
        app.state.data.favourites.toggle(&recipe("b", "B"));

        press(&mut app, KeyCode::Char('F'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.state.ui.drawer_index, 1);
        press(&mut app, KeyCode::Enter);
        pump(&mut app).await;
        assert_eq!(app.state.data.current.as_ref().unwrap().id, "a");

        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.state.data.favourites.entries().len(), 1);
        assert_eq!(app.state.ui.drawer_index, 0);
        assert_eq!(app.state.selected_favourite().unwrap().id, "b");

        press(&mut app, KeyCode::Char('d'));
        assert!(app.state.data.favourites.is_empty());
    }

    #[test]
    fn favourites_load_from_existing_store() {
        let store = MemoryStore::new();
        store
            .set(storage::FAVOURITES_KEY, r#"[{"idMeal":"52772","strMeal":"Teriyaki Chicken"}]"#)
            .unwrap();
        let app = App::with_services(Arc::new(FakeSource::default()), Arc::new(store));
        assert!(app.state.data.favourites.is_favourite("52772"));
    }
}
