use std::sync::Arc;

use flume::Receiver;
use ratatui::Frame;
use tracing::warn;

use crate::{
    config::Config,
    event::events::Event,
    http::{ApiService, RecipeSource},
    storage::{FileStore, KeyValueStore, MemoryStore},
};

use super::{
    context::AppContext,
    layout::AppLayout,
    message::AppMessage,
    state::AppState,
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub ctx: AppContext,
    pub state: AppState,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> color_eyre::Result<Self> {
        let api = Arc::new(ApiService::new(&config.api_base)?);
        let store: Arc<dyn KeyValueStore> = match &config.data_dir {
            Some(dir) => Arc::new(FileStore::new(dir)),
            None => {
                warn!("no data directory, favourites will not be kept");
                Arc::new(MemoryStore::new())
            }
        };

        Ok(Self::with_services(api, store))
    }

    pub fn with_services(api: Arc<dyn RecipeSource>, store: Arc<dyn KeyValueStore>) -> Self {
        let (event_tx, event_rx) = flume::unbounded();
        let state = AppState::load(store.clone());

        Self {
            event_rx,
            ctx: AppContext {
                api,
                store,
                event_tx,
            },
            state,
            has_focus: true,
            should_quit: false,
        }
    }

    pub fn update(&mut self, msg: AppMessage) {
        EventHandler::handle_message(self, msg);
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui)?;
        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        Ok(())
    }

    fn ui(&self, frame: &mut Frame) {
        if self.has_focus {
            let area = frame.area();
            AppLayout::new(&self.state).render(frame, area);
        }
    }
}
