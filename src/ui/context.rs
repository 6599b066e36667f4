use crate::{event::events::Event, http::RecipeSource, storage::KeyValueStore};
use flume::Sender;
use std::sync::Arc;

pub struct AppContext {
    pub api: Arc<dyn RecipeSource>,
    pub store: Arc<dyn KeyValueStore>,
    pub event_tx: Sender<Event>,
}
