use std::sync::Arc;

use crate::application::services::PodcastService;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub podcast_service: Arc<PodcastService>,
    pub settings: Arc<Settings>,
}
