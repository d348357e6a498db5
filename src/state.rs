use crate::prompt::PromptConfig;
use crate::provider::EpisodeProvider;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn EpisodeProvider>,
    pub prompt: Arc<PromptConfig>,
    pub daily_limit: u32,
}

impl AppState {
    pub fn new(provider: Arc<dyn EpisodeProvider>, prompt: PromptConfig, daily_limit: u32) -> Self {
        Self {
            provider,
            prompt: Arc::new(prompt),
            daily_limit,
        }
    }
}
