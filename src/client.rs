use crate::models::EpisodeResponse;
use crate::quota::{QuotaError, QuotaTracker};
use crate::share::{share_intent_url, Clipboard, COPY_ACK};
use crate::storage::{StorageError, UsageStore};
use tracing::{info, warn};

pub const GENERATE_PATH: &str = "/api/generate-episode";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Quota(#[from] QuotaError),

    #[error("ひとことの生成に失敗しました")]
    RequestFailed,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Caller of the generation endpoint.
#[derive(Debug, Clone)]
pub struct EpisodeClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl EpisodeClient {
    pub fn new(server: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint: format!("{}{GENERATE_PATH}", server.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Any transport error, non-success status or unexpected body collapses
    /// into [`ClientError::RequestFailed`].
    pub async fn request_episode(&self) -> Result<String, ClientError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .send()
            .await
            .map_err(|err| {
                warn!("generation request failed: {err}");
                ClientError::RequestFailed
            })?;

        if !response.status().is_success() {
            warn!("generation endpoint returned {}", response.status());
            return Err(ClientError::RequestFailed);
        }

        let body: EpisodeResponse = response.json().await.map_err(|err| {
            warn!("generation response unreadable: {err}");
            ClientError::RequestFailed
        })?;
        Ok(body.episode)
    }
}

/// One client's view: quota state, last result and last error message.
///
/// `generate` takes `&mut self`, so at most one generation can be in flight per session.
pub struct GenerationSession<S: UsageStore> {
    client: EpisodeClient,
    store: S,
    quota: QuotaTracker,
    episode: Option<String>,
    error: Option<String>,
}

impl<S: UsageStore> GenerationSession<S> {
    pub fn load(client: EpisodeClient, mut store: S, today: &str, limit: u32) -> Result<Self, StorageError> {
        let quota = QuotaTracker::load(&mut store, today, limit)?;
        Ok(Self {
            client,
            store,
            quota,
            episode: None,
            error: None,
        })
    }

    pub fn quota(&self) -> &QuotaTracker {
        &self.quota
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn episode(&self) -> Option<&str> {
        self.episode.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn can_generate(&self) -> bool {
        !self.quota.is_exhausted()
    }

    pub async fn generate(&mut self, today: &str) -> Result<&str, ClientError> {
        match self.try_generate(today).await {
            Ok(episode) => {
                self.error = None;
                info!(count = self.quota.count(), "episode generated");
                Ok(self.episode.insert(episode).as_str())
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    async fn try_generate(&mut self, today: &str) -> Result<String, ClientError> {
        self.quota.check()?;
        self.error = None;

        let episode = self.client.request_episode().await?;
        self.quota.record_success(&mut self.store, today)?;
        Ok(episode)
    }

    pub fn share_url(&self) -> Option<String> {
        self.episode.as_deref().map(share_intent_url)
    }

    /// Returns the acknowledgement to show, or `None` when there is nothing to copy.
    pub fn copy_to_clipboard(&self, clipboard: &mut dyn Clipboard) -> std::io::Result<Option<&'static str>> {
        let Some(episode) = self.episode.as_deref() else {
            return Ok(None);
        };
        clipboard.set_text(episode)?;
        Ok(Some(COPY_ACK))
    }
}
