pub mod app;
pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod prompt;
pub mod provider;
pub mod quota;
pub mod share;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use client::{EpisodeClient, GenerationSession};
pub use config::ServerConfig;
pub use state::AppState;
pub use storage::FileStore;
