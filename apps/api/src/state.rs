use std::sync::Arc;

use crate::catalog::DrumKit;
use crate::config::Config;
use crate::llm_client::ChatCompleter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. `LlmClient` in production, a fake in tests.
    pub llm: Arc<dyn ChatCompleter>,
    /// Read-only for the life of the process.
    pub catalog: &'static [DrumKit],
    pub config: Config,
}
