use std::sync::Arc;

use crate::config::Config;
use crate::screening::orchestrator::Screener;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Screening pipeline with its extractor and language model already wired in.
    pub screener: Arc<Screener>,
    pub config: Config,
}
