use std::sync::Arc;

use crate::scoring::fetcher::DocumentFetcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable resume fetcher. Default: HttpFetcher. Tests swap in stubs.
    pub fetcher: Arc<dyn DocumentFetcher>,
}
