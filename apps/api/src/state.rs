use crate::config::Config;
use crate::experts::ExpertRouter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owns the LLM client; built once at startup.
    pub experts: ExpertRouter,
    pub config: Config,
}
