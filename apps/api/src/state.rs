use std::sync::Arc;

use crate::analysis::orchestrator::Analyzer;
use crate::catalog::JobCatalog;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable job source. Default: PgJobCatalog.
    pub catalog: Arc<dyn JobCatalog>,
    /// Analysis pipeline bound to the model capability chosen at startup.
    pub analyzer: Analyzer,
    pub config: Config,
}
