//! Application state.
//!
//! Clients are constructed once at startup and shared across requests; no
//! per-request mutable state exists, so concurrent invocations need no locks.

use resumelens_analysis::AnalysisService;
use resumelens_core::Config;
use resumelens_storage::Storage;
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
    pub analysis: Arc<AnalysisService>,
}
