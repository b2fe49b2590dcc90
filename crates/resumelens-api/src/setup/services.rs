//! Service and state construction.
//!
//! Clients (storage, model) are built once here and injected into the state;
//! their lifetime is the process, not a request, so connections are reused.

use crate::setup::routes;
use crate::state::AppState;
use axum::Router;
use resumelens_analysis::{AnalysisService, GroqClient, GroqConfig};
use resumelens_core::Config;
use resumelens_storage::create_storage;
use std::sync::Arc;
use std::time::Duration;

/// Build storage, the model client, the analysis service, and the router.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router), anyhow::Error> {
    let storage = create_storage(&config).await?;

    let api_key = config
        .model_api_key
        .clone()
        .ok_or_else(|| anyhow::anyhow!("GROQ_API_KEY must be set"))?;

    let model = Arc::new(GroqClient::new(GroqConfig {
        api_key,
        api_base: config.model_api_base.clone(),
        model: config.model_id.clone(),
        max_tokens: config.model_max_tokens,
        timeout_secs: config.model_timeout_secs,
    })?);

    let analysis = Arc::new(AnalysisService::new(
        storage.clone(),
        model,
        Duration::from_secs(config.storage_timeout_secs),
    ));

    let state = Arc::new(AppState {
        config: config.clone(),
        storage,
        analysis,
    });

    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
