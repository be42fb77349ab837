//! NASA Explorer: a relay for the NASA open APIs plus server-rendered views
//! of the picture of the day, Mars rover photos, EPIC Earth imagery and the
//! near-Earth-object feed.

pub mod clients;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod views;

use crate::clients::NasaClient;
use crate::config::AppConfig;
use crate::handlers::AppState;
use crate::services::ProxyService;
use std::sync::Arc;

/// Wire the client, service and router for a configuration
pub fn build_app(config: &AppConfig) -> anyhow::Result<axum::Router> {
    let client = NasaClient::new(config)?;
    let state = AppState {
        proxy: Arc::new(ProxyService::new(client)),
        epic_archive_url: Arc::from(config.epic_archive_url.as_str()),
    };
    Ok(routes::build_router(state))
}
