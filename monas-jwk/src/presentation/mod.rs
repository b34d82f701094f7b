use std::sync::Arc;

use axum::Router;

use crate::config::ServerConfig;

pub mod jwk;

#[derive(Clone)]
pub struct AppState {
    pub public_base_url: Option<String>,
}

pub fn create_router(config: &ServerConfig) -> Router {
    let state = Arc::new(AppState {
        public_base_url: config.public_base_url.clone(),
    });

    Router::new()
        .merge(jwk::routes())
        .fallback(jwk::fallback)
        .with_state(state)
}
