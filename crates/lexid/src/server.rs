//! HTTP server for lexid

use crate::config::Config;
use crate::dictionary::DictionaryClient;
use crate::routes;
use crate::store::WordStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub store: WordStore,
    pub dictionary: DictionaryClient,
}

impl AppState {
    pub fn new(store: WordStore, dictionary: DictionaryClient) -> Self {
        Self { store, dictionary }
    }
}

/// Assemble the application router.
///
/// Split from [`run`] so tests can drive the router without binding a
/// socket.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::word_routes())
        .merge(routes::define_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server
pub async fn run(config: Config) -> Result<()> {
    let state = Arc::new(AppState::new(
        WordStore::seeded(),
        DictionaryClient::new(&config.upstream_base)?,
    ));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Dictionary API listening on http://{}", addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
