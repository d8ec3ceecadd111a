use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Store;

mod anime;
mod error;
pub mod render;
mod validation;

pub use error::WebError;

pub struct AppState {
    store: Store,
}

impl AppState {
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }
}

pub async fn create_app_state_from_config(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_url,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    Ok(Arc::new(AppState { store }))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(anime::index))
        .route("/animes", post(anime::create_anime))
        .route("/animes/{id}", put(anime::update_anime))
        .route("/animes/{id}", delete(anime::delete_anime))
        .route("/update-form/{id}", get(anime::update_form))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
