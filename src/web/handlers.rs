use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use tracing::info;

use super::AppState;
use crate::models::{CatalogDescriptor, Manifest, MetasResponse, RefreshResponse};

/// Static addon descriptor.
pub async fn manifest() -> Json<Manifest> {
    Json(Manifest {
        id: "org.malayalam.catalog".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        name: "Malayalam".to_string(),
        description: "Latest Malayalam Movies on OTT".to_string(),
        resources: vec!["catalog".to_string()],
        types: vec!["movie".to_string()],
        catalogs: vec![CatalogDescriptor {
            media_type: "movie".to_string(),
            id: "malayalam".to_string(),
            name: "Malayalam".to_string(),
        }],
        id_prefixes: vec!["tt".to_string()],
    })
}

/// Project the current cache snapshot into catalog entries. Entries that
/// cannot be represented are omitted; the response itself never fails.
pub async fn catalog(State(state): State<AppState>) -> Json<MetasResponse> {
    let snapshot = state.cache.snapshot().await;
    let metas: Vec<_> = snapshot.iter().filter_map(|movie| movie.to_meta()).collect();

    info!("Catalog requested, returning {} movies", metas.len());
    Json(MetasResponse { metas })
}

/// Launch a refresh run without blocking the caller. The spawned task is not
/// joined and its outcome is not reported back; overlapping runs are allowed.
pub async fn refresh(State(state): State<AppState>) -> Json<RefreshResponse> {
    let refresher = state.refresher.clone();
    tokio::spawn(async move {
        refresher.refresh().await;
    });

    Json(RefreshResponse {
        status: "refresh started in background".to_string(),
    })
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "cached_movies": state.cache.len().await,
    }))
}
