//! Favorites route handlers.
//!
//! The favorites set is session state under the fixed `beats_favorites`
//! key. Observers are per-request wiring: each mutating handler subscribes
//! a recorder to the restored set so the response can carry the same
//! size-change notification a badge subscriber would receive.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use remix_beats_core::{FavoritesObserver, FavoritesSet, Product, ProductId};

use crate::db::products::ProductRepository;
use crate::error::{AppError, Result};
use crate::models::session_keys;
use crate::state::AppState;

/// Size-change notification, surfaced to the client as the response body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesUpdate {
    pub event_type: &'static str,
    pub count: usize,
    pub favorited: bool,
}

/// Observer that records the latest notified count.
struct CountRecorder {
    count: AtomicUsize,
}

impl CountRecorder {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            count: AtomicUsize::new(0),
        })
    }

    fn latest(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl FavoritesObserver for CountRecorder {
    fn favorites_updated(&self, count: usize) {
        self.count.store(count, Ordering::SeqCst);
    }
}

/// Restore the favorites snapshot, treating absent or corrupt state as empty.
async fn load_favorites(session: &Session) -> FavoritesSet {
    session
        .get::<FavoritesSet>(session_keys::FAVORITES)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

async fn save_favorites(session: &Session, favorites: &FavoritesSet) -> Result<()> {
    session
        .insert(session_keys::FAVORITES, favorites)
        .await
        .map_err(|e| AppError::Internal(format!("failed to persist favorites: {e}")))
}

/// Toggle request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleBody {
    pub product_id: String,
}

/// List the favorited products, in catalog display order.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<Product>>> {
    let favorites = load_favorites(&session).await;
    let ids: Vec<ProductId> = favorites.ids().cloned().collect();

    let products = ProductRepository::new(state.pool()).list_by_ids(&ids).await?;
    Ok(Json(products))
}

/// Toggle a product in or out of the favorites set.
#[instrument(skip(session))]
pub async fn toggle(
    session: Session,
    Json(body): Json<ToggleBody>,
) -> Result<Json<FavoritesUpdate>> {
    let id = ProductId::new(body.product_id);

    let mut favorites = load_favorites(&session).await;
    let recorder = CountRecorder::new();
    favorites.subscribe(recorder.clone());

    let favorited = if favorites.contains(&id) {
        favorites.remove(&id);
        false
    } else {
        favorites.add(id);
        true
    };
    save_favorites(&session, &favorites).await?;

    Ok(Json(FavoritesUpdate {
        event_type: "favoritesUpdated",
        count: recorder.latest(),
        favorited,
    }))
}

/// Favorites count badge.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Json<serde_json::Value> {
    let favorites = load_favorites(&session).await;
    Json(serde_json::json!({ "count": favorites.len() }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorder_tracks_latest_count() {
        let recorder = CountRecorder::new();
        let mut favorites = FavoritesSet::new();
        favorites.subscribe(recorder.clone());

        favorites.add(ProductId::from("a"));
        favorites.add(ProductId::from("b"));
        assert_eq!(recorder.latest(), 2);

        favorites.remove(&ProductId::from("a"));
        assert_eq!(recorder.latest(), 1);
    }

    #[test]
    fn test_update_payload_shape() {
        let update = FavoritesUpdate {
            event_type: "favoritesUpdated",
            count: 3,
            favorited: true,
        };
        let json = serde_json::to_value(&update).expect("serialize");
        assert_eq!(json["eventType"], "favoritesUpdated");
        assert_eq!(json["count"], 3);
        assert_eq!(json["favorited"], true);
    }
}
