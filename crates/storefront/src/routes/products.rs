//! Product route handlers.
//!
//! Public listing/search endpoints plus the admin CRUD surface over the
//! product collection.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use remix_beats_core::{
    Category, CategoryFilter, Product, ProductId, SearchMatcher, find_duplicates,
};

use crate::db::products::ProductRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::ProductDraft;
use crate::state::AppState;

/// Product listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

/// Favorites lookup query parameters.
#[derive(Debug, Deserialize)]
pub struct IdsQuery {
    #[serde(default)]
    pub ids: String,
}

/// How a listing request is answered, decided from the query string alone.
///
/// An absent `search` parameter browses the full list; a present but blank
/// one always returns an empty list. That asymmetry is deliberate - the
/// search box shows nothing until the user has typed something.
#[derive(Debug, PartialEq, Eq)]
enum ListMode {
    /// No search parameter: the full (optionally category-filtered) list.
    Browse,
    /// Search parameter present but blank: an empty list, no query made.
    Empty,
    /// Search parameter with content: run the matcher over the listing.
    Search(String),
}

fn list_mode(query: &ListQuery) -> ListMode {
    match query.search.as_deref() {
        None => ListMode::Browse,
        Some(term) if term.trim().is_empty() => ListMode::Empty,
        Some(term) => ListMode::Search(term.to_owned()),
    }
}

/// List all products, with optional search.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Product>>> {
    let repo = ProductRepository::new(state.pool());

    match list_mode(&query) {
        ListMode::Empty => Ok(Json(Vec::new())),
        ListMode::Browse => {
            let mut products = repo.list_all().await?;
            if let Some(category) = query.category.as_deref() {
                let filter: CategoryFilter = category
                    .parse()
                    .map_err(|e: remix_beats_core::CategoryParseError| {
                        AppError::BadRequest(e.to_string())
                    })?;
                products.retain(|p| filter.matches(p.category));
            }
            Ok(Json(products))
        }
        ListMode::Search(term) => {
            let products = repo.list_all().await?;
            let matched = SearchMatcher::search(&term, &products)
                .into_iter()
                .cloned()
                .collect();
            Ok(Json(matched))
        }
    }
}

/// List active products in one category.
#[instrument(skip(state))]
pub async fn by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Product>>> {
    let category: Category = category
        .parse()
        .map_err(|e: remix_beats_core::CategoryParseError| AppError::BadRequest(e.to_string()))?;

    let products = ProductRepository::new(state.pool())
        .list_by_category(category)
        .await?;
    Ok(Json(products))
}

/// Look up products by a comma-separated id list (the favorites drawer).
#[instrument(skip(state))]
pub async fn by_ids(
    State(state): State<AppState>,
    Query(query): Query<IdsQuery>,
) -> Result<Json<Vec<Product>>> {
    let ids: Vec<ProductId> = query
        .ids
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ProductId::from)
        .collect();

    if ids.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let products = ProductRepository::new(state.pool())
        .list_by_ids(&ids)
        .await?;
    Ok(Json(products))
}

/// Single product by id.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    let product = ProductRepository::new(state.pool())
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_owned()))?;
    Ok(Json(product))
}

/// Create a product (admin).
#[instrument(skip(state, _admin, draft))]
pub async fn create(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Json(draft): Json<ProductDraft>,
) -> Result<impl IntoResponse> {
    let product = ProductRepository::new(state.pool()).create(&draft).await?;
    tracing::info!(id = %product.id, title = %product.title, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// Update a product (admin).
#[instrument(skip(state, _admin, draft))]
pub async fn update(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    let product = ProductRepository::new(state.pool())
        .update(&id, &draft)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_owned()))?;

    tracing::info!(id = %product.id, "Product updated");
    Ok(Json(product))
}

/// Delete a product (admin).
#[instrument(skip(state, _admin))]
pub async fn delete(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = ProductId::new(id);
    let deleted = ProductRepository::new(state.pool()).delete(&id).await?;
    if !deleted {
        return Err(AppError::NotFound("Product".to_owned()));
    }

    tracing::info!(%id, "Product deleted");
    Ok(Json(json!({ "message": "Product deleted successfully" })))
}

/// Duplicate clusters over the full catalog (admin cleanup view).
///
/// Recomputed from the live listing on every call; groups share an exact
/// (title, category, image URL) key.
#[instrument(skip(state, _admin))]
pub async fn duplicates(
    State(state): State<AppState>,
    _admin: RequireAdmin,
) -> Result<Json<Vec<Vec<Product>>>> {
    let products = ProductRepository::new(state.pool()).list_all().await?;
    Ok(Json(find_duplicates(&products)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(search: Option<&str>) -> ListQuery {
        ListQuery {
            search: search.map(str::to_owned),
            category: None,
        }
    }

    #[test]
    fn test_absent_search_browses_full_list() {
        assert_eq!(list_mode(&query(None)), ListMode::Browse);
    }

    #[test]
    fn test_blank_search_returns_empty_list() {
        // present-but-empty is not the same as absent
        assert_eq!(list_mode(&query(Some(""))), ListMode::Empty);
        assert_eq!(list_mode(&query(Some("   "))), ListMode::Empty);
    }

    #[test]
    fn test_nonempty_search_runs_the_matcher() {
        assert_eq!(
            list_mode(&query(Some("studio"))),
            ListMode::Search("studio".to_owned())
        );
    }
}
