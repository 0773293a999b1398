//! Cart route handlers.
//!
//! The cart ledger lives in the session: every mutating handler restores
//! the snapshot, applies one core operation, and writes the whole ledger
//! back under the fixed `beats_cart` key. A corrupt or missing snapshot
//! degrades to an empty cart rather than an error.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use remix_beats_core::{CartLedger, CartLine, ProductId};

use crate::db::products::ProductRepository;
use crate::error::{AppError, Result};
use crate::models::session_keys;
use crate::state::AppState;

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    pub product_id: ProductId,
    pub title: String,
    pub image_url: String,
    pub price: String,
    pub line_price: String,
    pub quantity: u32,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.clone(),
            title: line.title.clone(),
            image_url: line.image_url.clone(),
            price: format_price(line.unit_price),
            line_price: format_price(line.unit_price * Decimal::from(line.quantity)),
            quantity: line.quantity,
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl From<&CartLedger> for CartView {
    fn from(cart: &CartLedger) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            subtotal: format_price(cart.subtotal()),
            item_count: cart.count(),
        }
    }
}

/// Cart count badge payload.
#[derive(Debug, Clone, Serialize)]
pub struct CartCount {
    pub count: u32,
}

/// Format a decimal amount as a dollar price string.
pub fn format_price(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Restore the cart snapshot, treating absent or corrupt state as empty.
pub async fn load_cart(session: &Session) -> CartLedger {
    session
        .get::<CartLedger>(session_keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Overwrite the whole cart snapshot.
pub async fn save_cart(session: &Session, cart: &CartLedger) -> Result<()> {
    session
        .insert(session_keys::CART, cart)
        .await
        .map_err(|e| AppError::Internal(format!("failed to persist cart: {e}")))
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartBody {
    pub product_id: String,
}

/// Update quantity request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartBody {
    pub product_id: String,
    pub quantity: i64,
}

/// Remove from cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartBody {
    pub product_id: String,
}

/// Show the cart.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Json<CartView> {
    let cart = load_cart(&session).await;
    Json(CartView::from(&cart))
}

/// Add one unit of a product to the cart.
///
/// The product is fetched once here to snapshot its price into the line;
/// later catalog edits do not touch existing carts.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<AddToCartBody>,
) -> Result<Json<CartCount>> {
    let id = ProductId::new(body.product_id);
    let product = ProductRepository::new(state.pool())
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product".to_owned()))?;

    let mut cart = load_cart(&session).await;
    cart.add(&product);
    save_cart(&session, &cart).await?;

    Ok(Json(CartCount { count: cart.count() }))
}

/// Set a line's quantity; zero or below removes the line.
#[instrument(skip(session))]
pub async fn update(
    session: Session,
    Json(body): Json<UpdateCartBody>,
) -> Result<Json<CartView>> {
    let id = ProductId::new(body.product_id);

    let mut cart = load_cart(&session).await;
    cart.update_quantity(&id, body.quantity);
    save_cart(&session, &cart).await?;

    Ok(Json(CartView::from(&cart)))
}

/// Remove a line from the cart.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Json(body): Json<RemoveFromCartBody>,
) -> Result<Json<CartView>> {
    let id = ProductId::new(body.product_id);

    let mut cart = load_cart(&session).await;
    cart.remove(&id);
    save_cart(&session, &cart).await?;

    Ok(Json(CartView::from(&cart)))
}

/// Cart count badge.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Json<CartCount> {
    let cart = load_cart(&session).await;
    Json(CartCount { count: cart.count() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use remix_beats_core::{Category, Product};

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(Decimal::new(34_999, 2)), "$349.99");
        assert_eq!(format_price(Decimal::ZERO), "$0.00");
        assert_eq!(format_price(Decimal::from(5)), "$5.00");
    }

    #[test]
    fn test_cart_view_totals() {
        let mut product = Product::new("a", "Studio3", "/s3.jpg", Category::Headphones);
        product.price = Decimal::new(19_999, 2);

        let mut cart = CartLedger::new();
        cart.add(&product);
        cart.add(&product);

        let view = CartView::from(&cart);
        assert_eq!(view.item_count, 2);
        assert_eq!(view.subtotal, "$399.98");
        assert_eq!(
            view.items.first().map(|i| i.line_price.as_str()),
            Some("$399.98")
        );
    }
}
