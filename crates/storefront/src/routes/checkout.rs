//! Checkout route handler.
//!
//! Demo checkout: totals are computed server-side from the session cart's
//! snapshot prices, the order is echoed back as a summary, and the cart is
//! cleared. Nothing is charged and no order row is written.

use axum::Json;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;
use uuid::Uuid;

use remix_beats_core::CartLedger;

use crate::error::{AppError, Result};
use crate::routes::cart::{CartItemView, format_price, load_cart, save_cart};

/// Sales tax applied to the subtotal.
const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);
/// Orders above this subtotal ship free.
const FREE_SHIPPING_THRESHOLD: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
/// Flat shipping fee below the threshold.
const SHIPPING_FEE: Decimal = Decimal::from_parts(999, 0, 0, false, 2);

/// Checkout form payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub zip_code: String,
    pub card_number: String,
}

/// Order summary returned to the client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_id: String,
    pub order_date: DateTime<Utc>,
    pub email: String,
    pub name: String,
    pub shipping_address: String,
    pub card_last_four: String,
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub tax: String,
    pub shipping: String,
    pub total: String,
}

/// Compute the shipping fee for a subtotal.
fn shipping_for(subtotal: Decimal) -> Decimal {
    if subtotal > FREE_SHIPPING_THRESHOLD {
        Decimal::ZERO
    } else {
        SHIPPING_FEE
    }
}

/// The last four digits of a card number, ignoring separators.
fn card_last_four(card_number: &str) -> String {
    let digits: Vec<char> = card_number
        .chars()
        .rev()
        .filter(char::is_ascii_digit)
        .take(4)
        .collect();
    digits.into_iter().rev().collect()
}

/// Place an order from the session cart.
#[instrument(skip(session, form), fields(email = %form.email))]
pub async fn place_order(
    session: Session,
    Json(form): Json<CheckoutForm>,
) -> Result<Json<OrderSummary>> {
    let cart = load_cart(&session).await;
    if cart.lines().is_empty() {
        return Err(AppError::BadRequest("Cart is empty".to_owned()));
    }

    let subtotal = cart.subtotal();
    let tax = (subtotal * TAX_RATE).round_dp(2);
    let shipping = shipping_for(subtotal);
    let total = subtotal + tax + shipping;

    let summary = OrderSummary {
        order_id: Uuid::new_v4().to_string(),
        order_date: Utc::now(),
        email: form.email,
        name: format!("{} {}", form.first_name, form.last_name),
        shipping_address: format!("{}, {} {}", form.address, form.city, form.zip_code),
        card_last_four: card_last_four(&form.card_number),
        items: cart.lines().iter().map(CartItemView::from).collect(),
        subtotal: format_price(subtotal),
        tax: format_price(tax),
        shipping: format_price(shipping),
        total: format_price(total),
    };

    save_cart(&session, &CartLedger::new()).await?;

    Ok(Json(summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_free_above_threshold() {
        assert_eq!(shipping_for(Decimal::new(5_001, 2)), Decimal::ZERO);
        assert_eq!(shipping_for(Decimal::from(200)), Decimal::ZERO);
    }

    #[test]
    fn test_shipping_flat_fee_at_or_below_threshold() {
        assert_eq!(shipping_for(Decimal::from(50)), Decimal::new(999, 2));
        assert_eq!(shipping_for(Decimal::new(1_999, 2)), Decimal::new(999, 2));
    }

    #[test]
    fn test_tax_rounds_to_cents() {
        let subtotal = Decimal::new(19_999, 2);
        let tax = (subtotal * TAX_RATE).round_dp(2);
        assert_eq!(tax, Decimal::new(1_600, 2));
    }

    #[test]
    fn test_card_last_four_ignores_separators() {
        assert_eq!(card_last_four("4111 1111 1111 1234"), "1234");
        assert_eq!(card_last_four("4111-1111-1111-9876"), "9876");
        assert_eq!(card_last_four("42"), "42");
    }
}
