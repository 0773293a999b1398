//! The cart ledger.
//!
//! A list of (product, quantity) lines with denormalized display fields.
//! The ledger never re-reads the live catalog: the price is snapshotted at
//! add-time so the cart survives catalog refreshes and product edits. The
//! whole ledger serializes to one value; the storefront writes that snapshot
//! to the session store after every mutation and restores it wholesale.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Product, ProductId};

/// One cart line. Quantity is always >= 1; an update to zero or below
/// removes the line instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub title: String,
    pub image_url: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

/// The cart: at most one line per product id, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartLedger {
    lines: Vec<CartLine>,
}

impl CartLedger {
    /// Create an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line if present, otherwise appends a new
    /// quantity-1 line with the product's current price snapshotted.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                product_id: product.id.clone(),
                title: product.title.clone(),
                image_url: product.image_url.clone(),
                unit_price: product.price,
                quantity: 1,
            });
        }
    }

    /// Remove a product's line entirely. No-op when absent.
    pub fn remove(&mut self, product_id: &ProductId) {
        self.lines.retain(|l| &l.product_id != product_id);
    }

    /// Set a line's quantity. A quantity of zero or below collapses to
    /// removal rather than being rejected.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.iter_mut().find(|l| &l.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Total item count: the sum of all line quantities.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of `unit_price * quantity` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines
            .iter()
            .map(|l| l.unit_price * Decimal::from(l.quantity))
            .sum()
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn product(id: &str, price: i64) -> Product {
        let mut p = Product::new(id, format!("Product {id}"), "/img.jpg", Category::Headphones);
        p.price = Decimal::from(price);
        p
    }

    #[test]
    fn test_add_increments_existing_line() {
        let mut cart = CartLedger::new();
        let p = product("a", 299);

        cart.add(&p);
        assert_eq!(cart.lines().first().map(|l| l.quantity), Some(1));

        cart.add(&p);
        assert_eq!(cart.lines().first().map(|l| l.quantity), Some(2));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_price_is_snapshotted_at_add_time() {
        let mut cart = CartLedger::new();
        let mut p = product("a", 299);
        cart.add(&p);

        // A later catalog edit must not retroactively change the cart.
        p.price = Decimal::from(99);
        cart.add(&p);

        assert_eq!(
            cart.lines().first().map(|l| l.unit_price),
            Some(Decimal::from(299))
        );
        assert_eq!(cart.subtotal(), Decimal::from(598));
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = CartLedger::new();
        let a = product("a", 100);
        let b = product("b", 50);
        cart.add(&a);
        cart.add(&b);
        cart.add(&b);

        cart.update_quantity(&a.id, 0);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.count(), 2);

        cart.update_quantity(&b.id, -3);
        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = CartLedger::new();
        let p = product("a", 25);
        cart.add(&p);
        cart.update_quantity(&p.id, 7);

        assert_eq!(cart.count(), 7);
        assert_eq!(cart.subtotal(), Decimal::from(175));
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = CartLedger::new();
        cart.add(&product("a", 10));
        cart.remove(&ProductId::from("missing"));
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut cart = CartLedger::new();
        cart.add(&product("a", 349));
        cart.add(&product("b", 199));
        cart.update_quantity(&ProductId::from("b"), 4);

        let snapshot = serde_json::to_string(&cart).expect("serialize");
        let restored: CartLedger = serde_json::from_str(&snapshot).expect("deserialize");
        assert_eq!(restored, cart);
    }
}
