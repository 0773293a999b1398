//! In-memory catalog cache with composable filters.
//!
//! The store is populated wholesale from the product listing (never patched
//! incrementally) and exposes pure filters over the cached set. Fetching is
//! the storefront's job; nothing here touches the network.

use rust_decimal::Decimal;

use crate::types::{CategoryFilter, Product};

/// Read-only cached copy of the product list.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Create an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Replace the entire cached set with a fresh listing.
    pub fn load(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// All cached products, in storage order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products matching the category filter, in storage order.
    #[must_use]
    pub fn filter_by_category(&self, filter: CategoryFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| filter.matches(p.category))
            .collect()
    }

    /// Products with `min <= price < max`. A `None` max is unbounded.
    #[must_use]
    pub fn filter_by_price_range(&self, min: Decimal, max: Option<Decimal>) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.price >= min && max.is_none_or(|m| p.price < m))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use rust_decimal::Decimal;

    fn priced(id: &str, category: Category, price: i64) -> Product {
        let mut p = Product::new(id, format!("Product {id}"), "/img.jpg", category);
        p.price = Decimal::from(price);
        p
    }

    fn sample() -> CatalogStore {
        let mut store = CatalogStore::new();
        store.load(vec![
            priced("a", Category::Headphones, 349),
            priced("b", Category::Earbuds, 199),
            priced("c", Category::Speakers, 99),
            priced("d", Category::Headphones, 199),
        ]);
        store
    }

    #[test]
    fn test_category_filter_returns_exact_subsequence() {
        let store = sample();
        let headphones = store.filter_by_category(CategoryFilter::Only(Category::Headphones));
        let ids: Vec<&str> = headphones.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "d"]);
    }

    #[test]
    fn test_all_sentinel_returns_everything_unchanged() {
        let store = sample();
        let all = store.filter_by_category(CategoryFilter::All);
        assert_eq!(all.len(), store.len());
        let ids: Vec<&str> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_price_range_is_half_open() {
        let store = sample();
        let mid = store.filter_by_price_range(Decimal::from(100), Some(Decimal::from(200)));
        let ids: Vec<&str> = mid.iter().map(|p| p.id.as_str()).collect();
        // 199 is in, 99 is below min, 349 is at/above max
        assert_eq!(ids, ["b", "d"]);
    }

    #[test]
    fn test_price_range_unbounded_max() {
        let store = sample();
        let over = store.filter_by_price_range(Decimal::from(200), None);
        let ids: Vec<&str> = over.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a"]);
    }

    #[test]
    fn test_filters_compose_in_any_order() {
        let store = sample();
        let min = Decimal::from(100);
        let max = Some(Decimal::from(400));

        // category-then-price
        let a: Vec<&str> = store
            .filter_by_category(CategoryFilter::Only(Category::Headphones))
            .into_iter()
            .filter(|p| p.price >= min && max.is_none_or(|m| p.price < m))
            .map(|p| p.id.as_str())
            .collect();

        // price-then-category
        let b: Vec<&str> = store
            .filter_by_price_range(min, max)
            .into_iter()
            .filter(|p| p.category == Category::Headphones)
            .map(|p| p.id.as_str())
            .collect();

        assert_eq!(a, b);
    }

    #[test]
    fn test_load_replaces_wholesale() {
        let mut store = sample();
        store.load(vec![priced("z", Category::Accessories, 15)]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.all().first().map(|p| p.id.as_str()), Some("z"));
    }
}
