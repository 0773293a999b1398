//! The product document.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Category, ProductId};

/// A catalog product.
///
/// Owned by the persistence layer; everything in this crate holds read-only
/// cached copies. Field defaults mirror the stored document schema, so a
/// partial JSON document deserializes the same way a partial insert stores.
///
/// Price and stock are non-negative by persistence-layer policy; this type
/// accepts whatever it is given (validation lives at the boundary, not
/// here).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned at insert.
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    pub category: Category,
    /// Display sort key (ascending).
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub price: Decimal,
    #[serde(default = "default_brand")]
    pub brand: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub specifications: Option<String>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub warranty: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

fn default_brand() -> String {
    "Beats by Dre".to_owned()
}

impl Product {
    /// Create a product with the required fields and schema defaults for
    /// everything else.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            image_url: image_url.into(),
            alt_text: None,
            category,
            order: 0,
            is_active: true,
            price: Decimal::ZERO,
            brand: default_brand(),
            color: None,
            specifications: None,
            stock: 0,
            weight: None,
            dimensions: None,
            warranty: None,
            tags: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_gets_schema_defaults() {
        let json = r#"{
            "_id": "p1",
            "title": "Studio3 Wireless",
            "imageUrl": "/uploads/studio3.jpg",
            "category": "headphones"
        }"#;

        let product: Product = serde_json::from_str(json).expect("deserialize");
        assert_eq!(product.price, Decimal::ZERO);
        assert_eq!(product.stock, 0);
        assert_eq!(product.order, 0);
        assert!(product.is_active);
        assert_eq!(product.brand, "Beats by Dre");
        assert!(product.tags.is_empty());
    }

    #[test]
    fn test_new_matches_schema_defaults() {
        let product = Product::new("p1", "Solo 4", "/uploads/solo4.jpg", Category::Headphones);
        assert!(product.is_active);
        assert_eq!(product.brand, "Beats by Dre");
        assert_eq!(product.price, Decimal::ZERO);
    }
}
