//! Product write payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use remix_beats_core::{Category, Product};

/// A product document as submitted by the admin panel (no id, no
/// timestamps - those are assigned by the repository).
///
/// Defaults mirror the document schema, so a sparse payload stores the
/// same way a fully populated one does.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    pub category: Category,
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
}

fn default_true() -> bool {
    true
}

fn default_brand() -> String {
    "Beats by Dre".to_owned()
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            alt_text: product.alt_text.clone(),
            category: product.category,
            order: product.order,
            is_active: product.is_active,
            price: product.price,
            brand: product.brand.clone(),
            color: product.color.clone(),
            specifications: product.specifications.clone(),
            stock: product.stock,
            weight: product.weight.clone(),
            dimensions: product.dimensions.clone(),
            warranty: product.warranty.clone(),
            tags: product.tags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_payload_uses_schema_defaults() {
        let json = r#"{
            "title": "Beats Flex",
            "imageUrl": "/uploads/flex.jpg",
            "category": "earbuds"
        }"#;

        let draft: ProductDraft = serde_json::from_str(json).expect("deserialize");
        assert!(draft.is_active);
        assert_eq!(draft.brand, "Beats by Dre");
        assert_eq!(draft.price, Decimal::ZERO);
        assert_eq!(draft.stock, 0);
    }
}
