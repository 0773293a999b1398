//! Catalog seeding command.
//!
//! Inserts the sample Beats catalog so a fresh database has something to
//! browse. With `--fresh` the product table is emptied first.
//!
//! # Usage
//!
//! ```bash
//! rb-cli seed
//! rb-cli seed --fresh
//! ```

use rust_decimal::Decimal;
use tracing::info;

use remix_beats_core::Category;
use remix_beats_storefront::db::products::ProductRepository;
use remix_beats_storefront::models::ProductDraft;

struct Sample {
    title: &'static str,
    description: &'static str,
    image_url: &'static str,
    alt_text: &'static str,
    category: Category,
    order: i32,
    price: Decimal,
    color: &'static str,
    specifications: &'static str,
    stock: u32,
    weight: &'static str,
    dimensions: &'static str,
    tags: &'static [&'static str],
}

impl From<&Sample> for ProductDraft {
    fn from(s: &Sample) -> Self {
        Self {
            title: s.title.to_owned(),
            description: Some(s.description.to_owned()),
            image_url: s.image_url.to_owned(),
            alt_text: Some(s.alt_text.to_owned()),
            category: s.category,
            order: s.order,
            is_active: true,
            price: s.price,
            brand: "Beats by Dre".to_owned(),
            color: Some(s.color.to_owned()),
            specifications: Some(s.specifications.to_owned()),
            stock: s.stock,
            weight: Some(s.weight.to_owned()),
            dimensions: Some(s.dimensions.to_owned()),
            warranty: Some("1 year".to_owned()),
            tags: s.tags.iter().map(|&t| t.to_owned()).collect(),
        }
    }
}

const SAMPLES: &[Sample] = &[
    Sample {
        title: "Studio3 Wireless Headphones",
        description: "Premium wireless headphones with Pure Adaptive Noise Cancelling",
        image_url: "https://example.com/studio3-black.jpg",
        alt_text: "Studio3 Wireless Headphones Black",
        category: Category::Headphones,
        order: 1,
        price: Decimal::from_parts(34_999, 0, 0, false, 2),
        color: "Black",
        specifications: "Active Noise Cancellation, Spatial Audio, 22-hour battery, Wireless charging",
        stock: 45,
        weight: "260g",
        dimensions: "18.4 x 15.4 x 8.1 cm",
        tags: &["wireless", "noise-cancelling", "premium", "spatial-audio"],
    },
    Sample {
        title: "Powerbeats Pro",
        description: "True wireless earbuds with adjustable fit and powerful sound",
        image_url: "https://example.com/powerbeats-pro.jpg",
        alt_text: "Powerbeats Pro True Wireless Earbuds",
        category: Category::Earbuds,
        order: 2,
        price: Decimal::from_parts(24_999, 0, 0, false, 2),
        color: "Navy",
        specifications: "True wireless, Sweat resistant, 9-hour battery, Secure fit",
        stock: 60,
        weight: "11.5g each",
        dimensions: "3.0 x 2.5 x 2.2 cm",
        tags: &["true-wireless", "sports", "sweat-resistant", "secure-fit"],
    },
    Sample {
        title: "Solo3 Wireless Headphones",
        description: "On-ear wireless headphones with Fast Fuel charging",
        image_url: "https://example.com/solo3-white.jpg",
        alt_text: "Solo3 Wireless Headphones White",
        category: Category::Headphones,
        order: 3,
        price: Decimal::from_parts(19_999, 0, 0, false, 2),
        color: "White",
        specifications: "Fast Fuel charging, 40-hour battery, Wireless, Adjustable fit",
        stock: 30,
        weight: "205g",
        dimensions: "16.3 x 13.6 x 7.7 cm",
        tags: &["wireless", "fast-charging", "on-ear", "adjustable"],
    },
    Sample {
        title: "Beats Pill+ Portable Speaker",
        description: "Portable Bluetooth speaker with up to 12 hours of playback",
        image_url: "https://example.com/beats-pill-plus.jpg",
        alt_text: "Beats Pill+ Portable Speaker",
        category: Category::Speakers,
        order: 4,
        price: Decimal::from_parts(17_999, 0, 0, false, 2),
        color: "Black",
        specifications: "Bluetooth 4.0, 12-hour battery, Waterproof, Built-in microphone",
        stock: 25,
        weight: "406g",
        dimensions: "9.8 x 6.9 x 4.8 cm",
        tags: &["portable", "bluetooth", "waterproof", "wireless"],
    },
    Sample {
        title: "Beats Flex Wireless Earbuds",
        description: "All-day wireless earbuds with Magnetic charging case",
        image_url: "https://example.com/beats-flex.jpg",
        alt_text: "Beats Flex Wireless Earbuds",
        category: Category::Earbuds,
        order: 5,
        price: Decimal::from_parts(4_999, 0, 0, false, 2),
        color: "Sage Gray",
        specifications: "Magnetic charging, 12-hour battery, Sweat resistant, Wireless",
        stock: 80,
        weight: "5.6g each",
        dimensions: "3.0 x 3.0 x 2.0 cm",
        tags: &["budget", "all-day", "magnetic-charging", "sweat-resistant"],
    },
];

/// Seed the catalog with the sample products.
///
/// # Errors
///
/// Returns an error if the database is unreachable or an insert fails.
pub async fn run(fresh: bool) -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;
    let repo = ProductRepository::new(&pool);

    if fresh {
        let deleted = sqlx::query("DELETE FROM products")
            .execute(&pool)
            .await?
            .rows_affected();
        info!(deleted, "Cleared existing products");
    }

    for sample in SAMPLES {
        let product = repo.create(&ProductDraft::from(sample)).await?;
        println!(
            "{}. {} ({}, ${})",
            product.order,
            product.title,
            product.category.as_str(),
            product.price
        );
    }

    info!(count = SAMPLES.len(), "Sample catalog seeded");
    Ok(())
}
