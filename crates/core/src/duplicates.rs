//! Duplicate catalog entry detection for admin cleanup.
//!
//! Two products are duplicates when their (title, category, image URL)
//! triple is identical. Detection is a single pass: groups appear in
//! first-seen order, members in append order, and products with a unique
//! key are excluded entirely. Nothing is persisted; the groups are
//! recomputed over the full listing whenever it changes.

use std::collections::HashMap;

use crate::types::Product;

#[derive(PartialEq, Eq, Hash)]
struct DuplicateKey(String, String, String);

impl DuplicateKey {
    fn of(product: &Product) -> Self {
        Self(
            product.title.clone(),
            product.category.as_str().to_owned(),
            product.image_url.clone(),
        )
    }
}

enum Seen {
    /// Key seen once; index of that first product.
    Once(usize),
    /// Key already grouped; index into the output groups.
    Grouped(usize),
}

/// Group products sharing an identical (title, category, image URL) key.
///
/// Each returned group has at least two members.
#[must_use]
pub fn find_duplicates(products: &[Product]) -> Vec<Vec<Product>> {
    let mut seen: HashMap<DuplicateKey, Seen> = HashMap::new();
    let mut groups: Vec<Vec<Product>> = Vec::new();

    for (index, product) in products.iter().enumerate() {
        match seen.entry(DuplicateKey::of(product)) {
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(Seen::Once(index));
            }
            std::collections::hash_map::Entry::Occupied(mut entry) => match *entry.get() {
                Seen::Once(first_index) => {
                    let first = products
                        .get(first_index)
                        .cloned()
                        .unwrap_or_else(|| product.clone());
                    groups.push(vec![first, product.clone()]);
                    entry.insert(Seen::Grouped(groups.len() - 1));
                }
                Seen::Grouped(group_index) => {
                    if let Some(group) = groups.get_mut(group_index) {
                        group.push(product.clone());
                    }
                }
            },
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn product(id: &str, title: &str, category: Category, url: &str) -> Product {
        Product::new(id, title, url, category)
    }

    #[test]
    fn test_triple_occurrence_forms_one_group() {
        let products = vec![
            product("a", "Studio3", Category::Headphones, "/s3.jpg"),
            product("b", "Studio3", Category::Headphones, "/s3.jpg"),
            product("c", "Studio3", Category::Headphones, "/s3.jpg"),
            product("d", "Solo 4", Category::Headphones, "/solo.jpg"),
        ];

        let groups = find_duplicates(&products);
        assert_eq!(groups.len(), 1);
        let ids: Vec<&str> = groups
            .first()
            .map(|g| g.iter().map(|p| p.id.as_str()).collect())
            .unwrap_or_default();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_unique_products_are_excluded() {
        let products = vec![
            product("a", "Studio3", Category::Headphones, "/s3.jpg"),
            product("b", "Solo 4", Category::Headphones, "/solo.jpg"),
        ];
        assert!(find_duplicates(&products).is_empty());
    }

    #[test]
    fn test_key_is_the_full_triple() {
        // same title and image, different category: not duplicates
        let products = vec![
            product("a", "Pill", Category::Speakers, "/pill.jpg"),
            product("b", "Pill", Category::Accessories, "/pill.jpg"),
        ];
        assert!(find_duplicates(&products).is_empty());
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let products = vec![
            product("a", "Solo", Category::Headphones, "/solo.jpg"),
            product("b", "Pill", Category::Speakers, "/pill.jpg"),
            product("c", "Solo", Category::Headphones, "/solo.jpg"),
            product("d", "Pill", Category::Speakers, "/pill.jpg"),
        ];

        let groups = find_duplicates(&products);
        let firsts: Vec<&str> = groups
            .iter()
            .filter_map(|g| g.first().map(|p| p.id.as_str()))
            .collect();
        assert_eq!(firsts, ["a", "b"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(find_duplicates(&[]).is_empty());
    }
}
