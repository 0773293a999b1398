//! Search-as-you-type matching over the catalog.
//!
//! A candidate matches when the query is a case-insensitive prefix of its
//! title, brand, category, or color, OR a case-insensitive substring of its
//! title, description, brand, or any tag. Results keep storage order; prefix
//! hits are not re-ranked ahead of substring hits; the two predicates only
//! widen the match set, they never reorder it.

use regex::{Regex, RegexBuilder};

use crate::types::Product;

/// Compiled matcher for one query string.
///
/// The query is escaped before compilation, so regex metacharacters in user
/// input are matched literally rather than interpreted.
#[derive(Debug)]
pub struct SearchMatcher {
    prefix: Regex,
    contains: Regex,
}

impl SearchMatcher {
    /// Compile a matcher for a query.
    ///
    /// Returns `None` for empty or whitespace-only queries: a present but
    /// empty search matches nothing, deliberately, rather than falling back
    /// to the full candidate set.
    #[must_use]
    pub fn compile(query: &str) -> Option<Self> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }

        let escaped = regex::escape(trimmed);
        let prefix = RegexBuilder::new(&format!("^{escaped}"))
            .case_insensitive(true)
            .build()
            .ok()?;
        let contains = RegexBuilder::new(&escaped)
            .case_insensitive(true)
            .build()
            .ok()?;

        Some(Self { prefix, contains })
    }

    /// Whether a single product matches the query.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let prefix_fields = [
            Some(product.title.as_str()),
            Some(product.brand.as_str()),
            Some(product.category.as_str()),
            product.color.as_deref(),
        ];
        if prefix_fields
            .into_iter()
            .flatten()
            .any(|f| self.prefix.is_match(f))
        {
            return true;
        }

        let contains_fields = [
            Some(product.title.as_str()),
            product.description.as_deref(),
            Some(product.brand.as_str()),
        ];
        contains_fields
            .into_iter()
            .flatten()
            .chain(product.tags.iter().map(String::as_str))
            .any(|f| self.contains.is_match(f))
    }

    /// Filter candidates by the query, preserving storage order.
    ///
    /// An empty or whitespace-only query yields an empty result regardless
    /// of the candidates.
    #[must_use]
    pub fn search<'a>(query: &str, candidates: &'a [Product]) -> Vec<&'a Product> {
        Self::compile(query).map_or_else(Vec::new, |matcher| {
            candidates.iter().filter(|p| matcher.matches(p)).collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn product(id: &str, title: &str) -> Product {
        Product::new(id, title, "/img.jpg", Category::Headphones)
    }

    fn titles<'a>(results: &[&'a Product]) -> Vec<&'a str> {
        results.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let candidates = vec![product("a", "Studio3 Black")];
        assert!(SearchMatcher::search("", &candidates).is_empty());
        assert!(SearchMatcher::search("   ", &candidates).is_empty());
    }

    #[test]
    fn test_nonempty_query_over_empty_candidates() {
        assert!(SearchMatcher::search("studio", &[]).is_empty());
    }

    #[test]
    fn test_prefix_match_on_color_field() {
        let mut a = product("a", "Studio3 Black");
        a.color = Some("Black".to_owned());
        let b = product("b", "Solo White");
        let mut c = product("c", "X");
        c.brand = "Beats".to_owned();

        let candidates = vec![a, b, c];
        let results = SearchMatcher::search("Bla", &candidates);
        assert_eq!(titles(&results), ["Studio3 Black"]);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let candidates = vec![product("a", "Studio3 Wireless")];
        assert_eq!(SearchMatcher::search("sTuDiO", &candidates).len(), 1);
    }

    #[test]
    fn test_substring_match_on_description_and_tags() {
        let mut a = product("a", "Powerbeats Pro");
        a.description = Some("True wireless earbuds with secure fit".to_owned());
        let mut b = product("b", "Beats Pill+");
        b.tags = vec!["portable".to_owned(), "waterproof".to_owned()];

        let candidates = vec![a, b];
        assert_eq!(
            titles(&SearchMatcher::search("secure", &candidates)),
            ["Powerbeats Pro"]
        );
        assert_eq!(
            titles(&SearchMatcher::search("waterpro", &candidates)),
            ["Beats Pill+"]
        );
    }

    #[test]
    fn test_results_keep_storage_order() {
        // "solo" is a substring hit for the first and a prefix hit for the
        // second; no reordering by match strength happens.
        let mut a = product("a", "Carry case");
        a.description = Some("Fits Solo and Studio models".to_owned());
        let b = product("b", "Solo 4");

        let candidates = vec![a, b];
        assert_eq!(
            titles(&SearchMatcher::search("solo", &candidates)),
            ["Carry case", "Solo 4"]
        );
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let mut a = product("a", "Pill+ (2024)");
        a.description = Some("Speaker".to_owned());
        let b = product("b", "Pill 2024");

        let candidates = vec![a, b];
        // "+" and parens must not be interpreted as regex syntax
        assert_eq!(
            titles(&SearchMatcher::search("Pill+ (", &candidates)),
            ["Pill+ (2024)"]
        );
        // a bare metacharacter query must not crash or match everything
        assert!(SearchMatcher::search("(((", &candidates).is_empty());
    }

    #[test]
    fn test_prefix_match_on_category_name() {
        let a = product("a", "Flex");
        let candidates = vec![a];
        assert_eq!(SearchMatcher::search("headph", &candidates).len(), 1);
    }
}
