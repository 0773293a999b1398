//! Product categories.
//!
//! The category set is closed: the persistence layer rejects anything
//! outside this enum, so the rest of the codebase can rely on it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Product category.
///
/// `hero`, `logo`, and `product-showcase` are site-chrome categories used
/// by the marketing pages; the shop pages only surface the first four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Headphones,
    Earbuds,
    Speakers,
    Accessories,
    Hero,
    Logo,
    ProductShowcase,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 7] = [
        Self::Headphones,
        Self::Earbuds,
        Self::Speakers,
        Self::Accessories,
        Self::Hero,
        Self::Logo,
        Self::ProductShowcase,
    ];

    /// The category's wire name (kebab-case, matching the stored value).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Headphones => "headphones",
            Self::Earbuds => "earbuds",
            Self::Speakers => "speakers",
            Self::Accessories => "accessories",
            Self::Hero => "hero",
            Self::Logo => "logo",
            Self::ProductShowcase => "product-showcase",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unknown category names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CategoryParseError(s.to_owned()))
    }
}

/// Category filter used by catalog views.
///
/// The shop pages expose an `"all"` sentinel next to the concrete
/// categories; modelling it explicitly keeps the sentinel out of the
/// `Category` enum itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// No filtering; every product matches.
    All,
    /// Only products in this exact category match.
    Only(Category),
}

impl CategoryFilter {
    /// Whether a category passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            Category::from_str(s).map(Self::Only)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_categories() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().expect("parse");
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&Category::ProductShowcase).expect("serialize");
        assert_eq!(json, "\"product-showcase\"");
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = "vinyl".parse::<Category>().unwrap_err();
        assert_eq!(err, CategoryParseError("vinyl".to_owned()));
    }

    #[test]
    fn test_filter_sentinel() {
        let filter: CategoryFilter = "all".parse().expect("parse");
        assert_eq!(filter, CategoryFilter::All);
        assert!(filter.matches(Category::Hero));

        let filter: CategoryFilter = "earbuds".parse().expect("parse");
        assert!(filter.matches(Category::Earbuds));
        assert!(!filter.matches(Category::Speakers));
    }
}
