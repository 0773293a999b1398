//! Remix Beats Core - Shared types and catalog state components.
//!
//! This crate provides the types and in-memory components used across all
//! Remix Beats binaries:
//! - `storefront` - Public REST API (catalog, cart, favorites, checkout, admin)
//! - `cli` - Command-line tools for migrations, seeding, and admin management
//!
//! # Architecture
//!
//! The core crate contains only types and pure in-memory components - no I/O,
//! no database access, no HTTP clients. Everything here runs synchronously on
//! whatever thread handles a request; persistence and fetching are the
//! storefront's job.
//!
//! # Modules
//!
//! - [`types`] - Product identifiers, categories, products, and cart lines
//! - [`catalog`] - Cached product list with category/price filters
//! - [`search`] - Prefix-then-substring text matching over products
//! - [`cart`] - Cart ledger (product -> quantity mapping with price snapshots)
//! - [`favorites`] - Favorite product ids with change notifications
//! - [`duplicates`] - Duplicate catalog entry detection for admin cleanup

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod duplicates;
pub mod favorites;
pub mod search;
pub mod types;

pub use cart::{CartLedger, CartLine};
pub use catalog::CatalogStore;
pub use duplicates::find_duplicates;
pub use favorites::{FavoritesObserver, FavoritesSet};
pub use search::SearchMatcher;
pub use types::*;
