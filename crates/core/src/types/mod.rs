//! Core types for Remix Beats.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod product;

pub use category::{Category, CategoryFilter, CategoryParseError};
pub use id::ProductId;
pub use product::Product;
