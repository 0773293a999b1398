//! Domain models for the storefront binary.

pub mod admin;
pub mod product;
pub mod session;

pub use admin::Admin;
pub use product::ProductDraft;
pub use session::{CurrentAdmin, session_keys};
