//! Session-stored types.
//!
//! The session is the durable per-browser store: cart and favorites
//! snapshots are written here wholesale after every mutation, and the
//! admin identity rides alongside them.

use serde::{Deserialize, Serialize};

/// Session-stored admin identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    pub id: i32,
    pub username: String,
    pub email: String,
}

/// Session keys.
pub mod session_keys {
    /// Key for the serialized cart ledger snapshot.
    pub const CART: &str = "beats_cart";

    /// Key for the serialized favorites snapshot.
    pub const FAVORITES: &str = "beats_favorites";

    /// Key for the logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
