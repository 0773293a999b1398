//! Admin panel account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An admin account (password hash lives only in the repository layer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
