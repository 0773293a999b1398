//! Admin account management commands.
//!
//! # Usage
//!
//! ```bash
//! rb-cli admin create -u alice -e alice@example.com -p s3cret
//! ```
//!
//! # Environment Variables
//!
//! - `STOREFRONT_DATABASE_URL` (or `DATABASE_URL`) - `PostgreSQL` connection string

use thiserror::Error;
use tracing::info;

use remix_beats_storefront::services::auth::AuthService;

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Password too short.
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
}

const MIN_PASSWORD_LENGTH: usize = 6;

/// Create a new admin account with a hashed password.
///
/// # Errors
///
/// Returns an error if validation fails, the username or email is already
/// taken, or the database is unreachable.
pub async fn create(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if !email.contains('@') {
        return Err(AdminError::InvalidEmail(email.to_owned()).into());
    }
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AdminError::PasswordTooShort(MIN_PASSWORD_LENGTH).into());
    }

    let pool = super::connect().await?;
    let admin = AuthService::new(&pool)
        .create_admin(username, email, password)
        .await?;

    info!(id = admin.id, username = %admin.username, "Admin account created");
    println!("Created admin '{}' (id {})", admin.username, admin.id);
    Ok(())
}
