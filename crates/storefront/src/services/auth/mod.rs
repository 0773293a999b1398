//! Admin authentication service.
//!
//! Password login for the admin panel. A fixed demo credential pair is
//! checked before the database so the demo works on an empty database;
//! real accounts live in the `admins` table with argon2 hashes.
//! Hardening beyond this is explicitly out of scope.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::PgPool;

use crate::db::admins::AdminRepository;
use crate::models::CurrentAdmin;

/// Demo credentials accepted without touching the database.
const DEMO_USERNAME: &str = "x";
const DEMO_PASSWORD: &str = "admin123";

/// The identity handed out for a demo login.
fn demo_admin() -> CurrentAdmin {
    CurrentAdmin {
        id: 0,
        username: "admin".to_owned(),
        email: "admin@beatsbydre.com".to_owned(),
    }
}

/// Authentication service.
pub struct AuthService<'a> {
    admins: AdminRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            admins: AdminRepository::new(pool),
        }
    }

    /// Login with username and password.
    ///
    /// The demo credential pair short-circuits to a fixed identity; any
    /// other pair is verified against the `admins` table.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the username/password is
    /// wrong or the account is inactive.
    pub async fn login(&self, username: &str, password: &str) -> Result<CurrentAdmin, AuthError> {
        if username == DEMO_USERNAME && password == DEMO_PASSWORD {
            tracing::info!("Demo admin login");
            return Ok(demo_admin());
        }

        let (admin, password_hash) = self
            .admins
            .get_with_password_hash(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        Ok(CurrentAdmin {
            id: admin.id,
            username: admin.username,
            email: admin.email,
        })
    }

    /// Create an admin account with a hashed password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::PasswordHash` if hashing fails, or a repository
    /// error (e.g., duplicate username) from the insert.
    pub async fn create_admin(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<CurrentAdmin, AuthError> {
        let password_hash = hash_password(password)?;
        let admin = self.admins.create(username, email, &password_hash).await?;

        Ok(CurrentAdmin {
            id: admin.id,
            username: admin.username,
            email: admin.email,
        })
    }
}

/// Hash a password with argon2 and a fresh salt.
///
/// # Errors
///
/// Returns `AuthError::PasswordHash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored argon2 hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hash = hash_password("admin123").expect("hash");
        assert!(verify_password("admin123", &hash).is_ok());
        assert!(verify_password("wrong", &hash).is_err());
    }

    #[test]
    fn test_garbage_hash_is_invalid_credentials() {
        let err = verify_password("pw", "not-a-phc-string").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }
}
