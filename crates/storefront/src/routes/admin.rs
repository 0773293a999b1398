//! Admin route handlers.
//!
//! Session-cookie login for the admin panel. A successful login stores the
//! admin identity in the session; the `RequireAdmin` extractor guards the
//! protected product-management endpoints.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::db::admins::AdminRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::{CurrentAdmin, session_keys};
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub admin: CurrentAdmin,
}

/// Create-admin request body.
#[derive(Debug, Deserialize)]
pub struct CreateAdminBody {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login and start an admin session.
#[instrument(skip(state, session, body), fields(username = %body.username))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginBody>,
) -> Result<Json<LoginResponse>> {
    let admin = AuthService::new(state.pool())
        .login(&body.username, &body.password)
        .await?;

    session
        .insert(session_keys::CURRENT_ADMIN, &admin)
        .await
        .map_err(|e| AppError::Internal(format!("failed to persist session: {e}")))?;

    tracing::info!(admin_id = admin.id, "Admin logged in");

    Ok(Json(LoginResponse {
        message: "Login successful",
        admin,
    }))
}

/// Current admin profile.
///
/// The demo identity (id 0) has no database row and is returned as-is.
#[instrument(skip(state))]
pub async fn profile(
    State(state): State<AppState>,
    RequireAdmin(current): RequireAdmin,
) -> Result<Json<CurrentAdmin>> {
    if current.id == 0 {
        return Ok(Json(current));
    }

    let admin = AdminRepository::new(state.pool())
        .get_by_id(current.id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Admin account not found".to_owned()))?;

    Ok(Json(CurrentAdmin {
        id: admin.id,
        username: admin.username,
        email: admin.email,
    }))
}

/// End the admin session.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Json<serde_json::Value>> {
    session
        .flush()
        .await
        .map_err(|e| AppError::Internal(format!("failed to clear session: {e}")))?;

    Ok(Json(serde_json::json!({ "message": "Logged out successfully" })))
}

/// Create a new admin account.
#[instrument(skip(state, body), fields(username = %body.username))]
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_current): RequireAdmin,
    Json(body): Json<CreateAdminBody>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let admin = AuthService::new(state.pool())
        .create_admin(&body.username, &body.email, &body.password)
        .await?;

    tracing::info!(admin_id = admin.id, "Admin account created");

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Admin created successfully",
            "admin": admin,
        })),
    ))
}
