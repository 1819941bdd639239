//! User account handlers — update, list, get, delete.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::dto::request::UpdateUserRequest;
use crate::dto::response::{MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// PUT /api/auth/user/{id} — self-or-organizer.
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .user_service
        .update(auth.context(), id, req.into())
        .await?;
    Ok(Json(user.into()))
}

/// GET /api/auth/users — organizer-only.
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.user_service.list(auth.context()).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/auth/user/{id} — organizer-only.
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.get(auth.context(), id).await?;
    Ok(Json(user.into()))
}

/// DELETE /api/auth/user/{id} — organizer-only.
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.user_service.delete(auth.context(), id).await?;
    Ok(Json(MessageResponse::new(
        "User has been deleted successfully",
    )))
}
