//! User profile handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::{Payment, UserProfile};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Create user profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/:id", get(get_profile).put(put_profile))
        .route("/:id/payments", get(list_user_payments))
}

/// Get a user's profile
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserProfile),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserProfile>> {
    Ok(Json(state.directory.get_user_profile(&id).await?))
}

/// Create or replace a user's profile
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UserProfile,
    responses(
        (status = 200, description = "Profile saved", body = UserProfile),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn put_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(profile): ValidatedJson<UserProfile>,
) -> AppResult<Json<UserProfile>> {
    Ok(Json(state.directory.put_user_profile(&id, profile).await?))
}

/// Payments made to a user
#[utoipa::path(
    get,
    path = "/users/{id}/payments",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user's payments", body = Vec<Payment>)
    )
)]
pub async fn list_user_payments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Payment>>> {
    Ok(Json(state.payments.list_payments_for_user(&id).await?))
}
