//! Lead portal handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use common::AppResult;
use domain::LeadUser;

use crate::state::AppState;

pub fn lead_routes() -> Router<AppState> {
    Router::new().route("/users", get(list_lead_users))
}

/// Users visible to the lead portal
#[utoipa::path(
    get,
    path = "/lead/users",
    tag = "Lead",
    responses(
        (status = 200, description = "Lead users", body = Vec<LeadUser>)
    )
)]
pub async fn list_lead_users(State(state): State<AppState>) -> AppResult<Json<Vec<LeadUser>>> {
    Ok(Json(state.directory.list_lead_users().await?))
}
