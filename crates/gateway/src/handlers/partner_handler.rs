//! Partner handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::Partner;

use crate::extractors::ValidatedJson;
use crate::state::AppState;

pub fn partner_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_partners).post(create_partner))
        .route("/:id", get(get_partner).put(put_partner))
}

#[utoipa::path(
    get,
    path = "/partners",
    tag = "Partners",
    responses(
        (status = 200, description = "All partners", body = Vec<Partner>)
    )
)]
pub async fn list_partners(State(state): State<AppState>) -> AppResult<Json<Vec<Partner>>> {
    Ok(Json(state.directory.list_partners().await?))
}

#[utoipa::path(
    post,
    path = "/partners",
    tag = "Partners",
    request_body = Partner,
    responses(
        (status = 201, description = "Partner created", body = Partner),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_partner(
    State(state): State<AppState>,
    ValidatedJson(partner): ValidatedJson<Partner>,
) -> AppResult<(StatusCode, Json<Partner>)> {
    let created = state.directory.create_partner(partner).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/partners/{id}",
    tag = "Partners",
    params(
        ("id" = String, Path, description = "Partner ID")
    ),
    responses(
        (status = 200, description = "Partner", body = Partner),
        (status = 404, description = "Partner not found")
    )
)]
pub async fn get_partner(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Partner>> {
    Ok(Json(state.directory.get_partner(&id).await?))
}

#[utoipa::path(
    put,
    path = "/partners/{id}",
    tag = "Partners",
    params(
        ("id" = String, Path, description = "Partner ID")
    ),
    request_body = Partner,
    responses(
        (status = 200, description = "Partner saved", body = Partner),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn put_partner(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(partner): ValidatedJson<Partner>,
) -> AppResult<Json<Partner>> {
    Ok(Json(state.directory.put_partner(&id, partner).await?))
}
