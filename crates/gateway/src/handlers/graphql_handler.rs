//! Query-layer endpoint.
//!
//! Accepts the same event shape the resolver receives under Lambda, which
//! lets the query layer run behind the local server.

use axum::{extract::State, response::Json, routing::post, Router};
use serde_json::Value;

use common::AppResult;
use referral_service_lib::resolver::ResolverEvent;

use crate::extractors::JsonBody;
use crate::state::AppState;

pub fn graphql_routes() -> Router<AppState> {
    Router::new().route("/", post(resolve))
}

pub async fn resolve(
    State(state): State<AppState>,
    JsonBody(event): JsonBody<ResolverEvent>,
) -> AppResult<Json<Value>> {
    Ok(Json(state.resolver.resolve(&event).await?))
}
