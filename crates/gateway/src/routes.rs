//! Route configuration.

use axum::{response::Json, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::handlers::{
    customer_routes, graphql_routes, health_routes, lead_routes, partner_routes, payment_routes,
    profile_routes,
};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/health", health_routes())
        .route("/api-docs/openapi.json", get(openapi_json))
        .nest("/customers", customer_routes())
        .nest("/partners", partner_routes())
        .nest("/users", profile_routes())
        .nest("/payments", payment_routes())
        .nest("/lead", lead_routes())
        .nest("/graphql", graphql_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
