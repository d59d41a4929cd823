//! Customer handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::Customer;

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Create customer routes
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route("/:id", get(get_customer).put(put_customer))
}

/// List all customers
#[utoipa::path(
    get,
    path = "/customers",
    tag = "Customers",
    responses(
        (status = 200, description = "All customers", body = Vec<Customer>)
    )
)]
pub async fn list_customers(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    Ok(Json(state.directory.list_customers().await?))
}

/// Create a customer
#[utoipa::path(
    post,
    path = "/customers",
    tag = "Customers",
    request_body = Customer,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    ValidatedJson(customer): ValidatedJson<Customer>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let created = state.directory.create_customer(customer).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get customer by ID
#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "Customers",
    params(
        ("id" = String, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer", body = Customer),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Customer>> {
    Ok(Json(state.directory.get_customer(&id).await?))
}

/// Create or replace a customer
#[utoipa::path(
    put,
    path = "/customers/{id}",
    tag = "Customers",
    params(
        ("id" = String, Path, description = "Customer ID")
    ),
    request_body = Customer,
    responses(
        (status = 200, description = "Customer saved", body = Customer),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn put_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(customer): ValidatedJson<Customer>,
) -> AppResult<Json<Customer>> {
    Ok(Json(state.directory.put_customer(&id, customer).await?))
}
