//! Payment handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use common::AppResult;
use domain::{Payment, PaymentInput};

use crate::extractors::JsonBody;
use crate::state::AppState;

pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_payments).post(create_payment))
        .route("/:id", get(get_payment).put(update_payment))
}

/// List every payment
#[utoipa::path(
    get,
    path = "/payments",
    tag = "Payments",
    responses(
        (status = 200, description = "All payments", body = Vec<Payment>)
    )
)]
pub async fn list_payments(State(state): State<AppState>) -> AppResult<Json<Vec<Payment>>> {
    Ok(Json(state.payments.list_all_payments().await?))
}

/// Record a payment
#[utoipa::path(
    post,
    path = "/payments",
    tag = "Payments",
    request_body = PaymentInput,
    responses(
        (status = 201, description = "Payment recorded", body = Payment),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_payment(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<PaymentInput>,
) -> AppResult<(StatusCode, Json<Payment>)> {
    let payment = state.payments.create_payment(input).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

#[utoipa::path(
    get,
    path = "/payments/{id}",
    tag = "Payments",
    params(
        ("id" = String, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Payment", body = Payment),
        (status = 404, description = "Payment not found")
    )
)]
pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Payment>> {
    Ok(Json(state.payments.get_payment(&id).await?))
}

/// Update fields of an existing payment
#[utoipa::path(
    put,
    path = "/payments/{id}",
    tag = "Payments",
    params(
        ("id" = String, Path, description = "Payment ID")
    ),
    request_body = PaymentInput,
    responses(
        (status = 200, description = "Payment updated", body = Payment),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Payment not found")
    )
)]
pub async fn update_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<PaymentInput>,
) -> AppResult<Json<Payment>> {
    Ok(Json(state.payments.update_payment(&id, input).await?))
}
