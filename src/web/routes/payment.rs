use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};

use crate::{
    model::{
        ResourceTyped,
        entity::{PaymentReceipt, Plan},
    },
    web::{
        AppState, RequestContext, WebError, WebResult, dto::payment::PaymentConfirmBody,
        error::ErrorResponse, middlewares,
    },
};

pub fn routes(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/v1/payment", get(payment_get_handler))
        .route("/api/v1/payment/confirm", post(payment_confirm_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            middlewares::extract_context_fn,
        ));

    Router::new()
        .route("/api/v1/payment/plans", get(plans_list_handler))
        .merge(protected)
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/v1/payment/plans",
    description = "Plans offered for premium modules",
    responses(
        (status = 200, description = "Plan catalogue", body = Vec<Plan>),
    ),
    tag = "payment"
)]
pub async fn plans_list_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(Plan::catalog()))
}

#[utoipa::path(
    get,
    path = "/api/v1/payment",
    description = "Receipt of the session's confirmed payment",
    responses(
        (status = 200, description = "Payment confirmed", body = PaymentReceipt),
        (status = 404, description = "No payment yet", body = ErrorResponse),
        (status = 401, description = "No live session", body = ErrorResponse),
    ),
    tag = "payment",
    security(
        ("cookie" = [])
    )
)]
pub async fn payment_get_handler(ctx: RequestContext) -> WebResult<impl IntoResponse> {
    let active = ctx.session()?;
    let session = active.handle().lock().await;

    let receipt = session
        .payment()
        .cloned()
        .ok_or_else(|| WebError::resource_not_found(PaymentReceipt::get_resource_type()))?;

    Ok((StatusCode::OK, Json(receipt)))
}

#[utoipa::path(
    post,
    path = "/api/v1/payment/confirm",
    description = "Records the payment provider's confirmation; premium modules become completable",
    request_body = PaymentConfirmBody,
    responses(
        (status = 200, description = "Payment confirmed", body = PaymentReceipt),
        (status = 404, description = "Unknown plan", body = ErrorResponse),
        (status = 409, description = "Payment already confirmed", body = ErrorResponse),
        (status = 401, description = "No live session", body = ErrorResponse),
    ),
    tag = "payment",
    security(
        ("cookie" = [])
    )
)]
pub async fn payment_confirm_handler(
    ctx: RequestContext,
    Json(payload): Json<PaymentConfirmBody>,
) -> WebResult<impl IntoResponse> {
    let active = ctx.session()?;
    let mut session = active.handle().lock().await;

    let receipt = session
        .confirm_payment(&payload.plan_id, payload.method)?
        .clone();

    Ok((StatusCode::OK, Json(receipt)))
}
