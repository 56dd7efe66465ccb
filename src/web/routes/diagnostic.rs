use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};

use crate::{
    model::{ResourceTyped, entity::DiagnosticProfile},
    web::{AppState, RequestContext, WebError, WebResult, error::ErrorResponse, middlewares},
};

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/diagnostic",
            get(diagnostic_get_handler).put(diagnostic_submit_handler),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            middlewares::extract_context_fn,
        ))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/v1/diagnostic",
    description = "Diagnostic answers stored in the session",
    responses(
        (status = 200, description = "Diagnostic found", body = DiagnosticProfile),
        (status = 404, description = "Diagnostic not answered yet", body = ErrorResponse),
        (status = 401, description = "No live session", body = ErrorResponse),
    ),
    tag = "diagnostic",
    security(
        ("cookie" = [])
    )
)]
pub async fn diagnostic_get_handler(ctx: RequestContext) -> WebResult<impl IntoResponse> {
    let active = ctx.session()?;
    let session = active.handle().lock().await;

    let profile = session
        .profile()
        .cloned()
        .ok_or_else(|| WebError::resource_not_found(DiagnosticProfile::get_resource_type()))?;

    Ok((StatusCode::OK, Json(profile)))
}

#[utoipa::path(
    put,
    path = "/api/v1/diagnostic",
    description = "Submits (or replaces) the diagnostic questionnaire answers",
    request_body = DiagnosticProfile,
    responses(
        (status = 200, description = "Diagnostic stored", body = DiagnosticProfile),
        (status = 400, description = "Answers rejected", body = ErrorResponse),
        (status = 401, description = "No live session", body = ErrorResponse),
    ),
    tag = "diagnostic",
    security(
        ("cookie" = [])
    )
)]
pub async fn diagnostic_submit_handler(
    ctx: RequestContext,
    Json(payload): Json<DiagnosticProfile>,
) -> WebResult<impl IntoResponse> {
    let active = ctx.session()?;
    let mut session = active.handle().lock().await;

    let profile = session.submit_diagnostic(payload)?.clone();
    Ok((StatusCode::OK, Json(profile)))
}
