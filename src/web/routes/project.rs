use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};

use crate::{
    model::entity::ProjectSubmission,
    web::{
        AppState, RequestContext, WebResult, dto::project::ProjectResponse,
        error::ErrorResponse, middlewares,
    },
};

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/project", get(project_get_handler))
        .route("/api/v1/project/submit", post(project_submit_handler))
        .route("/api/v1/project/review", post(project_review_handler))
        .route("/api/v1/project/complete", post(project_complete_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            middlewares::extract_context_fn,
        ))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/v1/project",
    description = "State of the final certification project",
    responses(
        (status = 200, description = "Project state", body = ProjectResponse),
        (status = 401, description = "No live session", body = ErrorResponse),
    ),
    tag = "project",
    security(
        ("cookie" = [])
    )
)]
pub async fn project_get_handler(ctx: RequestContext) -> WebResult<impl IntoResponse> {
    let active = ctx.session()?;
    let session = active.handle().lock().await;

    Ok((StatusCode::OK, Json(ProjectResponse::from(&*session))))
}

#[utoipa::path(
    post,
    path = "/api/v1/project/submit",
    description = "Submits the final project. Requires 80% progress",
    request_body = ProjectSubmission,
    responses(
        (status = 200, description = "Project submitted", body = ProjectResponse),
        (status = 400, description = "Submission rejected", body = ErrorResponse),
        (status = 403, description = "Project still locked", body = ErrorResponse),
        (status = 409, description = "Project already submitted", body = ErrorResponse),
        (status = 401, description = "No live session", body = ErrorResponse),
    ),
    tag = "project",
    security(
        ("cookie" = [])
    )
)]
pub async fn project_submit_handler(
    ctx: RequestContext,
    Json(payload): Json<ProjectSubmission>,
) -> WebResult<impl IntoResponse> {
    let active = ctx.session()?;
    let mut session = active.handle().lock().await;

    session.submit_project(payload)?;
    Ok((StatusCode::OK, Json(ProjectResponse::from(&*session))))
}

#[utoipa::path(
    post,
    path = "/api/v1/project/review",
    description = "Sends a submitted project to peer review",
    responses(
        (status = 200, description = "Review requested", body = ProjectResponse),
        (status = 409, description = "Project is not in the submitted state", body = ErrorResponse),
        (status = 401, description = "No live session", body = ErrorResponse),
    ),
    tag = "project",
    security(
        ("cookie" = [])
    )
)]
pub async fn project_review_handler(ctx: RequestContext) -> WebResult<impl IntoResponse> {
    let active = ctx.session()?;
    let mut session = active.handle().lock().await;

    session.request_review()?;
    Ok((StatusCode::OK, Json(ProjectResponse::from(&*session))))
}

#[utoipa::path(
    post,
    path = "/api/v1/project/complete",
    description = "Closes peer review and completes the project",
    responses(
        (status = 200, description = "Project completed", body = ProjectResponse),
        (status = 409, description = "Project is not in review", body = ErrorResponse),
        (status = 401, description = "No live session", body = ErrorResponse),
    ),
    tag = "project",
    security(
        ("cookie" = [])
    )
)]
pub async fn project_complete_handler(ctx: RequestContext) -> WebResult<impl IntoResponse> {
    let active = ctx.session()?;
    let mut session = active.handle().lock().await;

    session.complete_review()?;
    Ok((StatusCode::OK, Json(ProjectResponse::from(&*session))))
}
