use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};

use crate::{
    model::ModelError,
    web::{
        AppState, RequestContext, WebResult,
        dto::path::{ModuleResponse, PathResponse},
        error::ErrorResponse,
        middlewares,
    },
};

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/path", get(path_get_handler))
        .route("/api/v1/path/modules/{id}", get(module_get_handler))
        .route("/api/v1/path/modules/{id}/complete", post(module_complete_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            middlewares::extract_context_fn,
        ))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/v1/path",
    description = "The session's learning path: modules in order, progress and whether the final project is open",
    responses(
        (status = 200, description = "Learning path", body = PathResponse),
        (status = 401, description = "No live session", body = ErrorResponse),
    ),
    tag = "path",
    security(
        ("cookie" = [])
    )
)]
pub async fn path_get_handler(ctx: RequestContext) -> WebResult<impl IntoResponse> {
    let active = ctx.session()?;
    let session = active.handle().lock().await;

    Ok((StatusCode::OK, Json(PathResponse::from(session.tracker()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/path/modules/{module_id}",
    description = "Opens a module for viewing. Locked modules cannot be viewed",
    params(
        ("module_id" = String, Path, description = "ID of the module, e.g. `m1`")
    ),
    responses(
        (status = 200, description = "Module found", body = ModuleResponse),
        (status = 403, description = "Module is locked", body = ErrorResponse),
        (status = 404, description = "Module not found", body = ErrorResponse),
        (status = 401, description = "No live session", body = ErrorResponse),
    ),
    tag = "path",
    security(
        ("cookie" = [])
    )
)]
pub async fn module_get_handler(
    Path(id): Path<String>,
    ctx: RequestContext,
) -> WebResult<impl IntoResponse> {
    let active = ctx.session()?;
    let session = active.handle().lock().await;

    let (index, module) = session
        .tracker()
        .modules()
        .iter()
        .enumerate()
        .find(|(_, m)| m.id() == id)
        .ok_or_else(|| ModelError::ModuleNotFound(id.clone()))?;

    if !module.is_accessible() {
        return Err(ModelError::ModuleLocked(id).into());
    }

    Ok((StatusCode::OK, Json(ModuleResponse::new(index + 1, module))))
}

#[utoipa::path(
    post,
    path = "/api/v1/path/modules/{module_id}/complete",
    description = "Marks an available module as completed and opens the next one",
    params(
        ("module_id" = String, Path, description = "ID of the module to complete")
    ),
    responses(
        (status = 200, description = "Module completed, updated path returned", body = PathResponse),
        (status = 402, description = "Premium module, payment not confirmed", body = ErrorResponse),
        (status = 403, description = "Module is locked", body = ErrorResponse),
        (status = 404, description = "Module not found", body = ErrorResponse),
        (status = 401, description = "No live session", body = ErrorResponse),
    ),
    tag = "path",
    security(
        ("cookie" = [])
    )
)]
pub async fn module_complete_handler(
    Path(id): Path<String>,
    ctx: RequestContext,
) -> WebResult<impl IntoResponse> {
    let active = ctx.session()?;
    let mut session = active.handle().lock().await;

    session.complete_module(&id)?;
    Ok((StatusCode::OK, Json(PathResponse::from(session.tracker()))))
}
