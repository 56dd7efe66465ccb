use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use tower_cookies::{Cookie, Cookies, cookie::SameSite};
use uuid::Uuid;

use crate::{
    auth::{self, SessionClaims},
    web::{
        AppState, RequestContext, WebError, WebResult,
        dto::session::SessionResponse,
        error::ErrorResponse,
        middlewares::{self, SESSION_COOKIE},
    },
};

pub fn routes(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/api/v1/session",
            get(session_get_handler).delete(session_delete_handler),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            middlewares::extract_context_fn,
        ));

    Router::new()
        .route("/api/v1/session/start", post(session_start_handler))
        .merge(protected)
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/v1/session/start",
    description = "Starts a new learning session with the seed path and sets the session cookie",
    responses(
        (status = 201, description = "Session started", body = SessionResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    tag = "session"
)]
pub async fn session_start_handler(
    State(state): State<AppState>,
    cookies: Cookies,
) -> WebResult<impl IntoResponse> {
    // the session is registered only once its token is signed
    let id = Uuid::new_v4();
    let app = state.config().app();
    let claims = SessionClaims::new(id, app.session_ttl());
    let token = auth::generate_token(claims, app.session_secret())
        .map_err(|e| WebError::server_crypt_error(e.into()))?;

    let handle = state.pool().sessions().create_with_id(id).await;

    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookies.add(cookie);

    let session = handle.lock().await;
    Ok((StatusCode::CREATED, Json(SessionResponse::from(&*session))))
}

#[utoipa::path(
    get,
    path = "/api/v1/session",
    description = "Current stage and progress of the caller's session",
    responses(
        (status = 200, description = "Session found", body = SessionResponse),
        (status = 401, description = "No live session", body = ErrorResponse),
    ),
    tag = "session",
    security(
        ("cookie" = [])
    )
)]
pub async fn session_get_handler(ctx: RequestContext) -> WebResult<impl IntoResponse> {
    let active = ctx.session()?;
    let session = active.handle().lock().await;

    Ok((StatusCode::OK, Json(SessionResponse::from(&*session))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/session",
    description = "Abandons the caller's session; its state is discarded",
    responses(
        (status = 204, description = "Session discarded"),
        (status = 401, description = "No live session", body = ErrorResponse),
    ),
    tag = "session",
    security(
        ("cookie" = [])
    )
)]
pub async fn session_delete_handler(
    State(state): State<AppState>,
    cookies: Cookies,
    ctx: RequestContext,
) -> WebResult<impl IntoResponse> {
    let active = ctx.session()?;
    state.pool().sessions().remove(active.session_id()).await;

    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookies.remove(cookie);

    Ok(StatusCode::NO_CONTENT)
}
