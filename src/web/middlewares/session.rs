use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::errors::ErrorKind;
use tower_cookies::Cookies;

use crate::{
    auth,
    web::{ActiveSession, AppState, RequestContext, error::WebError},
};

pub static SESSION_COOKIE: &str = "SID";

/// Resolves the `SID` cookie into a live session. Expired tokens and
/// sessions that were already purged yield an empty context.
pub async fn extract_context_fn(
    State(state): State<AppState>,
    cookies: Cookies,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = match cookies.get(SESSION_COOKIE) {
        Some(token) => token,
        None => {
            req.extensions_mut().insert(RequestContext::new(None));
            return Ok(next.run(req).await);
        }
    };

    let secret = state.config().app().session_secret();
    let claims = match auth::process_token(token.value(), secret) {
        Ok(claims) => Some(claims),
        Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => {
            tracing::debug!("session token expired");
            None
        }
        Err(e) => return Err(WebError::session_cookie_invalid(SESSION_COOKIE, e)),
    };

    let mut ctx = RequestContext::new(None);
    if let Some(claims) = claims {
        let id = claims
            .claims
            .sub
            .parse::<uuid::Uuid>()
            .map_err(|_| WebError::session_cookie_malformed(SESSION_COOKIE))?;

        match state.pool().sessions().get(id).await {
            Some(handle) => ctx = RequestContext::new(Some(ActiveSession::new(id, handle))),
            None => tracing::debug!(session = %id, "session cookie points at a discarded session"),
        }
    }

    req.extensions_mut().insert(ctx);
    Ok(next.run(req).await)
}
