//! Request context, i.e. the learning session bound to the caller's cookie.
//!

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::model::SessionHandle;
use crate::web::{WebResult, error::WebError};

#[derive(Debug, Clone)]
pub struct ActiveSession {
    session_id: Uuid,
    handle: SessionHandle,
}

impl ActiveSession {
    pub fn new(session_id: Uuid, handle: SessionHandle) -> Self {
        Self { session_id, handle }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn handle(&self) -> &SessionHandle {
        &self.handle
    }
}

#[derive(Debug, Clone)]
pub struct RequestContext {
    maybe_session: Option<ActiveSession>,
}

impl RequestContext {
    pub fn new(maybe_session: Option<ActiveSession>) -> Self {
        Self { maybe_session }
    }

    pub fn maybe_session(&self) -> Option<&ActiveSession> {
        self.maybe_session.as_ref()
    }

    pub fn session(&self) -> WebResult<&ActiveSession> {
        self.maybe_session.as_ref().ok_or(WebError::session_required())
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ctx = parts.extensions.get::<RequestContext>();
        if let Some(ctx) = ctx {
            Ok(ctx.clone())
        } else {
            Ok(RequestContext::new(None))
        }
    }
}
