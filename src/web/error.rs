use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::{
    auth::CryptError,
    error::log_error,
    model::{ModelError, ResourceType},
};

pub type WebResult<T> = std::result::Result<T, WebError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("SessionCookieInvalid, cookie: {cookie}. Error: {error}")]
    SessionCookieInvalid {
        cookie: String,
        error: jsonwebtoken::errors::Error,
    },

    #[error("SessionCookieMalformed, cookie: {cookie}")]
    SessionCookieMalformed { cookie: String },

    #[error("SessionRequired")]
    SessionRequired,
}

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("ResourceNotFound: {resource_type:?}")]
    ResourceNotFound { resource_type: ResourceType },
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("ServerCryptError: {0}")]
    ServerCryptError(#[from] crate::auth::CryptError),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    pub fn client_display(&self) -> String {
        String::from("Internal server error.")
    }
}

impl SessionError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::SessionRequired => StatusCode::UNAUTHORIZED,
            Self::SessionCookieInvalid { .. } => StatusCode::BAD_REQUEST,
            Self::SessionCookieMalformed { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn client_display(&self) -> String {
        match self {
            Self::SessionCookieInvalid { .. } | Self::SessionCookieMalformed { .. } => {
                String::from("Session error, cookie invalid.")
            }
            Self::SessionRequired => {
                String::from("Session error, start a session first.")
            }
        }
    }
}

impl ResourceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn client_display(&self) -> String {
        match self {
            Self::ResourceNotFound { resource_type } => {
                format!("Resource error, {resource_type} not found.")
            }
        }
    }
}

impl ModelError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ModuleNotFound(_) | Self::UnknownPlan(_) => StatusCode::NOT_FOUND,
            Self::ModuleLocked(_) | Self::ProjectLocked { .. } => StatusCode::FORBIDDEN,
            Self::PaymentRequired(_) => StatusCode::PAYMENT_REQUIRED,
            Self::AlreadyPaid | Self::InvalidProjectTransition { .. } => StatusCode::CONFLICT,
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn client_display(&self) -> String {
        match self {
            Self::ModuleNotFound(id) => format!("Workflow error, module {id} not found."),
            Self::ModuleLocked(id) => format!("Workflow error, module {id} is locked."),
            Self::PaymentRequired(id) => {
                format!("Workflow error, module {id} requires a confirmed payment.")
            }
            Self::UnknownPlan(id) => format!("Workflow error, plan {id} not found."),
            Self::AlreadyPaid => String::from("Workflow error, payment already confirmed."),
            Self::ProjectLocked { progress } => format!(
                "Workflow error, final project opens at 80% progress (currently {progress}%)."
            ),
            Self::InvalidProjectTransition { from, action } => {
                format!("Workflow error, cannot {action} while the project is {from}.")
            }
            Self::InvalidInput(reason) => format!("Workflow error, {reason}."),
        }
    }
}

#[derive(Debug, Error)]
pub enum WebError {
    #[error("ResourceError - {0}")]
    ResourceError(#[from] ResourceError),
    #[error("SessionError - {0}")]
    SessionError(#[from] SessionError),
    #[error("WorkflowError - {0}")]
    WorkflowError(#[from] ModelError),
    #[error("ServerError - {0}")]
    ServerError(#[from] ServerError),
}

impl WebError {
    pub fn resource_not_found(r#type: ResourceType) -> Self {
        Self::ResourceError(ResourceError::ResourceNotFound {
            resource_type: r#type,
        })
    }

    pub fn session_cookie_invalid<S: Into<String>>(
        cookie: S,
        error: jsonwebtoken::errors::Error,
    ) -> Self {
        Self::SessionError(SessionError::SessionCookieInvalid {
            cookie: cookie.into(),
            error,
        })
    }

    pub fn session_cookie_malformed<S: Into<String>>(cookie: S) -> Self {
        Self::SessionError(SessionError::SessionCookieMalformed {
            cookie: cookie.into(),
        })
    }

    pub fn session_required() -> Self {
        Self::SessionError(SessionError::SessionRequired)
    }

    pub fn server_crypt_error(e: CryptError) -> Self {
        Self::ServerError(ServerError::ServerCryptError(e))
    }

    pub fn status_code(&self) -> axum::http::StatusCode {
        match self {
            Self::ResourceError(e) => e.status_code(),
            Self::SessionError(e) => e.status_code(),
            Self::WorkflowError(e) => e.status_code(),
            Self::ServerError(e) => e.status_code(),
        }
    }

    pub fn client_display(&self) -> String {
        match self {
            Self::ResourceError(e) => e.client_display(),
            Self::SessionError(e) => e.client_display(),
            Self::WorkflowError(e) => e.client_display(),
            Self::ServerError(e) => e.client_display(),
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message for the client
    pub message: String,
    /// HTTP status code (stringified)
    pub status_code: String,
    /// Optional debug details (only in debug mode)
    pub details: Option<String>,
}

impl IntoResponse for WebError {
    fn into_response(self) -> axum::response::Response {
        let status_code = self.status_code();
        if status_code.is_server_error() {
            log_error(&self);
        } else {
            tracing::debug!(status = %status_code, "{}", self);
        }

        let display = self.client_display();

        let body = ErrorResponse {
            message: display,
            status_code: status_code.as_str().to_string(),
            details: if cfg!(debug_assertions) {
                Some(self.to_string())
            } else {
                None
            },
        };

        (status_code, Json(body)).into_response()
    }
}
