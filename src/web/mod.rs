mod context;
pub use context::{ActiveSession, RequestContext};

mod error;
pub use error::{ErrorResponse, WebError, WebResult};

pub mod dto;

pub mod middlewares;

mod state;
pub use state::AppState;

pub mod routes;

pub mod doc;
