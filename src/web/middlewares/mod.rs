mod session;
pub use session::{SESSION_COOKIE, extract_context_fn};
