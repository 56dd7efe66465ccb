mod jwt;
pub use jwt::{SessionClaims, generate_token, process_token};
mod error;
pub use error::{CryptError, CryptResult};
