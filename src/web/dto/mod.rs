pub mod path;
pub mod payment;
pub mod project;
pub mod session;
