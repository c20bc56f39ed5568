pub mod claims;
pub mod errors;
pub mod service;

pub use claims::Claims;
pub use errors::TokenError;
pub use service::TokenService;
pub use service::MIN_SECRET_BYTES;
