pub mod error;
pub mod register;

pub use error::{ErrorResponse, HeraldApiError};
pub use register::{RegisterRequest, RegisterResponse, register};
