//! Storefront API client.

pub mod errors;
pub mod session;
pub mod service;

pub use errors::ApiError;
pub use service::*;
pub use session::Session;
