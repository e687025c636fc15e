//! Account data model.

pub mod models;

pub use models::{AuthPayload, Credentials, NewAccount, User};
