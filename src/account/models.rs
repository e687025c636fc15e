//! Account models.

use serde::{Deserialize, Serialize};

/// Authenticated user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Backend identity.
    pub id: i64,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Account email address.
    #[serde(default)]
    pub email: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email address.
    pub email: String,
    /// Account password, sent as-is.
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Account password, sent as-is.
    pub password: String,
}

/// Response to `login` and `register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
    /// The authenticated (or freshly registered) user.
    pub user: User,
    /// Bearer token for subsequent requests; the backend may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
