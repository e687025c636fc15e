//! Bearer-token session handle.

use std::sync::{Arc, PoisonError, RwLock};

/// Shared handle to the current bearer token.
///
/// One `Session` is created per process and cloned into every client
/// that needs it; clones share the same token slot. All mutation goes
/// through [`Session::set_token`] and [`Session::clear`], and requests
/// snapshot the token at header-build time — a login or logout racing
/// an already in-flight call may or may not stamp that call, and no
/// ordering between the two is guaranteed.
///
/// The token lives only in memory; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    /// Create an empty session with no token set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current token.
    pub fn set_token(&self, token: impl Into<String>) {
        let mut slot = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(token.into());
    }

    /// Forget the current token.
    pub fn clear(&self) {
        let mut slot = self.token.write().unwrap_or_else(PoisonError::into_inner);
        *slot = None;
    }

    /// Snapshot the current token, if any.
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
