//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The chatbot launcher gates all rendering on this state: nothing is shown
//! until the session check resolves, and unauthenticated users are sent to
//! login instead of opening the panel.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::SessionUser;

/// Result of the mount-time session check.
///
/// Checked exactly once per mounted widget and cached for its lifetime.
/// A failed check reads as `SignedOut` (fail closed), never as retryable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Session query still in flight.
    #[default]
    Checking,
    /// A session is present.
    SignedIn,
    /// No session, or the session query failed.
    SignedOut,
}

/// Authentication state tracking the session check and the signed-in user.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub status: AuthStatus,
    pub user: Option<SessionUser>,
}

impl AuthState {
    /// Apply the result of the session query. `None` covers both a missing
    /// session and a failed check.
    pub fn resolve(&mut self, user: Option<SessionUser>) {
        self.status = if user.is_some() {
            AuthStatus::SignedIn
        } else {
            AuthStatus::SignedOut
        };
        self.user = user;
    }
}
