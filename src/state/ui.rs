//! Open/closed chrome state for the floating widget.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`chat`,
//! `auth`), and makes the toggle decision a pure function of the auth
//! status so the transition table is testable without mounting anything.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::auth::AuthStatus;

/// Panel chrome state for one mounted widget.
#[derive(Clone, Copy, Debug, Default)]
pub struct WidgetUi {
    pub open: bool,
}

/// What the launcher should do in response to a toggle click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    /// Flip the open/closed flag.
    Flip,
    /// Keep the panel closed and send the user to the login page.
    RedirectToLogin,
    /// Session check still pending; drop the click.
    Ignore,
}

/// Decide how a toggle click is handled under the given auth status.
#[must_use]
pub fn toggle_action(status: AuthStatus) -> ToggleAction {
    match status {
        AuthStatus::Checking => ToggleAction::Ignore,
        AuthStatus::SignedOut => ToggleAction::RedirectToLogin,
        AuthStatus::SignedIn => ToggleAction::Flip,
    }
}
