//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `chat`, `ui`) so individual
//! components can depend on small focused models. All state is owned by
//! the mounted widget and discarded on unmount.

pub mod auth;
pub mod chat;
pub mod ui;
