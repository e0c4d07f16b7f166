//! Networking modules for the chat backend's REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the raw REST calls, `transport` is the mockable send seam
//! the widget drives, and `types` defines the shared wire schema.

pub mod api;
pub mod transport;
pub mod types;
