//! Widget UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The launcher owns the widget state and gates visibility; the chat
//! window renders the conversation and drives sends.

pub mod chat_window;
pub mod chatbot_launcher;
