//! Conversation state for the floating chatbot panel.
//!
//! DESIGN
//! ======
//! A send is a two-phase transition: `begin_send` records the user message
//! optimistically and raises the loading flag, `finish_send` appends the
//! assistant reply (or the fallback error text) and clears it. Keeping the
//! network await between the phases means the sequencing rules are plain
//! synchronous code, testable without a browser.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::ChatReply;

/// Shown in place of an assistant reply when the send fails.
pub const FALLBACK_REPLY: &str =
    "Sorry, I encountered an error processing your request. Please try again.";

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A single displayed chat message. Immutable once appended.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    /// ISO-8601 creation time, supplied by the caller.
    pub timestamp: String,
}

/// Result of one send round trip, as seen by the state holder.
#[derive(Clone, Debug)]
pub enum SendOutcome {
    /// The backend answered; carries the reply body.
    Reply(ChatReply),
    /// Transport error, non-2xx status, or unparseable reply.
    Failed,
}

/// Conversation state for one mounted widget.
///
/// Messages are append-only; nothing removes or reorders entries, so
/// insertion order is display order. The conversation id is assigned by
/// the server on the first reply and never changes afterwards.
///
/// Rendered through a Leptos `RwSignal`, which supplies the re-render
/// notification; the struct itself is plain data.
#[derive(Clone, Debug, Default)]
pub struct ConversationState {
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
    pub conversation_id: Option<String>,
}

impl ConversationState {
    /// Append a message. Never removes or reorders existing entries.
    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Set the loading flag; drives the input lockout and the
    /// thinking indicator.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Adopt the server-assigned conversation id from the first reply.
    ///
    /// Idempotent: later calls with the same id are no-ops, and a later
    /// call with a *different* id keeps the original. The server is not
    /// expected to rotate ids mid-conversation, so a mismatch is logged
    /// as a server-side anomaly rather than acted on.
    pub fn set_conversation_id(&mut self, id: String) {
        if let Some(existing) = &self.conversation_id {
            if *existing != id {
                log::warn!("ignoring conversation id {id}: already bound to {existing}");
            }
            return;
        }
        self.conversation_id = Some(id);
    }

    /// Start a send: append the user message (optimistic echo, text as
    /// typed) and raise the loading flag.
    ///
    /// Returns `false` without touching state when the trimmed text is
    /// empty or another send is already in flight.
    pub fn begin_send(&mut self, text: &str, timestamp: String) -> bool {
        if text.trim().is_empty() || self.loading {
            return false;
        }
        self.push_message(ChatMessage {
            role: Role::User,
            content: text.to_owned(),
            timestamp,
        });
        self.set_loading(true);
        true
    }

    /// Finish a send: append the assistant reply, or the fallback text on
    /// failure. Both paths clear the loading flag.
    pub fn finish_send(&mut self, outcome: SendOutcome, timestamp: String) {
        let content = match outcome {
            SendOutcome::Reply(reply) => {
                self.set_conversation_id(reply.conversation_id);
                reply.response
            }
            SendOutcome::Failed => FALLBACK_REPLY.to_owned(),
        };
        self.push_message(ChatMessage {
            role: Role::Assistant,
            content,
            timestamp,
        });
        self.set_loading(false);
    }
}
