//! Chat send seam between the state holder and the REST layer.
//!
//! DESIGN
//! ======
//! The send round trip hides behind a trait so the orchestration in
//! [`resolve_send`] can be driven by a mock in native tests; the mounted
//! widget always uses [`HttpChatTransport`].

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use super::api;
use super::types::ChatReply;
use crate::state::chat::SendOutcome;

/// One chat send round trip against the backend.
#[allow(async_fn_in_trait)]
pub trait ChatTransport {
    /// Deliver `message` (with the conversation id once one is assigned)
    /// and await the assistant reply.
    async fn send(
        &self,
        message: &str,
        conversation_id: Option<&str>,
    ) -> Result<ChatReply, String>;
}

/// Production transport backed by the REST helpers in [`api`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpChatTransport;

impl ChatTransport for HttpChatTransport {
    async fn send(
        &self,
        message: &str,
        conversation_id: Option<&str>,
    ) -> Result<ChatReply, String> {
        api::send_chat_message(message, conversation_id).await
    }
}

/// Run exactly one send and fold the result into a state outcome.
///
/// Failures are logged here and reach the user only as the fallback
/// reply; nothing propagates past this boundary and nothing retries.
pub async fn resolve_send<T: ChatTransport>(
    transport: &T,
    message: &str,
    conversation_id: Option<&str>,
) -> SendOutcome {
    match transport.send(message, conversation_id).await {
        Ok(reply) => SendOutcome::Reply(reply),
        Err(e) => {
            log::error!("chat send failed: {e}");
            SendOutcome::Failed
        }
    }
}
