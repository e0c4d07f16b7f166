//! Wire schema shared with the chat backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Signed-in user returned by the session endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
}

/// Body for `POST /api/chat`.
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest {
    pub message: String,
    /// Omitted on the first message of a conversation; the server assigns
    /// an id in its reply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

/// Reply from the chat endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatReply {
    pub conversation_id: String,
    pub response: String,
}
