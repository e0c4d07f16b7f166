//! REST helpers for the session and chat endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since both endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The session check returns `Option` so a failed query reads the same as
//! a missing session (fail closed). Chat sends return `Result` so the
//! caller can surface the fallback reply on failure. Neither helper
//! panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatReply, SessionUser};

#[cfg(any(test, feature = "hydrate"))]
fn chat_request_failed_message(status: u16) -> String {
    format!("chat request failed: {status}")
}

/// Fetch the signed-in user from `/api/auth/me`.
/// Returns `None` if not authenticated, if the query fails, or on the server.
pub async fn fetch_session_user() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get("/api/auth/me").send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("session check failed: {e}; treating as signed out");
                return None;
            }
        };
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Send one chat message via `POST /api/chat`, carrying the conversation
/// id once the server has assigned one.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent, the server
/// responds with a non-OK status, or the reply body does not parse.
pub async fn send_chat_message(
    message: &str,
    conversation_id: Option<&str>,
) -> Result<ChatReply, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::ChatRequest {
            message: message.to_owned(),
            conversation_id: conversation_id.map(str::to_owned),
        };
        let resp = gloo_net::http::Request::post("/api/chat")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(chat_request_failed_message(resp.status()));
        }
        resp.json::<ChatReply>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (message, conversation_id);
        Err("not available on server".to_owned())
    }
}
