//! Floating chatbot entry point: launcher button, auth gating, panel shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the widget's state for its mounted lifetime and decides, from the
//! mount-time session check, whether a toggle opens the panel or sends the
//! user to login.

use leptos::prelude::*;

use crate::components::chat_window::ChatWindow;
use crate::state::auth::{AuthState, AuthStatus};
use crate::state::chat::ConversationState;
use crate::state::ui::{ToggleAction, WidgetUi, toggle_action};

/// Floating chat widget: a launcher button that swaps for the chat panel.
///
/// Renders nothing until the session check resolves, and nothing at all
/// for signed-out users.
#[component]
pub fn FloatingChatbot() -> impl IntoView {
    let auth = RwSignal::new(AuthState::default());
    let chat = RwSignal::new(ConversationState::default());
    let ui = RwSignal::new(WidgetUi::default());

    // Session check runs once per mount; the result is kept for the
    // widget's mounted lifetime rather than re-polled.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_session_user().await;
        let _ = auth.try_update(|a| a.resolve(user));
    });

    let on_toggle = move |_| match toggle_action(auth.get().status) {
        ToggleAction::Flip => ui.update(|u| u.open = !u.open),
        ToggleAction::RedirectToLogin => {
            ui.update(|u| u.open = false);
            #[cfg(feature = "hydrate")]
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
        ToggleAction::Ignore => {}
    };

    view! {
        <Show when=move || auth.get().status == AuthStatus::SignedIn>
            <Show
                when=move || ui.get().open
                fallback=move || {
                    view! {
                        <button class="chatbot-launcher" aria-label="Open chat" on:click=on_toggle>
                            "Chat"
                        </button>
                    }
                }
            >
                <div class="chatbot-panel">
                    <div class="chatbot-panel__header">
                        <span class="chatbot-panel__title">"AI Task Assistant"</span>
                        <button class="chatbot-panel__close" aria-label="Close chat" on:click=on_toggle>
                            "X"
                        </button>
                    </div>
                    <ChatWindow chat=chat/>
                </div>
            </Show>
        </Show>
    }
}
