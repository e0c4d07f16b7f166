//! Chat panel body: message history plus the send input.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives the two-phase send on the conversation state it is handed:
//! optimistic user echo, one remote call, assistant reply or fallback.

use leptos::prelude::*;

use crate::state::chat::{ConversationState, Role};

/// Message list and input row for one open conversation.
#[component]
pub fn ChatWindow(chat: RwSignal<ConversationState>) -> impl IntoView {
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let state = chat.get();
        let _ = state.messages.len();
        let _ = state.loading;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        let accepted = chat
            .try_update(|c| c.begin_send(&text, crate::util::time::now_iso8601()))
            .unwrap_or(false);
        if !accepted {
            return;
        }
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let conversation_id = chat.get_untracked().conversation_id.clone();
            let outcome = crate::net::transport::resolve_send(
                &crate::net::transport::HttpChatTransport,
                &text,
                conversation_id.as_deref(),
            )
            .await;
            // The panel may have been torn down while the request was in
            // flight; try_update drops the reply instead of touching a
            // disposed signal.
            let _ = chat.try_update(|c| c.finish_send(outcome, crate::util::time::now_iso8601()));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = text;
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.get().loading;

    view! {
        <div class="chat-window">
            <div class="chat-window__messages" node_ref=messages_ref>
                {move || {
                    chat.get()
                        .messages
                        .iter()
                        .map(|msg| {
                            let content = msg.content.clone();
                            let is_user = msg.role == Role::User;
                            view! {
                                <div
                                    class="chat-window__message"
                                    class:chat-window__message--user=is_user
                                >
                                    <span>{content}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}

                {move || {
                    chat.get()
                        .loading
                        .then(|| view! { <div class="chat-window__thinking">"AI is thinking..."</div> })
                }}
            </div>

            <div class="chat-window__input-row">
                <input
                    class="chat-window__input"
                    type="text"
                    placeholder="Type your message here..."
                    disabled=move || chat.get().loading
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="chat-window__send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
