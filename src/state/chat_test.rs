use super::*;

fn ts() -> String {
    "2026-08-29T12:00:00.000Z".to_owned()
}

fn reply(conversation_id: &str, response: &str) -> SendOutcome {
    SendOutcome::Reply(ChatReply {
        conversation_id: conversation_id.to_owned(),
        response: response.to_owned(),
    })
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_has_no_messages() {
    let state = ConversationState::default();
    assert!(state.messages.is_empty());
}

#[test]
fn default_not_loading_and_no_conversation_id() {
    let state = ConversationState::default();
    assert!(!state.loading);
    assert!(state.conversation_id.is_none());
}

// =============================================================
// begin_send
// =============================================================

#[test]
fn begin_send_appends_user_message_and_raises_loading() {
    let mut state = ConversationState::default();
    assert!(state.begin_send("Hello", ts()));
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, Role::User);
    assert_eq!(state.messages[0].content, "Hello");
    assert_eq!(state.messages[0].timestamp, ts());
    assert!(state.loading);
}

#[test]
fn begin_send_keeps_text_as_typed() {
    let mut state = ConversationState::default();
    assert!(state.begin_send("  padded  ", ts()));
    assert_eq!(state.messages[0].content, "  padded  ");
}

#[test]
fn begin_send_rejects_empty_text() {
    let mut state = ConversationState::default();
    assert!(!state.begin_send("", ts()));
    assert!(state.messages.is_empty());
    assert!(!state.loading);
}

#[test]
fn begin_send_rejects_whitespace_only_text() {
    let mut state = ConversationState::default();
    assert!(!state.begin_send("   \n\t ", ts()));
    assert!(state.messages.is_empty());
    assert!(!state.loading);
}

#[test]
fn begin_send_rejects_while_another_send_is_in_flight() {
    let mut state = ConversationState::default();
    assert!(state.begin_send("first", ts()));
    assert!(!state.begin_send("second", ts()));
    assert_eq!(state.messages.len(), 1);
    assert!(state.loading);
}

// =============================================================
// finish_send: success path
// =============================================================

#[test]
fn finish_send_reply_appends_assistant_and_clears_loading() {
    let mut state = ConversationState::default();
    state.begin_send("Hello", ts());
    state.finish_send(reply("c1", "Hi there"), ts());

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].role, Role::User);
    assert_eq!(state.messages[0].content, "Hello");
    assert_eq!(state.messages[1].role, Role::Assistant);
    assert_eq!(state.messages[1].content, "Hi there");
    assert_eq!(state.conversation_id.as_deref(), Some("c1"));
    assert!(!state.loading);
}

#[test]
fn conversation_id_is_set_by_first_reply_only() {
    let mut state = ConversationState::default();
    state.begin_send("one", ts());
    state.finish_send(reply("c1", "first"), ts());
    state.begin_send("two", ts());
    state.finish_send(reply("c2", "second"), ts());

    assert_eq!(state.conversation_id.as_deref(), Some("c1"));
    assert_eq!(state.messages.len(), 4);
}

#[test]
fn set_conversation_id_is_idempotent_for_same_value() {
    let mut state = ConversationState::default();
    state.set_conversation_id("c1".to_owned());
    state.set_conversation_id("c1".to_owned());
    assert_eq!(state.conversation_id.as_deref(), Some("c1"));
}

// =============================================================
// finish_send: failure path
// =============================================================

#[test]
fn finish_send_failure_appends_fallback_and_clears_loading() {
    let mut state = ConversationState::default();
    state.begin_send("Hello", ts());
    state.finish_send(SendOutcome::Failed, ts());

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].role, Role::Assistant);
    assert_eq!(state.messages[1].content, FALLBACK_REPLY);
    assert!(state.conversation_id.is_none());
    assert!(!state.loading);
}

#[test]
fn failure_does_not_block_a_later_send() {
    let mut state = ConversationState::default();
    state.begin_send("one", ts());
    state.finish_send(SendOutcome::Failed, ts());
    assert!(state.begin_send("two", ts()));
}

// =============================================================
// Sequence invariants
// =============================================================

#[test]
fn each_round_trip_grows_sequence_by_exactly_two() {
    let mut state = ConversationState::default();
    for (i, outcome) in [reply("c1", "ok"), SendOutcome::Failed, reply("c9", "ok again")]
        .into_iter()
        .enumerate()
    {
        let before = state.messages.len();
        state.begin_send(&format!("message {i}"), ts());
        state.finish_send(outcome, ts());
        assert_eq!(state.messages.len(), before + 2);
    }
}

#[test]
fn user_entry_always_precedes_its_assistant_entry() {
    let mut state = ConversationState::default();
    state.begin_send("Hello", ts());
    state.finish_send(reply("c1", "Hi there"), ts());
    state.begin_send("Again", ts());
    state.finish_send(SendOutcome::Failed, ts());

    let roles: Vec<Role> = state.messages.iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User, Role::Assistant]);
}

// =============================================================
// Holder contract
// =============================================================

#[test]
fn push_message_appends_in_order() {
    let mut state = ConversationState::default();
    state.push_message(ChatMessage {
        role: Role::User,
        content: "a".to_owned(),
        timestamp: ts(),
    });
    state.push_message(ChatMessage {
        role: Role::Assistant,
        content: "b".to_owned(),
        timestamp: ts(),
    });
    assert_eq!(state.messages[0].content, "a");
    assert_eq!(state.messages[1].content, "b");
}

#[test]
fn set_loading_toggles_flag() {
    let mut state = ConversationState::default();
    state.set_loading(true);
    assert!(state.loading);
    state.set_loading(false);
    assert!(!state.loading);
}
