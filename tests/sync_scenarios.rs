//! Synchronization scenarios
//!
//! Scripted interleavings of user actions, transport completions and push
//! events, replayed through the controller's `handle` entry point.

mod common;

use assert_matches::assert_matches;
use chatdesk::egui_app::sync::{ErrorScope, LoadPhase, SessionError, SyncEvent};
use chatdesk::shared::messaging::{MessagePayload, MessageStatus, PushEvent};
use chatdesk::shared::SyncError;
use common::*;
use pretty_assertions::assert_eq;

#[test]
fn new_message_for_active_conversation_is_appended_without_unread() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0)]);
    h.open("A");

    h.controller
        .handle(push(PushEvent::NewMessage(incoming("m9", "A", "hello"))));

    assert_eq!(h.message_ids(), vec!["m9"]);
    assert_eq!(h.unread("A"), 0);
    let preview = h.controller.conversations().get("A").unwrap();
    assert_eq!(preview.last_message.as_deref(), Some("hello"));
}

#[test]
fn new_message_without_selection_increments_unread() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0)]);

    h.controller
        .handle(push(PushEvent::NewMessage(incoming("m9", "A", "hello"))));

    assert_eq!(h.unread("A"), 1);
    assert!(h.controller.messages().is_empty());
}

#[test]
fn new_message_triggers_conversation_refresh() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0)]);
    assert_eq!(h.transport.conversation_calls(), 1);

    h.controller
        .handle(push(PushEvent::NewMessage(incoming("m9", "A", "hello"))));
    assert_eq!(h.transport.conversation_calls(), 2);

    // the server's count replaces the local increment
    h.transport.set_conversations(vec![conversation("A", 4)]);
    h.controller.refresh_conversations();
    h.settle();
    assert_eq!(h.unread("A"), 4);
}

#[test]
fn send_echo_is_stored_once() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0)]);
    h.open("A");
    h.transport
        .queue_send_result(Ok(outgoing("m1", "A", "hi", MessageStatus::Sent)));

    let send_id = h.controller.send(MessagePayload::text("hi")).unwrap();
    assert_eq!(send_id, Some(1));
    h.settle();

    h.controller
        .handle(push(PushEvent::NewMessage(outgoing("m1", "A", "hi", MessageStatus::Sent))));

    assert_eq!(h.message_ids(), vec!["m1"]);
    assert_eq!(h.unread("A"), 0);
}

#[test]
fn send_echo_arriving_before_confirmation_is_stored_once() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0)]);
    h.open("A");
    h.transport
        .queue_send_result(Ok(outgoing("m1", "A", "hi", MessageStatus::Sent)));
    h.controller.send(MessagePayload::text("hi")).unwrap();

    // push overtakes the response
    h.controller
        .handle(push(PushEvent::NewMessage(outgoing("m1", "A", "hi", MessageStatus::Sent))));
    let sent = h.runner.take_send().unwrap();
    h.controller.handle(sent);

    assert_eq!(h.message_ids(), vec!["m1"]);
    let outcome = h.controller.take_send_outcome().unwrap();
    assert_eq!(outcome.result, Ok("m1".to_string()));
}

#[test]
fn late_fetch_for_previous_conversation_is_discarded() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0), conversation("B", 0)]);
    h.transport.set_messages("A", vec![incoming("a1", "A", "from A")]);
    h.transport.set_messages("B", vec![incoming("b1", "B", "from B")]);

    h.controller.select(Some("A".to_string()));
    h.controller.select(Some("B".to_string()));

    let fetch_b = h.runner.take_fetch("B").unwrap();
    let fetch_a = h.runner.take_fetch("A").unwrap();
    h.controller.handle(fetch_b);
    h.controller.handle(fetch_a);

    assert_eq!(h.message_ids(), vec!["b1"]);
    assert_eq!(h.controller.phase(), &LoadPhase::Ready);
}

#[test]
fn early_fetch_for_previous_conversation_is_discarded() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0), conversation("B", 0)]);
    h.transport.set_messages("A", vec![incoming("a1", "A", "from A")]);
    h.transport.set_messages("B", vec![incoming("b1", "B", "from B")]);

    h.controller.select(Some("A".to_string()));
    h.controller.select(Some("B".to_string()));

    let fetch_a = h.runner.take_fetch("A").unwrap();
    h.controller.handle(fetch_a);
    assert!(h.controller.messages().is_empty());
    assert!(h.controller.phase().is_fetching());

    h.settle();
    assert_eq!(h.message_ids(), vec!["b1"]);
}

#[test]
fn superseded_fetch_of_same_conversation_is_discarded() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0)]);
    h.transport.set_messages("A", vec![incoming("old", "A", "old")]);
    h.controller.select(Some("A".to_string()));
    let first = h.runner.take_fetch("A").unwrap();

    h.transport.set_messages("A", vec![incoming("old", "A", "old"), incoming("new", "A", "new")]);
    h.controller.retry();
    let second = h.runner.take_fetch("A").unwrap();

    h.controller.handle(second);
    h.controller.handle(first);
    assert_eq!(h.message_ids(), vec!["old", "new"]);
}

#[test]
fn selecting_clears_log_and_joins_room_before_fetch() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0), conversation("B", 0)]);
    h.transport.set_messages("A", vec![incoming("a1", "A", "x")]);
    h.open("A");
    assert_eq!(h.message_ids(), vec!["a1"]);

    h.controller.select(Some("B".to_string()));
    assert!(h.controller.messages().is_empty());
    assert_matches!(h.controller.phase(), LoadPhase::Fetching(ticket) if ticket.conversation_id == "B");
    assert_eq!(h.transport.joins(), vec!["A", "B"]);

    let first_held = h.runner.take_next().unwrap();
    assert_matches!(first_held, SyncEvent::RoomJoined { ref conversation_id, .. } if conversation_id == "B");
}

#[test]
fn message_arriving_during_fetch_survives_history_load() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0)]);
    h.transport.set_messages("A", vec![incoming("a1", "A", "history")]);
    h.controller.select(Some("A".to_string()));

    h.controller
        .handle(push(PushEvent::NewMessage(incoming("a2", "A", "live"))));
    assert_eq!(h.message_ids(), vec!["a2"]);

    let fetch = h.runner.take_fetch("A").unwrap();
    h.controller.handle(fetch);
    assert_eq!(h.message_ids(), vec!["a1", "a2"]);
}

#[test]
fn failed_fetch_sets_error_until_successful_retry() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0)]);
    h.transport.set_messages("A", vec![incoming("a1", "A", "x")]);
    h.transport
        .fail_next_messages("A", SyncError::http_status(503, "unavailable"));

    h.open("A");
    assert_matches!(h.controller.phase(), LoadPhase::Error(SyncError::Network { status: Some(503), .. }));
    assert_eq!(
        h.controller.error().map(|e| e.scope.clone()),
        Some(ErrorScope::Messages("A".to_string()))
    );

    h.controller.retry();
    h.settle();
    assert_eq!(h.controller.phase(), &LoadPhase::Ready);
    assert!(h.controller.error().is_none());
    assert_eq!(h.message_ids(), vec!["a1"]);
}

#[test]
fn stale_success_never_clears_error() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0), conversation("B", 0)]);
    h.transport.set_messages("A", vec![incoming("a1", "A", "x")]);
    h.transport.fail_next_messages("B", SyncError::network("reset"));

    h.controller.select(Some("A".to_string()));
    h.controller.select(Some("B".to_string()));

    let fetch_b = h.runner.take_fetch("B").unwrap();
    h.controller.handle(fetch_b);
    let fetch_a = h.runner.take_fetch("A").unwrap();
    h.controller.handle(fetch_a);

    assert_matches!(
        h.controller.error(),
        Some(SessionError { scope: ErrorScope::Messages(id), .. }) if id == "B"
    );
    assert!(h.controller.messages().is_empty());
}

#[test]
fn failed_refresh_keeps_message_log() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0)]);
    h.transport.set_messages("A", vec![incoming("a1", "A", "x")]);
    h.open("A");

    h.transport
        .fail_next_conversations(SyncError::network("connection refused"));
    h.controller.handle(push(PushEvent::ConversationsChanged));
    h.settle();

    assert_eq!(h.message_ids(), vec!["a1"]);
    assert_eq!(h.controller.phase(), &LoadPhase::Ready);
    assert_eq!(h.controller.conversations().len(), 1);
    assert_eq!(
        h.controller.error().map(|e| e.scope.clone()),
        Some(ErrorScope::Conversations)
    );

    // retry re-requests the list and the success clears the error
    h.controller.retry();
    h.settle();
    assert!(h.controller.error().is_none());
}

#[test]
fn failed_send_keeps_log_and_reports_outcome() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0)]);
    h.transport.set_messages("A", vec![incoming("a1", "A", "x")]);
    h.open("A");
    h.transport
        .queue_send_result(Err(SyncError::validation("unsupported type")));

    h.controller.send(MessagePayload::text("hi")).unwrap();
    h.settle();

    assert_eq!(h.message_ids(), vec!["a1"]);
    let outcome = h.controller.take_send_outcome().unwrap();
    assert_matches!(outcome.result, Err(SyncError::Validation { .. }));
    assert_matches!(
        h.controller.error(),
        Some(SessionError { scope: ErrorScope::Send(id), .. }) if id == "A"
    );
    assert_eq!(
        h.controller.conversations().get("A").unwrap().last_message,
        None
    );
}

#[test]
fn sent_message_for_switched_away_conversation_only_updates_preview() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0), conversation("B", 0)]);
    h.open("A");
    h.controller
        .send(MessagePayload::contact("Ann", "+15550100"))
        .unwrap();
    h.controller.select(Some("B".to_string()));
    h.settle();

    assert!(h.controller.messages().is_empty());
    let a = h.controller.conversations().get("A").unwrap();
    assert_eq!(a.last_message.as_deref(), Some("👤 Contact"));
    assert_eq!(a.unread_count, 0);
}

#[test]
fn send_draft_carries_business_identity_and_payload() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0)]);
    h.open("A");

    h.controller
        .send(MessagePayload::image("https://cdn.test/p.jpg", "look"))
        .unwrap();
    let drafts = h.transport.drafts();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].sender, BUSINESS);
    assert_eq!(drafts[0].conversation_id, "A");
    assert_eq!(drafts[0].display_name, "Customer A");
    assert_eq!(
        drafts[0].payload,
        MessagePayload::Image {
            media_url: "https://cdn.test/p.jpg".to_string(),
            caption: Some("look".to_string()),
        }
    );
}

#[test]
fn messages_read_marks_counterpart_messages_of_active_conversation() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0), conversation("B", 0)]);
    let mut delivered = incoming("i1", "A", "reply");
    delivered.status = Some(MessageStatus::Delivered);
    h.transport.set_messages(
        "A",
        vec![
            outgoing("o1", "A", "one", MessageStatus::Sent),
            delivered,
            incoming("i2", "A", "another"),
        ],
    );
    h.open("A");
    let calls_before = h.transport.conversation_calls();

    h.controller.handle(push(PushEvent::MessagesRead {
        conversation_id: "B".to_string(),
    }));
    assert_eq!(
        h.controller.messages().get("i1").unwrap().status,
        Some(MessageStatus::Delivered)
    );

    h.controller.handle(push(PushEvent::MessagesRead {
        conversation_id: "A".to_string(),
    }));
    h.settle();

    let messages = h.controller.messages();
    assert_eq!(messages.get("i1").unwrap().status, Some(MessageStatus::Read));
    assert_eq!(messages.get("i2").unwrap().status, Some(MessageStatus::Read));
    assert_eq!(messages.get("o1").unwrap().status, Some(MessageStatus::Sent));
    assert!(h.transport.conversation_calls() > calls_before);
}

#[test]
fn read_receipt_during_fetch_survives_history_load() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0)]);
    let mut stale_copy = incoming("i1", "A", "seen");
    stale_copy.status = Some(MessageStatus::Delivered);
    h.transport
        .set_messages("A", vec![incoming("a1", "A", "history"), stale_copy]);
    h.controller.select(Some("A".to_string()));

    h.controller
        .handle(push(PushEvent::NewMessage(incoming("i1", "A", "seen"))));
    h.controller
        .handle(push(PushEvent::NewMessage(incoming("i2", "A", "fresh"))));
    h.controller.handle(push(PushEvent::MessagesRead {
        conversation_id: "A".to_string(),
    }));
    assert_eq!(
        h.controller.messages().get("i2").unwrap().status,
        Some(MessageStatus::Read)
    );

    let fetch = h.runner.take_fetch("A").unwrap();
    h.controller.handle(fetch);

    let messages = h.controller.messages();
    assert_eq!(h.message_ids(), vec!["a1", "i1", "i2"]);
    // fetched copy is older than the live one
    assert_eq!(messages.get("i1").unwrap().status, Some(MessageStatus::Read));
    // not in the fetched history at all
    assert_eq!(messages.get("i2").unwrap().status, Some(MessageStatus::Read));
}

#[test]
fn refreshes_while_one_is_in_flight_collapse_into_one() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0)]);
    assert_eq!(h.transport.conversation_calls(), 1);

    h.controller.handle(push(PushEvent::ConversationsChanged));
    h.controller.handle(push(PushEvent::ConversationsChanged));
    h.controller.handle(push(PushEvent::ConversationsChanged));
    assert_eq!(h.transport.conversation_calls(), 2);

    h.settle();
    assert_eq!(h.transport.conversation_calls(), 3);
    assert_eq!(h.runner.pending(), 0);
}

#[test]
fn refresh_preserves_selection_missing_from_new_list() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0), conversation("B", 0)]);
    h.transport.set_messages("B", vec![incoming("b1", "B", "x")]);
    h.open("B");

    h.transport.set_conversations(vec![conversation("A", 0)]);
    h.controller.refresh_conversations();
    h.settle();

    assert_eq!(h.controller.conversations().active_id(), Some("B"));
    assert!(h.controller.active_conversation().is_none());
    assert_eq!(h.message_ids(), vec!["b1"]);
    // nothing to address a send to
    assert_eq!(h.controller.send(MessagePayload::text("hi")).unwrap(), None);
}

#[test]
fn new_message_for_unlisted_conversation_waits_for_refresh() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0)]);
    h.transport
        .set_conversations(vec![conversation("Z", 1), conversation("A", 0)]);

    h.controller
        .handle(push(PushEvent::NewMessage(incoming("z1", "Z", "first contact"))));
    assert!(h.controller.conversations().get("Z").is_none());

    h.settle();
    assert_eq!(h.unread("Z"), 1);
}

#[test]
fn auto_select_applies_to_first_load_only() {
    let mut h = Harness::new(true);
    h.transport
        .set_conversations(vec![conversation("A", 0), conversation("B", 0)]);
    h.transport.set_messages("A", vec![incoming("a1", "A", "x")]);
    h.controller.start();
    h.settle();

    assert_eq!(h.controller.conversations().active_id(), Some("A"));
    assert_eq!(h.message_ids(), vec!["a1"]);

    h.controller.select(None);
    h.controller.refresh_conversations();
    h.settle();
    assert_eq!(h.controller.conversations().active_id(), None);
    assert_eq!(h.controller.phase(), &LoadPhase::Idle);
}

#[test]
fn room_join_failure_is_surfaced_and_retried() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0)]);
    h.transport.fail_next_join(SyncError::network("push server down"));
    h.open("A");

    assert_matches!(
        h.controller.error(),
        Some(SessionError { scope: ErrorScope::Room(id), .. }) if id == "A"
    );
    // the fetch itself still succeeded
    assert_eq!(h.controller.phase(), &LoadPhase::Ready);

    h.controller.retry();
    h.settle();
    assert_eq!(h.transport.joins(), vec!["A", "A"]);
    assert!(h.controller.error().is_none());
}

#[test]
fn dismissed_error_stays_dismissed() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0)]);
    h.transport
        .fail_next_conversations(SyncError::network("offline"));
    h.controller.refresh_conversations();
    h.settle();
    assert!(h.controller.error().is_some());

    h.controller.dismiss_error();
    h.controller.handle(push(PushEvent::NewMessage(incoming("m1", "A", "x"))));
    h.settle();
    assert!(h.controller.error().is_none());
}

#[test]
fn retry_rejoins_room_after_error_was_dismissed() {
    let mut h = Harness::with_conversations(vec![conversation("A", 0)]);
    h.transport.fail_next_join(SyncError::network("push server down"));
    h.open("A");
    assert!(h.controller.error().is_some());

    h.controller.dismiss_error();
    h.controller.retry();
    h.settle();
    assert_eq!(h.transport.joins(), vec!["A", "A"]);

    // joined now, so a further retry only re-fetches
    h.controller.retry();
    h.settle();
    assert_eq!(h.transport.joins(), vec!["A", "A"]);
}
