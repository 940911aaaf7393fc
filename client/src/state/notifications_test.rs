use super::*;

#[test]
fn seeded_list_has_one_unread_success() {
    let state = NotificationsState::seeded();
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.unread_count(), 1);
    assert_eq!(state.items[0].kind, NotificationKind::Success);
}

#[test]
fn mark_all_read_clears_every_unread() {
    let mut state = NotificationsState::seeded();
    state.items[1].read = false;
    assert_eq!(state.unread_count(), 2);
    state.mark_all_read();
    assert_eq!(state.unread_count(), 0);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn mark_read_targets_one_notification() {
    let mut state = NotificationsState::seeded();
    state.mark_read(1);
    assert!(state.items[0].read);
    let before = state.clone();
    state.mark_read(42);
    assert_eq!(state, before);
}

#[test]
fn notification_kind_reads_type_field() {
    let raw = r#"{"id":7,"title":"Oops","message":"Failed","type":"error","timestamp":"now","read":false}"#;
    let parsed: Notification = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.kind, NotificationKind::Error);
    assert_eq!(parsed.kind.class(), "notification--error");
}
