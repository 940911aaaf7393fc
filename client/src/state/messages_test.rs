use super::*;

#[test]
fn seeded_inbox_has_one_unread() {
    let state = MessagesState::seeded();
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.unread_count(), 1);
}

#[test]
fn mark_read_clears_unread() {
    let mut state = MessagesState::seeded();
    state.mark_read(2);
    assert_eq!(state.unread_count(), 0);
}

#[test]
fn mark_read_unknown_id_is_noop() {
    let mut state = MessagesState::seeded();
    let before = state.clone();
    state.mark_read(99);
    assert_eq!(state, before);
}

#[test]
fn search_matches_sender_or_content_ignoring_case() {
    let mut state = MessagesState::seeded();
    state.set_search("john".to_owned());
    assert_eq!(state.visible().iter().map(|m| m.id).collect::<Vec<_>>(), vec![1]);

    state.set_search("IN PROGRESS".to_owned());
    assert_eq!(state.visible().iter().map(|m| m.id).collect::<Vec<_>>(), vec![2]);

    state.set_search("nothing like this".to_owned());
    assert!(state.visible().is_empty());
}

#[test]
fn blank_search_shows_all_messages() {
    let mut state = MessagesState::seeded();
    state.set_search("   ".to_owned());
    assert_eq!(state.visible().len(), 2);
}
