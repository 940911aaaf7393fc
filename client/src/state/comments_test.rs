use super::*;

#[test]
fn seeded_thread_has_two_comments() {
    let thread = CommentThread::seeded();
    assert_eq!(thread.len(), 2);
    assert_eq!(thread.comments[0].user, "John");
    assert_eq!(thread.comments[1].user, "Jane");
}

#[test]
fn whitespace_only_submit_leaves_thread_unchanged() {
    let mut thread = CommentThread::seeded();
    let before = thread.clone();
    for text in ["", " ", "\t\n", "    "] {
        assert!(!thread.submit(text));
    }
    assert_eq!(thread, before);
}

#[test]
fn submit_appends_exactly_one_comment_by_you() {
    let mut thread = CommentThread::seeded();
    assert!(thread.submit("Is there an update on this?"));
    assert_eq!(thread.len(), 3);
    let last = thread.comments.last().unwrap();
    assert_eq!(last.id, 3);
    assert_eq!(last.user, SELF_AUTHOR);
    assert_eq!(last.content, "Is there an update on this?");
}

#[test]
fn submit_on_empty_thread_starts_at_id_one() {
    let mut thread = CommentThread::default();
    assert!(thread.is_empty());
    assert!(thread.submit("first"));
    assert_eq!(thread.comments[0].id, 1);
}
