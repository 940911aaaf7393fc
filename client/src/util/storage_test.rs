use super::*;

const USER_JSON: &str =
    r#"{"id":"2","name":"Jane Lecturer","email":"lecturer@example.com","role":"lecturer","department":"Computer Science"}"#;

#[test]
fn parse_stored_user_reads_valid_json() {
    let user = parse_stored_user(USER_JSON).unwrap();
    assert_eq!(user.name, "Jane Lecturer");
    assert_eq!(user.role, "lecturer");
}

#[test]
fn parse_stored_user_rejects_malformed_json() {
    assert_eq!(parse_stored_user("{not json"), None);
    assert_eq!(parse_stored_user(r#"{"id":"1"}"#), None);
}

#[test]
fn parse_stored_user_keeps_unknown_role_string() {
    let raw = r#"{"id":"9","name":"X","email":"x@y","role":"visitor"}"#;
    let user = parse_stored_user(raw).unwrap();
    assert_eq!(user.role, "visitor");
    assert_eq!(user.role(), None);
}

#[test]
fn session_requires_user_and_token() {
    assert!(session_from_parts(Some(USER_JSON), Some("demo-lecturer-token")).is_some());
    assert!(session_from_parts(Some(USER_JSON), None).is_none());
    assert!(session_from_parts(Some(USER_JSON), Some("")).is_none());
    assert!(session_from_parts(None, Some("demo-lecturer-token")).is_none());
}

#[test]
fn storage_is_empty_off_browser() {
    write_item(USER_KEY, USER_JSON);
    assert_eq!(read_item(USER_KEY), None);
    assert_eq!(load_session(), None);
    assert_eq!(read_selected_role(), None);
}
