use super::*;

fn user_with_role(role: &str) -> StoredUser {
    StoredUser {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: role.to_owned(),
        department: String::new(),
    }
}

#[test]
fn pending_state_is_loading_without_user() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn restore_off_browser_has_no_user() {
    let state = AuthState::restore();
    assert!(!state.loading);
    assert!(state.user.is_none());
}

#[test]
fn role_reads_from_user() {
    let state = AuthState { user: Some(user_with_role("lecturer")), loading: false };
    assert_eq!(state.role(), Some(Role::Lecturer));
    let unknown = AuthState { user: Some(user_with_role("dean")), loading: false };
    assert_eq!(unknown.role(), None);
    assert!(unknown.is_authenticated());
}

#[test]
fn authenticate_accepts_demo_accounts() {
    let session = authenticate("student@example.com", "password", None).unwrap();
    assert_eq!(session.token, "demo-student-token");
    assert_eq!(session.user.role(), Some(Role::Student));
    assert_eq!(session.user.name, "John Student");
}

#[test]
fn authenticate_normalizes_email() {
    let session = authenticate("  Admin@Example.com ", "password", Some("admin")).unwrap();
    assert_eq!(session.user.id, "3");
}

#[test]
fn authenticate_rejects_bad_credentials() {
    assert_eq!(authenticate("student@example.com", "nope", None), Err(INVALID_CREDENTIALS));
    assert_eq!(authenticate("ghost@example.com", "password", None), Err(INVALID_CREDENTIALS));
}

#[test]
fn authenticate_rejects_role_mismatch() {
    assert_eq!(authenticate("lecturer@example.com", "password", Some("student")), Err(ROLE_MISMATCH));
}

#[test]
fn authenticate_ignores_empty_selected_role() {
    assert!(authenticate("lecturer@example.com", "password", Some("")).is_ok());
}
