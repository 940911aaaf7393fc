use super::*;

fn user(role: &str) -> StoredUser {
    StoredUser {
        id: "u1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: role.to_owned(),
        department: String::new(),
    }
}

fn signed_in(role: &str) -> AuthState {
    AuthState { user: Some(user(role)), loading: false }
}

// =============================================================
// resolve_gate
// =============================================================

#[test]
fn gate_loading_wins_regardless_of_auth_flag() {
    assert_eq!(resolve_gate(true, true), RouteGate::Loading);
    assert_eq!(resolve_gate(true, false), RouteGate::Loading);
}

#[test]
fn gate_allows_authenticated() {
    assert_eq!(resolve_gate(false, true), RouteGate::Allow);
}

#[test]
fn gate_redirects_unauthenticated_to_login() {
    assert_eq!(resolve_gate(false, false), RouteGate::RedirectLogin);
}

// =============================================================
// resolve_role_gate
// =============================================================

#[test]
fn role_gate_admits_matching_role() {
    assert_eq!(resolve_role_gate(&signed_in("student"), &[Role::Student]), RouteGate::Allow);
}

#[test]
fn role_gate_sends_other_roles_home() {
    assert_eq!(resolve_role_gate(&signed_in("student"), &[Role::Admin]), RouteGate::RedirectHome);
    assert_eq!(resolve_role_gate(&signed_in("janitor"), &[Role::Admin]), RouteGate::RedirectHome);
}

#[test]
fn role_gate_with_no_roles_admits_any_user() {
    assert_eq!(resolve_role_gate(&signed_in("janitor"), &[]), RouteGate::Allow);
}

#[test]
fn role_gate_keeps_loading_and_login_outcomes() {
    let loading = AuthState { user: Some(user("admin")), loading: true };
    assert_eq!(resolve_role_gate(&loading, &[Role::Admin]), RouteGate::Loading);
    let anonymous = AuthState { user: None, loading: false };
    assert_eq!(resolve_role_gate(&anonymous, &[Role::Admin]), RouteGate::RedirectLogin);
}

// =============================================================
// landing_path
// =============================================================

#[test]
fn landing_path_for_known_roles() {
    assert_eq!(landing_path(Some(&user("admin"))), Some("/admin"));
    assert_eq!(landing_path(Some(&user("lecturer"))), Some("/lecturer"));
    assert_eq!(landing_path(Some(&user("student"))), Some("/student"));
}

#[test]
fn landing_path_none_for_unknown_roles() {
    for role in ["", "registrar", "ADMIN", "students"] {
        assert_eq!(landing_path(Some(&user(role))), None, "role {role:?} should not redirect");
    }
}

#[test]
fn landing_path_none_without_user() {
    assert_eq!(landing_path(None), None);
}

// =============================================================
// landing_target
// =============================================================

const ADMIN_JSON: &str = r#"{"id":"3","name":"Admin User","email":"admin@example.com","role":"admin"}"#;

#[test]
fn landing_target_uses_stored_user_without_token() {
    assert_eq!(landing_target(None, Some(ADMIN_JSON)), Some("/admin"));
}

#[test]
fn landing_target_prefers_signed_in_user() {
    assert_eq!(landing_target(Some(&user("student")), Some(ADMIN_JSON)), Some("/student"));
}

#[test]
fn landing_target_stays_for_missing_or_unknown_users() {
    assert_eq!(landing_target(None, None), None);
    assert_eq!(landing_target(None, Some("{not json")), None);
    let visitor = r#"{"id":"9","name":"V","email":"v@x","role":"visitor"}"#;
    assert_eq!(landing_target(None, Some(visitor)), None);
}

// =============================================================
// sign_out
// =============================================================

#[test]
fn sign_out_lands_on_role_selection_and_keeps_guard_state() {
    let state = signed_in("admin");
    assert_eq!(sign_out(), "/");
    assert_eq!(resolve_role_gate(&state, &[Role::Admin]), RouteGate::Allow);
    assert_eq!(storage::read_item(storage::USER_KEY), None);
}
