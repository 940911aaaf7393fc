use super::*;

#[test]
fn login_path_carries_role_query() {
    assert_eq!(login_path(Role::Lecturer), "/login?role=lecturer");
}

#[test]
fn every_role_has_a_description() {
    for role in Role::ALL {
        assert!(!role_description(role).is_empty());
    }
    assert!(role_description(Role::Student).starts_with("Student"));
}
