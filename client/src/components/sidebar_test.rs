use super::*;

fn hrefs(role: Role) -> Vec<String> {
    nav_links(role).into_iter().map(|l| l.href).collect()
}

#[test]
fn admin_links_include_departments() {
    assert_eq!(hrefs(Role::Admin), vec!["/admin", "/admin/issues", "/admin/departments"]);
}

#[test]
fn lecturer_and_student_links_include_inbox_pages() {
    assert_eq!(
        hrefs(Role::Lecturer),
        vec!["/lecturer", "/lecturer/issues", "/lecturer/messages", "/lecturer/notifications"]
    );
    assert_eq!(
        hrefs(Role::Student),
        vec!["/student", "/student/issues", "/student/messages", "/student/notifications"]
    );
}

#[test]
fn first_link_is_dashboard() {
    for role in Role::ALL {
        assert_eq!(nav_links(role)[0].label, "Dashboard");
    }
}
