use super::*;
use crate::net::tickets::{create_ticket, seed_tickets, update_ticket};
use crate::net::types::TicketPatch;
use futures::executor::block_on;

fn student() -> Person {
    Person { id: "1".to_owned(), name: "John Student".to_owned(), avatar: None }
}

fn loaded() -> IssueListState {
    let mut state = IssueListState::loading();
    state.set_loaded(seed_tickets());
    state
}

#[test]
fn loading_state_starts_empty() {
    let state = IssueListState::loading();
    assert!(state.loading);
    assert!(state.items.is_empty());
}

#[test]
fn set_loaded_clears_loading_and_error() {
    let mut state = IssueListState::loading();
    state.set_failed("boom".to_owned());
    state.set_loaded(seed_tickets());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.items.len(), seed_tickets().len());
}

#[test]
fn creating_an_issue_appends_one_and_clears_inputs() {
    let mut state = loaded();
    let before = state.items.len();
    state.title = "Exam timetable clash".to_owned();
    state.description = "Two papers are scheduled at 9am on Monday.".to_owned();

    let draft = state.take_draft(student()).unwrap();
    assert!(state.title.is_empty());
    assert!(state.description.is_empty());

    let ticket = block_on(create_ticket(draft)).unwrap();
    state.push_created(ticket);
    assert_eq!(state.items.len(), before + 1);
    assert_eq!(state.items.last().map(|t| t.title.as_str()), Some("Exam timetable clash"));
}

#[test]
fn blank_inputs_produce_no_draft() {
    let mut state = loaded();
    state.title = "   ".to_owned();
    state.description = "Something".to_owned();
    assert!(state.take_draft(student()).is_none());
    assert_eq!(state.description, "Something");

    state.title = "Title".to_owned();
    state.description = String::new();
    assert!(state.take_draft(student()).is_none());
    assert_eq!(state.title, "Title");
}

#[test]
fn draft_uses_quick_create_defaults() {
    let mut state = IssueListState::default();
    state.title = " Title ".to_owned();
    state.description = " Body ".to_owned();
    let draft = state.take_draft(student()).unwrap();
    assert_eq!(draft.title, "Title");
    assert_eq!(draft.description, "Body");
    assert_eq!(draft.status, TicketStatus::Open);
    assert_eq!(draft.category, DEFAULT_CATEGORY);
    assert_eq!(draft.priority, Priority::Medium);
    assert_eq!(draft.student, student());
}

#[test]
fn chosen_category_and_priority_reach_created_ticket() {
    let mut state = loaded();
    state.title = "Projector broken".to_owned();
    state.description = "Room 4 projector shows no signal.".to_owned();
    state.category = "technical".to_owned();
    state.priority = Priority::Critical;

    let draft = state.take_draft(student()).unwrap();
    assert_eq!(state.category, "technical");
    assert_eq!(state.priority, Priority::Critical);

    let ticket = block_on(create_ticket(draft)).unwrap();
    let id = ticket.id.clone();
    state.push_created(ticket);
    state.filters.priority = Some(Priority::Critical);
    state.filters.category = Some("technical".to_owned());
    let visible = state.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, id);
}

#[test]
fn apply_update_merges_status() {
    let mut state = loaded();
    let patch = TicketPatch { status: Some(TicketStatus::Resolved), ..TicketPatch::default() };
    let update = block_on(update_ticket("TKT-2023-001", patch)).unwrap();
    state.apply_update(&update);
    assert_eq!(state.find("TKT-2023-001").map(|t| t.status), Some(TicketStatus::Resolved));
    assert_eq!(state.find("TKT-2023-004").map(|t| t.status), Some(TicketStatus::Open));
}

#[test]
fn status_filter_and_search_narrow_visible_rows() {
    let mut state = loaded();
    state.set_status_filter(Some(TicketStatus::Open));
    assert!(state.visible().iter().all(|t| t.status == TicketStatus::Open));

    state.set_status_filter(None);
    state.set_search("transcript".to_owned());
    let visible = state.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "TKT-2023-005");

    state.set_search("  ".to_owned());
    assert!(state.filters.search.is_none());
}

#[test]
fn paging_walks_within_bounds() {
    let mut state = IssueListState::default();
    let template = seed_tickets().remove(0);
    let many = (0..23)
        .map(|i| Ticket { id: format!("TKT-2023-{i}"), ..template.clone() })
        .collect::<Vec<_>>();
    state.set_loaded(many);
    assert_eq!(state.page_count(), 3);
    assert_eq!(state.visible().len(), 10);

    state.next_page();
    state.next_page();
    state.next_page();
    assert_eq!(state.page, 2);
    assert_eq!(state.visible().len(), 3);

    state.prev_page();
    state.prev_page();
    state.prev_page();
    assert_eq!(state.page, 0);
}

#[test]
fn filter_change_resets_page() {
    let mut state = loaded();
    state.page = 4;
    state.set_status_filter(Some(TicketStatus::Closed));
    assert_eq!(state.page, 0);
}

#[test]
fn paths_are_scoped_by_role() {
    assert_eq!(issue_path(Role::Student, "TKT-2023-001"), "/student/issues/TKT-2023-001");
    assert_eq!(issues_path(Role::Lecturer), "/lecturer/issues");
}
