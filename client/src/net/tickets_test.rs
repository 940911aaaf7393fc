use super::*;
use futures::executor::block_on;

fn draft() -> NewTicket {
    NewTicket {
        title: "Lab PC won't boot".to_owned(),
        description: "Machine 14 in CIT lab B shows a black screen.".to_owned(),
        status: TicketStatus::Open,
        priority: Priority::Medium,
        category: "technical".to_owned(),
        student: Person { id: "1".to_owned(), name: "John Student".to_owned(), avatar: None },
        assigned_to: None,
    }
}

fn is_generated_id(id: &str) -> bool {
    id.strip_prefix("TKT-2023-")
        .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
}

#[test]
fn list_without_filters_returns_all_seeded_tickets() {
    let tickets = block_on(list_tickets(&TicketFilters::default())).unwrap();
    assert_eq!(tickets.len(), seed_tickets().len());
}

#[test]
fn list_applies_filters() {
    let filters = TicketFilters { status: Some(TicketStatus::Open), ..TicketFilters::default() };
    let tickets = block_on(list_tickets(&filters)).unwrap();
    assert!(!tickets.is_empty());
    assert!(tickets.iter().all(|t| t.status == TicketStatus::Open));
}

#[test]
fn list_does_not_see_created_tickets() {
    let before = block_on(list_tickets(&TicketFilters::default())).unwrap().len();
    let _ = block_on(create_ticket(draft())).unwrap();
    let after = block_on(list_tickets(&TicketFilters::default())).unwrap().len();
    assert_eq!(before, after);
}

#[test]
fn create_assigns_ticket_id_and_zero_comments() {
    let ticket = block_on(create_ticket(draft())).unwrap();
    assert!(is_generated_id(&ticket.id), "unexpected id {}", ticket.id);
    assert_eq!(ticket.comments, 0);
    assert_eq!(ticket.title, "Lab PC won't boot");
    assert_eq!(ticket.created_at, ticket.updated_at);
}

#[test]
fn create_ids_stay_within_number_space() {
    for _ in 0..50 {
        let ticket = block_on(create_ticket(draft())).unwrap();
        let number: u32 = ticket.id.trim_start_matches("TKT-2023-").parse().unwrap();
        assert!(number < 1000);
    }
}

#[test]
fn update_echoes_id_and_patch() {
    let patch = TicketPatch { status: Some(TicketStatus::Resolved), ..TicketPatch::default() };
    let update = block_on(update_ticket("TKT-2023-002", patch.clone())).unwrap();
    assert_eq!(update.id, "TKT-2023-002");
    assert_eq!(update.patch, patch);
}

#[test]
fn ticket_id_formats_number() {
    assert_eq!(ticket_id(7), "TKT-2023-7");
    assert_eq!(ticket_id(0), "TKT-2023-0");
}

#[test]
fn seed_ids_are_unique() {
    let tickets = seed_tickets();
    let mut ids = tickets.iter().map(|t| t.id.as_str()).collect::<Vec<_>>();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), tickets.len());
}
