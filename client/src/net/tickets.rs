//! Mock ticket service imitating the portal's REST CRUD surface.
//!
//! `list` / `create` / `update` mirror `GET`, `POST`, `PATCH` on the tickets
//! resource but resolve immediately from in-process data. Nothing persists
//! between calls: `list` always starts from the seeded tickets, and
//! `create` / `update` only echo what they were given.
//!
//! ERROR HANDLING
//! ==============
//! Signatures return `Result<_, String>` like the HTTP helpers in `api` so a
//! real transport can slot in later. The mock never takes the error arm.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "tickets_test.rs"]
mod tickets_test;

use chrono::{DateTime, NaiveDate, Utc};

use super::types::{NewTicket, Person, Priority, Ticket, TicketFilters, TicketPatch, TicketStatus, TicketUpdate};

/// Year segment baked into generated ticket ids.
const TICKET_ID_PREFIX: &str = "TKT-2023-";

/// Generated ticket numbers fall in `0..TICKET_NUMBER_SPACE`.
const TICKET_NUMBER_SPACE: u128 = 1000;

/// Fetch tickets matching `filters`.
///
/// # Errors
///
/// Never fails for the mock; the error arm is reserved for a real transport.
pub async fn list_tickets(filters: &TicketFilters) -> Result<Vec<Ticket>, String> {
    let tickets = seed_tickets()
        .into_iter()
        .filter(|t| filters.matches(t))
        .collect::<Vec<_>>();
    log::debug!("listed {} mock tickets", tickets.len());
    Ok(tickets)
}

/// Create a ticket from `data`, assigning a fresh `TKT-2023-<n>` id.
///
/// # Errors
///
/// Never fails for the mock; the error arm is reserved for a real transport.
pub async fn create_ticket(data: NewTicket) -> Result<Ticket, String> {
    let now = Utc::now();
    let ticket = Ticket {
        id: ticket_id(next_ticket_number()),
        title: data.title,
        description: data.description,
        status: data.status,
        priority: data.priority,
        category: data.category,
        created_at: now,
        updated_at: now,
        student: data.student,
        assigned_to: data.assigned_to,
        comments: 0,
    };
    log::info!("created mock ticket {}", ticket.id);
    Ok(ticket)
}

/// Apply `patch` to ticket `id` and echo the result.
///
/// # Errors
///
/// Never fails for the mock; the error arm is reserved for a real transport.
pub async fn update_ticket(id: &str, patch: TicketPatch) -> Result<TicketUpdate, String> {
    Ok(TicketUpdate { id: id.to_owned(), patch, updated_at: Utc::now() })
}

/// Format a display id from a ticket number.
#[must_use]
pub fn ticket_id(number: u32) -> String {
    format!("{TICKET_ID_PREFIX}{number}")
}

/// Draw a ticket number in `0..1000` from UUID entropy.
fn next_ticket_number() -> u32 {
    let raw = uuid::Uuid::new_v4().as_u128() % TICKET_NUMBER_SPACE;
    u32::try_from(raw).unwrap_or_default()
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn person(id: &str, name: &str) -> Person {
    Person { id: id.to_owned(), name: name.to_owned(), avatar: Some("/api/placeholder/30/30".to_owned()) }
}

/// The fixed ticket inventory every `list` call starts from.
///
/// Reporter `1` and assignee `2` line up with the demo student and lecturer
/// accounts so role dashboards have data to show.
#[must_use]
pub fn seed_tickets() -> Vec<Ticket> {
    let student = person("1", "John Student");
    let peer = person("2021/HD/12345/PS", "John Doe");
    let lecturer = person("2", "Jane Lecturer");
    let registrar = person("LEC001", "Dr. Sarah Johnson");

    vec![
        Ticket {
            id: "TKT-2023-001".to_owned(),
            title: "Cannot access course materials".to_owned(),
            description: "I am unable to access my course materials for COM3456.".to_owned(),
            status: TicketStatus::Open,
            priority: Priority::High,
            category: "academic".to_owned(),
            created_at: at(2025, 3, 15, 9, 30),
            updated_at: at(2025, 3, 20, 14, 20),
            student: student.clone(),
            assigned_to: Some(lecturer.clone()),
            comments: 3,
        },
        Ticket {
            id: "TKT-2023-002".to_owned(),
            title: "Missing coursework mark".to_owned(),
            description: "My CSC2100 test one mark is not reflected on the portal.".to_owned(),
            status: TicketStatus::InProgress,
            priority: Priority::Critical,
            category: "academic".to_owned(),
            created_at: at(2025, 3, 12, 11, 0),
            updated_at: at(2025, 3, 18, 8, 45),
            student: student.clone(),
            assigned_to: Some(lecturer.clone()),
            comments: 5,
        },
        Ticket {
            id: "TKT-2023-003".to_owned(),
            title: "Wi-Fi drops in the library".to_owned(),
            description: "Eduroam disconnects every few minutes on the second floor.".to_owned(),
            status: TicketStatus::Resolved,
            priority: Priority::Medium,
            category: "technical".to_owned(),
            created_at: at(2025, 3, 2, 16, 10),
            updated_at: at(2025, 3, 6, 10, 0),
            student: peer.clone(),
            assigned_to: Some(registrar.clone()),
            comments: 2,
        },
        Ticket {
            id: "TKT-2023-004".to_owned(),
            title: "Retake registration deadline".to_owned(),
            description: "Need confirmation that my retake for MTH1101 is registered.".to_owned(),
            status: TicketStatus::Open,
            priority: Priority::Low,
            category: "administrative".to_owned(),
            created_at: at(2025, 3, 19, 13, 5),
            updated_at: at(2025, 3, 19, 13, 5),
            student: peer,
            assigned_to: None,
            comments: 0,
        },
        Ticket {
            id: "TKT-2023-005".to_owned(),
            title: "Transcript shows wrong programme".to_owned(),
            description: "My provisional transcript lists BSc IT instead of BSc CS.".to_owned(),
            status: TicketStatus::Closed,
            priority: Priority::High,
            category: "administrative".to_owned(),
            created_at: at(2025, 2, 25, 10, 40),
            updated_at: at(2025, 3, 1, 9, 15),
            student,
            assigned_to: Some(registrar),
            comments: 4,
        },
    ]
}
